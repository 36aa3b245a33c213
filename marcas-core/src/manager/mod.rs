//! 记录管理器
//!
//! 单一的状态容器：持有记录列表、表单草稿和界面模式。管理器本身不做 I/O，
//! 每个网络操作都以 [`Command`] 的形式交给调用方执行，回复通过
//! [`RecordManager::apply`] 送回，并返回调用方需要执行的 [`Effect`]。

mod tracker;

pub use tracker::InFlightTracker;

use marcas_client::{Marca, MarcaId};

use crate::error::{CoreError, CoreResult};
use crate::types::{Command, Draft, Effect, Notice, Reply, Request, Response, Ticket};

/// 界面模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 浏览列表
    #[default]
    Listing,
    /// 编辑表单（新建或修改）
    Editing,
}

/// 删除确认结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// 记录管理器
#[derive(Debug, Default)]
pub struct RecordManager {
    records: Vec<Marca>,
    draft: Draft,
    mode: Mode,
    editing_target: Option<MarcaId>,
    search_term: String,
    tracker: InFlightTracker,
    /// 最近一次列表类请求的票据，只有它的回复可以替换 records
    latest_list: Option<Ticket>,
}

impl RecordManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 状态读取 =====

    pub fn records(&self) -> &[Marca] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// 草稿的可变引用（表单输入）
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn editing_target(&self) -> Option<MarcaId> {
        self.editing_target
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 是否有请求在途
    pub fn is_busy(&self) -> bool {
        self.tracker.is_busy()
    }

    pub fn in_flight(&self) -> usize {
        self.tracker.in_flight()
    }

    // ===== 列表 =====

    /// 加载全部记录
    pub fn load_all(&mut self) -> Command {
        self.issue(Request::List)
    }

    /// 搜索记录；空白关键字等同于 [`Self::load_all`]
    pub fn search(&mut self, term: &str) -> Command {
        self.search_term = term.to_string();
        if term.trim().is_empty() {
            self.load_all()
        } else {
            self.issue(Request::Search {
                term: term.to_string(),
            })
        }
    }

    // ===== 表单 =====

    /// 开始新建
    pub fn begin_create(&mut self) {
        self.draft = Draft::default();
        self.editing_target = None;
        self.mode = Mode::Editing;
    }

    /// 开始编辑已有记录
    pub fn begin_edit(&mut self, record: &Marca) {
        self.draft = Draft::from_marca(record);
        self.editing_target = Some(record.id);
        self.mode = Mode::Editing;
    }

    /// 取消编辑（不发请求）
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
        self.editing_target = None;
        self.mode = Mode::Listing;
    }

    /// 提交草稿
    ///
    /// 缺少必填字段时返回 [`CoreError::MissingFields`]，不发出任何请求。
    pub fn submit(&mut self) -> CoreResult<Command> {
        let payload = self.draft.to_payload().map_err(CoreError::MissingFields)?;
        let request = match self.editing_target {
            Some(id) => Request::Update { id, payload },
            None => Request::Create(payload),
        };
        Ok(self.issue(request))
    }

    /// 删除记录；未确认时返回 `None`，不发出任何请求
    pub fn remove(&mut self, id: MarcaId, confirmation: Confirmation) -> Option<Command> {
        match confirmation {
            Confirmation::Confirmed => Some(self.issue(Request::Delete(id))),
            Confirmation::Declined => {
                log::debug!("Deletion of {id} declined");
                None
            }
        }
    }

    // ===== 回复 =====

    /// 应用命令的执行结果，返回调用方需要执行的副作用
    pub fn apply(&mut self, reply: Reply) -> Vec<Effect> {
        if !self.tracker.finish(reply.ticket) {
            log::warn!("Ignoring reply for unknown ticket {}", reply.ticket.value());
            return Vec::new();
        }

        match reply.request {
            Request::List => self.apply_list(reply.ticket, false, reply.result),
            Request::Search { .. } => self.apply_list(reply.ticket, true, reply.result),
            Request::Create(_) => self.apply_save(Notice::Created, reply.result),
            Request::Update { .. } => self.apply_save(Notice::Updated, reply.result),
            Request::Delete(_) => self.apply_delete(reply.result),
        }
    }

    fn issue(&mut self, request: Request) -> Command {
        let ticket = self.tracker.begin();
        if request.is_list() {
            self.latest_list = Some(ticket);
        }
        log::debug!("Issuing #{}: {}", ticket.value(), request.describe());
        Command { ticket, request }
    }

    fn apply_list(
        &mut self,
        ticket: Ticket,
        searching: bool,
        result: Result<Response, marcas_client::ClientError>,
    ) -> Vec<Effect> {
        if self.latest_list != Some(ticket) {
            log::debug!("Discarding stale list reply #{}", ticket.value());
            return Vec::new();
        }

        match result {
            Ok(Response::Records(records)) => {
                log::debug!("Loaded {} records", records.len());
                self.records = records;
                Vec::new()
            }
            Ok(other) => {
                log::error!("Unexpected response to list request: {other:?}");
                vec![Effect::Notify(Notice::UnexpectedResponse)]
            }
            Err(e) => {
                log_client_error("list", &e);
                vec![Effect::Notify(Notice::for_list_error(&e, searching))]
            }
        }
    }

    fn apply_save(
        &mut self,
        success: Notice,
        result: Result<Response, marcas_client::ClientError>,
    ) -> Vec<Effect> {
        match result {
            Ok(Response::Saved(record)) => {
                log::info!("Saved trademark {} ({})", record.id, record.registration_number);
                self.cancel_edit();
                vec![Effect::Notify(success), Effect::Dispatch(self.load_all())]
            }
            Ok(other) => {
                log::error!("Unexpected response to save request: {other:?}");
                vec![Effect::Notify(Notice::UnexpectedResponse)]
            }
            Err(e) => {
                log_client_error("save", &e);
                vec![Effect::Notify(Notice::for_save_error(&e))]
            }
        }
    }

    fn apply_delete(&mut self, result: Result<Response, marcas_client::ClientError>) -> Vec<Effect> {
        match result {
            Ok(_) => vec![Effect::Notify(Notice::Deleted), Effect::Dispatch(self.load_all())],
            Err(e) => {
                log_client_error("delete", &e);
                vec![Effect::Notify(Notice::for_delete_error(&e))]
            }
        }
    }
}

fn log_client_error(action: &str, e: &marcas_client::ClientError) {
    if e.is_expected() {
        log::warn!("{action} failed: {e}");
    } else {
        log::error!("{action} failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marcas_client::{Category, ClientError, MarcaStatus};

    fn marca(id: i64, name: &str, number: &str) -> Marca {
        Marca {
            id: MarcaId(id),
            name: name.to_string(),
            holder: format!("{name} Corp"),
            registration_number: number.to_string(),
            category: Category::Technology,
            description: None,
            status: MarcaStatus::Active,
            registered_at: None,
        }
    }

    fn fill_zed(manager: &mut RecordManager) {
        let draft = manager.draft_mut();
        draft.name = "Zed".into();
        draft.holder = "Zed LLC".into();
        draft.registration_number = "REG-099".into();
        draft.category = Some(Category::Other);
        draft.status = MarcaStatus::Pending;
    }

    fn rejected(detail: &str) -> ClientError {
        ClientError::Rejected {
            status: 400,
            detail: Some(detail.to_string()),
        }
    }

    #[test]
    fn starts_listing_and_idle() {
        let manager = RecordManager::new();
        assert_eq!(manager.mode(), Mode::Listing);
        assert!(manager.records().is_empty());
        assert!(!manager.is_busy());
        assert_eq!(manager.draft(), &Draft::default());
    }

    #[test]
    fn load_all_replaces_records_and_clears_busy() {
        let mut manager = RecordManager::new();
        let cmd = manager.load_all();
        assert!(manager.is_busy());

        let effects = manager.apply(Reply::new(
            cmd,
            Ok(Response::Records(vec![marca(1, "Acme", "REG-001")])),
        ));

        assert!(effects.is_empty());
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.records()[0].name, "Acme");
        assert!(!manager.is_busy());
    }

    #[test]
    fn failed_load_keeps_records_and_notifies() {
        let mut manager = RecordManager::new();
        let cmd = manager.load_all();
        manager.apply(Reply::new(cmd, Ok(Response::Records(vec![marca(1, "Acme", "REG-001")]))));

        let cmd = manager.load_all();
        let effects = manager.apply(Reply::new(
            cmd,
            Err(ClientError::NetworkError {
                detail: "refused".into(),
            }),
        ));

        assert_eq!(effects, vec![Effect::Notify(Notice::ConnectionFailed)]);
        assert_eq!(manager.records().len(), 1);
    }

    #[test]
    fn blank_search_is_a_full_load() {
        let mut manager = RecordManager::new();
        assert_eq!(manager.search("").request, Request::List);
        assert_eq!(manager.search("   ").request, Request::List);
        assert_eq!(manager.load_all().request, Request::List);
        assert_eq!(manager.search_term(), "   ");
    }

    #[test]
    fn search_keeps_raw_term() {
        let mut manager = RecordManager::new();
        let cmd = manager.search(" acme ");
        assert_eq!(
            cmd.request,
            Request::Search {
                term: " acme ".into()
            }
        );
    }

    #[test]
    fn search_failure_is_reported_as_search() {
        let mut manager = RecordManager::new();
        let cmd = manager.search("acme");
        let effects = manager.apply(Reply::new(
            cmd,
            Err(ClientError::Rejected {
                status: 500,
                detail: None,
            }),
        ));
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::SearchFailed { detail: None })]
        );
    }

    #[test]
    fn stale_list_reply_is_discarded() {
        let mut manager = RecordManager::new();
        let older = manager.load_all();
        let newer = manager.search("zed");

        manager.apply(Reply::new(
            newer,
            Ok(Response::Records(vec![marca(2, "Zed", "REG-099")])),
        ));
        assert!(manager.is_busy());

        let effects = manager.apply(Reply::new(
            older,
            Ok(Response::Records(vec![
                marca(2, "Zed", "REG-099"),
                marca(1, "Acme", "REG-001"),
            ])),
        ));

        assert!(effects.is_empty());
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.records()[0].name, "Zed");
        assert!(!manager.is_busy());
    }

    #[test]
    fn busy_counts_every_request() {
        let mut manager = RecordManager::new();
        let first = manager.load_all();
        let second = manager.search("acme");
        assert_eq!(manager.in_flight(), 2);

        manager.apply(Reply::new(first, Ok(Response::Records(Vec::new()))));
        assert!(manager.is_busy());
        manager.apply(Reply::new(second, Ok(Response::Records(Vec::new()))));
        assert!(!manager.is_busy());
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut manager = RecordManager::new();
        let cmd = manager.load_all();
        manager.apply(Reply::new(cmd.clone(), Ok(Response::Records(Vec::new()))));
        let effects = manager.apply(Reply::new(
            cmd,
            Ok(Response::Records(vec![marca(1, "Acme", "REG-001")])),
        ));
        assert!(effects.is_empty());
        assert!(manager.records().is_empty());
    }

    #[test]
    fn begin_edit_and_cancel() {
        let mut manager = RecordManager::new();
        let acme = marca(7, "Acme", "REG-001");
        manager.begin_edit(&acme);
        assert_eq!(manager.mode(), Mode::Editing);
        assert_eq!(manager.editing_target(), Some(MarcaId(7)));
        assert_eq!(manager.draft().name, "Acme");

        manager.cancel_edit();
        assert_eq!(manager.mode(), Mode::Listing);
        assert_eq!(manager.editing_target(), None);
        assert_eq!(manager.draft(), &Draft::default());
        assert!(!manager.is_busy());
    }

    #[test]
    fn begin_create_resets_previous_edit() {
        let mut manager = RecordManager::new();
        manager.begin_edit(&marca(7, "Acme", "REG-001"));
        manager.begin_create();
        assert_eq!(manager.editing_target(), None);
        assert_eq!(manager.draft(), &Draft::default());
        assert_eq!(manager.mode(), Mode::Editing);
    }

    #[test]
    fn submit_with_missing_fields_issues_nothing() {
        let mut manager = RecordManager::new();
        manager.begin_create();
        manager.draft_mut().name = "Zed".into();

        let err = manager.submit().unwrap_err();
        assert!(matches!(err, CoreError::MissingFields(ref f) if f.len() == 3));
        assert!(!manager.is_busy());
        assert_eq!(manager.mode(), Mode::Editing);
    }

    #[test]
    fn create_success_reloads_and_returns_to_listing() {
        let mut manager = RecordManager::new();
        manager.begin_create();
        fill_zed(&mut manager);

        let cmd = manager.submit().unwrap();
        assert!(matches!(cmd.request, Request::Create(ref p) if p.name == "Zed"));

        let effects = manager.apply(Reply::new(
            cmd,
            Ok(Response::Saved(marca(99, "Zed", "REG-099"))),
        ));

        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::Notify(Notice::Created));
        assert!(matches!(&effects[1], Effect::Dispatch(c) if c.request == Request::List));
        assert_eq!(manager.mode(), Mode::Listing);
        assert_eq!(manager.draft(), &Draft::default());
        assert!(manager.is_busy());
    }

    #[test]
    fn update_targets_edited_record() {
        let mut manager = RecordManager::new();
        manager.begin_edit(&marca(7, "Acme", "REG-001"));
        manager.draft_mut().name = "Acme Renamed".into();

        let cmd = manager.submit().unwrap();
        match &cmd.request {
            Request::Update { id, payload } => {
                assert_eq!(*id, MarcaId(7));
                assert_eq!(payload.name, "Acme Renamed");
            }
            other => panic!("expected update, got {other:?}"),
        }

        let effects = manager.apply(Reply::new(
            cmd,
            Ok(Response::Saved(marca(7, "Acme Renamed", "REG-001"))),
        ));
        assert_eq!(effects[0], Effect::Notify(Notice::Updated));
    }

    #[test]
    fn rejected_save_keeps_draft_and_records() {
        let mut manager = RecordManager::new();
        let cmd = manager.load_all();
        manager.apply(Reply::new(cmd, Ok(Response::Records(vec![marca(1, "Acme", "REG-001")]))));

        manager.begin_create();
        fill_zed(&mut manager);
        let before = manager.draft().clone();

        let cmd = manager.submit().unwrap();
        let effects = manager.apply(Reply::new(cmd, Err(rejected("duplicate registration number"))));

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::Notify(notice) => {
                assert!(notice.to_string().contains("duplicate registration number"));
            }
            other => panic!("expected notice, got {other:?}"),
        }
        assert_eq!(manager.draft(), &before);
        assert_eq!(manager.mode(), Mode::Editing);
        assert_eq!(manager.records().len(), 1);
        assert!(!manager.is_busy());
    }

    #[test]
    fn declined_remove_issues_nothing() {
        let mut manager = RecordManager::new();
        assert!(manager.remove(MarcaId(1), Confirmation::Declined).is_none());
        assert!(!manager.is_busy());
    }

    #[test]
    fn delete_success_reloads() {
        let mut manager = RecordManager::new();
        let cmd = manager.remove(MarcaId(1), Confirmation::from(true)).unwrap();
        assert_eq!(cmd.request, Request::Delete(MarcaId(1)));

        let effects = manager.apply(Reply::new(cmd, Ok(Response::Deleted)));
        assert_eq!(effects[0], Effect::Notify(Notice::Deleted));
        assert!(matches!(&effects[1], Effect::Dispatch(c) if c.request == Request::List));
    }

    #[test]
    fn delete_failure_keeps_records() {
        let mut manager = RecordManager::new();
        let cmd = manager.load_all();
        manager.apply(Reply::new(cmd, Ok(Response::Records(vec![marca(1, "Acme", "REG-001")]))));

        let cmd = manager.remove(MarcaId(1), Confirmation::Confirmed).unwrap();
        let effects = manager.apply(Reply::new(cmd, Err(rejected("Marca no encontrada"))));

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::DeleteRejected {
                detail: Some("Marca no encontrada".into())
            })]
        );
        assert_eq!(manager.records().len(), 1);
    }
}
