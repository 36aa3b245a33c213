//! 顺序执行的记录会话

use std::collections::VecDeque;
use std::sync::Arc;

use marcas_client::{Marca, MarcaApi, MarcaId};

use crate::error::{CoreError, CoreResult};
use crate::manager::{Confirmation, RecordManager};
use crate::services::execute;
use crate::traits::Prompter;
use crate::types::{Command, Effect, Notice};

/// 删除前向用户展示的确认文本
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this trademark?";

/// 记录会话
///
/// 持有一个 [`RecordManager`]，每个操作都等待请求完成、逐条提示通知、
/// 执行后续命令后才返回。适用于脚本和测试；交互式界面直接驱动管理器。
pub struct RecordSession {
    manager: RecordManager,
    api: Arc<dyn MarcaApi>,
    prompter: Arc<dyn Prompter>,
}

impl RecordSession {
    #[must_use]
    pub fn new(api: Arc<dyn MarcaApi>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            manager: RecordManager::new(),
            api,
            prompter,
        }
    }

    pub fn manager(&self) -> &RecordManager {
        &self.manager
    }

    /// 管理器的可变引用（编辑草稿等本地操作）
    pub fn manager_mut(&mut self) -> &mut RecordManager {
        &mut self.manager
    }

    pub fn begin_create(&mut self) {
        self.manager.begin_create();
    }

    pub fn begin_edit(&mut self, record: &Marca) {
        self.manager.begin_edit(record);
    }

    pub fn cancel_edit(&mut self) {
        self.manager.cancel_edit();
    }

    /// 加载全部记录
    pub async fn load_all(&mut self) -> CoreResult<()> {
        let command = self.manager.load_all();
        self.run(command).await
    }

    /// 搜索记录
    pub async fn search(&mut self, term: &str) -> CoreResult<()> {
        let command = self.manager.search(term);
        self.run(command).await
    }

    /// 提交草稿；缺少必填字段时先提示用户再返回错误
    pub async fn submit(&mut self) -> CoreResult<()> {
        let command = match self.manager.submit() {
            Ok(command) => command,
            Err(e) => {
                log_refusal("Submit", &e);
                if let CoreError::MissingFields(fields) = &e {
                    self.prompter
                        .alert(&Notice::MissingFields(fields.clone()))
                        .await;
                }
                return Err(e);
            }
        };
        self.run(command).await
    }

    /// 删除记录；用户拒绝时返回 [`CoreError::NotConfirmed`]，不发出请求
    pub async fn remove(&mut self, id: MarcaId) -> CoreResult<()> {
        let confirmed = self.prompter.confirm(DELETE_CONFIRMATION).await;
        match self.manager.remove(id, Confirmation::from(confirmed)) {
            Some(command) => self.run(command).await,
            None => {
                let err = CoreError::NotConfirmed;
                log_refusal("Delete", &err);
                Err(err)
            }
        }
    }

    /// 执行命令并处理全部后续副作用；返回值反映首个请求的结果
    async fn run(&mut self, command: Command) -> CoreResult<()> {
        let reply = execute(self.api.as_ref(), command).await;
        let outcome = match &reply.result {
            Ok(_) => Ok(()),
            Err(e) => Err(CoreError::Client(e.clone())),
        };

        let mut pending: VecDeque<Effect> = self.manager.apply(reply).into();
        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Notify(notice) => self.prompter.alert(&notice).await,
                Effect::Dispatch(next) => {
                    let reply = execute(self.api.as_ref(), next).await;
                    pending.extend(self.manager.apply(reply));
                }
            }
        }

        outcome
    }
}

/// 操作在发出请求前被拒绝时记录日志：预期情况用 `warn`，其余用 `error`
fn log_refusal(action: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{action} not sent: {err}");
    } else {
        log::error!("{action} not sent: {err}");
    }
}
