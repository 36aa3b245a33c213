//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：确认、提示、帮助弹窗
//! 3. **通知归 `notices.*`**：操作结果提示
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 列表页面文本
    pub list: ListTexts,
    /// 表单页面文本
    pub form: FormTexts,
    /// 分类名称
    pub categories: CategoryTexts,
    /// 状态名称
    pub statuses: StatusTexts,
    /// 操作结果通知
    pub notices: NoticeTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub not_available: &'static str,
    pub records: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub navigate: &'static str,
    pub new: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub search: &'static str,
    pub run_search: &'static str,
    pub clear: &'static str,
    pub reload: &'static str,
    pub switch_focus: &'static str,
    pub next_field: &'static str,
    pub switch_option: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct ListTexts {
    pub title: &'static str,
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub col_name: &'static str,
    pub col_holder: &'static str,
    pub col_number: &'static str,
    pub col_category: &'static str,
    pub col_status: &'static str,
    pub col_date: &'static str,
    pub col_actions: &'static str,
    pub actions_hint: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
    pub empty_search: &'static str,
    pub empty_search_hint: &'static str,
}

pub struct FormTexts {
    pub title_new: &'static str,
    pub title_edit: &'static str,
    pub name: &'static str,
    pub holder: &'static str,
    pub registration_number: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub select: &'static str,
    pub required_note: &'static str,
    pub saving: &'static str,
    pub busy: &'static str,
}

pub struct CategoryTexts {
    pub technology: &'static str,
    pub food: &'static str,
    pub textile: &'static str,
    pub services: &'static str,
    pub pharmaceutical: &'static str,
    pub automotive: &'static str,
    pub other: &'static str,
}

pub struct StatusTexts {
    pub active: &'static str,
    pub pending: &'static str,
    pub expired: &'static str,
    pub cancelled: &'static str,
}

// ============================================================================
// 通知
// ============================================================================

pub struct NoticeTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    /// 服务详情前缀，后接 ": {detail}"
    pub error_prefix: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub load_failed: &'static str,
    pub search_failed: &'static str,
    pub connection_failed: &'static str,
    pub unexpected_response: &'static str,
    pub missing_fields: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub alert: AlertTexts,
}

pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

pub struct AlertTexts {
    pub info_title: &'static str,
    pub error_title: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub form_section: &'static str,
    pub close_hint: &'static str,
}
