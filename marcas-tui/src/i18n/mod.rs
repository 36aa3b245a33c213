//! 国际化
//!
//! 翻译文本是编译期常量（见 `keys.rs`），当前语言保存在一个原子变量中，
//! 通过 [`t()`] 读取。启动时根据配置文件调用 [`set_language`]。

use std::sync::atomic::{AtomicUsize, Ordering};

use marcas_core::types::{Category, DraftField, MarcaStatus};
use marcas_core::Notice;

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 西班牙语（西班牙）
    EsEs,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::EsEs => "Español",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "es-ES" | "es" => Some(Language::EsEs),
            _ => None,
        }
    }

    /// 该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::EsEs => &es_es::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::EsEs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EsEs,
        _ => Language::EnUs,
    }
}

// ============================================================================
// 领域值的显示文本
// ============================================================================

pub fn category_label(texts: &Translations, category: Category) -> &'static str {
    let c = &texts.categories;
    match category {
        Category::Technology => c.technology,
        Category::Food => c.food,
        Category::Textile => c.textile,
        Category::Services => c.services,
        Category::Pharmaceutical => c.pharmaceutical,
        Category::Automotive => c.automotive,
        Category::Other => c.other,
    }
}

pub fn status_label(texts: &Translations, status: MarcaStatus) -> &'static str {
    let s = &texts.statuses;
    match status {
        MarcaStatus::Active => s.active,
        MarcaStatus::Pending => s.pending,
        MarcaStatus::Expired => s.expired,
        MarcaStatus::Cancelled => s.cancelled,
    }
}

/// 表单字段标签（必填字段带 `*`）
pub fn field_label(texts: &Translations, field: DraftField) -> &'static str {
    let f = &texts.form;
    match field {
        DraftField::Name => f.name,
        DraftField::Holder => f.holder,
        DraftField::RegistrationNumber => f.registration_number,
        DraftField::Category => f.category,
        DraftField::Status => f.status,
        DraftField::Description => f.description,
    }
}

/// 通知的显示文本；服务返回的详情原样附在后面
pub fn notice_text(texts: &Translations, notice: &Notice) -> String {
    let n = &texts.notices;
    let with_detail = |base: &str, detail: &Option<String>| match detail {
        Some(d) => format!("{base}: {d}"),
        None => base.to_string(),
    };
    match notice {
        Notice::Created => n.created.to_string(),
        Notice::Updated => n.updated.to_string(),
        Notice::Deleted => n.deleted.to_string(),
        Notice::SaveRejected { detail: Some(d) } => format!("{}: {d}", n.error_prefix),
        Notice::SaveRejected { detail: None } => n.save_failed.to_string(),
        Notice::DeleteRejected { detail } => with_detail(n.delete_failed, detail),
        Notice::LoadFailed { detail } => with_detail(n.load_failed, detail),
        Notice::SearchFailed { detail } => with_detail(n.search_failed, detail),
        Notice::ConnectionFailed => n.connection_failed.to_string(),
        Notice::UnexpectedResponse => n.unexpected_response.to_string(),
        Notice::MissingFields(fields) => {
            let labels: Vec<&str> = fields
                .iter()
                .map(|f| field_label(texts, *f).trim_end_matches(" *"))
                .collect();
            format!("{}: {}", n.missing_fields, labels.join(", "))
        }
    }
}
