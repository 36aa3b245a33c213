//! 表单草稿
//!
//! 草稿是记录可编辑字段的本地暂存副本，没有标识符，也不包含注册日期。

use marcas_client::{Category, Marca, MarcaPayload, MarcaStatus};
use serde::Serialize;

/// 草稿字段（按表单顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DraftField {
    Name,
    Holder,
    RegistrationNumber,
    Category,
    Status,
    Description,
}

impl DraftField {
    /// 表单中的字段顺序
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Holder,
        Self::RegistrationNumber,
        Self::Category,
        Self::Status,
        Self::Description,
    ];

    /// 是否为必填字段
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Holder | Self::RegistrationNumber | Self::Category
        )
    }

    /// 是否为自由文本字段
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Holder | Self::RegistrationNumber | Self::Description
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Holder => "holder",
            Self::RegistrationNumber => "registration number",
            Self::Category => "category",
            Self::Status => "status",
            Self::Description => "description",
        }
    }
}

/// 记录草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub holder: String,
    pub registration_number: String,
    /// 未选择时为 `None`
    pub category: Option<Category>,
    pub description: String,
    pub status: MarcaStatus,
}

impl Draft {
    /// 从已有记录复制可编辑字段
    pub fn from_marca(marca: &Marca) -> Self {
        Self {
            name: marca.name.clone(),
            holder: marca.holder.clone(),
            registration_number: marca.registration_number.clone(),
            category: Some(marca.category),
            description: marca.description.clone().unwrap_or_default(),
            status: marca.status,
        }
    }

    /// 文本字段的可变引用（非文本字段返回 `None`）
    pub fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Name => Some(&mut self.name),
            DraftField::Holder => Some(&mut self.holder),
            DraftField::RegistrationNumber => Some(&mut self.registration_number),
            DraftField::Description => Some(&mut self.description),
            DraftField::Category | DraftField::Status => None,
        }
    }

    /// 文本字段的当前值
    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::Holder => Some(&self.holder),
            DraftField::RegistrationNumber => Some(&self.registration_number),
            DraftField::Description => Some(&self.description),
            DraftField::Category | DraftField::Status => None,
        }
    }

    /// 循环切换分类：None -> 第一个 -> ... -> 最后一个 -> None
    pub fn cycle_category(&mut self, forward: bool) {
        let all = Category::ALL;
        let position = self
            .category
            .and_then(|c| all.iter().position(|x| *x == c));
        self.category = match (position, forward) {
            (None, true) => Some(all[0]),
            (None, false) => Some(all[all.len() - 1]),
            (Some(i), true) if i + 1 < all.len() => Some(all[i + 1]),
            (Some(0), false) => None,
            (Some(i), false) => Some(all[i - 1]),
            (Some(_), true) => None,
        };
    }

    /// 循环切换状态
    pub fn cycle_status(&mut self, forward: bool) {
        let all = MarcaStatus::ALL;
        let i = all.iter().position(|s| *s == self.status).unwrap_or(0);
        let next = if forward {
            (i + 1) % all.len()
        } else {
            (i + all.len() - 1) % all.len()
        };
        self.status = all[next];
    }

    /// 缺失的必填字段（仅含空白也视为缺失）
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(DraftField::Name);
        }
        if self.holder.trim().is_empty() {
            missing.push(DraftField::Holder);
        }
        if self.registration_number.trim().is_empty() {
            missing.push(DraftField::RegistrationNumber);
        }
        if self.category.is_none() {
            missing.push(DraftField::Category);
        }
        missing
    }

    /// 转换为请求体；缺少必填字段时返回缺失列表
    pub fn to_payload(&self) -> Result<MarcaPayload, Vec<DraftField>> {
        let missing = self.missing_fields();
        match self.category {
            Some(category) if missing.is_empty() => Ok(MarcaPayload {
                name: self.name.clone(),
                holder: self.holder.clone(),
                registration_number: self.registration_number.clone(),
                category,
                description: self.description.clone(),
                status: self.status,
            }),
            _ => Err(missing),
        }
    }
}
