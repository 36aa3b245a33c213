use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============ Identifier ============

/// Server-assigned trademark identifier.
///
/// Opaque from the client's point of view: it is only ever copied from a
/// record returned by the service and echoed back in update/delete URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarcaId(pub i64);

impl std::fmt::Display for MarcaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============ Category ============

/// Trademark category.
///
/// Serialized with the service's Spanish labels (`"Tecnología"`, ...).
/// Deserialization also accepts the English variant names and falls back to
/// [`Category::Other`] for labels it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technology,
    Food,
    Textile,
    Services,
    Pharmaceutical,
    Automotive,
    Other,
}

impl Category {
    /// All categories, in the order the form offers them.
    pub const ALL: [Self; 7] = [
        Self::Technology,
        Self::Food,
        Self::Textile,
        Self::Services,
        Self::Pharmaceutical,
        Self::Automotive,
        Self::Other,
    ];

    /// Label used on the wire.
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Technology => "Tecnología",
            Self::Food => "Alimentación",
            Self::Textile => "Textil",
            Self::Services => "Servicios",
            Self::Pharmaceutical => "Farmacéutica",
            Self::Automotive => "Automotriz",
            Self::Other => "Otros",
        }
    }

    /// English variant name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Food => "Food",
            Self::Textile => "Textile",
            Self::Services => "Services",
            Self::Pharmaceutical => "Pharmaceutical",
            Self::Automotive => "Automotive",
            Self::Other => "Other",
        }
    }

    /// Parse a wire label or English name (case-insensitive).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            c.wire_label().to_lowercase() == label || c.name().eq_ignore_ascii_case(&label)
        })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label).unwrap_or_else(|| {
            log::warn!("Unknown category '{label}', treating as Other");
            Self::Other
        }))
    }
}

// ============ Status ============

/// Registration status. Defaults to [`MarcaStatus::Active`], also when the
/// service sends `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarcaStatus {
    #[default]
    Active,
    Pending,
    Expired,
    Cancelled,
}

impl MarcaStatus {
    /// All statuses, in the order the form offers them.
    pub const ALL: [Self; 4] = [Self::Active, Self::Pending, Self::Expired, Self::Cancelled];

    /// Label used on the wire.
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Active => "Activa",
            Self::Pending => "Pendiente",
            Self::Expired => "Vencida",
            Self::Cancelled => "Cancelada",
        }
    }

    /// English variant name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parse a wire label or English name (case-insensitive).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.wire_label().eq_ignore_ascii_case(label) || s.name().eq_ignore_ascii_case(label))
    }
}

impl Serialize for MarcaStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_label())
    }
}

impl<'de> Deserialize<'de> for MarcaStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        // `null` is stored for rows written without a status; read it as the default
        let Some(label) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        Self::from_label(&label).ok_or_else(|| D::Error::custom(format!("unknown status: {label}")))
    }
}

// ============ Records ============

/// A trademark registration record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marca {
    pub id: MarcaId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "titular")]
    pub holder: String,
    #[serde(rename = "numero_registro")]
    pub registration_number: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: MarcaStatus,
    /// Server-assigned, read-only.
    #[serde(
        rename = "fecha_registro",
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_at: Option<DateTime<Utc>>,
}

/// Request body for create (`POST /marcas/`) and update (`PUT /marcas/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarcaPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "titular")]
    pub holder: String,
    #[serde(rename = "numero_registro")]
    pub registration_number: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: MarcaStatus,
}

/// Error body of non-success responses: `{"detail": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_record() {
        let json = r#"{
            "id": 1,
            "nombre": "Acme",
            "titular": "Acme Corp",
            "numero_registro": "REG-001",
            "fecha_registro": "2024-01-15 09:30:00",
            "categoria": "Tecnología",
            "descripcion": null,
            "estado": "Activa"
        }"#;
        let marca: Marca = serde_json::from_str(json).unwrap();
        assert_eq!(marca.id, MarcaId(1));
        assert_eq!(marca.holder, "Acme Corp");
        assert_eq!(marca.category, Category::Technology);
        assert_eq!(marca.status, MarcaStatus::Active);
        assert!(marca.description.is_none());
        assert!(marca.registered_at.is_some());
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"id":7,"nombre":"Zed","titular":"Zed LLC","numero_registro":"REG-099","categoria":"Otros"}"#;
        let marca: Marca = serde_json::from_str(json).unwrap();
        assert_eq!(marca.status, MarcaStatus::Active);
        assert!(marca.registered_at.is_none());
    }

    #[test]
    fn payload_uses_wire_names_and_labels() {
        let payload = MarcaPayload {
            name: "Zed".into(),
            holder: "Zed LLC".into(),
            registration_number: "REG-099".into(),
            category: Category::Other,
            description: String::new(),
            status: MarcaStatus::Pending,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nombre": "Zed",
                "titular": "Zed LLC",
                "numero_registro": "REG-099",
                "categoria": "Otros",
                "descripcion": "",
                "estado": "Pendiente"
            })
        );
    }

    #[test]
    fn category_labels_are_lenient() {
        assert_eq!(Category::from_label("tecnología"), Some(Category::Technology));
        assert_eq!(Category::from_label("Automotive"), Some(Category::Automotive));
        assert_eq!(Category::from_label("Juguetes"), None);
        let unknown: Category = serde_json::from_str(r#""Juguetes""#).unwrap();
        assert_eq!(unknown, Category::Other);
    }

    #[test]
    fn null_status_reads_as_active() {
        let json = r#"{"id":3,"nombre":"Nul","titular":"Nul SA","numero_registro":"REG-003","categoria":"Otros","estado":null}"#;
        let marca: Marca = serde_json::from_str(json).unwrap();
        assert_eq!(marca.status, MarcaStatus::Active);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<MarcaStatus>(r#""Archivada""#).is_err());
        let expired: MarcaStatus = serde_json::from_str(r#""expired""#).unwrap();
        assert_eq!(expired, MarcaStatus::Expired);
    }
}
