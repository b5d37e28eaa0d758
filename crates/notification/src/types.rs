use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

pub type NotificationId = u64;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    /// Class attached to the banner element, e.g. `notification-error`.
    pub fn class_name(&self) -> String {
        format!("notification-{}", self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: Kind,
    pub created_at: OffsetDateTime,
}
