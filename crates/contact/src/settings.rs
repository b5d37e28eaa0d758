use serde::Deserialize;

use crate::Strategy;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// Receives the mail-client handoff when the endpoint fails.
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
    /// Email destination of the choice modal.
    #[serde(default = "default_choice_email")]
    pub choice_email: String,
    #[serde(default = "default_whatsapp_domain")]
    pub whatsapp_domain: String,
    #[serde(default = "default_whatsapp_phone")]
    pub whatsapp_phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            fallback_email: default_fallback_email(),
            choice_email: default_choice_email(),
            whatsapp_domain: default_whatsapp_domain(),
            whatsapp_phone: default_whatsapp_phone(),
        }
    }
}

fn default_fallback_email() -> String {
    "info@banda.com".to_string()
}

fn default_choice_email() -> String {
    "stereotyposla@gmail.com".to_string()
}

fn default_whatsapp_domain() -> String {
    "wa.me".to_string()
}

fn default_whatsapp_phone() -> String {
    "18187145008".to_string()
}
