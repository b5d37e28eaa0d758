use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// How a validated contact request leaves the page.
///
/// Exactly one strategy is active per deployment.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// POST to the contact endpoint, email client handoff when it fails.
    #[default]
    RemoteFirst,
    /// No network; the visitor picks WhatsApp or email in a modal.
    DeferredChoice,
    /// No network; open the WhatsApp chat right away.
    DirectWhatsapp,
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Destination {
    Whatsapp,
    Email,
}

/// What happened to a request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// The contact endpoint accepted the request.
    Sent,
    /// The choice modal is open and waits for a destination.
    AwaitingChoice,
    /// A deep link was opened with the request.
    HandedOff { url: String },
}
