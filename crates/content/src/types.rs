use serde::Deserialize;

pub const DEFAULT_SOCIAL_ICON: &str = "🔗";

/// `{ "data": [ { "attributes": { ... } } ] }`
#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Entry<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Entry<T> {
    pub attributes: T,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BandInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialLink {
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl SocialLink {
    pub fn icon(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_SOCIAL_ICON)
    }
}
