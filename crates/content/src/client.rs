use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{BandInfo, Collection, ContentError, Result, Service, SocialLink};

pub const BAND_INFO_PATH: &str = "/api/band-infos";
pub const SERVICES_PATH: &str = "/api/services";
pub const SOCIAL_MEDIA_PATH: &str = "/api/social-medias";

#[derive(Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn collection<T: DeserializeOwned>(&self, path: &'static str) -> Result<Vec<T>> {
        let collection = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Collection<T>>()
            .await?;

        if collection.data.is_empty() {
            return Err(ContentError::Empty(path));
        }

        Ok(collection.data.into_iter().map(|e| e.attributes).collect())
    }

    /// Only the first record is used.
    pub async fn band_info(&self) -> Result<BandInfo> {
        let mut records = self.collection::<BandInfo>(BAND_INFO_PATH).await?;

        Ok(records.swap_remove(0))
    }

    pub async fn services(&self) -> Result<Vec<Service>> {
        self.collection(SERVICES_PATH).await
    }

    pub async fn social_media(&self) -> Result<Vec<SocialLink>> {
        self.collection(SOCIAL_MEDIA_PATH).await
    }
}
