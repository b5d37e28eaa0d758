use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{ContactRequest, TransmissionError};

pub const CONTACT_PATH: &str = "/api/contact-forms";

/// Remote channel for contact requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> Result<(), TransmissionError>;
}

#[derive(Serialize)]
struct Envelope<'a> {
    data: &'a ContactRequest,
}

/// Posts requests to the CMS contact endpoint as `{ "data": ... }`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransmissionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, request: &ContactRequest) -> Result<(), TransmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&Envelope { data: request })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransmissionError::Status(status.as_u16()));
        }

        // A success without a structured body is still a failed submission.
        response.json::<serde_json::Value>().await?;

        Ok(())
    }
}
