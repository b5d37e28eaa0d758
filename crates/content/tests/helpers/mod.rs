#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, routing::get};
use serde_json::Value;
use stereotypos_content::{ContentSurface, Service, SocialLink};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Page {
    pub hero_title: String,
    pub hero_description: String,
    pub services: Vec<Service>,
    pub social_links: Vec<SocialLink>,
}

impl Page {
    /// Content rendered into the HTML before any script runs.
    pub fn prerendered() -> Self {
        Self {
            hero_title: "Stereotypos".to_owned(),
            hero_description: "Música en vivo para tu evento".to_owned(),
            services: vec![Service {
                title: "Bodas".to_owned(),
                description: "Banda completa".to_owned(),
            }],
            social_links: vec![SocialLink {
                url: "https://instagram.com/stereotypos".to_owned(),
                icon: Some("📷".to_owned()),
            }],
        }
    }
}

#[derive(Clone)]
pub struct RecordingPage(pub Arc<Mutex<Page>>);

impl Default for RecordingPage {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Page::prerendered())))
    }
}

impl RecordingPage {
    pub fn page(&self) -> Page {
        self.0.lock().unwrap().clone()
    }
}

impl ContentSurface for RecordingPage {
    fn set_hero_title(&self, title: &str) {
        self.0.lock().unwrap().hero_title = title.to_owned();
    }

    fn set_hero_description(&self, description: &str) {
        self.0.lock().unwrap().hero_description = description.to_owned();
    }

    fn replace_services(&self, services: &[Service]) {
        self.0.lock().unwrap().services = services.to_vec();
    }

    fn replace_social_links(&self, links: &[SocialLink]) {
        self.0.lock().unwrap().social_links = links.to_vec();
    }
}

pub fn json_route(path: &str, body: Value) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

pub async fn serve(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(format!("http://{addr}"))
}
