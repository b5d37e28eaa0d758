use crate::{ContentClient, Service, SocialLink};

/// Page regions patched with CMS content.
pub trait ContentSurface: Send + Sync {
    fn set_hero_title(&self, title: &str);

    fn set_hero_description(&self, description: &str);

    /// Replaces the whole services grid.
    fn replace_services(&self, services: &[Service]);

    /// Replaces the whole social icon list.
    fn replace_social_links(&self, links: &[SocialLink]);
}

/// Which regions ended up showing CMS content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub band_info: bool,
    pub services: bool,
    pub social_media: bool,
}

/// Loads the three collections concurrently and patches the page. Failures
/// are logged and leave the matching region as it was.
pub async fn load_page<S: ContentSurface>(client: &ContentClient, surface: &S) -> LoadReport {
    let (band_info, services, social_media) = futures::join!(
        client.band_info(),
        client.services(),
        client.social_media()
    );

    let mut report = LoadReport::default();

    match band_info {
        Ok(info) => {
            if let Some(name) = info.name.as_deref().filter(|v| !v.is_empty()) {
                surface.set_hero_title(name);
            }
            if let Some(description) = info.description.as_deref().filter(|v| !v.is_empty()) {
                surface.set_hero_description(description);
            }
            report.band_info = true;
        }
        Err(err) => tracing::debug!(error = %err, "Using fallback band info"),
    }

    match services {
        Ok(services) => {
            surface.replace_services(&services);
            report.services = true;
        }
        Err(err) => tracing::debug!(error = %err, "Using fallback services"),
    }

    match social_media {
        Ok(links) => {
            surface.replace_social_links(&links);
            report.social_media = true;
        }
        Err(err) => tracing::debug!(error = %err, "Using fallback social media"),
    }

    report
}
