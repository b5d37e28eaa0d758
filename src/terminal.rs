//! Surfaces that render the page regions on a terminal

use std::{
    io::{BufRead, Write},
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use stereotypos_contact::{Destination, FormSurface, LinkTarget};
use stereotypos_content::{ContentSurface, Service, SocialLink};
use stereotypos_notification::{Notification, NotificationId, NotificationSurface};

pub const SUBMIT_LABEL: &str = "ENVIAR MENSAJE";

pub struct TerminalForm {
    label: Mutex<String>,
    enabled: AtomicBool,
}

impl Default for TerminalForm {
    fn default() -> Self {
        Self {
            label: Mutex::new(SUBMIT_LABEL.to_string()),
            enabled: AtomicBool::new(true),
        }
    }
}

impl TerminalForm {
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl FormSurface for TerminalForm {
    fn submit_label(&self) -> String {
        self.label.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_submit_label(&self, label: &str) {
        *self.label.lock().unwrap_or_else(|e| e.into_inner()) = label.to_string();
        tracing::debug!(label, "Submit label changed");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    fn reset(&self) {
        tracing::debug!("Form reset");
    }

    fn open(&self, url: &str, target: LinkTarget) {
        match target {
            LinkTarget::Current => println!("Open: {url}"),
            LinkTarget::Blank => println!("Open in a new tab: {url}"),
        }
    }

    fn show_choice(&self, message: &str) {
        println!("{message}\n");
    }

    fn hide_choice(&self) {}
}

#[derive(Default)]
pub struct TerminalNotifications;

impl NotificationSurface for TerminalNotifications {
    fn render(&self, notification: &Notification) {
        println!("[{}] {}", notification.kind, notification.message);
    }

    fn remove(&self, id: NotificationId) {
        tracing::trace!(id, "Notification removed");
    }
}

#[derive(Default)]
pub struct TerminalPage;

impl ContentSurface for TerminalPage {
    fn set_hero_title(&self, title: &str) {
        println!("# {title}");
    }

    fn set_hero_description(&self, description: &str) {
        println!("{description}\n");
    }

    fn replace_services(&self, services: &[Service]) {
        println!("Services:");
        for service in services {
            println!("  - {}: {}", service.title, service.description);
        }
    }

    fn replace_social_links(&self, links: &[SocialLink]) {
        println!("Social:");
        for link in links {
            println!("  {} {}", link.icon(), link.url);
        }
    }
}

/// Asks where the message goes. `None` is the close action, also taken on
/// end of input.
pub fn prompt_destination(
    mut input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<Option<Destination>> {
    loop {
        write!(output, "Send with [w]hatsapp, [e]mail or [c]lose: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().to_lowercase().as_str() {
            "w" | "whatsapp" => return Ok(Some(Destination::Whatsapp)),
            "e" | "email" => return Ok(Some(Destination::Email)),
            "c" | "close" => return Ok(None),
            other => writeln!(output, "Unknown choice: {other}")?,
        }
    }
}
