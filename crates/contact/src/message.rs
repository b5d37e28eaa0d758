//! User-facing texts and the plain-text renderings of a contact request

use serde::Deserialize;

use crate::ContactRequest;

pub const NOT_PROVIDED: &str = "No proporcionado";
pub const NOT_SPECIFIED: &str = "No especificado";
pub const NOT_SPECIFIED_DATE: &str = "No especificada";
pub const DEFAULT_EVENT: &str = "Evento";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Messages {
    #[serde(default = "default_missing_fields")]
    pub missing_fields: String,
    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,
    #[serde(default = "default_sent")]
    pub sent: String,
    #[serde(default = "default_send_failed")]
    pub send_failed: String,
    #[serde(default = "default_pending_label")]
    pub pending_label: String,
    #[serde(default = "default_fallback_subject")]
    pub fallback_subject: String,
    #[serde(default = "default_choice_subject")]
    pub choice_subject: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_fields: default_missing_fields(),
            invalid_email: default_invalid_email(),
            sent: default_sent(),
            send_failed: default_send_failed(),
            pending_label: default_pending_label(),
            fallback_subject: default_fallback_subject(),
            choice_subject: default_choice_subject(),
        }
    }
}

fn default_missing_fields() -> String {
    "Por favor completa todos los campos obligatorios.".to_string()
}

fn default_invalid_email() -> String {
    "Por favor ingresa un email válido.".to_string()
}

fn default_sent() -> String {
    "¡Mensaje enviado exitosamente! Te contactaremos pronto.".to_string()
}

fn default_send_failed() -> String {
    "Error al enviar el mensaje. Por favor intenta nuevamente.".to_string()
}

fn default_pending_label() -> String {
    "ENVIANDO...".to_string()
}

fn default_fallback_subject() -> String {
    "Solicitud de cotización".to_string()
}

fn default_choice_subject() -> String {
    "Solicitud de Cotización".to_string()
}

fn or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Subject of the email handed to the mail client when the endpoint fails.
pub fn fallback_subject(messages: &Messages, request: &ContactRequest) -> String {
    format!(
        "{} - {}",
        messages.fallback_subject,
        or(&request.event_type, DEFAULT_EVENT)
    )
}

pub fn fallback_body(request: &ContactRequest) -> String {
    format!(
        "Nombre: {}\nEmail: {}\nTeléfono: {}\nTipo de evento: {}\nFecha del evento: {}\n\nMensaje:\n{}\n",
        request.name,
        request.email,
        or(&request.phone, NOT_PROVIDED),
        or(&request.event_type, NOT_SPECIFIED),
        or(&request.event_date, NOT_SPECIFIED_DATE),
        request.message,
    )
}

/// Single message block shared by the WhatsApp and email destinations.
pub fn choice_message(request: &ContactRequest) -> String {
    format!(
        "Nueva solicitud de cotización:\n\
         -------------------------\n\
         👤 Nombre: {}\n\
         📧 Email: {}\n\
         📞 Teléfono: {}\n\
         🎉 Tipo de Evento: {}\n\
         📅 Fecha: {}\n\
         📝 Mensaje: {}",
        request.name,
        request.email,
        or(&request.phone, NOT_SPECIFIED),
        or(&request.event_type, NOT_SPECIFIED),
        or(&request.event_date, NOT_SPECIFIED_DATE),
        request.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ana".to_owned(),
            email: "ana@banda.com".to_owned(),
            message: "Boda de 200 personas".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallback_subject() {
        let messages = Messages::default();
        let mut request = request();

        assert_eq!(
            fallback_subject(&messages, &request),
            "Solicitud de cotización - Evento"
        );

        request.event_type = "Boda".to_owned();
        assert_eq!(
            fallback_subject(&messages, &request),
            "Solicitud de cotización - Boda"
        );
    }

    #[test]
    fn test_fallback_body_placeholders() {
        let body = fallback_body(&request());

        assert!(body.contains("Nombre: Ana\n"));
        assert!(body.contains("Teléfono: No proporcionado\n"));
        assert!(body.contains("Tipo de evento: No especificado\n"));
        assert!(body.contains("Fecha del evento: No especificada\n"));
        assert!(body.ends_with("Mensaje:\nBoda de 200 personas\n"));
    }

    #[test]
    fn test_choice_message() {
        let mut request = request();
        request.phone = "555-0101".to_owned();
        request.event_date = "2026-11-02".to_owned();

        let message = choice_message(&request);

        assert!(message.starts_with("Nueva solicitud de cotización:\n-------------------------\n"));
        assert!(message.contains("👤 Nombre: Ana\n"));
        assert!(message.contains("📧 Email: ana@banda.com\n"));
        assert!(message.contains("📞 Teléfono: 555-0101\n"));
        assert!(message.contains("🎉 Tipo de Evento: No especificado\n"));
        assert!(message.contains("📅 Fecha: 2026-11-02\n"));
        assert!(message.ends_with("📝 Mensaje: Boda de 200 personas"));
    }
}
