//! Deep links into the visitor's mail client and WhatsApp

use urlencoding::encode;

pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        encode(subject),
        encode(body)
    )
}

pub fn whatsapp(domain: &str, phone: &str, text: &str) -> String {
    format!("https://{domain}/{}?text={}", phone_digits(phone), encode(text))
}

pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
