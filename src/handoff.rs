//! Hand-off to a human agent over WhatsApp or phone.
//!
//! Link building is pure. Opening the link and notifying an embedding frame
//! go through [`HandoffSink`] and are best effort: failures are logged and
//! never reach the conversation.

use log::{debug, info};
use serde::Serialize;
use url::{Url, form_urlencoded};

use crate::error::Result;
use crate::types::{Button, LinkTarget};

const WHATSAPP_BASE: &str = "https://wa.me/";
const NOTIFICATION_TYPE: &str = "redirect_to_whatsapp";

/// Outbound contact links for one business number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    number: String,
    whatsapp: Url,
}

impl ContactLinks {
    /// `number` must already be validated as digits only.
    pub fn new(number: &str) -> Result<Self> {
        let whatsapp = Url::parse(WHATSAPP_BASE)?.join(number)?;
        Ok(Self {
            number: number.to_string(),
            whatsapp,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// `https://wa.me/<number>`, with `?text=` when a preset message is given.
    pub fn whatsapp_link(&self, preset: Option<&str>) -> String {
        let mut url = self.whatsapp.clone();
        if let Some(text) = preset.filter(|text| !text.is_empty()) {
            url.set_query(Some(&format!("text={}", encode_component(text))));
        }
        url.into()
    }

    pub fn call_link(&self) -> String {
        format!("tel:+{}", self.number)
    }

    pub fn whatsapp_button(&self, preset: &str) -> Button {
        Button::new("💬 Chatear por WhatsApp", self.whatsapp_link(Some(preset)))
            .with_target(LinkTarget::Blank)
    }

    pub fn call_button(&self) -> Button {
        Button::new("📞 Llamar ahora", self.call_link())
    }

    pub fn quote_button(&self, preset: &str) -> Button {
        Button::new("💬 Cotizar por WhatsApp", self.whatsapp_link(Some(preset)))
            .with_target(LinkTarget::Blank)
    }
}

/// Percent-encode a query value with spaces as `%20`.
///
/// The form encoder emits `+` for spaces and `%2B` for a literal plus, so
/// swapping every remaining `+` is lossless.
fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Message posted to an embedding parent frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffNotification {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl HandoffNotification {
    pub fn redirect(url: &str) -> Self {
        Self {
            kind: NOTIFICATION_TYPE.to_string(),
            url: url.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runtime capability for leaving the chat.
pub trait HandoffSink: Send + Sync {
    /// Open an external link, e.g. in a new tab.
    fn open_link(&self, url: &str) -> Result<()>;

    /// Tell the embedding context about the hand-off.
    fn notify_parent(&self, notification: &HandoffNotification) -> Result<()>;
}

/// Sink for runtimes with no way to open links.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl HandoffSink for NoopSink {
    fn open_link(&self, url: &str) -> Result<()> {
        debug!("No hand-off capability, not opening {url}");
        Ok(())
    }

    fn notify_parent(&self, _notification: &HandoffNotification) -> Result<()> {
        Ok(())
    }
}

/// Sink that reports the hand-off through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl HandoffSink for LogSink {
    fn open_link(&self, url: &str) -> Result<()> {
        info!("Opening WhatsApp hand-off link: {url}");
        Ok(())
    }

    fn notify_parent(&self, notification: &HandoffNotification) -> Result<()> {
        info!("Hand-off notification: {}", notification.to_json()?);
        Ok(())
    }
}

/// Try to open `url` and notify the parent frame. Each step fails independently and silently.
pub fn redirect_to_whatsapp(sink: &dyn HandoffSink, url: &str) {
    if let Err(e) = sink.open_link(url) {
        debug!("Ignoring failure to open hand-off link: {e}");
    }
    if let Err(e) = sink.notify_parent(&HandoffNotification::redirect(url)) {
        debug!("Ignoring failure to notify parent frame: {e}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::BotError;

    fn links() -> ContactLinks {
        ContactLinks::new("573043756405").expect("valid number")
    }

    #[test]
    fn bare_whatsapp_link() {
        assert_eq!(links().whatsapp_link(None), "https://wa.me/573043756405");
    }

    #[test]
    fn preset_message_is_percent_encoded() {
        assert_eq!(
            links().whatsapp_link(Some("Hola, requiero soporte")),
            "https://wa.me/573043756405?text=Hola%2C%20requiero%20soporte"
        );
    }

    #[test]
    fn non_ascii_and_plus_are_encoded() {
        assert_eq!(
            links().whatsapp_link(Some("cotización 1+1")),
            "https://wa.me/573043756405?text=cotizaci%C3%B3n%201%2B1"
        );
    }

    #[test]
    fn call_link_uses_same_number() {
        assert_eq!(links().call_link(), "tel:+573043756405");
        assert_eq!(links().call_button().url, "tel:+573043756405");
        assert_eq!(links().call_button().target, None);
    }

    #[test]
    fn whatsapp_button_opens_in_new_tab() {
        let button = links().whatsapp_button("Hola");
        assert_eq!(button.label, "💬 Chatear por WhatsApp");
        assert_eq!(button.url, "https://wa.me/573043756405?text=Hola");
        assert_eq!(button.target, Some(LinkTarget::Blank));
    }

    #[test]
    fn notification_json_shape() -> Result<()> {
        let json = HandoffNotification::redirect("https://wa.me/1").to_json()?;
        assert_eq!(json, r#"{"type":"redirect_to_whatsapp","url":"https://wa.me/1"}"#);
        Ok(())
    }

    struct FailingSink {
        notified: Mutex<Vec<String>>,
    }

    impl HandoffSink for FailingSink {
        fn open_link(&self, _url: &str) -> Result<()> {
            Err(BotError::Handoff("no window".to_string()))
        }

        fn notify_parent(&self, notification: &HandoffNotification) -> Result<()> {
            self.notified
                .lock()
                .expect("lock")
                .push(notification.url.clone());
            Err(BotError::Handoff("no parent".to_string()))
        }
    }

    #[test]
    fn failures_are_swallowed_and_steps_independent() {
        let sink = FailingSink {
            notified: Mutex::new(Vec::new()),
        };
        redirect_to_whatsapp(&sink, "https://wa.me/1");
        assert_eq!(
            *sink.notified.lock().expect("lock"),
            vec!["https://wa.me/1".to_string()]
        );
    }
}
