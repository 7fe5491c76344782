//! Rule evaluation for a single user input.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::catalog::{self, replies};
use crate::config::BotConfig;
use crate::error::Result;
use crate::handoff::{ContactLinks, HandoffSink, NoopSink, redirect_to_whatsapp};
use crate::intent::{Intent, IntentAnalysis, IntentClassifier, normalize};
use crate::markup::FormattedText;
use crate::types::{Button, ChatResponse, ConversationState, Message, Sender};

use super::navigation::{
    LOCATION_WORDS, MENU_ROUTES, MENU_WORDS, PRICING_WORDS, SCHEDULE_WORDS, WARRANTY_WORDS,
    contains_any, follow_up, smart_redirection,
};

/// Minimum confidence for a classified intent to redirect to its menu.
const REDIRECT_CONFIDENCE: f64 = 0.3;

/// Maps `(input, state)` to `(reply, next state)`.
///
/// Holds no conversation state: the caller keeps the current
/// [`ConversationState`] and passes it back on every call. The only interior
/// mutability is the message id sequence.
pub struct ConversationEngine {
    config: BotConfig,
    classifier: IntentClassifier,
    links: ContactLinks,
    sink: Arc<dyn HandoffSink>,
    sequence: AtomicU64,
}

impl ConversationEngine {
    pub fn new(config: BotConfig) -> Result<Self> {
        config.validate()?;
        let links = ContactLinks::new(&config.whatsapp_number)?;
        let classifier = IntentClassifier::new(config.keywords.clone());
        debug!(
            "Conversation engine ready for +{} with {} intent tables",
            config.whatsapp_number,
            config.keywords.intents.len()
        );
        Ok(Self {
            config,
            classifier,
            links,
            sink: Arc::new(NoopSink),
            sequence: AtomicU64::new(0),
        })
    }

    /// Replace the hand-off capability (default: none).
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn HandoffSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn links(&self) -> &ContactLinks {
        &self.links
    }

    pub fn analyze(&self, input: &str) -> IntentAnalysis {
        self.classifier.analyze(input)
    }

    pub fn welcome_message(&self) -> Message {
        self.bot_message(replies::WELCOME, Vec::new())
    }

    pub fn quick_replies(&self, state: ConversationState) -> &'static [&'static str] {
        catalog::quick_replies(state)
    }

    /// Wrap user input as a message. Markers in user text are not interpreted.
    pub fn user_message(&self, text: &str) -> Message {
        let timestamp = Utc::now();
        Message {
            id: self.next_id(timestamp),
            text: FormattedText::plain(text),
            sender: Sender::User,
            timestamp,
            buttons: Vec::new(),
        }
    }

    /// Produce the reply and next state for `text` typed while in `state`.
    ///
    /// Total: every input, including the empty string, yields a response.
    /// Rules are tried in order and the first match wins.
    pub fn process_message(&self, text: &str, state: ConversationState) -> ChatResponse {
        let input = normalize(text);
        let analysis = self.classifier.analyze(&input);

        if analysis.needs_escalation {
            info!("Escalation keywords detected, handing off to a human agent");
            let link = self.handoff_link();
            let reply = replies::escalation_handoff(
                self.links.number(),
                &self.config.support_email,
                &self.config.address,
                &link,
            );
            return self.handoff(reply, &link, state);
        }

        if analysis.intent == Intent::Greeting || input == "inicio" {
            return self.respond(
                replies::GREETING,
                Vec::new(),
                state,
                ConversationState::MainMenu,
            );
        }

        if analysis.confidence > REDIRECT_CONFIDENCE
            && analysis.intent != Intent::Unknown
            && let Some((reply, next)) = smart_redirection(analysis.intent)
        {
            return self.respond(reply, Vec::new(), state, next);
        }

        if analysis.intent == Intent::Human {
            info!("Explicit request for an agent, handing off");
            let link = self.handoff_link();
            let reply =
                replies::human_handoff(self.links.number(), &self.config.support_email, &link);
            return self.handoff(reply, &link, state);
        }

        if let Some(route) = MENU_ROUTES
            .iter()
            .find(|route| contains_any(&input, route.keywords))
        {
            return self.respond(route.reply, Vec::new(), state, route.state);
        }

        if let Some(reply) = follow_up(state, &input) {
            return self.respond(reply, Vec::new(), state, state);
        }

        if analysis.intent == Intent::Sales || contains_any(&input, PRICING_WORDS) {
            let quote = self.links.quote_button(&self.config.quote_preset);
            return self.respond(
                replies::PRICING,
                vec![quote],
                state,
                ConversationState::QuoteRequest,
            );
        }

        if analysis.intent == Intent::Warranty || contains_any(&input, WARRANTY_WORDS) {
            return self.respond(replies::WARRANTY, Vec::new(), state, state);
        }

        if analysis.intent == Intent::Schedule || contains_any(&input, SCHEDULE_WORDS) {
            return self.respond(replies::SCHEDULE, Vec::new(), state, state);
        }

        if analysis.intent == Intent::Location || contains_any(&input, LOCATION_WORDS) {
            let reply = replies::location(self.links.number());
            return self.respond(reply, Vec::new(), state, state);
        }

        if contains_any(&input, MENU_WORDS) {
            return self.respond(
                replies::MAIN_MENU,
                Vec::new(),
                state,
                ConversationState::MainMenu,
            );
        }

        debug!("No rule matched input '{input}', sending fallback");
        self.respond(replies::FALLBACK, Vec::new(), state, state)
    }

    fn handoff_link(&self) -> String {
        self.links.whatsapp_link(Some(&self.config.handoff_preset))
    }

    fn handoff(&self, reply: String, link: &str, state: ConversationState) -> ChatResponse {
        redirect_to_whatsapp(self.sink.as_ref(), link);
        let buttons = vec![
            self.links.whatsapp_button(&self.config.handoff_preset),
            self.links.call_button(),
        ];
        self.respond(reply, buttons, state, ConversationState::ContactHuman)
    }

    fn respond(
        &self,
        text: impl Into<FormattedText>,
        buttons: Vec<Button>,
        from: ConversationState,
        to: ConversationState,
    ) -> ChatResponse {
        if from != to {
            info!("Conversation state {from} -> {to}");
        }
        ChatResponse {
            message: self.bot_message(text, buttons),
            new_state: to,
        }
    }

    fn bot_message(&self, text: impl Into<FormattedText>, buttons: Vec<Button>) -> Message {
        let timestamp = Utc::now();
        Message {
            id: self.next_id(timestamp),
            text: text.into(),
            sender: Sender::Bot,
            timestamp,
            buttons,
        }
    }

    /// Creation time plus a per-engine sequence, unique for the engine's lifetime.
    fn next_id(&self, timestamp: DateTime<Utc>) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{seq}", timestamp.timestamp_millis())
    }
}
