//! Common types used throughout the ConectaT bot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::markup::FormattedText;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the customer
    User,
    /// Message produced by the conversation engine
    Bot,
}

/// Menu or context the bot believes the user is in.
///
/// Held by the caller and passed back into every engine call.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Welcome,
    MainMenu,
    RepairMenu,
    SalesMenu,
    AccessoriesMenu,
    SupportMenu,
    HomeServiceMenu,
    BusinessMenu,
    ContactHuman,
    QuoteRequest,
}

/// Where a button link should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    #[strum(serialize = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    #[strum(serialize = "_self")]
    SelfFrame,
}

/// Action button attached to a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

impl Button {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            target: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: LinkTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: String,
    pub text: FormattedText,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Reply produced by the conversation engine for one user input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub message: Message,
    pub new_state: ConversationState,
}
