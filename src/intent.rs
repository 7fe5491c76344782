//! Keyword-based intent classification.

mod classifier;
mod keywords;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub(crate) use classifier::normalize;
pub use classifier::{IntentAnalysis, IntentClassifier};
pub use keywords::KeywordTables;

/// Coarse category of user need.
///
/// Declaration order is the tie-break order: when two intents match the same
/// number of keywords, the one declared first wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum Intent {
    Greeting,
    Repair,
    Sales,
    Accessories,
    Support,
    HomeService,
    Business,
    Warranty,
    Schedule,
    Location,
    Human,
    Unknown,
}
