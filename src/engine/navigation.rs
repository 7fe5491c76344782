//! Literal keyword routes checked independently of the classifier.

use crate::catalog::replies;
use crate::intent::Intent;
use crate::types::ConversationState;

/// A topic keyword set and where it leads.
pub(super) struct MenuRoute {
    pub keywords: &'static [&'static str],
    pub state: ConversationState,
    pub reply: &'static str,
}

/// Checked in order; the first route with a matching keyword wins.
pub(super) const MENU_ROUTES: &[MenuRoute] = &[
    MenuRoute {
        keywords: &["reparac", "🔧"],
        state: ConversationState::RepairMenu,
        reply: replies::REPAIR_OVERVIEW,
    },
    MenuRoute {
        keywords: &["equipo", "venta", "💻", "comprar"],
        state: ConversationState::SalesMenu,
        reply: replies::SALES_OVERVIEW,
    },
    MenuRoute {
        keywords: &["accesorio", "📱"],
        state: ConversationState::AccessoriesMenu,
        reply: replies::ACCESSORIES_OVERVIEW,
    },
    MenuRoute {
        keywords: &["soporte", "🛠️", "ayuda", "problema"],
        state: ConversationState::SupportMenu,
        reply: replies::SUPPORT_OVERVIEW,
    },
    MenuRoute {
        keywords: &["domicilio", "🏠", "casa"],
        state: ConversationState::HomeServiceMenu,
        reply: replies::HOME_SERVICE_OVERVIEW,
    },
    MenuRoute {
        keywords: &["empresa", "🏢", "negocio", "corporativo"],
        state: ConversationState::BusinessMenu,
        reply: replies::BUSINESS_OVERVIEW,
    },
];

const PHONE_WORDS: &[&str] = &["celular", "teléfono", "móvil"];
const REPAIR_COMPUTER_WORDS: &[&str] = &["computador", "pc", "portátil", "laptop"];
const SALES_COMPUTER_WORDS: &[&str] = &["computador", "pc", "portátil"];

pub(super) const PRICING_WORDS: &[&str] = &["precio", "costo", "cuánto", "💰"];
pub(super) const WARRANTY_WORDS: &[&str] = &["garantía", "garantia"];
pub(super) const SCHEDULE_WORDS: &[&str] = &["horario", "hora", "cuándo"];
pub(super) const LOCATION_WORDS: &[&str] = &["dónde", "ubicación", "dirección"];
pub(super) const MENU_WORDS: &[&str] = &["menú", "menu", "inicio", "🔙"];

pub(super) fn contains_any(input: &str, words: &[&str]) -> bool {
    words.iter().any(|word| input.contains(word))
}

/// Menu a confidently classified intent leads to, with its introduction.
pub(super) fn smart_redirection(intent: Intent) -> Option<(&'static str, ConversationState)> {
    let redirection = match intent {
        Intent::Repair => (replies::REPAIR_REDIRECT, ConversationState::RepairMenu),
        Intent::Sales => (replies::SALES_REDIRECT, ConversationState::SalesMenu),
        Intent::Accessories => (
            replies::ACCESSORIES_REDIRECT,
            ConversationState::AccessoriesMenu,
        ),
        Intent::Support => (replies::SUPPORT_REDIRECT, ConversationState::SupportMenu),
        Intent::HomeService => (
            replies::HOME_SERVICE_REDIRECT,
            ConversationState::HomeServiceMenu,
        ),
        Intent::Business => (replies::BUSINESS_REDIRECT, ConversationState::BusinessMenu),
        Intent::Greeting
        | Intent::Warranty
        | Intent::Schedule
        | Intent::Location
        | Intent::Human
        | Intent::Unknown => return None,
    };
    Some(redirection)
}

/// Detailed answer available only inside a specific menu.
pub(super) fn follow_up(state: ConversationState, input: &str) -> Option<&'static str> {
    match state {
        ConversationState::RepairMenu if contains_any(input, PHONE_WORDS) => {
            Some(replies::PHONE_REPAIR)
        }
        ConversationState::RepairMenu if contains_any(input, REPAIR_COMPUTER_WORDS) => {
            Some(replies::COMPUTER_REPAIR)
        }
        ConversationState::SalesMenu if contains_any(input, SALES_COMPUTER_WORDS) => {
            Some(replies::COMPUTER_CATALOG)
        }
        _ => None,
    }
}
