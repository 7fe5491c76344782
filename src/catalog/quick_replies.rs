use crate::types::ConversationState;

const MAIN_MENU: &[&str] = &[
    "🔧 Reparaciones",
    "💻 Equipos nuevos",
    "📱 Accesorios",
    "🛠️ Soporte técnico",
    "🏠 Servicio a domicilio",
    "🏢 Proyectos empresariales",
];

const REPAIR_MENU: &[&str] = &[
    "📱 Celulares",
    "💻 Computadores",
    "📱 Tablets",
    "⏰ Tiempo de reparación",
    "💰 Cotizar reparación",
    "🔙 Menú principal",
];

const SALES_MENU: &[&str] = &[
    "💻 Computadores",
    "📱 Celulares",
    "📱 Tablets",
    "🔄 Reacondicionados",
    "💰 Financiación",
    "🔙 Menú principal",
];

const ACCESSORIES_MENU: &[&str] = &[
    "🔌 Cargadores",
    "🎧 Auriculares",
    "💾 Memorias USB",
    "🖱️ Mouse y teclados",
    "📱 Fundas y protectores",
    "🔙 Menú principal",
];

const SUPPORT_MENU: &[&str] = &[
    "💻 Soporte remoto",
    "🏠 Visita técnica",
    "📞 Asesoría telefónica",
    "📧 Soporte por email",
    "🔙 Menú principal",
];

const HOME_SERVICE_MENU: &[&str] = &[
    "🏠 Servicio a domicilio",
    "🏢 Servicio empresarial",
    "📍 Zonas de cobertura",
    "💰 Tarifas",
    "📅 Agendar cita",
    "🔙 Menú principal",
];

const BUSINESS_MENU: &[&str] = &[
    "🏢 Mantenimiento empresarial",
    "💻 Equipos corporativos",
    "🌐 Redes y conectividad",
    "☁️ Soluciones en la nube",
    "💰 Cotización empresarial",
    "🔙 Menú principal",
];

/// Suggestions for states without a menu of their own.
pub const FALLBACK_QUICK_REPLIES: &[&str] = &["🔙 Menú principal", "👤 Hablar con agente"];

/// Ordered quick-reply labels for `state`. Never empty.
pub fn quick_replies(state: ConversationState) -> &'static [&'static str] {
    match state {
        ConversationState::Welcome | ConversationState::MainMenu => MAIN_MENU,
        ConversationState::RepairMenu => REPAIR_MENU,
        ConversationState::SalesMenu => SALES_MENU,
        ConversationState::AccessoriesMenu => ACCESSORIES_MENU,
        ConversationState::SupportMenu => SUPPORT_MENU,
        ConversationState::HomeServiceMenu => HOME_SERVICE_MENU,
        ConversationState::BusinessMenu => BUSINESS_MENU,
        ConversationState::ContactHuman | ConversationState::QuoteRequest => {
            FALLBACK_QUICK_REPLIES
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_state_has_suggestions() {
        for state in ConversationState::iter() {
            assert!(!quick_replies(state).is_empty(), "{state} has no quick replies");
        }
    }

    #[test]
    fn welcome_shares_main_menu() {
        assert_eq!(
            quick_replies(ConversationState::Welcome),
            quick_replies(ConversationState::MainMenu)
        );
        assert_eq!(quick_replies(ConversationState::MainMenu)[0], "🔧 Reparaciones");
    }

    #[test]
    fn states_without_menu_get_fallback_pair() {
        assert_eq!(
            quick_replies(ConversationState::ContactHuman),
            FALLBACK_QUICK_REPLIES
        );
        assert_eq!(
            quick_replies(ConversationState::QuoteRequest),
            FALLBACK_QUICK_REPLIES
        );
    }

    #[test]
    fn submenus_offer_a_way_back() {
        for state in [
            ConversationState::RepairMenu,
            ConversationState::SalesMenu,
            ConversationState::AccessoriesMenu,
            ConversationState::SupportMenu,
            ConversationState::HomeServiceMenu,
            ConversationState::BusinessMenu,
        ] {
            assert_eq!(quick_replies(state).last(), Some(&"🔙 Menú principal"));
        }
    }
}
