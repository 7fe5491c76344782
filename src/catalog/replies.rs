//! Spanish reply texts. Markup is `**bold**` and `*italic*`.

/// Redirection into the repair menu.
pub const REPAIR_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Reparaciones** donde encontrarás información detallada sobre todos nuestros servicios de reparación y mantenimiento.

🔧 *SERVICIOS DE REPARACIÓN DISPONIBLES:*

📱 **Celulares y smartphones**
💻 **Computadores PC y Mac**
📱 **Tablets**

⏰ Tiempo promedio: 24-48 horas
💰 Cotización gratuita
🔧 6 meses de garantía

¿Qué equipo necesitas reparar?";

pub const SALES_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Ventas** donde encontrarás toda nuestra oferta de equipos tecnológicos.

💻 *EQUIPOS DISPONIBLES:*

✨ **Equipos nuevos** - Última tecnología
♻️ **Reacondicionados** - Hasta 40% más económicos
📱 **Todas las marcas** - Samsung, Apple, Huawei, HP, Dell

💳 Financiación disponible
🚚 Envío gratuito en Bogotá
💰 Mejor precio garantizado

¿Qué tipo de equipo te interesa?";

pub const ACCESSORIES_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Accesorios** donde encontrarás todo lo que necesitas para complementar tus equipos.

📱 *ACCESORIOS DISPONIBLES:*

🔌 Cargadores y cables
🎧 Audio y sonido
💾 Almacenamiento
🖱️ Periféricos
📱 Protección

¿Qué accesorio específico buscas?";

pub const SUPPORT_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Soporte Técnico** donde encontrarás todas nuestras opciones de asistencia especializada.

🛠️ *TIPOS DE SOPORTE:*

💻 Soporte remoto inmediato
🏠 Visita técnica a domicilio
📞 Asesoría telefónica
📧 Soporte por email

*Disponible 24/7 para emergencias empresariales*

¿Qué tipo de soporte necesitas?";

pub const HOME_SERVICE_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Servicio a Domicilio** donde encontrarás información sobre nuestros servicios en tu ubicación.

🏠 *SERVICIOS A DOMICILIO:*

🔧 Reparación en sitio
💻 Instalación y configuración
🌐 Configuración de redes
📱 Transferencia de datos

*Cobertura en toda Bogotá*
*Visita técnica: $25.000*

¿En qué zona te encuentras?";

pub const BUSINESS_REDIRECT: &str = "\
Te dirijo a nuestro menú de **Proyectos Empresariales** donde encontrarás nuestras soluciones corporativas especializadas.

🏢 *SOLUCIONES EMPRESARIALES:*

💻 Equipos corporativos
🌐 Redes y conectividad
☁️ Soluciones en la nube
🔧 Mantenimiento preventivo

*+200 PyMEs confían en nosotros*
*Contratos personalizados*

¿Qué solución necesita tu empresa?";

/// First message of every session.
pub const WELCOME: &str = "\
¡Hola! 👋 Soy *Áron*, tu asistente virtual de *ConectaT*
*\"Tecnología que te Entiende\"*

Estoy aquí para ayudarte con:

🔧 Reparación y mantenimiento
💻 Venta de equipos
📱 Accesorios tecnológicos
🛠️ Soporte técnico
🏠 Servicio a domicilio
🏢 Proyectos empresariales

¿En qué puedo asistirte hoy?";

/// Reply to a greeting or `inicio`.
pub const GREETING: &str = "\
¡Hola! 👋 Soy *Áron*, tu asistente virtual de *ConectaT*.

Estoy aquí para ayudarte con consultas sobre:

🔧 Reparación de equipos
💻 Venta de tecnología
📱 Accesorios
🛠️ Soporte técnico
🏠 Servicio a domicilio
🏢 Proyectos empresariales

¿En qué puedo asistirte hoy?";

/// Full repair menu, reached by keyword navigation.
pub const REPAIR_OVERVIEW: &str = "\
🔧 *SERVICIOS DE REPARACIÓN Y MANTENIMIENTO*

Especialistas en:

📱 *Celulares y smartphones*
• Pantallas rotas
• Problemas de batería
• Daños por agua
• Fallas de software

💻 *Computadores PC y Mac*
• Formateo y reinstalación
• Cambio de componentes
• Limpieza interna
• Optimización de rendimiento

📱 *Tablets*
• Reparación de pantallas
• Problemas de carga
• Actualización de software

⏰ *Tiempo promedio: 24-48 horas*
💰 *Cotización gratuita*
🔧 *6 meses de garantía*

¿Qué equipo necesitas reparar?";

pub const SALES_OVERVIEW: &str = "\
💻 *VENTA DE EQUIPOS TECNOLÓGICOS*

*EQUIPOS NUEVOS:*
💻 Computadores de escritorio y portátiles
📱 Celulares de todas las marcas
📱 Tablets y iPads
🖥️ Monitores y periféricos

*EQUIPOS REACONDICIONADOS:*
✅ Revisados por nuestros técnicos
✅ Garantía de 6 meses
✅ Hasta 40% más económicos
✅ Como nuevos en funcionamiento

*MARCAS DISPONIBLES:*
Samsung • Apple • Huawei • Lenovo • HP • Dell • Asus

💳 *Financiación disponible*
🚚 *Envío gratuito en Bogotá*
💰 *Mejor precio garantizado*

¿Qué tipo de equipo te interesa?";

pub const ACCESSORIES_OVERVIEW: &str = "\
📱 *ACCESORIOS TECNOLÓGICOS*

🔌 *CARGADORES Y CABLES*
• Cargadores originales y compatibles
• Cables USB, USB-C, Lightning
• Cargadores inalámbricos
• Power banks

🎧 *AUDIO*
• Auriculares Bluetooth
• Parlantes portátiles
• Micrófonos para streaming

💾 *ALMACENAMIENTO*
• Memorias USB
• Discos duros externos
• Tarjetas micro SD

🖱️ *PERIFÉRICOS*
• Mouse y teclados
• Webcams HD
• Bases para portátil

📱 *PROTECCIÓN*
• Fundas y estuches
• Vidrios templados
• Protectores de pantalla

¿Qué accesorio necesitas?";

pub const SUPPORT_OVERVIEW: &str = "\
🛠️ *SOPORTE TÉCNICO ESPECIALIZADO*

💻 *SOPORTE REMOTO*
• Solución inmediata vía TeamViewer
• Instalación de software
• Configuración de equipos
• Eliminación de virus

🏠 *VISITA TÉCNICA*
• Técnico certificado a tu ubicación
• Diagnóstico completo
• Reparación en sitio
• Configuración de redes domésticas

📞 *ASESORÍA TELEFÓNICA*
• Consultas técnicas gratuitas
• Guía paso a paso
• Recomendaciones de compra

📧 *SOPORTE POR EMAIL*
• Respuesta en menos de 2 horas
• Envío de manuales y drivers
• Seguimiento de casos

*Disponible 24/7 para emergencias empresariales*

¿Qué tipo de soporte necesitas?";

pub const HOME_SERVICE_OVERVIEW: &str = "\
🏠 *SERVICIO A DOMICILIO*

*ZONAS DE COBERTURA EN BOGOTÁ:*
📍 Zona Norte: Usaquén, Chapinero, Zona Rosa
📍 Zona Centro: Candelaria, Teusaquillo, Macarena
📍 Zona Sur: Kennedy, Bosa, Ciudad Bolívar
📍 Zona Occidente: Fontibón, Engativá, Suba

*SERVICIOS DISPONIBLES:*
🔧 Reparación en sitio
💻 Instalación y configuración
🌐 Configuración de redes WiFi
📱 Transferencia de datos
🏢 Mantenimiento preventivo

*TARIFAS:*
🚗 Visita técnica: $25.000
⏰ Tiempo mínimo: 1 hora
💰 Servicio técnico: $45.000/hora

*HORARIOS:*
📅 Lunes a Viernes: 8:00 AM - 6:00 PM
📅 Sábados: 9:00 AM - 2:00 PM
🚨 Urgencias 24/7 (recargo del 50%)

¿En qué zona te encuentras?";

pub const BUSINESS_OVERVIEW: &str = "\
🏢 *PROYECTOS TECNOLÓGICOS EMPRESARIALES*

*NUESTROS SERVICIOS CORPORATIVOS:*

💻 *EQUIPOS CORPORATIVOS*
• Venta de equipos al por mayor
• Leasing tecnológico
• Configuración masiva
• Soporte empresarial

🌐 *REDES Y CONECTIVIDAD*
• Instalación de redes corporativas
• Configuración de servidores
• Cableado estructurado
• WiFi empresarial

☁️ *SOLUCIONES EN LA NUBE*
• Migración a la nube
• Backup automático
• Office 365 / Google Workspace
• Seguridad informática

🔧 *MANTENIMIENTO PREVENTIVO*
• Contratos mensuales
• Soporte 24/7
• Monitoreo remoto
• Inventario de activos

*EMPRESAS QUE CONFÍAN EN NOSOTROS:*
✅ +200 PyMEs atendidas
✅ Contratos gubernamentales
✅ Startups y corporaciones

¿Qué solución necesita tu empresa?";

/// Phone repair price list, inside the repair menu.
pub const PHONE_REPAIR: &str = "\
📱 *REPARACIÓN DE CELULARES*

*SERVICIOS MÁS COMUNES:*

🔧 *Cambio de pantallas*
• iPhone: $180.000 - $350.000
• Samsung: $120.000 - $280.000
• Huawei/Xiaomi: $90.000 - $200.000

🔋 *Cambio de baterías*
• Todas las marcas: $80.000 - $150.000
• Garantía de 6 meses
• Instalación incluida

💧 *Daños por agua*
• Limpieza especializada: $60.000
• Cambio de componentes dañados
• Recuperación de datos

📱 *Problemas de software*
• Liberación de operador: $30.000
• Formateo y configuración: $25.000
• Actualización de sistema: $20.000

⏰ *Tiempo de reparación: 2-24 horas*
🔧 *Garantía: 6 meses en repuestos*
💰 *Cotización gratuita*

¿Cuál es el problema específico de tu celular?";

/// Computer repair price list, inside the repair menu.
pub const COMPUTER_REPAIR: &str = "\
💻 *REPARACIÓN DE COMPUTADORES*

*SERVICIOS ESPECIALIZADOS:*

🔧 *Mantenimiento preventivo*
• Limpieza interna completa: $45.000
• Cambio de pasta térmica: $25.000
• Optimización de software: $35.000

💾 *Problemas de hardware*
• Cambio de disco duro: $80.000 + repuesto
• Instalación de memoria RAM: $25.000 + repuesto
• Reparación de fuente: $60.000 - $120.000

💻 *Problemas de software*
• Formateo + Windows original: $80.000
• Eliminación de virus: $40.000
• Recuperación de datos: $100.000 - $200.000

🖥️ *Pantallas de portátiles*
• 14\": $280.000 - $350.000
• 15.6\": $320.000 - $420.000
• Touch screen: +$150.000

⏰ *Tiempo: 24-48 horas según complejidad*
🏠 *Servicio a domicilio disponible*

¿Qué problema presenta tu computador?";

/// Computers for sale, inside the sales menu.
pub const COMPUTER_CATALOG: &str = "\
💻 *COMPUTADORES DISPONIBLES*

*PORTÁTILES NUEVOS:*
🔥 HP Pavilion 15\" i5 8GB RAM: $2.200.000
🔥 Lenovo IdeaPad i7 16GB: $2.800.000
🔥 Asus VivoBook 14\" i3 4GB: $1.450.000
🔥 MacBook Air M1: $4.200.000

*EQUIPOS DE ESCRITORIO:*
🖥️ PC Gaming i5 GTX1650: $2.500.000
🖥️ PC Oficina i3 8GB: $1.200.000
🖥️ Workstation i7 32GB: $4.500.000

*REACONDICIONADOS (GARANTÍA 6 MESES):*
♻️ ThinkPad T480 i5 8GB: $1.200.000
♻️ Dell Inspiron 15\" i3: $850.000
♻️ HP EliteBook i7: $1.650.000

*INCLUYE:*
✅ Windows 11 original
✅ Office 365 por 1 año
✅ Antivirus premium
✅ Configuración completa
✅ Soporte técnico gratuito

💳 *Financiación hasta 12 meses*
🚚 *Envío gratuito*

¿Te interesa algún modelo específico?";

pub const PRICING: &str = "\
💰 *INFORMACIÓN DE PRECIOS*

*REPARACIONES MÁS COMUNES:*
📱 Pantalla celular: $90.000 - $350.000
🔋 Batería celular: $80.000 - $150.000
💻 Formateo PC: $80.000
🔧 Mantenimiento PC: $45.000

*SERVICIOS:*
🏠 Visita a domicilio: $25.000
⏰ Hora técnica: $45.000
📞 Soporte remoto: $35.000
💻 Diagnóstico: GRATUITO

*TODOS LOS PRECIOS INCLUYEN:*
✅ Mano de obra especializada
✅ Garantía de 6 meses
✅ Soporte post-venta
✅ IVA incluido

*FORMAS DE PAGO:*
💳 Efectivo, tarjetas, transferencias
📱 Pago móvil (Nequi, Daviplata)
💰 Financiación disponible

¿Necesitas cotización para algo específico?";

pub const WARRANTY: &str = "\
🛡️ *POLÍTICA DE GARANTÍAS*

*REPARACIONES:*
✅ 6 meses en repuestos originales
✅ 3 meses en repuestos compatibles
✅ 30 días en mano de obra
✅ Garantía escrita en factura

*EQUIPOS NUEVOS:*
✅ Garantía del fabricante (12 meses)
✅ Soporte técnico ConectaT incluido
✅ Cambio por defecto de fábrica

*EQUIPOS REACONDICIONADOS:*
✅ 6 meses de garantía ConectaT
✅ Cambio por fallas técnicas
✅ Soporte incluido

*NO CUBRE:*
❌ Daños por mal uso del cliente
❌ Daños por agua posterior
❌ Caídas o golpes
❌ Manipulación por terceros

*PARA HACER VÁLIDA LA GARANTÍA:*
📄 Factura de compra/reparación
📱 Contactar dentro del período
🏪 Llevar el equipo a nuestras instalaciones

¿Tienes alguna consulta específica sobre garantías?";

pub const SCHEDULE: &str = "\
⏰ *HORARIOS DE ATENCIÓN*

*SEDE PRINCIPAL:*
📅 Lunes a Viernes: 8:00 AM - 6:00 PM
📅 Sábados: 9:00 AM - 2:00 PM
📅 Domingos: Cerrado

*SERVICIO A DOMICILIO:*
🏠 Lunes a Viernes: 8:00 AM - 6:00 PM
🏠 Sábados: 9:00 AM - 2:00 PM
🚨 Urgencias 24/7 (recargo del 50%)

*SOPORTE TÉCNICO:*
💻 Chat y WhatsApp: 24/7
📞 Teléfono: Lunes a Sábado 8:00 AM - 8:00 PM
📧 Email: Respuesta en 2 horas hábiles

*DÍAS FESTIVOS:*
🎉 Atención solo urgencias empresariales
📱 Chat automático disponible

*UBICACIÓN:*
📍 Calle 127 #15-45, Bogotá
🚇 Cerca al TransMilenio Calle 127
🅿️ Parqueadero gratuito para clientes

¿Necesitas agendar una cita?";

/// Main menu, reached with `menú`, `inicio` or the back arrow.
pub const MAIN_MENU: &str = "\
🏠 *MENÚ PRINCIPAL - ConectaT*

Soy *Áron* y puedo ayudarte con estos servicios:

🔧 *Reparación y mantenimiento*
💻 *Venta de equipos nuevos*
📱 *Accesorios tecnológicos*
🛠️ *Soporte técnico*
🏠 *Servicio a domicilio*
🏢 *Proyectos empresariales*

¿En qué puedo asistirte?";

/// Apology listing what the bot can do.
pub const FALLBACK: &str = "\
Entiendo que necesitas ayuda, pero no logré identificar exactamente qué buscas 🤔

*Como Áron, puedo asistirte con:*

🔧 **Reparaciones** - \"Mi celular no enciende\"
💻 **Ventas** - \"Quiero comprar un portátil\"
📱 **Accesorios** - \"Necesito un cargador\"
🛠️ **Soporte** - \"Tengo un problema técnico\"
🏠 **Domicilio** - \"Pueden venir a mi casa\"
🏢 **Empresas** - \"Cotización para mi negocio\"

*Sugerencias:*
• Escribe \"menú\" para ver todas las opciones
• Escribe \"agente\" para hablar con una persona
• Sé más específico sobre lo que necesitas

¿Podrías contarme más detalles sobre tu consulta?";

/// Hand-off after complaint or distress keywords.
pub fn escalation_handoff(number: &str, email: &str, address: &str, link: &str) -> String {
    format!(
        "\
Entiendo que necesitas asistencia especializada. Te estoy conectando con uno de nuestros agentes humanos que podrá ayudarte mejor con tu consulta.

*Mientras tanto, aquí tienes nuestros datos de contacto directo:*

📞 **Teléfono:** +{number}
📧 **Email:** {email}
📍 **Dirección:** {address}

*Abriremos WhatsApp automáticamente.*
👉 Si no se abre, usa este enlace: {link}

Un agente se comunicará contigo en los próximos minutos."
    )
}

/// Hand-off after an explicit request for an agent.
pub fn human_handoff(number: &str, email: &str, link: &str) -> String {
    format!(
        "\
Entiendo que necesitas asistencia especializada. Te estoy conectando con uno de nuestros agentes humanos que podrá ayudarte mejor con tu consulta.

*Horarios de atención:*
📅 Lunes a Viernes: 8:00 AM - 6:00 PM
📅 Sábados: 9:00 AM - 2:00 PM

📞 **Contacto directo:** +{number}
📧 **Email:** {email}

*Abriremos WhatsApp automáticamente.*
👉 Si no se abre, usa este enlace: {link}

Un agente se comunicará contigo en breve."
    )
}

/// Store address and directions.
pub fn location(number: &str) -> String {
    format!(
        "\
📍 *NUESTRA UBICACIÓN*

**ConectaT - Sede Principal**
🏢 Carrera 83D #53A-34, Cali
🏙️ Barrio: Usaquén

*REFERENCIAS:*
🚇 A 2 cuadras del TransMilenio Calle 127
🏪 Frente al Centro Comercial Santafé
🅿️ Parqueadero gratuito disponible

*CÓMO LLEGAR:*
🚌 TransMilenio: Estación Calle 127
🚗 Por Autopista Norte: Salida Calle 127
🚕 Uber/Taxi: \"ConectaT Calle 127\"

*HORARIOS:*
📅 Lunes a Viernes: 8:00 AM - 5:00 PM
📅 Sábados: 9:00 AM - 12:00 PM

📞 **Teléfono:** +{number}

¿Necesitas que te envíe la ubicación por Google Maps?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handoff_texts_embed_contact_data() {
        let text = escalation_handoff("57300", "a@b.co", "Calle 1", "https://wa.me/57300");
        assert!(text.contains("**Teléfono:** +57300"));
        assert!(text.contains("**Email:** a@b.co"));
        assert!(text.contains("**Dirección:** Calle 1"));
        assert!(text.ends_with("Un agente se comunicará contigo en los próximos minutos."));

        let text = human_handoff("57300", "a@b.co", "https://wa.me/57300");
        assert!(text.contains("*Horarios de atención:*"));
        assert!(text.contains("usa este enlace: https://wa.me/57300"));
    }

    #[test]
    fn texts_start_without_leading_newline() {
        for text in [WELCOME, GREETING, MAIN_MENU, FALLBACK, WARRANTY] {
            assert!(!text.starts_with('\n'));
        }
        assert!(location("1").starts_with("📍 *NUESTRA UBICACIÓN*"));
    }
}
