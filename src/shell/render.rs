use colored::*;

use crate::dataset::MaterialRecord;

pub const PHYSICAL_HEADING: &str = "📐 Propiedades Físicas";
pub const MENTOR_HEADING: &str = "🧪 Propiedades Químicas, Ciclo de Vida y Recomendaciones (Mentor AI)";
pub const STORED_MESSAGE: &str = "Respuesta del mentor AI almacenada.";

/// The six dataset fields with their unit labels, one per line.
pub fn record_fields(record: &MaterialRecord) -> String {
    format!(
        "- Nombre en Inglés: {}\n\
         - Densidad: {} kg/m³\n\
         - Conductividad térmica: {} W/m·K\n\
         - Calor específico: {} J/kg·K\n\
         - Rugosidad superficial: {}\n\
         - Tipo: {}",
        record.english_name,
        record.density,
        record.conductivity,
        record.specific_heat,
        record.roughness,
        record.material_type,
    )
}

pub fn material_header(name: &str) -> String {
    format!("🧱 {}", name).bright_cyan().bold().to_string()
}

pub fn heading(text: &str) -> String {
    text.bright_blue().to_string()
}

pub fn query_failure(err: &dyn std::fmt::Display) -> String {
    format!("No se pudo conectar con el Mentor AI. Error: {}", err)
        .yellow()
        .to_string()
}

pub fn not_found(name: &str, suggestions: &[&str]) -> String {
    let mut message = format!("'{}' no está en la base de datos.", name)
        .yellow()
        .to_string();
    if !suggestions.is_empty() {
        message.push_str(&format!(" ¿Quisiste decir: {}?", suggestions.join(", ")));
    }
    message
}

pub fn help() -> String {
    let rows = [
        ("list [filtro]", "lista los materiales precargados"),
        (
            "show <nombre>[; <nombre>...]",
            "muestra las propiedades de uno o más materiales (';' separa nombres; usa 'ask' si el nombre contiene ';')",
        ),
        ("ask <nombre>", "consulta al Mentor AI sobre un material precargado"),
        ("lookup <texto>", "muestra la respuesta guardada para cualquier material"),
        ("other <texto>", "consulta al Mentor AI sobre un material que no está en la lista"),
        ("cache", "materiales con respuesta guardada en esta sesión"),
        ("help", "esta ayuda"),
        ("exit", "salir"),
    ];

    rows.iter()
        .map(|(usage, description)| format!("  {:<32} {}", usage.bright_green(), description))
        .collect::<Vec<_>>()
        .join("\n")
}
