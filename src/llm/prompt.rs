use serde::Serialize;

pub const SYSTEM_INSTRUCTION: &str = "Eres un arquitecto experto en materiales, sostenibilidad y diseño accesible en México. \
Hablas en un lenguaje técnico y directo para estudiantes y profesionales de arquitectura.";

const PROFILE_SECTIONS: &str = "\
1. 🧱 Propiedades Físicas:
   - Nombre técnico en inglés
   - Densidad en kg/m³
   - Conductividad térmica en W/m·K
   - Calor específico en J/kg·K
   - Rugosidad superficial (Liso / Medio / Rugoso)
   - Tipo de material (estructura, acabado, aislante, etc.)

2. 🧪 Propiedades químicas y comportamiento:
   - Composición química general
   - Si es inerte o emite compuestos
   - Resistencia al fuego y a la corrosión

3. 🌱 Sostenibilidad y ciclo de vida:
   - Origen (natural, sintético, reciclado)
   - Impacto ambiental en producción y transporte
   - Posibilidad de reutilización o reciclaje

4. 🏗️ Recomendaciones arquitectónicas:
   - Usos recomendados (muros, techos, pisos, etc.)
   - Cuidados y mantenimiento
   - Compatibilidad con climas cálidos/húmedos

Proporciona valores numéricos realistas cuando sea posible. Usa formato claro y estructurado, sin hacer preguntas al usuario.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

/// A single Mentor AI request for one material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub material: String,
    pub system: String,
    pub user: String,
}

impl QueryRequest {
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message {
                role: "system",
                content: self.system.clone(),
            },
            Message {
                role: "user",
                content: self.user.clone(),
            },
        ]
    }
}

/// Embeds `material` verbatim; never fails.
pub fn build(material: &str) -> QueryRequest {
    let user = format!(
        "Genera una ficha técnica completa y detallada del siguiente material de construcción: {}.\n\n{}\n",
        material, PROFILE_SECTIONS
    );

    QueryRequest {
        material: material.to_string(),
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}
