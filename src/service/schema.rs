use serde_json::{json, Value};

use crate::model::Probability;

pub const REQUIRED_CONDITION_FIELDS: [&str; 5] = [
    "nombre",
    "probabilidad",
    "descripcion",
    "tratamientosSugeridos",
    "consecuenciasNoTratamiento",
];

/// Structured-output schema handed to the generation endpoint.
///
/// Both top-level members stay optional here; exclusivity is resolved when
/// the reply is interpreted.
pub fn response_schema() -> Value {
    let probabilities: Vec<&str> = Probability::ALL.iter().map(|p| p.label()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "analisis": {
                "type": "ARRAY",
                "description": "Una lista de posibles afecciones de la piel detectadas en la imagen.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "nombre": {
                            "type": "STRING",
                            "description": "El nombre de la posible afección (ej. 'Acné vulgar', 'Dermatitis atópica')."
                        },
                        "probabilidad": {
                            "type": "STRING",
                            "enum": probabilities,
                            "description": "Una estimación cualitativa de la probabilidad."
                        },
                        "descripcion": {
                            "type": "STRING",
                            "description": "Una breve descripción de la afección."
                        },
                        "tratamientosSugeridos": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Tratamientos comunes y medidas de autocuidado (en términos generales)."
                        },
                        "consecuenciasNoTratamiento": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Posibles consecuencias si la afección no se trata."
                        }
                    },
                    "required": REQUIRED_CONDITION_FIELDS
                }
            },
            "error": {
                "type": "STRING",
                "description": "Un mensaje de error si el análisis falla o la imagen no es válida."
            }
        }
    })
}
