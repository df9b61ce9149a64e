//! Build step posterior a la síntesis. Registro plano: tag de tipo más
//! parámetros; no hay grafo de dependencias entre steps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildStep {
    #[serde(rename = "type")]
    pub kind: String,
    pub parameters: Map<String, Value>,
}

impl BuildStep {
    pub fn new(kind: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self { kind: kind.into(), parameters }
    }
}
