//! Borrador de artifact registrado por los producers.
//!
//! Un `ArtifactDraft` describe una unidad de salida y sus metadatos. Es
//! neutral: `properties` es JSON genérico cuyo shape define el producer; el
//! núcleo no interpreta su semántica. Los campos opcionales vacíos se OMITEN
//! en el wire format (nunca se emiten como contenedores vacíos): los
//! consumidores downstream comparan bytes, así que la ausencia es parte del
//! contrato.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tipos cerrados de artifact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Documento plantilla generado a partir del árbol de configuración.
    Template,
    /// Registro estructurado sin semántica asignada.
    Generic,
}

/// Entrada de metadata anclada a un construct path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Petición de contexto faltante: el valor externo aún no está disponible y
/// se registra el provider que sabe resolverlo junto a sus argumentos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissingContext {
    pub provider: String,
    pub props: Map<String, Value>,
}

/// Registro de artifact tal y como viaja en el manifest.
///
/// El orden de declaración de los campos fija el orden de emisión:
/// `type` y `environment` incondicionales; el resto solo si no está vacío.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactDraft {
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Placement opaco, p.ej. `scheme://scope-a/scope-b`.
    pub environment: String,
    /// Ids de otros artifacts, orden del caller, sin deduplicar.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// construct path -> entradas en orden de inserción.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, Vec<MetadataEntry>>,
    /// Shape definido por el producer; pasa sin tocar.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    /// clave lógica -> petición de contexto faltante.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub missing: IndexMap<String, MissingContext>,
}

impl ArtifactDraft {
    /// Borrador mínimo: solo kind y environment, resto vacío (y omitido).
    pub fn new(kind: ArtifactKind, environment: impl Into<String>) -> Self {
        Self { kind,
               environment: environment.into(),
               dependencies: Vec::new(),
               metadata: IndexMap::new(),
               properties: Map::new(),
               missing: IndexMap::new() }
    }
}
