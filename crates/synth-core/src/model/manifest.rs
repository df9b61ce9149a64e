//! Documentos de cierre de sesión: manifest principal y build steps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::{MANIFEST_VERSION, TOOL_NAME};
use crate::hashing::hash_value;

use super::{ArtifactDraft, BuildStep};

/// Bloque de reporting de runtime (herramienta productora y su versión).
/// Se omite cuando la configuración lo suprime; no entra al fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeInfo {
    pub tool: String,
    pub version: String,
}

impl RuntimeInfo {
    /// Identidad del crate productor.
    pub fn current() -> Self {
        Self { tool: TOOL_NAME.to_string(),
               version: env!("CARGO_PKG_VERSION").to_string() }
    }
}

/// Documento raíz del bundle. `artifacts` conserva el orden de inserción de
/// la sesión; se escribe como mucho una vez, en `MANIFEST_PATH`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub version: String,
    pub artifacts: IndexMap<String, ArtifactDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeInfo>,
}

impl Manifest {
    pub fn new(artifacts: IndexMap<String, ArtifactDraft>, runtime: Option<RuntimeInfo>) -> Self {
        Self { version: MANIFEST_VERSION.to_string(),
               artifacts,
               runtime }
    }
}

/// Documento de build steps (`BUILD_STEPS_PATH`), solo si hubo steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildManifest {
    pub steps: IndexMap<String, BuildStep>,
}

/// Fingerprint estable del bundle: hash del JSON canónico de versión +
/// artifacts. Excluye `runtime`, que es reporting y no identidad.
pub fn manifest_fingerprint(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let body = json!({
        "version": manifest.version,
        "artifacts": serde_json::to_value(&manifest.artifacts)?,
    });
    Ok(hash_value(&body))
}
