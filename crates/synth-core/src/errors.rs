//! Errores del núcleo de síntesis.
//!
//! Taxonomía única para stores y sesión: todos los fallos son síncronos y se
//! propagan al llamador inmediato; no hay reintentos ni manifest parcial.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    /// La ruta (o el id) ya fue materializada en este store.
    #[error("path already materialized: {0}")] AlreadyExists(String),
    /// Mutación intentada después de `lock()`.
    #[error("store is locked")] Locked,
    /// Lectura de una ruta nunca escrita.
    #[error("path not found: {0}")] NotFound(String),
    /// Clave relativa que escaparía de la raíz del store.
    #[error("path escapes store root: {0}")] InvalidPath(String),
    /// Id de artifact repetido dentro de la sesión.
    #[error("artifact id already registered: {0}")] DuplicateArtifact(String),
    /// Id de build step repetido dentro de la sesión.
    #[error("build step id already registered: {0}")] DuplicateBuildStep(String),
    /// Segundo `close()` sobre la misma sesión.
    #[error("session already synthesized")] AlreadySynthesized,
    #[error("json: {0}")] Json(#[from] serde_json::Error),
    #[error("io: {0}")] Io(#[from] std::io::Error),
}
