//! Contrato `SessionStore` y store en memoria.

mod memory;

pub use memory::InMemoryStore;

use std::path::{Component, Path, PathBuf};

use crate::errors::SynthError;

/// Área de staging write-once con lock advisory.
///
/// Una ruta relativa se materializa como mucho una vez durante la vida del
/// store, con lock o sin él. `lock()` es el único cambio de estado posterior
/// y corta toda mutación de inmediato; es idempotente. El lock es memoria
/// local del proceso, no un mecanismo cross-process.
pub trait SessionStore {
    /// Persiste bytes bajo `rel_path`. Falla con `AlreadyExists` si la ruta
    /// ya fue materializada y con `Locked` tras `lock()`.
    fn write_file(&mut self, rel_path: &str, bytes: &[u8]) -> Result<(), SynthError>;

    /// Lee los bytes de una ruta ya escrita; `NotFound` si nunca lo fue.
    fn read_file(&self, rel_path: &str) -> Result<Vec<u8>, SynthError>;

    /// true si la ruta (archivo o directorio) fue materializada. Una clave
    /// inválida simplemente no existe.
    fn exists(&self, rel_path: &str) -> bool;

    /// Crea un único segmento de directorio bajo la raíz y devuelve su ruta
    /// absoluta. No recursivo: crear `a/b` sin que exista `a` es error de
    /// uso del caller.
    fn mkdir(&mut self, rel_path: &str) -> Result<PathBuf, SynthError>;

    /// Hijos inmediatos de la raíz, orden lexicográfico, archivos y
    /// directorios mezclados por nombre.
    fn list(&self) -> Result<Vec<String>, SynthError>;

    /// Transición a locked. Llamarlo dos veces equivale a llamarlo una.
    fn lock(&mut self);

    fn is_locked(&self) -> bool;
}

/// Valida que una clave relativa resuelva estrictamente dentro de la raíz:
/// ni absoluta, ni vacía, ni con segmentos `.`/`..`.
pub fn validate_key(rel_path: &str) -> Result<(), SynthError> {
    if rel_path.is_empty() {
        return Err(SynthError::InvalidPath(rel_path.to_string()));
    }
    let path = Path::new(rel_path);
    if path.is_absolute() {
        return Err(SynthError::InvalidPath(rel_path.to_string()));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(SynthError::InvalidPath(rel_path.to_string())),
        }
    }
    Ok(())
}
