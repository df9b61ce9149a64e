//! Capa JSON de conveniencia sobre un `SessionStore`.
//!
//! Tanto el núcleo (manifest, build steps) como los producers intercambian
//! documentos estructurados a través de este accessor; también hace
//! passthrough de las operaciones crudas del store. Las lecturas funcionan
//! igual antes y después del cierre; las escrituras fallan con `Locked` una
//! vez bloqueado el store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::SynthError;
use crate::store::SessionStore;

pub struct Assembly<'a, S: SessionStore> {
    store: &'a mut S,
}

impl<'a, S: SessionStore> Assembly<'a, S> {
    pub(crate) fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Codifica `value` como JSON pretty (UTF-8, newline final) y lo escribe
    /// write-once en `rel_path`.
    pub fn write_json<T: Serialize>(&mut self, rel_path: &str, value: &T) -> Result<(), SynthError> {
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');
        self.store.write_file(rel_path, &bytes)
    }

    /// Lee y decodifica un documento escrito previamente.
    pub fn read_json<T: DeserializeOwned>(&self, rel_path: &str) -> Result<T, SynthError> {
        let bytes = self.store.read_file(rel_path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn write_file(&mut self, rel_path: &str, bytes: &[u8]) -> Result<(), SynthError> {
        self.store.write_file(rel_path, bytes)
    }

    pub fn read_file(&self, rel_path: &str) -> Result<Vec<u8>, SynthError> {
        self.store.read_file(rel_path)
    }

    pub fn exists(&self, rel_path: &str) -> bool {
        self.store.exists(rel_path)
    }

    pub fn list(&self) -> Result<Vec<String>, SynthError> {
        self.store.list()
    }
}
