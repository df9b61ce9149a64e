//! Store efímero en memoria, útil para tests y pases sin persistencia.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::errors::SynthError;

use super::{validate_key, SessionStore};

/// Implementación en memoria del `SessionStore`. La raíz es nominal: solo se
/// usa para devolver rutas absolutas desde `mkdir`.
pub struct InMemoryStore {
    root: PathBuf,
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
    locked: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self { root: PathBuf::from("/synthflow-mem"),
               files: BTreeMap::new(),
               dirs: BTreeSet::new(),
               locked: false }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn materialized(&self, rel_path: &str) -> bool {
        self.files.contains_key(rel_path) || self.dirs.contains(rel_path)
    }
}

impl SessionStore for InMemoryStore {
    fn write_file(&mut self, rel_path: &str, bytes: &[u8]) -> Result<(), SynthError> {
        if self.locked {
            return Err(SynthError::Locked);
        }
        validate_key(rel_path)?;
        if self.materialized(rel_path) {
            return Err(SynthError::AlreadyExists(rel_path.to_string()));
        }
        self.files.insert(rel_path.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read_file(&self, rel_path: &str) -> Result<Vec<u8>, SynthError> {
        validate_key(rel_path)?;
        self.files
            .get(rel_path)
            .cloned()
            .ok_or_else(|| SynthError::NotFound(rel_path.to_string()))
    }

    fn exists(&self, rel_path: &str) -> bool {
        validate_key(rel_path).is_ok() && self.materialized(rel_path)
    }

    fn mkdir(&mut self, rel_path: &str) -> Result<PathBuf, SynthError> {
        if self.locked {
            return Err(SynthError::Locked);
        }
        validate_key(rel_path)?;
        if self.materialized(rel_path) {
            return Err(SynthError::AlreadyExists(rel_path.to_string()));
        }
        self.dirs.insert(rel_path.to_string());
        Ok(self.root.join(rel_path))
    }

    fn list(&self) -> Result<Vec<String>, SynthError> {
        // primer segmento de cada clave, deduplicado; BTreeSet ya ordena
        let names: BTreeSet<String> = self.files
                                          .keys()
                                          .chain(self.dirs.iter())
                                          .map(|k| k.split('/').next().unwrap_or(k).to_string())
                                          .collect();
        Ok(names.into_iter().collect())
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}
