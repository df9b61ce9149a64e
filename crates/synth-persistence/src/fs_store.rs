//! Store write-once respaldado por un directorio existente.
//!
//! La presencia en disco es la autoridad para `AlreadyExists`: el medio es
//! persistente, así que no se mantiene ningún set auxiliar en memoria que
//! pueda divergir de la realidad. El flag de lock sí es memoria local del
//! proceso (no un cambio de permisos): una instancia nueva sobre la misma
//! raíz arranca desbloqueada aunque vea los archivos previos.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use synth_core::errors::SynthError;
use synth_core::store::{validate_key, SessionStore};

#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    locked: bool,
}

impl DirectoryStore {
    /// Abre un store sobre una raíz que debe existir previamente como
    /// directorio.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SynthError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SynthError::NotFound(root.display().to_string()));
        }
        Ok(Self { root, locked: false })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel_path: &str) -> Result<PathBuf, SynthError> {
        validate_key(rel_path)?;
        Ok(self.root.join(rel_path))
    }
}

impl SessionStore for DirectoryStore {
    fn write_file(&mut self, rel_path: &str, bytes: &[u8]) -> Result<(), SynthError> {
        if self.locked {
            return Err(SynthError::Locked);
        }
        let abs = self.resolve(rel_path)?;
        if abs.exists() {
            return Err(SynthError::AlreadyExists(rel_path.to_string()));
        }
        fs::write(&abs, bytes)?;
        Ok(())
    }

    fn read_file(&self, rel_path: &str) -> Result<Vec<u8>, SynthError> {
        let abs = self.resolve(rel_path)?;
        if !abs.exists() {
            return Err(SynthError::NotFound(rel_path.to_string()));
        }
        Ok(fs::read(&abs)?)
    }

    fn exists(&self, rel_path: &str) -> bool {
        match self.resolve(rel_path) {
            Ok(abs) => abs.exists(),
            Err(_) => false,
        }
    }

    fn mkdir(&mut self, rel_path: &str) -> Result<PathBuf, SynthError> {
        if self.locked {
            return Err(SynthError::Locked);
        }
        let abs = self.resolve(rel_path)?;
        // create_dir no recursivo: el padre debe existir por construcción
        match fs::create_dir(&abs) {
            Ok(()) => Ok(abs),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(SynthError::AlreadyExists(rel_path.to_string()))
            }
            Err(e) => Err(SynthError::Io(e)),
        }
    }

    fn list(&self) -> Result<Vec<String>, SynthError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}
