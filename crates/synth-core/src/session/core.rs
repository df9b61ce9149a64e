//! Orquestador del pase de síntesis.
//!
//! La sesión acumula borradores de artifacts y build steps en memoria (sin
//! efecto en el filesystem) y al cerrar ensambla los documentos finales,
//! los escribe en sus rutas bien conocidas y bloquea el store. Las
//! escrituras preceden estrictamente al lock porque son escrituras ellas
//! mismas.

use indexmap::IndexMap;

use crate::config::CONFIG;
use crate::constants::{BUILD_STEPS_PATH, MANIFEST_PATH};
use crate::errors::SynthError;
use crate::model::{ArtifactDraft, BuildManifest, BuildStep, Manifest, RuntimeInfo};
use crate::store::SessionStore;

use super::Assembly;

/// Opciones de sesión. El default hereda la configuración de entorno.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Emitir el bloque `runtime` en el manifest. Los tests de determinismo
    /// byte a byte lo desactivan.
    pub emit_runtime_info: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { emit_runtime_info: CONFIG.emit_runtime_info }
    }
}

/// Sesión de síntesis sobre un `SessionStore`.
///
/// Ciclo de vida: creada -> abierta (acepta registros y escrituras) ->
/// `close()` una sola vez -> documentos escritos, store bloqueado. Tras el
/// cierre la sesión sigue siendo legible pero no escribible.
pub struct SynthSession<S: SessionStore> {
    store: S,
    artifacts: IndexMap<String, ArtifactDraft>,
    build_steps: IndexMap<String, BuildStep>,
    closed: bool,
    emit_runtime_info: bool,
}

impl<S: SessionStore> SynthSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, SessionOptions::default())
    }

    pub fn with_options(store: S, options: SessionOptions) -> Self {
        Self { store,
               artifacts: IndexMap::new(),
               build_steps: IndexMap::new(),
               closed: false,
               emit_runtime_info: options.emit_runtime_info }
    }

    /// Registra un borrador de artifact bajo un id único de sesión.
    ///
    /// El borrador entra por valor: el caller pierde su alias, así que
    /// ninguna mutación posterior suya puede alterar el snapshot registrado.
    pub fn add_artifact(&mut self, id: &str, draft: ArtifactDraft) -> Result<(), SynthError> {
        if self.artifacts.contains_key(id) {
            return Err(SynthError::DuplicateArtifact(id.to_string()));
        }
        self.artifacts.insert(id.to_string(), draft);
        Ok(())
    }

    /// Registra un build step bajo un id único dentro del set de steps.
    pub fn add_build_step(&mut self, id: &str, step: BuildStep) -> Result<(), SynthError> {
        if self.build_steps.contains_key(id) {
            return Err(SynthError::DuplicateBuildStep(id.to_string()));
        }
        self.build_steps.insert(id.to_string(), step);
        Ok(())
    }

    /// Accessor de ensamblado sobre el store de la sesión.
    pub fn assembly(&mut self) -> Assembly<'_, S> {
        Assembly::new(&mut self.store)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cierra la sesión: escribe el manifest (y el documento de build steps
    /// si hubo alguno), bloquea el store y marca la sesión como cerrada.
    /// Devuelve el manifest ensamblado. Un segundo `close()` falla con
    /// `AlreadySynthesized` y no reescribe nada.
    pub fn close(&mut self) -> Result<Manifest, SynthError> {
        if self.closed {
            return Err(SynthError::AlreadySynthesized);
        }
        let runtime = self.emit_runtime_info.then(RuntimeInfo::current);
        let manifest = Manifest::new(self.artifacts.clone(), runtime);
        self.assembly().write_json(MANIFEST_PATH, &manifest)?;

        if !self.build_steps.is_empty() {
            let build = BuildManifest { steps: self.build_steps.clone() };
            self.assembly().write_json(BUILD_STEPS_PATH, &build)?;
        }

        self.store.lock();
        self.closed = true;
        Ok(manifest)
    }

    /// Relee el manifest ya escrito. Antes del cierre falla con `NotFound`.
    pub fn manifest(&mut self) -> Result<Manifest, SynthError> {
        self.assembly().read_json(MANIFEST_PATH)
    }
}
