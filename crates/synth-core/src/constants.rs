//! Constantes del núcleo de síntesis.
//!
//! Este módulo agrupa los valores estáticos que forman parte del contrato
//! externo: rutas bien conocidas dentro del staging y la versión del esquema
//! del manifest. Cambios en `MANIFEST_VERSION` afectan a todo consumidor
//! downstream del bundle; mantener estable mientras no haya cambios
//! incompatibles de esquema.

/// Versión lógica del esquema del manifest. Se emite en el campo `version`
/// del documento y participa en el fingerprint, de modo que un cambio de
/// esquema invalide determinísticamente la identidad del bundle.
pub const MANIFEST_VERSION: &str = "1.0";

/// Ruta bien conocida del manifest dentro del staging.
pub const MANIFEST_PATH: &str = "manifest.json";

/// Ruta bien conocida del documento de build steps. Solo se escribe si la
/// sesión registró al menos un step.
pub const BUILD_STEPS_PATH: &str = "build.json";

/// Identificador de la herramienta emitido en el bloque `runtime`.
pub const TOOL_NAME: &str = "synthflow";
