//! Configuración central del crate.
//! Lee variables de entorno una sola vez y expone una estructura inmutable
//! (`CONFIG`). Por ahora la única sección es la de reporting de runtime.

use once_cell::sync::Lazy;
use std::env;

/// Configuración global (extensible para más secciones).
pub struct AppConfig {
    /// Si el manifest lleva el bloque `runtime` (herramienta + versión).
    /// Los tests que comparan bytes lo desactivan vía `SessionOptions`.
    pub emit_runtime_info: bool,
}

/// Instancia global perezosa, evaluada una sola vez por proceso.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let disabled = env::var("SYNTHFLOW_DISABLE_RUNTIME_INFO").ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    AppConfig { emit_runtime_info: !disabled }
});
