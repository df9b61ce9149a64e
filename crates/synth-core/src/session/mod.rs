//! Sesión de síntesis y accessor de ensamblado.

mod assembly;
mod core;

pub use assembly::Assembly;
pub use core::{SessionOptions, SynthSession};
