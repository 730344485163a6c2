//! # Config Crate
//!
//! Centralized configuration constants for the smart mesh editing tools.
//! Pointer sensitivities, naming conventions shared with the host scene and
//! numeric tolerances are defined here so the tool crates never carry bare
//! literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ToolConfig, RADIAL_SENSITIVITY, TRANSLATE_SENSITIVITY};
//!
//! let cfg = ToolConfig::default();
//! assert_eq!(cfg.translate_sensitivity, TRANSLATE_SENSITIVITY);
//! assert_eq!(cfg.radial_sensitivity, RADIAL_SENSITIVITY);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: Names and suffixes are plain strings, no host types
//! - **Validated**: Runtime overrides go through `ToolConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;
