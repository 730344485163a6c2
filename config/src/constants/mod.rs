//! # Configuration Constants
//!
//! Centralized values shared across the smart editing pipeline. Each public
//! item documents its purpose and provides a minimal usage example so that
//! downstream crates can remain declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sensitivity**: Pointer-to-value scaling for modal gestures
//! - **Radial Symmetry**: Defaults for the radial array editor
//! - **Naming**: Object and group names shared with the host scene

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing accumulated transforms.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// SENSITIVITY CONSTANTS
// =============================================================================

/// World units moved per world unit of pointer travel during translation.
///
/// # Examples
/// ```
/// use config::constants::TRANSLATE_SENSITIVITY;
/// assert_eq!(TRANSLATE_SENSITIVITY, 1.0);
/// ```
pub const TRANSLATE_SENSITIVITY: f64 = 1.0;

/// Extra factor applied on top of the translate sensitivity when pointer
/// travel is read as a rotation angle in radians.
///
/// # Examples
/// ```
/// use config::constants::{ROTATE_SENSITIVITY_SCALE, TRANSLATE_SENSITIVITY};
/// let radians_per_unit = TRANSLATE_SENSITIVITY * ROTATE_SENSITIVITY_SCALE;
/// assert!(radians_per_unit < 1.0);
/// ```
pub const ROTATE_SENSITIVITY_SCALE: f64 = 0.1;

/// Steps per pixel of horizontal pointer travel in the radial symmetry editor.
///
/// One hundred pixels change the iteration count by one.
///
/// # Examples
/// ```
/// use config::constants::RADIAL_SENSITIVITY;
/// assert!(RADIAL_SENSITIVITY > 0.0 && RADIAL_SENSITIVITY < 1.0);
/// ```
pub const RADIAL_SENSITIVITY: f64 = 0.01;

// =============================================================================
// RADIAL SYMMETRY CONSTANTS
// =============================================================================

/// Iteration count given to a freshly created radial symmetry modifier.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIAL_COUNT;
/// assert_eq!(360.0 / DEFAULT_RADIAL_COUNT as f64, 120.0);
/// ```
pub const DEFAULT_RADIAL_COUNT: u32 = 3;

/// Number of world axes the radial editor cycles through.
pub const AXIS_COUNT: u32 = 3;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Suffix appended to an object's name to name its FFD lattice.
///
/// # Examples
/// ```
/// use config::constants::LATTICE_SUFFIX;
/// assert_eq!(format!("Cube{LATTICE_SUFFIX}"), "Cube.Lattice");
/// ```
pub const LATTICE_SUFFIX: &str = ".Lattice";

/// Suffix appended to an object's name to name its radial symmetry pivot.
pub const RADIAL_PIVOT_SUFFIX: &str = ".SymmetryPivot";

/// Name of the radial symmetry array modifier.
pub const RADIAL_MODIFIER_NAME: &str = "Radial Symmetry";

/// Vertex group receiving the selection bound to an FFD lattice.
pub const FFD_VERTEX_GROUP: &str = "ffd_group";

// =============================================================================
// TOOL CONFIG
// =============================================================================

/// Immutable snapshot of tool settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ToolConfig;
/// let config = ToolConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolConfig {
    /// Pointer-to-world scale for translation gestures.
    pub translate_sensitivity: f64,
    /// Additional scale applied to rotation gestures.
    pub rotate_sensitivity_scale: f64,
    /// Pixel scale for the radial symmetry editor.
    pub radial_sensitivity: f64,
    /// Count assigned to a new radial symmetry modifier.
    pub default_radial_count: u32,
    /// Tolerance used by float comparisons.
    pub tolerance: f64,
}

impl ToolConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToolConfig;
    /// let cfg = ToolConfig::new(2.0, 0.1, 0.01, 6, 1.0e-9).expect("valid config");
    /// assert_eq!(cfg.default_radial_count, 6);
    /// ```
    pub fn new(
        translate_sensitivity: f64,
        rotate_sensitivity_scale: f64,
        radial_sensitivity: f64,
        default_radial_count: u32,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("translate_sensitivity", translate_sensitivity),
            ("rotate_sensitivity_scale", rotate_sensitivity_scale),
            ("radial_sensitivity", radial_sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSensitivity { name, value });
            }
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_radial_count < 1 {
            return Err(ConfigError::InvalidRadialCount(default_radial_count));
        }
        Ok(Self {
            translate_sensitivity,
            rotate_sensitivity_scale,
            radial_sensitivity,
            default_radial_count,
            tolerance,
        })
    }

    /// Radians of rotation per world unit of pointer travel.
    pub fn rotate_sensitivity(&self) -> f64 {
        self.translate_sensitivity * self.rotate_sensitivity_scale
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            translate_sensitivity: TRANSLATE_SENSITIVITY,
            rotate_sensitivity_scale: ROTATE_SENSITIVITY_SCALE,
            radial_sensitivity: RADIAL_SENSITIVITY,
            default_radial_count: DEFAULT_RADIAL_COUNT,
            tolerance: EPSILON_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a sensitivity is zero, negative or not finite.
    InvalidSensitivity {
        /// Field that failed validation.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the default radial count would produce no copies.
    InvalidRadialCount(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSensitivity { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidRadialCount(value) => {
                write!(f, "default_radial_count must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
