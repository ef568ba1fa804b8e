//! # Configuration Constants
//!
//! Centralized constants for the Doric column pipeline. Column defaults,
//! carving constants, resolution limits and precision values live here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Column Defaults**: Default proportions of the generated column
//! - **Carving**: Annulus ring widths and depths
//! - **Resolution**: Grid segment limits
//! - **Topology**: Fixed counts of the abacus block

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// COLUMN DEFAULTS
// =============================================================================

/// Uniform scale applied to every generated coordinate.
pub const DEFAULT_SCALE: f64 = 0.955;

/// Number of height rings minus one (the grid has `vertical_seg + 1` rows).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_VERTICAL_SEG;
///
/// let rows = DEFAULT_VERTICAL_SEG + 1;
/// assert_eq!(rows, 1501);
/// ```
pub const DEFAULT_VERTICAL_SEG: u32 = 1500;

/// Number of angular samples per ring.
pub const DEFAULT_RADIAL_SEG: u32 = 500;

/// Shaft radius at the neck, relative to a base radius of 1.0.
pub const DEFAULT_NECK: f64 = 0.85;

/// Echinus radius as a multiple of the neck radius.
pub const DEFAULT_ECHINUS_TOP_RATIO: f64 = 1.3;

/// Abacus half-width as a multiple of the echinus radius.
pub const DEFAULT_ABACUS_OVERHANG: f64 = 1.04;

/// Total column height in base-radius units.
pub const DEFAULT_TOTAL_HEIGHT: f64 = 11.0;

/// Height of the capital (necking, echinus and abacus together).
pub const DEFAULT_CAPITAL_HEIGHT: f64 = 1.0;

/// Relative weights of necking, echinus and abacus inside the capital.
pub const DEFAULT_CAPITAL_DISTRIBUTION: [f64; 3] = [1.0, 1.0, 1.0];

/// Fraction of the necking height, measured from its top, holding the annuli.
pub const DEFAULT_ANNULI_RANGE: f64 = 0.2;

/// Number of vertical grooves around the shaft.
pub const DEFAULT_FLUTES: u32 = 20;

/// Fractional radius reduction at the bottom of a flute.
pub const DEFAULT_FLUTE_DEPTH: f64 = 0.04;

/// Relative magnitude of the entasis bulge.
pub const DEFAULT_ENTASIS_AMPLITUDE: f64 = 0.035;

/// Shaft height fraction at which the entasis bulge peaks.
pub const DEFAULT_ENTASIS_PEAK: f64 = 0.35;

/// Number of annulus gaps; the band carries `annuli + 1` ring cuts.
pub const DEFAULT_ANNULI: u32 = 3;

/// Abacus edge bevel as a fraction of the abacus half-width.
pub const DEFAULT_CHAMFER: f64 = 0.02;

// =============================================================================
// CARVING CONSTANTS
// =============================================================================

/// Half-width of every annulus ring as a fraction of the total height.
///
/// # Example
///
/// ```rust
/// use config::constants::{ANNULUS_HALF_WIDTH_RATIO, DEFAULT_TOTAL_HEIGHT};
///
/// let eps = ANNULUS_HALF_WIDTH_RATIO * DEFAULT_TOTAL_HEIGHT;
/// assert!((eps - 0.011).abs() < 1e-12);
/// ```
pub const ANNULUS_HALF_WIDTH_RATIO: f64 = 1e-3;

/// Depth of the lowest annulus ring, which is cut deeper than the others.
pub const PRIMARY_ANNULUS_DEPTH: f64 = 15e-3;

/// Depth of every annulus ring above the lowest one.
pub const SECONDARY_ANNULUS_DEPTH: f64 = 8e-3;

// =============================================================================
// RESOLUTION LIMITS
// =============================================================================

/// Minimum number of vertical segments (one band of quads).
pub const MIN_VERTICAL_SEGMENTS: u32 = 1;

/// Minimum number of angular samples needed to close a ring.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RADIAL_SEGMENTS;
///
/// let requested = 2u32;
/// assert!(requested < MIN_RADIAL_SEGMENTS);
/// ```
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Maximum number of shaft grid vertices, `(vertical_seg + 1) * radial_seg`.
///
/// Safety limit against configurations that would exhaust memory.
pub const MAX_GRID_VERTICES: u64 = 20_000_000;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Vertices in the chamfered abacus block: 4 levels times 4 corners.
pub const ABACUS_VERTEX_COUNT: usize = 16;

/// Quads in the chamfered abacus block: 2 caps plus 3 bands of 4 sides.
pub const ABACUS_FACE_COUNT: usize = 14;

/// Name under which a finished column is handed to a mesh consumer.
pub const COLUMN_OBJECT_NAME: &str = "DoricColumn";

/// Name of the column mesh datablock.
pub const COLUMN_MESH_NAME: &str = "DoricColumnMesh";

// =============================================================================
// RESOLUTION CONFIG
// =============================================================================

/// Validated grid resolution of the shaft.
///
/// # Examples
/// ```
/// use config::constants::ResolutionConfig;
/// let res = ResolutionConfig::new(10, 8).expect("valid resolution");
/// assert_eq!(res.grid_vertex_count(), 88);
/// assert_eq!(res.grid_face_count(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Number of height bands.
    pub vertical_seg: u32,
    /// Number of angular samples per ring.
    pub radial_seg: u32,
}

impl ResolutionConfig {
    /// Builds a resolution enforcing the segment limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ResolutionConfig};
    /// let err = ResolutionConfig::new(4, 2).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidRadialSegments(2));
    /// ```
    pub fn new(vertical_seg: u32, radial_seg: u32) -> Result<Self, ConfigError> {
        if vertical_seg < MIN_VERTICAL_SEGMENTS {
            return Err(ConfigError::InvalidVerticalSegments(vertical_seg));
        }
        if radial_seg < MIN_RADIAL_SEGMENTS {
            return Err(ConfigError::InvalidRadialSegments(radial_seg));
        }
        let resolution = Self {
            vertical_seg,
            radial_seg,
        };
        let count = resolution.grid_vertex_count();
        if count > MAX_GRID_VERTICES {
            return Err(ConfigError::TooManyVertices {
                count,
                max: MAX_GRID_VERTICES,
            });
        }
        Ok(resolution)
    }

    /// Number of grid cells, `(vertical_seg + 1) * radial_seg`.
    pub fn grid_vertex_count(&self) -> u64 {
        (u64::from(self.vertical_seg) + 1) * u64::from(self.radial_seg)
    }

    /// Number of shaft quads, `vertical_seg * radial_seg`.
    pub fn grid_face_count(&self) -> u64 {
        u64::from(self.vertical_seg) * u64::from(self.radial_seg)
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            vertical_seg: DEFAULT_VERTICAL_SEG,
            radial_seg: DEFAULT_RADIAL_SEG,
        }
    }
}

/// Error returned when an invalid resolution is requested.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when fewer than one vertical segment is requested.
    InvalidVerticalSegments(u32),
    /// Raised when the ring cannot be closed with the requested samples.
    InvalidRadialSegments(u32),
    /// Raised when the grid would exceed `MAX_GRID_VERTICES`.
    TooManyVertices {
        /// Requested grid vertex count.
        count: u64,
        /// Allowed maximum.
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVerticalSegments(value) => {
                write!(f, "vertical_seg must be >= {MIN_VERTICAL_SEGMENTS}: {value}")
            }
            ConfigError::InvalidRadialSegments(value) => {
                write!(f, "radial_seg must be >= {MIN_RADIAL_SEGMENTS}: {value}")
            }
            ConfigError::TooManyVertices { count, max } => {
                write!(f, "grid of {count} vertices exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
