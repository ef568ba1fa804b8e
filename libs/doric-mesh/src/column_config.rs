//! # Column Configuration
//!
//! Immutable, validated parameter record for a Doric column, plus the
//! dimensions derived from it.
//!
//! A `ColumnConfig` is only obtainable through validation: defaults,
//! typed overrides, the builder, or JSON overrides. Unknown JSON fields are
//! rejected.
//!
//! ## Example
//!
//! ```rust
//! use doric_mesh::ColumnConfig;
//!
//! let cfg = ColumnConfig::builder()
//!     .vertical_seg(40)
//!     .radial_seg(32)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(cfg.radial_seg(), 32);
//!
//! let json = ColumnConfig::from_json(r#"{ "flutes": 16 }"#).expect("valid overrides");
//! assert_eq!(json.flutes(), 16);
//!
//! assert!(ColumnConfig::from_json(r#"{ "fluets": 16 }"#).is_err());
//! ```

use config::constants::{
    ResolutionConfig, DEFAULT_ABACUS_OVERHANG, DEFAULT_ANNULI, DEFAULT_ANNULI_RANGE,
    DEFAULT_CAPITAL_DISTRIBUTION, DEFAULT_CAPITAL_HEIGHT, DEFAULT_CHAMFER,
    DEFAULT_ECHINUS_TOP_RATIO, DEFAULT_ENTASIS_AMPLITUDE, DEFAULT_ENTASIS_PEAK, DEFAULT_FLUTES,
    DEFAULT_FLUTE_DEPTH, DEFAULT_NECK, DEFAULT_RADIAL_SEG, DEFAULT_SCALE, DEFAULT_TOTAL_HEIGHT,
    DEFAULT_VERTICAL_SEG,
};
use serde::{Deserialize, Serialize};

use crate::error::{ColumnError, ColumnResult};

// =============================================================================
// COLUMN CONFIG
// =============================================================================

/// Parameters of a Doric column.
///
/// Lengths are in units of the base shaft radius (1.0) before `scale` is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColumnOverrides")]
pub struct ColumnConfig {
    scale: f64,
    vertical_seg: u32,
    radial_seg: u32,
    neck: f64,
    echinus_top_ratio: f64,
    abacus_overhang: f64,
    total_height: f64,
    capital_height: f64,
    capital_distribution: [f64; 3],
    annuli_range: f64,
    flutes: u32,
    flute_depth: f64,
    entasis_amplitude: f64,
    entasis_peak: f64,
    annuli: u32,
    chamfer: f64,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            vertical_seg: DEFAULT_VERTICAL_SEG,
            radial_seg: DEFAULT_RADIAL_SEG,
            neck: DEFAULT_NECK,
            echinus_top_ratio: DEFAULT_ECHINUS_TOP_RATIO,
            abacus_overhang: DEFAULT_ABACUS_OVERHANG,
            total_height: DEFAULT_TOTAL_HEIGHT,
            capital_height: DEFAULT_CAPITAL_HEIGHT,
            capital_distribution: DEFAULT_CAPITAL_DISTRIBUTION,
            annuli_range: DEFAULT_ANNULI_RANGE,
            flutes: DEFAULT_FLUTES,
            flute_depth: DEFAULT_FLUTE_DEPTH,
            entasis_amplitude: DEFAULT_ENTASIS_AMPLITUDE,
            entasis_peak: DEFAULT_ENTASIS_PEAK,
            annuli: DEFAULT_ANNULI,
            chamfer: DEFAULT_CHAMFER,
        }
    }
}

impl ColumnConfig {
    /// Applies overrides on top of the defaults and validates the result.
    ///
    /// # Examples
    /// ```
    /// use doric_mesh::{ColumnConfig, ColumnOverrides};
    ///
    /// let cfg = ColumnConfig::new(ColumnOverrides {
    ///     annuli: Some(5),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// assert_eq!(cfg.annuli(), 5);
    /// assert_eq!(cfg.flutes(), 20);
    /// ```
    pub fn new(overrides: ColumnOverrides) -> ColumnResult<Self> {
        let base = Self::default();
        let cfg = Self {
            scale: overrides.scale.unwrap_or(base.scale),
            vertical_seg: overrides.vertical_seg.unwrap_or(base.vertical_seg),
            radial_seg: overrides.radial_seg.unwrap_or(base.radial_seg),
            neck: overrides.neck.unwrap_or(base.neck),
            echinus_top_ratio: overrides.echinus_top_ratio.unwrap_or(base.echinus_top_ratio),
            abacus_overhang: overrides.abacus_overhang.unwrap_or(base.abacus_overhang),
            total_height: overrides.total_height.unwrap_or(base.total_height),
            capital_height: overrides.capital_height.unwrap_or(base.capital_height),
            capital_distribution: overrides
                .capital_distribution
                .unwrap_or(base.capital_distribution),
            annuli_range: overrides.annuli_range.unwrap_or(base.annuli_range),
            flutes: overrides.flutes.unwrap_or(base.flutes),
            flute_depth: overrides.flute_depth.unwrap_or(base.flute_depth),
            entasis_amplitude: overrides.entasis_amplitude.unwrap_or(base.entasis_amplitude),
            entasis_peak: overrides.entasis_peak.unwrap_or(base.entasis_peak),
            annuli: overrides.annuli.unwrap_or(base.annuli),
            chamfer: overrides.chamfer.unwrap_or(base.chamfer),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parses JSON overrides and applies them on top of the defaults.
    ///
    /// Unknown fields and wrongly typed values are rejected.
    pub fn from_json(source: &str) -> ColumnResult<Self> {
        let overrides: ColumnOverrides = serde_json::from_str(source)?;
        Self::new(overrides)
    }

    /// Starts a builder from the defaults.
    pub fn builder() -> ColumnConfigBuilder {
        ColumnConfigBuilder::default()
    }

    /// Derived heights and radii.
    pub fn dimensions(&self) -> ColumnDimensions {
        ColumnDimensions::from_config(self)
    }

    /// Validated shaft grid resolution.
    pub fn resolution(&self) -> ResolutionConfig {
        ResolutionConfig {
            vertical_seg: self.vertical_seg,
            radial_seg: self.radial_seg,
        }
    }

    fn validate(&self) -> ColumnResult<()> {
        ResolutionConfig::new(self.vertical_seg, self.radial_seg)?;

        positive("scale", self.scale)?;
        positive("neck", self.neck)?;
        positive("echinus_top_ratio", self.echinus_top_ratio)?;
        positive("abacus_overhang", self.abacus_overhang)?;
        positive("total_height", self.total_height)?;
        positive("capital_height", self.capital_height)?;

        if self.capital_height >= self.total_height {
            return Err(ColumnError::invalid_config(
                "capital_height",
                format!(
                    "must be less than total_height ({}), got {}",
                    self.total_height, self.capital_height
                ),
            ));
        }

        if let Some(w) = self
            .capital_distribution
            .iter()
            .find(|w| !w.is_finite() || **w <= 0.0)
        {
            return Err(ColumnError::invalid_config(
                "capital_distribution",
                format!("weights must be finite and positive, got {w}"),
            ));
        }

        within("annuli_range", self.annuli_range, 0.0, 1.0)?;
        within("flute_depth", self.flute_depth, 0.0, 1.0)?;

        if !self.entasis_peak.is_finite() || self.entasis_peak <= 0.0 || self.entasis_peak > 1.0 {
            return Err(ColumnError::invalid_config(
                "entasis_peak",
                format!("must lie in (0, 1], got {}", self.entasis_peak),
            ));
        }
        if !self.entasis_amplitude.is_finite() || self.entasis_amplitude <= -1.0 {
            return Err(ColumnError::invalid_config(
                "entasis_amplitude",
                format!("must be finite and greater than -1, got {}", self.entasis_amplitude),
            ));
        }

        if !self.chamfer.is_finite() || self.chamfer < 0.0 || self.chamfer >= 0.5 {
            return Err(ColumnError::invalid_config(
                "chamfer",
                format!("must lie in [0, 0.5), got {}", self.chamfer),
            ));
        }
        let dims = self.dimensions();
        if 2.0 * dims.chamfer_len > dims.abacus_height {
            return Err(ColumnError::invalid_config(
                "chamfer",
                format!(
                    "bevels ({} each) do not fit in the abacus height {}",
                    dims.chamfer_len, dims.abacus_height
                ),
            ));
        }

        Ok(())
    }

    /// Uniform scale applied to every coordinate.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of height bands of the shaft grid.
    pub fn vertical_seg(&self) -> u32 {
        self.vertical_seg
    }

    /// Number of angular samples per ring.
    pub fn radial_seg(&self) -> u32 {
        self.radial_seg
    }

    /// Neck radius relative to the base radius.
    pub fn neck(&self) -> f64 {
        self.neck
    }

    /// Echinus radius as a multiple of `neck`.
    pub fn echinus_top_ratio(&self) -> f64 {
        self.echinus_top_ratio
    }

    /// Abacus half-width as a multiple of the echinus radius.
    pub fn abacus_overhang(&self) -> f64 {
        self.abacus_overhang
    }

    /// Total column height.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Capital height.
    pub fn capital_height(&self) -> f64 {
        self.capital_height
    }

    /// Necking, echinus and abacus weights.
    pub fn capital_distribution(&self) -> [f64; 3] {
        self.capital_distribution
    }

    /// Fraction of the necking occupied by the annuli band.
    pub fn annuli_range(&self) -> f64 {
        self.annuli_range
    }

    /// Number of flutes.
    pub fn flutes(&self) -> u32 {
        self.flutes
    }

    /// Fractional flute depth.
    pub fn flute_depth(&self) -> f64 {
        self.flute_depth
    }

    /// Entasis bulge magnitude.
    pub fn entasis_amplitude(&self) -> f64 {
        self.entasis_amplitude
    }

    /// Shaft height fraction of the entasis peak.
    pub fn entasis_peak(&self) -> f64 {
        self.entasis_peak
    }

    /// Number of annulus gaps (`annuli + 1` rings).
    pub fn annuli(&self) -> u32 {
        self.annuli
    }

    /// Abacus bevel as a fraction of its half-width.
    ///
    /// Always below 0.5, and small enough that both bevels fit in the abacus
    /// height (`2 * chamfer * abacus_half <= abacus_height`). With the default
    /// proportions that caps it near 0.145.
    pub fn chamfer(&self) -> f64 {
        self.chamfer
    }
}

impl TryFrom<ColumnOverrides> for ColumnConfig {
    type Error = ColumnError;

    fn try_from(overrides: ColumnOverrides) -> ColumnResult<Self> {
        Self::new(overrides)
    }
}

fn positive(field: &'static str, value: f64) -> ColumnResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ColumnError::invalid_config(
            field,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> ColumnResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColumnError::invalid_config(
            field,
            format!("must lie in [{min}, {max}], got {value}"),
        ))
    }
}

// =============================================================================
// OVERRIDES
// =============================================================================

/// Partial set of column parameters; `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct ColumnOverrides {
    pub scale: Option<f64>,
    pub vertical_seg: Option<u32>,
    pub radial_seg: Option<u32>,
    pub neck: Option<f64>,
    pub echinus_top_ratio: Option<f64>,
    pub abacus_overhang: Option<f64>,
    pub total_height: Option<f64>,
    pub capital_height: Option<f64>,
    pub capital_distribution: Option<[f64; 3]>,
    pub annuli_range: Option<f64>,
    pub flutes: Option<u32>,
    pub flute_depth: Option<f64>,
    pub entasis_amplitude: Option<f64>,
    pub entasis_peak: Option<f64>,
    pub annuli: Option<u32>,
    pub chamfer: Option<f64>,
}

// =============================================================================
// BUILDER
// =============================================================================

/// Fluent builder over [`ColumnOverrides`].
#[derive(Debug, Clone, Default)]
pub struct ColumnConfigBuilder {
    overrides: ColumnOverrides,
}

impl ColumnConfigBuilder {
    /// Sets the uniform scale.
    pub fn scale(mut self, value: f64) -> Self {
        self.overrides.scale = Some(value);
        self
    }

    /// Sets the number of height bands.
    pub fn vertical_seg(mut self, value: u32) -> Self {
        self.overrides.vertical_seg = Some(value);
        self
    }

    /// Sets the number of angular samples.
    pub fn radial_seg(mut self, value: u32) -> Self {
        self.overrides.radial_seg = Some(value);
        self
    }

    /// Sets the neck radius ratio.
    pub fn neck(mut self, value: f64) -> Self {
        self.overrides.neck = Some(value);
        self
    }

    /// Sets the echinus radius ratio.
    pub fn echinus_top_ratio(mut self, value: f64) -> Self {
        self.overrides.echinus_top_ratio = Some(value);
        self
    }

    /// Sets the abacus overhang.
    pub fn abacus_overhang(mut self, value: f64) -> Self {
        self.overrides.abacus_overhang = Some(value);
        self
    }

    /// Sets the total height.
    pub fn total_height(mut self, value: f64) -> Self {
        self.overrides.total_height = Some(value);
        self
    }

    /// Sets the capital height.
    pub fn capital_height(mut self, value: f64) -> Self {
        self.overrides.capital_height = Some(value);
        self
    }

    /// Sets the necking/echinus/abacus weights.
    pub fn capital_distribution(mut self, value: [f64; 3]) -> Self {
        self.overrides.capital_distribution = Some(value);
        self
    }

    /// Sets the annuli band fraction.
    pub fn annuli_range(mut self, value: f64) -> Self {
        self.overrides.annuli_range = Some(value);
        self
    }

    /// Sets the flute count.
    pub fn flutes(mut self, value: u32) -> Self {
        self.overrides.flutes = Some(value);
        self
    }

    /// Sets the flute depth.
    pub fn flute_depth(mut self, value: f64) -> Self {
        self.overrides.flute_depth = Some(value);
        self
    }

    /// Sets the entasis amplitude.
    pub fn entasis_amplitude(mut self, value: f64) -> Self {
        self.overrides.entasis_amplitude = Some(value);
        self
    }

    /// Sets the entasis peak fraction.
    pub fn entasis_peak(mut self, value: f64) -> Self {
        self.overrides.entasis_peak = Some(value);
        self
    }

    /// Sets the annulus gap count.
    pub fn annuli(mut self, value: u32) -> Self {
        self.overrides.annuli = Some(value);
        self
    }

    /// Sets the abacus chamfer.
    pub fn chamfer(mut self, value: f64) -> Self {
        self.overrides.chamfer = Some(value);
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> ColumnResult<ColumnConfig> {
        ColumnConfig::new(self.overrides)
    }
}

// =============================================================================
// DERIVED DIMENSIONS
// =============================================================================

/// Heights and radii derived once from a [`ColumnConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDimensions {
    /// Height of the necking band.
    pub necking_height: f64,
    /// Height of the echinus.
    pub echinus_height: f64,
    /// Height of the abacus block.
    pub abacus_height: f64,
    /// Radius the echinus flares out to.
    pub echinus_radius: f64,
    /// Half-width of the abacus block.
    pub abacus_half: f64,
    /// Bevel length on the abacus edges.
    pub chamfer_len: f64,
    /// Height where the shaft taper ends.
    pub neck_z: f64,
    /// Height where the annuli band starts.
    pub annuli_min: f64,
    /// Height where the abacus block starts.
    pub abacus_min: f64,
}

impl ColumnDimensions {
    /// Computes the derived dimensions.
    pub fn from_config(cfg: &ColumnConfig) -> Self {
        let weights: f64 = cfg.capital_distribution.iter().sum();
        let [necking_height, echinus_height, abacus_height] = cfg
            .capital_distribution
            .map(|w| cfg.capital_height * w / weights);

        let echinus_radius = cfg.echinus_top_ratio * cfg.neck;
        let abacus_half = echinus_radius * cfg.abacus_overhang;
        let neck_z = cfg.total_height - cfg.capital_height;

        Self {
            necking_height,
            echinus_height,
            abacus_height,
            echinus_radius,
            abacus_half,
            chamfer_len: cfg.chamfer * abacus_half,
            neck_z,
            annuli_min: neck_z + (1.0 - cfg.annuli_range) * necking_height,
            abacus_min: cfg.total_height - abacus_height,
        }
    }

    /// Height spanned by the sigmoid transition (necking plus echinus).
    pub fn transition_height(&self) -> f64 {
        self.necking_height + self.echinus_height
    }
}
