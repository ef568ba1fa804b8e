//! # Column Profile
//!
//! Radius of the column as a function of height, and the carvings that
//! modulate it.
//!
//! ## Regions
//!
//! ```text
//! total_height  ┬ abacus (built separately, never sampled here)
//! abacus_min    ┼ echinus   ┐
//! annuli_min    ┼ annuli    │ sigmoid flare from neck to echinus_radius
//! neck_z        ┼ necking   ┘ flutes fade out (cos²) up to annuli_min
//!               │ shaft: linear taper 1.0 → neck, entasis bulge, full flutes
//! 0             ┴
//! ```
//!
//! Every function here is pure.

use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::{
    approx_zero, ANNULUS_HALF_WIDTH_RATIO, PRIMARY_ANNULUS_DEPTH, SECONDARY_ANNULUS_DEPTH,
};

use crate::column_config::{ColumnConfig, ColumnDimensions};

/// Logistic curve `1 / (1 + e^(-2x))`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-2.0 * x).exp())
}

/// S-curve mapping `0 → 0` and `1 → 1`, steepest near `x ≈ 0.67`.
///
/// # Example
///
/// ```rust
/// use doric_mesh::profile::normalized_sigmoid;
///
/// assert_eq!(normalized_sigmoid(0.0), 0.0);
/// assert!((normalized_sigmoid(1.0) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn normalized_sigmoid(x: f64) -> f64 {
    (sigmoid(3.0 * x - 2.0) - sigmoid(-2.0)) / (sigmoid(1.0) - sigmoid(-2.0))
}

/// Raised cosine: 1 at `x = 0`, 0 at `x = ±1`.
#[inline]
pub fn normalized_cos(x: f64) -> f64 {
    (PI * x).cos() / 2.0 + 0.5
}

/// One annulus ring cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnulusRing {
    /// Height of the ring center.
    pub center: f64,
    /// Fractional radius reduction at the center.
    pub depth: f64,
}

/// Radius profile of a configured column.
///
/// # Example
///
/// ```rust
/// use doric_mesh::{ColumnConfig, Profile};
///
/// let cfg = ColumnConfig::default();
/// let profile = Profile::new(&cfg);
/// let neck_z = profile.dimensions().neck_z;
/// assert!((profile.radius_at(neck_z) - cfg.neck()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Profile {
    cfg: ColumnConfig,
    dims: ColumnDimensions,
    rings: Vec<AnnulusRing>,
}

impl Profile {
    /// Captures the configuration and its derived dimensions.
    pub fn new(cfg: &ColumnConfig) -> Self {
        let dims = cfg.dimensions();
        let rings = annulus_rings(cfg, &dims);
        Self {
            cfg: *cfg,
            dims,
            rings,
        }
    }

    /// Configuration the profile was built from.
    pub fn config(&self) -> &ColumnConfig {
        &self.cfg
    }

    /// Derived dimensions the profile was built from.
    pub fn dimensions(&self) -> &ColumnDimensions {
        &self.dims
    }

    /// Ring cuts of the annuli band, lowest first.
    pub fn annulus_rings(&self) -> &[AnnulusRing] {
        &self.rings
    }

    /// Half-width of every annulus ring.
    pub fn annulus_half_width(&self) -> f64 {
        ANNULUS_HALF_WIDTH_RATIO * self.cfg.total_height()
    }

    /// Unscaled radius at height `z`, before any carving.
    pub fn radius_at(&self, z: f64) -> f64 {
        let neck = self.cfg.neck();
        let neck_z = self.dims.neck_z;

        if z <= neck_z {
            let t = z / neck_z;
            let taper = 1.0 - (1.0 - neck) * t;
            taper * self.entasis(t)
        } else {
            let t = (z - neck_z) / self.dims.transition_height();
            neck + (self.dims.echinus_radius - neck) * normalized_sigmoid(t)
        }
    }

    /// Entasis multiplier at shaft height fraction `t`.
    ///
    /// 1 at both ends of the shaft, `1 + amplitude` at `entasis_peak`.
    /// With `entasis_peak == 1` only the rising half exists and the neck
    /// carries the full bulge.
    pub fn entasis(&self, t: f64) -> f64 {
        let amplitude = self.cfg.entasis_amplitude();
        let peak = self.cfg.entasis_peak();

        let phase = if t <= peak {
            t / peak
        } else {
            (1.0 - t) / (1.0 - peak)
        };
        1.0 + amplitude * (FRAC_PI_2 * phase).sin()
    }

    /// Flute strength at height `z`: 1 on the shaft, easing to 0 at `annuli_min`.
    pub fn flute_fade(&self, z: f64) -> f64 {
        let ColumnDimensions {
            neck_z, annuli_min, ..
        } = self.dims;

        if z <= neck_z {
            1.0
        } else if z <= annuli_min {
            let span = annuli_min - neck_z;
            if approx_zero(span) {
                return 1.0;
            }
            ((z - neck_z) / span * FRAC_PI_2).cos().powi(2)
        } else {
            0.0
        }
    }

    /// Carves the flutes into radius `r` at height `z` and angle `theta`.
    pub fn carve_flutes(&self, z: f64, r: f64, theta: f64) -> f64 {
        let k = self.flute_fade(z);
        let groove = (theta / 2.0 * f64::from(self.cfg.flutes())).sin().abs();
        r * (1.0 - k * self.cfg.flute_depth() * groove)
    }

    /// Carves one annulus ring centred at `center` into radius `r`.
    ///
    /// Outside `[center - eps, center + eps]` the radius is unchanged.
    pub fn carve_annulus(&self, z: f64, center: f64, r: f64, depth: f64) -> f64 {
        let eps = self.annulus_half_width();
        if (center - eps..=center + eps).contains(&z) {
            r - depth * r * normalized_cos((z - center) / eps)
        } else {
            r
        }
    }

    /// Radius of the ring at height `z`: profile with every annulus carved.
    ///
    /// Flutes are angle dependent and applied per sample afterwards.
    pub fn ring_radius(&self, z: f64) -> f64 {
        self.rings.iter().fold(self.radius_at(z), |r, ring| {
            self.carve_annulus(z, ring.center, r, ring.depth)
        })
    }
}

/// `annuli + 1` evenly spaced ring centers spanning the annuli band.
///
/// With `annuli == 0` the band holds a single ring at `annuli_min`.
fn annulus_rings(cfg: &ColumnConfig, dims: &ColumnDimensions) -> Vec<AnnulusRing> {
    let spacing = if cfg.annuli() == 0 {
        0.0
    } else {
        cfg.annuli_range() * dims.necking_height / f64::from(cfg.annuli())
    };

    (0..=cfg.annuli())
        .map(|j| AnnulusRing {
            center: dims.annuli_min + spacing * f64::from(j),
            depth: if j == 0 {
                PRIMARY_ANNULUS_DEPTH
            } else {
                SECONDARY_ANNULUS_DEPTH
            },
        })
        .collect()
}
