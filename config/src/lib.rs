//! # Config Crate
//!
//! Centralized configuration constants for the Doric column mesh pipeline.
//! Every default column parameter, carving constant and resolution limit is
//! defined here so the geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIAL_SEG, MIN_RADIAL_SEGMENTS, EPSILON};
//!
//! assert!(DEFAULT_RADIAL_SEG >= MIN_RADIAL_SEGMENTS);
//!
//! let drift: f64 = 1e-11;
//! assert!(drift.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Classical Proportions**: Defaults describe a canonical Doric column

pub mod constants;
