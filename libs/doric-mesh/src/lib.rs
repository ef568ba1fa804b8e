//! # Doric Mesh
//!
//! Procedural surface mesh of a classical Doric column: a tapered, fluted
//! shaft with entasis, a necking ringed by annuli, a flaring echinus and a
//! chamfered abacus block on top.
//!
//! ## Architecture
//!
//! ```text
//! ColumnConfig → Profile → ShaftMeshBuilder ┐
//!              └─────────→ create_abacus ───┴→ assemble → Mesh → MeshConsumer
//! ```
//!
//! Coordinates are computed in f64. The column base center sits at the
//! origin, the axis runs along +Z.
//!
//! ## Usage
//!
//! ```rust
//! use doric_mesh::{build_column_mesh, ColumnConfig};
//!
//! let cfg = ColumnConfig::from_json(r#"{ "vertical_seg": 60, "radial_seg": 40 }"#)?;
//! let column = build_column_mesh(&cfg)?;
//! assert_eq!(column.mesh.face_count(), 60 * 40 + 14);
//! # Ok::<(), doric_mesh::ColumnError>(())
//! ```

pub mod abacus;
pub mod assemble;
pub mod column_config;
pub mod error;
pub mod mesh;
pub mod placement;
pub mod profile;
pub mod shaft;

pub use abacus::create_abacus;
pub use assemble::{assemble, build_column_mesh, create_column_mesh, BuildReport, ColumnMesh};
pub use column_config::{ColumnConfig, ColumnConfigBuilder, ColumnDimensions, ColumnOverrides};
pub use error::{ColumnError, ColumnResult};
pub use mesh::{Face, Mesh};
pub use placement::{create_column_object, MeshConsumer, Placement};
pub use profile::{AnnulusRing, Profile};
pub use shaft::{ShaftMesh, ShaftMeshBuilder, ShaftReport, VertexGrid};
