//! # Placement and Mesh Consumers
//!
//! The seam between mesh generation and whatever hosts the result: a scene
//! graph, a file writer, a GPU upload. Consumers receive a finished mesh and
//! where to put it.

use config::constants::COLUMN_OBJECT_NAME;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::assemble::create_column_mesh;
use crate::column_config::ColumnConfig;
use crate::error::ColumnError;
use crate::mesh::Mesh;

/// Where a column object sits in its host scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Object location; the column base center lands here.
    pub translation: DVec3,
}

impl Placement {
    /// Placement at `translation`.
    pub fn at(translation: DVec3) -> Self {
        Self { translation }
    }

    /// Object-to-world matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation)
    }
}

/// Receives finished meshes.
///
/// # Example
///
/// ```rust
/// use doric_mesh::{
///     create_column_object, ColumnConfig, ColumnError, Mesh, MeshConsumer, Placement,
/// };
///
/// struct Collect(Vec<(String, usize)>);
///
/// impl MeshConsumer for Collect {
///     type Output = usize;
///     type Error = ColumnError;
///
///     fn accept(&mut self, name: &str, mesh: Mesh, _: Placement) -> Result<usize, Self::Error> {
///         self.0.push((name.to_string(), mesh.face_count()));
///         Ok(self.0.len() - 1)
///     }
/// }
///
/// let cfg = ColumnConfig::builder().vertical_seg(2).radial_seg(8).build().unwrap();
/// let mut scene = Collect(Vec::new());
/// create_column_object(&mut scene, &cfg, None, Placement::default()).unwrap();
/// assert_eq!(scene.0[0], ("DoricColumn".to_string(), 2 * 8 + 14));
/// ```
pub trait MeshConsumer {
    /// Handle of the created object.
    type Output;
    /// Consumer failure.
    type Error: From<ColumnError>;

    /// Takes ownership of `mesh` and registers it under `name` at `placement`.
    fn accept(
        &mut self,
        name: &str,
        mesh: Mesh,
        placement: Placement,
    ) -> Result<Self::Output, Self::Error>;
}

/// Hands a column mesh to `consumer` as the `"DoricColumn"` object.
///
/// When `mesh` is `None` it is built from `cfg` first.
#[instrument(skip_all, fields(translation = ?placement.translation))]
pub fn create_column_object<C: MeshConsumer>(
    consumer: &mut C,
    cfg: &ColumnConfig,
    mesh: Option<Mesh>,
    placement: Placement,
) -> Result<C::Output, C::Error> {
    let mesh = match mesh {
        Some(mesh) => mesh,
        None => create_column_mesh(cfg)?,
    };
    debug!(faces = mesh.face_count(), "handing column to consumer");
    consumer.accept(COLUMN_OBJECT_NAME, mesh, placement)
}
