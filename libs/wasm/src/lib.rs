//! WASM-facing entry points for Doric column generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests go through `build_column_internal`, which
//! returns Rust error types and never touches a JS host.
//!
//! ```
//! use doric_mesh::Placement;
//!
//! let handle = doric_wasm::build_column_internal(
//!     r#"{ "vertical_seg": 4, "radial_seg": 8 }"#,
//!     Placement::default(),
//! )
//! .unwrap();
//! assert_eq!(handle.face_count(), 4 * 8 + 14);
//! ```

use doric_mesh::{
    create_column_object, ColumnConfig, ColumnError, ColumnResult, Mesh, MeshConsumer, Placement,
};
use glam::DVec3;
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::ColumnMeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "doric_wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the default column parameters as a JSON object.
///
/// Useful for seeding a parameter editor; any subset of the returned object
/// is accepted back by `build_column`.
///
/// # Errors
/// Returns a JavaScript error value if serialization fails.
#[wasm_bindgen]
pub fn default_config_json() -> Result<String, JsValue> {
    serde_json::to_string(&ColumnConfig::default())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Builds a column from JSON overrides and places it at `(x, y, z)`.
///
/// This is the primary entry point used from JavaScript. Pass `"{}"` for the
/// default column.
///
/// # Errors
/// Returns a JavaScript error value with a human-readable message for
/// malformed JSON, unknown fields or out-of-range parameters.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const column = build_column('{"flutes": 24}', 0, 0, 0);
/// // geometry.setAttribute("position", new THREE.BufferAttribute(column.vertices(), 3));
/// ```
#[wasm_bindgen]
pub fn build_column(
    overrides_json: &str,
    x: f64,
    y: f64,
    z: f64,
) -> Result<ColumnMeshHandle, JsValue> {
    build_column_internal(overrides_json, Placement::at(DVec3::new(x, y, z)))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind `build_column`.
pub fn build_column_internal(
    overrides_json: &str,
    placement: Placement,
) -> ColumnResult<ColumnMeshHandle> {
    let cfg = ColumnConfig::from_json(overrides_json)?;
    let mut consumer = HandleConsumer;
    create_column_object(&mut consumer, &cfg, None, placement)
}

/// Mesh consumer that packs meshes into GPU-ready handles.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandleConsumer;

impl MeshConsumer for HandleConsumer {
    type Output = ColumnMeshHandle;
    type Error = ColumnError;

    fn accept(
        &mut self,
        name: &str,
        mesh: Mesh,
        placement: Placement,
    ) -> Result<ColumnMeshHandle, ColumnError> {
        Ok(ColumnMeshHandle::from_mesh(name, &mesh, placement))
    }
}
