//! # Column Mesh Handle
//!
//! WASM-friendly wrapper for a finished column mesh that can be transferred
//! to JavaScript.

use config::constants::COLUMN_MESH_NAME;
use doric_mesh::{Mesh, Placement};
use wasm_bindgen::prelude::*;

/// A handle to column mesh data that can be accessed from JavaScript.
///
/// Vertices are in object space; the placement is carried separately so the
/// host can set the object position itself.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const column = build_column("{}", 0, 0, 0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(column.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(column.indices(), 1));
///
/// const object = new THREE.Mesh(geometry, material);
/// object.name = column.name;
/// object.position.fromArray(column.translation());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ColumnMeshHandle {
    /// Object name the consumer was handed
    name: String,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...], two triangles per quad
    indices: Vec<u32>,
    /// Quad indices as [a, b, c, d, ...]
    quads: Vec<u32>,
    /// Per-quad shading, 1 = smooth
    smooth: Vec<u8>,
    /// Object location
    translation: [f64; 3],
    vertex_count: u32,
    face_count: u32,
}

#[wasm_bindgen]
impl ColumnMeshHandle {
    /// Object name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Mesh data-block name.
    #[wasm_bindgen(getter)]
    pub fn mesh_name(&self) -> String {
        COLUMN_MESH_NAME.to_string()
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of quad faces.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Returns the number of triangles after splitting every quad.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.face_count.saturating_mul(2)
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the quad indices as a Uint32Array.
    ///
    /// Length: face_count * 4
    #[wasm_bindgen]
    pub fn quad_indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.quads[..])
    }

    /// Returns per-quad smooth flags as a Uint8Array (1 = smooth, 0 = flat).
    #[wasm_bindgen]
    pub fn smooth_flags(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.smooth[..])
    }

    /// Returns the object location as a Float64Array `[x, y, z]`.
    #[wasm_bindgen]
    pub fn translation(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.translation[..])
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl ColumnMeshHandle {
    /// Packs a mesh and its placement into GPU-ready buffers.
    pub fn from_mesh(name: &str, mesh: &Mesh, placement: Placement) -> Self {
        Self {
            name: name.to_string(),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            quads: mesh.quad_indices_u32(),
            smooth: mesh.smooth_flags().into_iter().map(u8::from).collect(),
            translation: placement.translation.to_array(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            face_count: u32::try_from(mesh.face_count()).unwrap_or(u32::MAX),
        }
    }

    /// Vertex positions, host side.
    pub fn positions(&self) -> &[f32] {
        &self.vertices
    }

    /// Triangle indices, host side.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.indices
    }

    /// Quad indices, host side.
    pub fn quads(&self) -> &[u32] {
        &self.quads
    }

    /// Per-quad smooth flags, host side.
    pub fn smooth(&self) -> &[u8] {
        &self.smooth
    }

    /// Object location, host side.
    pub fn location(&self) -> [f64; 3] {
        self.translation
    }
}
