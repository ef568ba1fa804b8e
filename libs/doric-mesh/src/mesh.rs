//! # Mesh Data Structure
//!
//! Quad mesh with a vertex arena and per-face shading flags.

use glam::{DMat4, DVec3};

/// A quad face referencing four vertices of its mesh.
///
/// `smooth` selects smooth (interpolated normals) or flat shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Vertex indices in winding order.
    pub indices: [u32; 4],
    /// Smooth shading flag.
    pub smooth: bool,
}

impl Face {
    /// Creates a flat-shaded face.
    pub fn new(indices: [u32; 4]) -> Self {
        Self {
            indices,
            smooth: false,
        }
    }

    /// Returns the first vertex index, which decides the face's shading.
    #[inline]
    pub fn first(&self) -> u32 {
        self.indices[0]
    }
}

/// A polygon mesh with vertices and quad faces.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the consumer boundary.
///
/// # Example
///
/// ```rust
/// use doric_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face([0, 1, 2, 3]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Quad faces
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a flat-shaded quad and returns its face index.
    pub fn add_face(&mut self, indices: [u32; 4]) -> usize {
        self.faces.push(Face::new(indices));
        self.faces.len() - 1
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Sets every face's shading flag from a predicate.
    ///
    /// The predicate receives the face and the vertex arena.
    pub fn apply_shading(&mut self, mut is_smooth: impl FnMut(&Face, &[DVec3]) -> bool) {
        let vertices = &self.vertices;
        for face in &mut self.faces {
            face.smooth = is_smooth(face, vertices);
        }
    }

    /// Per-face smooth flags, in face order.
    pub fn smooth_flags(&self) -> Vec<bool> {
        self.faces.iter().map(|f| f.smooth).collect()
    }

    /// Number of smooth-shaded faces.
    pub fn smooth_face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.smooth).count()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doric_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex(DVec3::ZERO);
    /// mesh.translate(DVec3::new(10.0, 0.0, 0.0));
    /// assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one, consuming it.
    ///
    /// Vertices are appended unchanged and face indices are shifted by the
    /// current vertex count. The source arena is dropped afterwards.
    pub fn merge(&mut self, other: Mesh) {
        let offset = self.vertices.len() as u32;
        let Mesh { vertices, faces } = other;

        self.vertices.extend(vertices);
        self.faces.extend(faces.into_iter().map(|face| Face {
            indices: face.indices.map(|i| i + offset),
            smooth: face.smooth,
        }));
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No face references the same vertex twice
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.faces.iter().all(|face| {
            let [a, b, c, d] = face.indices;
            let in_range = face.indices.iter().all(|&i| i < vertex_count);
            let distinct = a != b && a != c && a != d && b != c && b != d && c != d;
            in_range && distinct
        })
    }

    /// Splits every quad into two triangles `(a, b, c)` and `(a, c, d)`.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            let [a, b, c, d] = face.indices;
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
        triangles
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }

    /// Exports quad indices as a flattened u32 array, 4 per face.
    pub fn quad_indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|f| f.indices).collect()
    }
}
