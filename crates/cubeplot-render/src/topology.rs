//! Fixed cube topology: vertex labeling, faces, and the index selections the
//! renderers draw from.
//!
//! Vertices are labeled A0..H7. The front face is {A0, B1, C2, D3} and the
//! back face {E4, F5, G6, H7}; the back face doubles as the ground (XY)
//! plane. Tables here are closed and never extended at runtime.

/// Number of projected cube vertices.
pub const VERTEX_COUNT: usize = 8;

/// Number of projected cross-section points.
pub const CROSS_POINT_COUNT: usize = 6;

/// Number of faces.
pub const FACE_COUNT: usize = 6;

/// Faces as vertex indices in winding order.
///
/// Winding determines border continuity only; faces are never filled.
pub const FACES: [[usize; 4]; FACE_COUNT] = [
    [0, 1, 3, 2], // front
    [1, 5, 7, 3],
    [5, 4, 6, 7], // back
    [4, 0, 2, 6],
    [4, 5, 1, 0],
    [2, 3, 7, 6],
];

/// Ground plane outline (the back face), in drawing order.
pub const GROUND_FACE: [usize; 4] = [4, 5, 7, 6];

/// Corner the edge axes are anchored at.
pub const EDGE_AXIS_ORIGIN: usize = 4;

/// Vertices the x, y and z edge axes point to from [`EDGE_AXIS_ORIGIN`].
pub const EDGE_AXIS_TARGETS: [usize; 3] = [5, 6, 0];

/// Cross-section point pairs joined by guide lines.
pub const CROSS_POINT_PAIRS: [(usize, usize); 4] = [(0, 3), (1, 2), (1, 4), (3, 5)];

/// Vertex pairs closing a loop around the ground face.
pub const GROUND_LOOP: [(usize, usize); 4] = [(6, 4), (4, 5), (5, 7), (7, 6)];

/// Vertex indices of face `index`.
///
/// # Panics
///
/// Panics if `index >= FACE_COUNT`.
pub fn face(index: usize) -> [usize; 4] {
    FACES[index]
}
