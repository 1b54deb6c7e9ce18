use bytemuck::{Pod, Zeroable};
use std::mem;

const R: [f32; 3] = [1.0, 0.0, 0.0];
const G: [f32; 3] = [0.0, 1.0, 0.0];
const B: [f32; 3] = [0.0, 0.0, 1.0];

/// One interleaved `[x, y, r, g, b]` record.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

pub const POSITION_COMPONENTS: i32 = 2;
pub const COLOR_COMPONENTS: i32 = 3;

pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;
pub const POSITION_OFFSET: i32 = 0;
pub const COLOR_OFFSET: i32 = POSITION_COMPONENTS * mem::size_of::<f32>() as i32;

pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [0.0, 0.5],
        color: R,
    },
    Vertex {
        position: [0.5, -0.5],
        color: G,
    },
    Vertex {
        position: [-0.5, -0.5],
        color: B,
    },
];

impl Vertex {
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn layout_is_five_tightly_packed_floats() {
        assert_eq!(STRIDE, 20);
        assert_eq!(POSITION_OFFSET, 0);
        assert_eq!(COLOR_OFFSET, 8);
        assert_eq!(
            STRIDE,
            (POSITION_COMPONENTS + COLOR_COMPONENTS) * mem::size_of::<f32>() as i32
        );
    }

    #[test]
    fn interleaved_bytes_decode_per_vertex() {
        let bytes = Vertex::as_bytes(&TRIANGLE);
        assert_eq!(bytes.len(), 3 * 20);

        for (i, vertex) in TRIANGLE.iter().enumerate() {
            let base = 20 * i;
            assert_eq!(floats(&bytes[base..base + 8]), vertex.position.to_vec());
            assert_eq!(floats(&bytes[base + 8..base + 20]), vertex.color.to_vec());
        }
    }

    #[test]
    fn corners_are_pure_primaries() {
        let colors: Vec<_> = TRIANGLE.iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![R, G, B]);
    }

    #[test]
    fn triangle_stays_inside_clip_space() {
        for vertex in TRIANGLE.iter() {
            for c in vertex.position.iter() {
                assert!((-1.0..=1.0).contains(c));
            }
        }
    }
}
