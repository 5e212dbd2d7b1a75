use wgpu::util::DeviceExt;

use crate::vertex::QuadVertex;

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// The one piece of geometry in the program: a quad centered on the origin,
/// uploaded once at startup. The bottom edge is tinted blue and the top edge
/// yellow; the fragment shader multiplies the tint into the texture sample.
pub struct QuadMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl QuadMesh {
    pub fn new(device: &wgpu::Device, half_extent: f32) -> Self {
        let s = half_extent;
        let vertices = [
            QuadVertex {
                position: [-s, -s, 0.0],
                color: [0.0, 0.0, 1.0],
                tex_coords: [0.0, 0.0],
            },
            QuadVertex {
                position: [s, -s, 0.0],
                color: [0.0, 0.0, 1.0],
                tex_coords: [1.0, 0.0],
            },
            QuadVertex {
                position: [s, s, 0.0],
                color: [1.0, 1.0, 0.0],
                tex_coords: [1.0, 1.0],
            },
            QuadVertex {
                position: [-s, s, 0.0],
                color: [1.0, 1.0, 0.0],
                tex_coords: [0.0, 1.0],
            },
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: QUAD_INDICES.len() as u32,
        }
    }
}
