pub mod gpu_context;
pub mod mesh;
pub mod quad_pipeline;
pub mod texture;
pub mod transform;
pub mod vertex;

pub use gpu_context::GpuContext;
pub use mesh::QuadMesh;
pub use quad_pipeline::QuadPipeline;
pub use texture::Texture;
pub use transform::TransformUniform;
pub use vertex::QuadVertex;
