use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub transform: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn identity() -> Self {
        Self::from_mat4(Mat4::IDENTITY)
    }

    pub fn from_mat4(mat: Mat4) -> Self {
        Self {
            transform: mat.to_cols_array_2d(),
        }
    }
}
