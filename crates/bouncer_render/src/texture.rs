use anyhow::Context;

pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: (u32, u32),
}

impl Texture {
    /// Decodes an image file and uploads it. Failure here is degraded, not
    /// fatal: it is logged and a zero-initialized placeholder comes back, so
    /// the frame's draw call still issues with whatever the sampler yields.
    pub fn from_path(device: &wgpu::Device, queue: &wgpu::Queue, path: &str) -> Self {
        match decode_rgba8(path) {
            Ok((pixels, width, height)) => {
                log::info!("Loaded texture '{}' ({}x{})", path, width, height);
                Self::from_rgba8(device, queue, &pixels, width, height, path)
            }
            Err(err) => {
                log::warn!(
                    "Failed to load texture '{}': {:#}. Continuing with an empty texture.",
                    path,
                    err
                );
                Self::uninitialized(device, "texture_load_failed")
            }
        }
    }

    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let texture = create_texture(device, width, height, label);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        Self::finish(device, texture, (width, height))
    }

    fn uninitialized(device: &wgpu::Device, label: &str) -> Self {
        let texture = create_texture(device, 1, 1, label);
        Self::finish(device, texture, (1, 1))
    }

    fn finish(device: &wgpu::Device, texture: wgpu::Texture, size: (u32, u32)) -> Self {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Repeat + linear filtering, matching the source's sampler state.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            texture,
            view,
            sampler,
            size,
        }
    }
}

fn create_texture(device: &wgpu::Device, width: u32, height: u32, label: &str) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn decode_rgba8(path: &str) -> anyhow::Result<(Vec<u8>, u32, u32)> {
    let img = image::open(path).with_context(|| format!("decoding '{path}'"))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}
