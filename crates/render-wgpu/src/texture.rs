use crate::error::GpuError;
use cottage_assets::{TextureData, TextureTable};
use cottage_common::TextureId;

/// One uploaded texture and the bind group that exposes it to the shader.
pub struct GpuTexture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// GPU copies of every texture in a [`TextureTable`], indexed by the same
/// [`TextureId`]s. Draw calls bind these; nothing is copied per frame.
pub struct GpuTextureTable {
    textures: Vec<GpuTexture>,
    _sampler: wgpu::Sampler,
}

impl GpuTextureTable {
    /// Bind group layout for group 2: texture at binding 0, sampler at 1.
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    /// Upload every texture in `table`.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        table: &TextureTable,
    ) -> Result<Self, GpuError> {
        // Repeat so uv scales above 1 tile the image.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("texture_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let limit = device.limits().max_texture_dimension_2d;
        let mut textures = Vec::with_capacity(table.len());
        for (id, name, data) in table.iter() {
            if data.width > limit || data.height > limit {
                return Err(GpuError::TextureTooLarge {
                    name: name.to_string(),
                    width: data.width,
                    height: data.height,
                    limit,
                });
            }
            textures.push(upload_one(device, queue, layout, &sampler, name, data));
            tracing::debug!(
                "uploaded texture {} '{}' ({}x{})",
                id.0,
                name,
                data.width,
                data.height
            );
        }
        tracing::info!("uploaded {} textures", textures.len());

        Ok(Self {
            textures,
            _sampler: sampler,
        })
    }

    pub fn get(&self, id: TextureId) -> Option<&GpuTexture> {
        self.textures.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

fn upload_one(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    name: &str,
    data: &TextureData,
) -> GpuTexture {
    let size = wgpu::Extent3d {
        width: data.width,
        height: data.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(name),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(data.bytes_per_row()),
            rows_per_image: Some(data.height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(name),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    GpuTexture {
        name: name.to_string(),
        width: data.width,
        height: data.height,
        _texture: texture,
        bind_group,
    }
}
