use crate::error::{GpuError, validated};
use crate::shaders;
use crate::texture::GpuTextureTable;
use crate::uniforms::{FrameUniforms, ObjectUniforms};
use bytemuck::Zeroable;
use cottage_assets::TextureTable;
use cottage_render::FramePlan;
use cottage_scene::{Scene, Vertex, lamp_mesh};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Vertex buffer of one mesh. Drawn as a non-indexed triangle list.
struct GpuMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    fn new(device: &wgpu::Device, name: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(name),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

/// Uniform buffer and bind group holding one object's matrices.
struct ObjectSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ObjectSlot {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&ObjectUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

struct PipelineSpec<'a> {
    label: &'static str,
    source: &'static str,
    vs_entry: &'static str,
    fs_entry: &'static str,
    bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
}

fn create_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    spec: PipelineSpec<'_>,
) -> Result<wgpu::RenderPipeline, GpuError> {
    let label = spec.label;
    let shader = validated(
        device,
        || {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(spec.source.into()),
            })
        },
        |message| GpuError::Shader { label, message },
    )?;

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: spec.bind_group_layouts,
        push_constant_ranges: &[],
    });

    validated(
        device,
        || {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(spec.vs_entry),
                    compilation_options: Default::default(),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                            2 => Float32x2,
                        ],
                    }],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(spec.fs_entry),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                // Wall panes and the ground are single-sided quads seen from
                // both sides, so nothing is culled.
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: Default::default(),
                multiview: None,
                cache: None,
            })
        },
        |message| GpuError::Pipeline { label, message },
    )
}

/// wgpu renderer for the house scene.
///
/// Owns one vertex buffer per mesh, one uniform slot per scene object and
/// the uploaded textures. [`WgpuRenderer::render`] draws a [`FramePlan`].
pub struct WgpuRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    objects: Vec<ObjectSlot>,
    lamp_mesh: GpuMesh,
    lamp_slot: ObjectSlot,
    textures: GpuTextureTable,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        (width, height): (u32, u32),
        scene: &Scene,
        texture_table: &TextureTable,
    ) -> Result<Self, GpuError> {
        let frame_layout = uniform_layout(
            device,
            "frame_bind_group_layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let object_layout =
            uniform_layout(device, "object_bind_group_layout", wgpu::ShaderStages::VERTEX);
        let texture_layout = GpuTextureTable::bind_group_layout(device);

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frame_uniforms"),
            contents: bytemuck::bytes_of(&FrameUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let lit_pipeline = create_pipeline(
            device,
            surface_format,
            PipelineSpec {
                label: "phong",
                source: shaders::PHONG_SHADER,
                vs_entry: "vs_main",
                fs_entry: "fs_main",
                bind_group_layouts: &[&frame_layout, &object_layout, &texture_layout],
            },
        )?;
        let lamp_pipeline = create_pipeline(
            device,
            surface_format,
            PipelineSpec {
                label: "lamp",
                source: shaders::LAMP_SHADER,
                vs_entry: "vs_lamp",
                fs_entry: "fs_lamp",
                bind_group_layouts: &[&frame_layout, &object_layout],
            },
        )?;

        let textures = GpuTextureTable::upload(device, queue, &texture_layout, texture_table)?;
        for obj in scene.objects() {
            if textures.get(obj.texture).is_none() {
                return Err(GpuError::MissingTexture(obj.texture));
            }
        }

        let meshes = scene
            .meshes()
            .iter()
            .map(|mesh| GpuMesh::new(device, mesh.name, &mesh.vertices))
            .collect::<Vec<_>>();
        let objects = scene
            .objects()
            .iter()
            .map(|obj| ObjectSlot::new(device, &object_layout, obj.name))
            .collect::<Vec<_>>();

        let lamp = lamp_mesh();
        let lamp_mesh = GpuMesh::new(device, lamp.name, &lamp.vertices);
        let lamp_slot = ObjectSlot::new(device, &object_layout, "lamp");

        tracing::info!(
            "renderer ready: {} meshes, {} objects, {} textures, format {:?}",
            meshes.len(),
            objects.len(),
            textures.len(),
            surface_format
        );

        Ok(Self {
            lit_pipeline,
            lamp_pipeline,
            frame_buffer,
            frame_bind_group,
            meshes,
            objects,
            lamp_mesh,
            lamp_slot,
            textures,
            depth_texture: Self::create_depth_texture(device, width, height),
            surface_format,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame: clear to black, then draw the plan in order.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        plan: &FramePlan,
    ) {
        queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&FrameUniforms::from_plan(plan)),
        );
        if plan.draws.len() > self.objects.len() {
            tracing::warn!(
                "frame has {} draws but only {} object slots; extra draws dropped",
                plan.draws.len(),
                self.objects.len()
            );
        }
        for (draw, slot) in plan.draws.iter().zip(&self.objects) {
            queue.write_buffer(
                &slot.buffer,
                0,
                bytemuck::bytes_of(&ObjectUniforms::new(draw.model)),
            );
        }
        if let Some(model) = plan.lamp {
            queue.write_buffer(
                &self.lamp_slot.buffer,
                0,
                bytemuck::bytes_of(&ObjectUniforms::new(model)),
            );
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.lit_pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            for (draw, slot) in plan.draws.iter().zip(&self.objects) {
                let (Some(mesh), Some(texture)) = (
                    self.meshes.get(draw.mesh.index()),
                    self.textures.get(draw.texture),
                ) else {
                    continue;
                };
                pass.set_bind_group(1, &slot.bind_group, &[]);
                pass.set_bind_group(2, texture.bind_group(), &[]);
                pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                pass.draw(0..draw.vertex_count.min(mesh.vertex_count), 0..1);
            }

            if plan.lamp.is_some() {
                pass.set_pipeline(&self.lamp_pipeline);
                pass.set_bind_group(0, &self.frame_bind_group, &[]);
                pass.set_bind_group(1, &self.lamp_slot.bind_group, &[]);
                pass.set_vertex_buffer(0, self.lamp_mesh.buffer.slice(..));
                pass.draw(0..self.lamp_mesh.vertex_count, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
