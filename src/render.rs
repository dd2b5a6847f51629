use crate::constants::{AMBIENT_LIGHT, LIGHT_DIRECTION};
use crate::core::{
    BlobMesh, GpuVertex, BLOB_RIM_STRENGTH, CLEAR_RGB, ENVIRONMENTS, SKY_HEIGHT_SEGMENTS,
    SKY_RADIUS, SKY_WIDTH_SEGMENTS,
};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod environment;
mod helpers;
mod targets;
use environment::EnvironmentBindings;
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    tint: [f32; 4],
    light_dir: [f32; 4],
}

/// What one frame draws, collected from the view state.
pub struct DrawParams {
    pub view_proj: Mat4,
    pub model: Mat4,
    pub eye: Vec3,
    pub tint: [f32; 3],
    pub environment: usize,
    pub time_sec: f32,
}

struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn new(
        device: &wgpu::Device,
        label: &str,
        mesh: &BlobMesh,
        vertex_usage: wgpu::BufferUsages,
    ) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.gpu_vertices()),
            usage: wgpu::BufferUsages::VERTEX | vertex_usage,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: mesh.indices().len() as u32,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    uniform_bg: wgpu::BindGroup,
    environments: Vec<EnvironmentBindings>,

    sky_pipeline: wgpu::RenderPipeline,
    blob_pipeline: wgpu::RenderPipeline,
    sky: MeshBuffers,
    blob: MeshBuffers,
    // reused staging for per-frame vertex uploads
    blob_scratch: Vec<GpuVertex>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        blob_mesh: &BlobMesh,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        // Scene uniforms shared by both pipelines (group 0)
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Environment textures (group 1)
        let texture_bgl = environment::create_texture_bgl(&device);
        let sampler = environment::create_wrap_sampler(&device);
        let environments = environment::create_environment_bindings(
            &device,
            &queue,
            &texture_bgl,
            &sampler,
            &ENVIRONMENTS,
        );

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let sky_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sky_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
        });
        let blob_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blob_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BLOB_WGSL.into()),
        });
        // Sky first, never occludes: no depth writes, always passes
        let sky_pipeline = helpers::make_mesh_pipeline(
            &device,
            &layout,
            format,
            helpers::MeshPipelineDesc {
                label: "sky_pipeline",
                shader: &sky_shader,
                vs_entry: "vs_sky",
                fs_entry: "fs_sky",
                cull_mode: None,
                depth_write: false,
                depth_compare: wgpu::CompareFunction::Always,
            },
        );
        let blob_pipeline = helpers::make_mesh_pipeline(
            &device,
            &layout,
            format,
            helpers::MeshPipelineDesc {
                label: "blob_pipeline",
                shader: &blob_shader,
                vs_entry: "vs_blob",
                fs_entry: "fs_blob",
                cull_mode: Some(wgpu::Face::Back),
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );

        let sky_mesh = BlobMesh::uv_sphere(SKY_RADIUS, SKY_WIDTH_SEGMENTS, SKY_HEIGHT_SEGMENTS);
        let sky = MeshBuffers::new(&device, "sky_mesh", &sky_mesh, wgpu::BufferUsages::empty());
        let blob = MeshBuffers::new(&device, "blob_mesh", blob_mesh, wgpu::BufferUsages::COPY_DST);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            uniform_bg,
            environments,
            sky_pipeline,
            blob_pipeline,
            sky,
            blob,
            blob_scratch: Vec::with_capacity(blob_mesh.vertex_count()),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
            log::debug!("[gpu] resized to {:?}", self.depth.size());
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Rewrites the blob vertex buffer from the mesh's current state.
    pub fn upload_blob(&mut self, mesh: &BlobMesh) {
        mesh.write_gpu_vertices(&mut self.blob_scratch);
        self.queue.write_buffer(
            &self.blob.vertices,
            0,
            bytemuck::cast_slice(&self.blob_scratch),
        );
    }

    pub fn render(&mut self, params: &DrawParams) -> Result<(), wgpu::SurfaceError> {
        let env = &self.environments[params.environment % self.environments.len()];
        let uniforms = SceneUniforms {
            view_proj: params.view_proj.to_cols_array_2d(),
            model: params.model.to_cols_array_2d(),
            camera_pos: params.eye.extend(params.time_sec).to_array(),
            tint: [
                params.tint[0],
                params.tint[1],
                params.tint[2],
                BLOB_RIM_STRENGTH,
            ],
            light_dir: LIGHT_DIRECTION.normalize().extend(AMBIENT_LIGHT).to_array(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.uniform_bg, &[]);

            rpass.set_pipeline(&self.sky_pipeline);
            rpass.set_bind_group(1, &env.sky, &[]);
            rpass.set_vertex_buffer(0, self.sky.vertices.slice(..));
            rpass.set_index_buffer(self.sky.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sky.index_count, 0, 0..1);

            rpass.set_pipeline(&self.blob_pipeline);
            rpass.set_bind_group(1, &env.surface, &[]);
            rpass.set_vertex_buffer(0, self.blob.vertices.slice(..));
            rpass.set_index_buffer(self.blob.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.blob.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
