use super::helpers;
use crate::core::constants::{SKY_TEXTURE_SIZE, SURFACE_TEXTURE_SIZE};
use crate::core::texture::{environment_textures, TextureImage};
use crate::core::Environment;
use wgpu;

/// Texture bind groups of one environment, ready to swap in.
pub(crate) struct EnvironmentBindings {
    pub(crate) sky: wgpu::BindGroup,
    pub(crate) surface: wgpu::BindGroup,
}

pub(crate) fn create_texture_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("texture_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
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

pub(crate) fn create_wrap_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("wrap_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    image: &TextureImage,
) -> wgpu::TextureView {
    let (tex, view) = helpers::create_texture_with_view(
        device,
        label,
        image.width,
        image.height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(image.bytes_per_row()),
            rows_per_image: Some(image.height),
        },
        wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        },
    );
    view
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

/// Generates and uploads the texture pair of every environment.
pub(crate) fn create_environment_bindings(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    environments: &[Environment],
) -> Vec<EnvironmentBindings> {
    environments
        .iter()
        .map(|env| {
            let (sky_img, surface_img) =
                environment_textures(env, SKY_TEXTURE_SIZE, SURFACE_TEXTURE_SIZE);
            let sky_view = upload_texture(device, queue, "sky_tex", &sky_img);
            let surface_view = upload_texture(device, queue, "surface_tex", &surface_img);
            log::info!(
                "[env] uploaded '{}' sky={}x{} surface={}x{}",
                env.name,
                sky_img.width,
                sky_img.height,
                surface_img.width,
                surface_img.height
            );
            EnvironmentBindings {
                sky: texture_bind_group(device, layout, sampler, &sky_view, "sky_bg"),
                surface: texture_bind_group(device, layout, sampler, &surface_view, "surface_bg"),
            }
        })
        .collect()
}
