use crate::constants::*;
use crate::pack::{linear_rgb, FrameLighting, SceneUniforms};
use vropay_core::{Camera, SceneBuffer, SceneSpec};
use web_sys as web;
use wgpu;

mod helpers;
mod post;
mod scene;
mod targets;

use post::{PostBindGroups, PostResources, PostUniforms};
use scene::SceneResources;
use targets::{RenderTargets, HDR_FORMAT};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,

    background: [f32; 3],
    clear_color: wgpu::Color,

    scene: SceneResources,
    post: PostResources,
    targets: RenderTargets,
    post_groups: PostBindGroups,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        background: [f32; 3],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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

        let scene = scene::create_scene_resources(&device, HDR_FORMAT);
        let post = PostResources::new(&device, HDR_FORMAT, format);
        let targets = RenderTargets::new(&device, width, height);
        let post_groups = post.bind_groups(&device, &targets);

        let [r, g, b] = linear_rgb(background);
        log::info!("[gpu] ready {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            background,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            scene,
            post,
            targets,
            post_groups,
        })
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
            self.targets.recreate(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.targets);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Re-apply the current surface configuration after the surface was lost
    /// or went out of date.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        log::debug!("[gpu] surface reconfigured {}x{}", self.width, self.height);
    }

    /// Draw the mounted scene, then bloom and composite onto the canvas.
    pub fn render(
        &mut self,
        graph: &SceneBuffer,
        spec: &SceneSpec,
        elapsed: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: ray-marched scene -> HDR
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::facing_origin(CAMERA_Z, aspect);
        let lighting = FrameLighting {
            ambient: spec.ambient,
            light: spec.light_color,
            background: self.background,
        };
        let uniforms = SceneUniforms::new(
            &camera,
            elapsed,
            [self.width as f32, self.height as f32],
            &lighting,
            graph.iter(),
        );
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));

        // One submit per post pass: buffer writes land before the next
        // submit, so passes sharing a submit would all see the last write.
        let base = PostUniforms {
            resolution: [self.width as f32 / 2.0, self.height as f32 / 2.0],
            time: elapsed,
            exposure: EXPOSURE,
            blur_dir: [0.0, 0.0],
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };
        let bloom_passes = [
            (
                "bright_pass",
                &self.targets.bloom_a_view,
                &self.post.bright_pipeline,
                &self.post_groups.hdr,
                [0.0, 0.0],
            ),
            (
                "blur_h",
                &self.targets.bloom_b_view,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_a,
                [1.0, 0.0],
            ),
            (
                "blur_v",
                &self.targets.bloom_a_view,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_b,
                [0.0, 1.0],
            ),
        ];
        for (label, target, pipeline, group, blur_dir) in bloom_passes {
            let u = PostUniforms { blur_dir, ..base };
            self.queue
                .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&u));
            let mut encoder = self
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some(label) });
            post::blit(&mut encoder, label, target, wgpu::Color::BLACK, pipeline, group, None);
            self.queue.submit(Some(encoder.finish()));
        }

        // Composite to swapchain
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&base));
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("composite"),
            });
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
