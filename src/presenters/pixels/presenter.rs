use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

use crate::controllers::animation::FramePresenterPort;
use crate::core::animation::{FrameTelemetry, TelemetryReadout};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::{app::ports::presenter::GuiPresenterPort, errors::GuiError};

/// Shows frames through a pixels surface with the egui panel drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    /// `None` while the window is minimised.
    surface: Option<SurfaceSize>,
    has_frame: bool,
    readout: TelemetryReadout,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface: SurfaceSize::new(size.width, size.height).ok(),
            has_frame: false,
            readout: TelemetryReadout::default(),
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, pixel_buffer: &PixelBuffer) {
        if !frame_fits(self.surface, pixel_buffer) {
            return;
        }

        let frame = self.pixels.frame_mut();
        if frame.len() != pixel_buffer.data().len() {
            warn!(
                "pixels frame holds {} bytes, rendered frame has {}",
                frame.len(),
                pixel_buffer.data().len()
            );
            return;
        }

        frame.copy_from_slice(pixel_buffer.data());
        self.has_frame = true;
    }

    fn publish_telemetry(&mut self, telemetry: &FrameTelemetry) {
        self.readout.update(telemetry);
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        let Some(surface) = self.surface else {
            return Ok(());
        };

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let pixels_per_point = egui_ctx.pixels_per_point();
            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [surface.width(), surface.height()],
                pixels_per_point,
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the fractal underneath the panel.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface = SurfaceSize::new(width, height).ok();
        self.has_frame = false;

        // pixels rejects zero-sized textures; keep the old ones until restored.
        if self.surface.is_some() {
            self.pixels.resize_surface(width, height)?;
            self.pixels.resize_buffer(width, height)?;
        }

        Ok(())
    }

    fn readout(&self) -> &TelemetryReadout {
        &self.readout
    }
}

/// A frame rendered before the last resize no longer fits the surface.
fn frame_fits(surface: Option<SurfaceSize>, pixel_buffer: &PixelBuffer) -> bool {
    surface.is_some_and(|surface| {
        pixel_buffer.width() == surface.width() && pixel_buffer.height() == surface.height()
    })
}
