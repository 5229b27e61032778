use grid_life::render::SHAPE_OVAL;
use grid_life::{
    DisplaySize, FramePlan, Grid, GridController, LogEngine, Point, PointerTracker, Preset, Rect,
    RenderStyle,
};
use std::error::Error;
use std::sync::Arc;
use winit::window::Window;

// GUI Imports
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiWgpuRenderer;
use egui_winit::State as EguiWinitState;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

pub struct State {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    pub controller: GridController<LogEngine>,
    pub pointer: PointerTracker,
    pub style: RenderStyle,

    // GUI state
    pub egui_ctx: EguiContext,
    pub egui_winit_state: EguiWinitState,
    pub egui_renderer: EguiWgpuRenderer,
    pub menu_open: bool,
}

impl State {
    pub async fn new(window: Arc<Window>, grid: Grid) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();

        log::info!("Initializing wgpu...");

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or("Failed to find an appropriate adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or("Surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::info!("Initializing egui...");
        let egui_ctx = EguiContext::default();
        let egui_winit_state =
            EguiWinitState::new(egui_ctx.clone(), egui_ctx.viewport_id(), &*window, None, None);
        let egui_renderer = EguiWgpuRenderer::new(&device, config.format, None, 1);
        log::info!("egui initialized.");

        log::info!("wgpu initialized successfully.");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            controller: GridController::new(grid, LogEngine),
            pointer: PointerTracker::new(),
            style: RenderStyle::default(),
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            menu_open: false,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            log::info!("Reconfigured surface to: {}x{}", new_size.width, new_size.height);
        } else {
            log::warn!(
                "Ignoring resize to zero dimensions: {}x{}",
                new_size.width,
                new_size.height
            );
        }
    }

    /// Build the egui frame for the grid and the menu, then paint it.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output_frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) => {
                log::warn!("Surface lost, recreating...");
                self.resize(self.size);
                return Err(wgpu::SurfaceError::Lost);
            }
            Err(e) => {
                log::error!("Failed to acquire next swap chain texture: {:?}", e);
                return Err(e);
            }
        };
        let output_view = output_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_winit_state.take_egui_input(&self.window);
        self.egui_ctx.begin_frame(raw_input);
        let ctx = self.egui_ctx.clone();
        self.menu_ui(&ctx);
        self.grid_ui(&ctx);
        let full_output = self.egui_ctx.end_frame();

        let pixels_per_point = self.window.scale_factor() as f32;
        let paint_jobs = self.egui_ctx.tessellate(full_output.shapes, pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point,
        };

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui Encoder"),
        });
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let _tdelta = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        self.egui_winit_state
            .handle_platform_output(&self.window, full_output.platform_output);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(Some(encoder.finish()));
        output_frame.present();
        Ok(())
    }

    fn menu_ui(&mut self, ctx: &EguiContext) {
        egui::Area::new(egui::Id::new("menu_button_area"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(5.0, 5.0))
            .show(ctx, |ui| {
                if ui.button("☰").clicked() {
                    self.menu_open = !self.menu_open;
                }
            });

        if !self.menu_open {
            return;
        }

        egui::SidePanel::left("side_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Grid");
                ui.separator();
                ui.label("Embed pattern:");
                for preset in Preset::ALL {
                    if ui.button(preset.name()).clicked() {
                        self.controller.embed(&preset.pattern());
                    }
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    self.controller.clear();
                }
                ui.checkbox(&mut self.style.compact_cells, "Compact cells");
                ui.separator();
                let grid = self.controller.grid();
                ui.label(format!("Grid: {}x{}", grid.rows(), grid.cols()));
                ui.label(format!("Live cells: {}", grid.population()));
            });
    }

    fn grid_ui(&mut self, ctx: &EguiContext) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let origin = response.rect.min;
                let display = DisplaySize::new(response.rect.width(), response.rect.height());

                let (pressed, down, released) = ui.input(|i| {
                    (
                        i.pointer.primary_pressed(),
                        i.pointer.primary_down(),
                        i.pointer.primary_released(),
                    )
                });
                if let Some(pos) = response.interact_pointer_pos() {
                    let point = Point::new(pos.x - origin.x, pos.y - origin.y);
                    if pressed {
                        self.pointer.press(&mut self.controller, display, point);
                    } else if down {
                        self.pointer.drag(&mut self.controller, display, point);
                    }
                }
                if released {
                    self.pointer.release();
                }

                match FramePlan::build(self.controller.grid(), display, &self.style) {
                    Ok(plan) => paint_plan(&painter, origin.to_vec2(), &plan),
                    Err(err) => log::trace!("Nothing to draw: {}", err),
                }
            });
    }
}

fn to_color(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}

fn to_rect(rect: Rect, offset: egui::Vec2) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y) + offset,
        egui::vec2(rect.width, rect.height),
    )
}

fn to_pos(point: Point, offset: egui::Vec2) -> egui::Pos2 {
    egui::pos2(point.x, point.y) + offset
}

fn paint_plan(painter: &egui::Painter, offset: egui::Vec2, plan: &FramePlan) {
    painter.rect_filled(to_rect(plan.background, offset), 0.0, to_color(plan.background_color));

    let stroke = egui::Stroke::new(plan.line_width, to_color(plan.line_color));
    for line in &plan.grid_lines {
        painter.line_segment([to_pos(line.from, offset), to_pos(line.to, offset)], stroke);
    }

    for cell in &plan.cells {
        let rect = to_rect(cell.rect(), offset);
        let color = to_color(cell.color);
        if cell.shape == SHAPE_OVAL {
            painter.circle_filled(rect.center(), rect.width().min(rect.height()) / 2.0, color);
        } else {
            painter.rect_filled(rect, 0.0, color);
        }
    }
}
