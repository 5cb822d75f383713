// File: crates/gapminder-viewer/src/main.rs
// Summary: Windowed scatter plot via RGBA blit (CPU) using winit + softbuffer; hovering a circle shows the population tooltip.

use anyhow::{Context, Result};
use clap::Parser;
use gapminder_core::{
    compose, theme, Dataset, HoverChange, LineConfig, MissingPolicy, RenderOptions, ScatterConfig, ScatterPlot,
    Scene, Tooltip, TooltipController,
};
use std::num::NonZeroU32;
use tracing_subscriber::EnvFilter;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "gapminder-viewer")]
#[command(about = "Interactive Gapminder scatter plot with hover tooltips", long_about = None)]
struct Args {
    /// Path to the Gapminder CSV
    #[arg(default_value = "gapminder.csv")]
    input: String,

    /// Year to plot
    #[arg(long, default_value = "1980")]
    year: String,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// What to do with missing numeric values: skip, zero or error
    #[arg(long, default_value = "skip")]
    missing: MissingPolicy,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dataset = Dataset::from_path(&args.input).with_context(|| format!("failed to load CSV '{}'", args.input))?;
    let config = ScatterConfig { year: args.year.clone(), missing: args.missing, ..ScatterConfig::default() };
    let plot = ScatterPlot::build(&dataset, &config).with_context(|| format!("building scatter plot for {}", args.year))?;
    let theme = theme::find(&args.theme);
    let base = plot.scene(&theme);

    // Room for the scatter plus a tooltip panel beside it.
    let line_config = LineConfig::default();
    let (panel_w, panel_h) = Tooltip::panel_size(&line_config);
    let win_w = (base.width as f32 + panel_w).ceil() as u32;
    let win_h = (base.height as f32).max(panel_h + 40.0).ceil() as u32;
    let mut tooltips = TooltipController::new(line_config).with_bounds(win_w as f32, win_h as f32);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(format!("Gapminder {}: Fertility vs. Life Expectancy", args.year))
        .with_inner_size(winit::dpi::PhysicalSize::new(win_w, win_h))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    // SAFETY: the window outlives both the context and the surface; all three move into the event loop.
    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let opts = RenderOptions::default();
    tracing::info!(points = plot.points.len(), "viewer ready; hover a circle to show its tooltip");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let cursor = (position.x as f32, position.y as f32);
                    match tooltips.pointer_moved(&plot, &dataset, cursor) {
                        HoverChange::Unchanged => {}
                        change => {
                            tracing::debug!(?change, "hover changed");
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if tooltips.hover_out().is_some() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let mut frame = compose(&base, tooltips.active(), &theme);
                let size = window.inner_size();
                frame.width = size.width.max(1) as i32;
                frame.height = size.height.max(1) as i32;
                if let Err(e) = present(&mut surface, &frame, &opts) {
                    tracing::error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

/// Render `frame` to RGBA and blit it into the softbuffer surface.
fn present(surface: &mut softbuffer::Surface, frame: &Scene, opts: &RenderOptions) -> Result<()> {
    let (w, h) = (frame.width as u32, frame.height as u32);
    let (nw, nh) = NonZeroU32::new(w).zip(NonZeroU32::new(h)).context("zero-sized window")?;
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    let (rgba, _, _, _) = frame.render_to_rgba8(opts)?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    let max_px = buffer.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        // softbuffer expects 0x00RRGGBB
        buffer[i] = (r << 16) | (g << 8) | b;
    }
    buffer.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
