use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use thiserror::Error;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::board::Board;
use crate::config::Config;

pub const BACKGROUND_COLOR: [u8; 4] = [127, 127, 127, 255];
pub const DEAD_COLOR: [u8; 4] = [255, 255, 255, 255];
pub const ALIVE_COLOR: [u8; 4] = [0, 0, 0, 255];

#[derive(Error, Debug)]
pub enum GraphicsError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
}

/// Where each cell lands in the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    pub border: u32,
}

impl CellLayout {
    pub fn from_config(config: &Config) -> Self {
        let (cell_width, cell_height) = config.cell_size();
        Self { cell_width, cell_height, border: config.border }
    }
}

pub fn create_window<T>(event_loop: &EventLoop<T>, config: &Config) -> Result<Window, GraphicsError> {
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height))
        .with_resizable(false)
        .build(event_loop)?;
    Ok(window)
}

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    layout: CellLayout,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, config: &Config) -> Result<Self, GraphicsError> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = PixelsBuilder::new(config.window_width, config.window_height, surface_texture)
            .enable_vsync(config.vsync)
            .build()?;

        Ok(Self {
            pixels,
            width: config.window_width,
            height: config.window_height,
            layout: CellLayout::from_config(config),
        })
    }

    /// Converts a physical window position into frame-buffer pixels,
    /// clamping positions outside the buffer to its edge.
    pub fn window_pos_to_pixel(&self, position: (f32, f32)) -> (usize, usize) {
        self.pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos))
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    pub fn render(&mut self, board: &Board) {
        let frame = self.pixels.frame_mut();
        draw_board(frame, self.width, self.height, board, self.layout);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Fills the frame with the background, then draws every cell inset by half
/// the border on each side so the background shows between neighbors.
pub fn draw_board(frame: &mut [u8], width: u32, height: u32, board: &Board, layout: CellLayout) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND_COLOR);
    }

    let inset = layout.border / 2;
    let cell_w = layout.cell_width.saturating_sub(layout.border);
    let cell_h = layout.cell_height.saturating_sub(layout.border);
    if cell_w == 0 || cell_h == 0 {
        return;
    }

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let color = if board.get(col as i32, row as i32).is_alive() {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };
            let x = col * layout.cell_width + inset;
            let y = row * layout.cell_height + inset;
            draw_rect(frame, x, y, cell_w, cell_h, color, width, height);
        }
    }
}

fn draw_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, color: [u8; 4], width: u32, height: u32) {
    for py in y..(y + h).min(height) {
        for px in x..(x + w).min(width) {
            let index = ((py * width + px) * 4) as usize;
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }
}
