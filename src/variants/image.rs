//! Image-view dialog state.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::style::Color;

use super::buttons::ButtonsDialog;

/// Largest image area inside a dialog, in terminal cells.
const MAX_CELL_WIDTH: u32 = 44;
const MAX_CELL_HEIGHT: u32 = 16;

/// Live state of the image view attached to the active dialog.
///
/// The source image is downsampled once at presentation time into a cell
/// buffer: each terminal cell covers two vertically stacked pixels, drawn
/// with a half-block glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    cells: Vec<(Color, Color)>,
    width: u16,
    height: u16,
}

impl ImageView {
    pub(crate) fn from_image(image: DynamicImage) -> Self {
        let (src_width, src_height) = image.dimensions();
        let resized = if src_width > MAX_CELL_WIDTH || src_height > MAX_CELL_HEIGHT * 2 {
            image.resize(MAX_CELL_WIDTH, MAX_CELL_HEIGHT * 2, FilterType::Triangle)
        } else {
            image
        };
        let rgba = resized.to_rgba8();
        let (px_width, px_height) = resized.dimensions();
        let width = px_width as u16;
        let height = px_height.div_ceil(2) as u16;

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for cell_y in 0..height as u32 {
            for cell_x in 0..px_width {
                let top = pixel_color(&rgba, cell_x, cell_y * 2, px_height);
                let bottom = pixel_color(&rgba, cell_x, cell_y * 2 + 1, px_height);
                cells.push((top, bottom));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width of the cell buffer, in terminal columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the cell buffer, in terminal rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Top/bottom pixel colors for one cell.
    pub fn cell(&self, x: u16, y: u16) -> (Color, Color) {
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

/// A pixel as a terminal color; rows past the image bottom come out black so
/// an odd-height image still fills its last cell row.
fn pixel_color(rgba: &image::RgbaImage, x: u32, y: u32, px_height: u32) -> Color {
    if y >= px_height {
        return Color::Rgb(0, 0, 0);
    }
    let pixel = rgba.get_pixel(x, y);
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

/// Dialog content for the image variant: an image view above a button row.
pub(crate) struct ImageDialog {
    pub(crate) buttons: ButtonsDialog,
    pub(crate) view: ImageView,
}
