use std::path::Path;

use egui::{Color32, ColorImage, Pos2};
use image::imageops;
use image::{Rgb, Rgba, RgbImage};
use log::debug;

use crate::error::{PaintError, PaintResult};
use crate::stroke::Segment;

/// A pixel grid that strokes are drawn into and that can be written to and read from disk.
///
/// Snapshots for undo are taken with `Clone`, so a clone must be a full, independent copy.
pub trait RasterSurface: Clone {
    /// A surface of the given size filled with `background`
    fn blank(width: u32, height: u32, background: Color32) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// The color at (x, y), or `None` outside the surface
    fn pixel(&self, x: u32, y: u32) -> Option<Color32>;

    /// Sets one pixel. Coordinates outside the surface are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color32);

    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32) {
        let segment = Segment::new(from, to, color, width);
        for (x, y) in segment.pixels() {
            self.set_pixel(x, y, color);
        }
    }

    fn save(&self, path: &Path) -> PaintResult<()>;

    /// Reads an image, flattening any transparency onto `background`
    fn load(path: &Path, background: Color32) -> PaintResult<Self>;

    /// Copies out the top-left region of at most `max_size` pixels for upload to the GPU
    fn to_color_image(&self, max_size: [usize; 2]) -> ColorImage;
}

/// The raster buffer: an opaque RGB image held in memory.
#[derive(Clone, PartialEq)]
pub struct RasterBuffer {
    image: RgbImage,
}

impl std::fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl RasterBuffer {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// True when every pixel equals `color`
    pub fn is_filled_with(&self, color: Color32) -> bool {
        let target = to_rgb(color);
        self.image.pixels().all(|p| *p == target)
    }
}

impl RasterSurface for RasterBuffer {
    fn blank(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, to_rgb(background)),
        }
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color32::from_rgb(*r, *g, *b))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = to_rgb(color);
        }
    }

    fn save(&self, path: &Path) -> PaintResult<()> {
        self.image.save(path).map_err(|source| PaintError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Wrote {}x{} image to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }

    fn load(path: &Path, background: Color32) -> PaintResult<Self> {
        let decoded = image::open(path).map_err(|source| PaintError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Decoded {}x{} image from {}",
            decoded.width(),
            decoded.height(),
            path.display()
        );
        Ok(Self {
            image: flatten(&decoded.to_rgba8(), background),
        })
    }

    fn to_color_image(&self, max_size: [usize; 2]) -> ColorImage {
        let width = self.image.width().min(max_size[0] as u32);
        let height = self.image.height().min(max_size[1] as u32);
        let visible = imageops::crop_imm(&self.image, 0, 0, width, height).to_image();
        ColorImage::from_rgb([width as usize, height as usize], visible.as_raw())
    }
}

/// Composites an RGBA image over an opaque background
fn flatten(image: &image::RgbaImage, background: Color32) -> RgbImage {
    let bg = [background.r(), background.g(), background.b()];
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let a = a as u32;
        let blend = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8;
        Rgb([blend(r, bg[0]), blend(g, bg[1]), blend(b, bg[2])])
    })
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}
