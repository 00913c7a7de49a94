use egui::{Color32, Pos2};

/// One straight piece of a stroke, between two consecutive pointer positions.
///
/// Coordinates are canvas-local: (0, 0) is the top-left pixel of the raster buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Pos2,
    to: Pos2,
    color: Color32,
    width: u32,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2, color: Color32, width: u32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    pub fn from(&self) -> Pos2 {
        self.from
    }

    pub fn to(&self) -> Pos2 {
        self.to
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Every pixel this segment covers, including pixels outside any buffer.
    ///
    /// The centre line is walked with Bresenham's algorithm and a disc of
    /// diameter `width` is stamped at each step. A pixel may appear more than once.
    pub fn pixels(&self) -> Vec<(i32, i32)> {
        let (x0, y0) = pixel_of(self.from);
        let (x1, y1) = pixel_of(self.to);
        let stamp = brush_offsets(self.width);

        let mut pixels = Vec::new();
        for (cx, cy) in line_points(x0, y0, x1, y1) {
            pixels.extend(stamp.iter().map(|(dx, dy)| (cx + dx, cy + dy)));
        }
        pixels
    }
}

/// Pointer positions are fractional; the pixel under them is the floored coordinate.
pub fn pixel_of(pos: Pos2) -> (i32, i32) {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

/// Bresenham line from (x0, y0) to (x1, y1), both endpoints included.
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    let mut points = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Offsets of a filled disc whose diameter is `width` pixels.
fn brush_offsets(width: u32) -> Vec<(i32, i32)> {
    if width <= 1 {
        return vec![(0, 0)];
    }
    let radius = width as f32 / 2.0;
    let reach = radius.ceil() as i32;
    let mut offsets = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= radius * radius {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}
