/// A 24-bit pixel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color of the 1px borders between cells.
pub const GRID_COLOR: Rgb = Rgb(0xCC, 0xCC, 0xCC);

/// Fill color of dead cells (and the cleared surface).
pub const DEAD_COLOR: Rgb = Rgb(0xFF, 0xFF, 0xFF);

/// Fill color of live cells.
pub const ALIVE_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);

/// An in-memory raster surface.
///
/// `px[y * width + x]` is pixel (x, y). The surface is assumed initialized
/// and correctly sized by its owner; drawing out of range is a programmer
/// error and panics through slice indexing.
pub struct Canvas {
    px: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);

        Self {
            px: vec![DEAD_COLOR; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn at(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width, "x is out of bounds");
        debug_assert!(y < self.height, "y is out of bounds");

        (y * self.width + x) as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.px[self.at(x, y)]
    }

    pub fn fill(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    /// Fill a `w` by `h` rectangle with its top-left corner at (`x`, `y`).
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        for dy in 0..h {
            let start = self.at(x, y + dy);
            self.px[start..start + w as usize].fill(color);
        }
    }

    /// Draw a full-height vertical line, one pixel wide.
    pub fn vline(&mut self, x: u32, color: Rgb) {
        for y in 0..self.height {
            let i = self.at(x, y);
            self.px[i] = color;
        }
    }

    /// Draw a full-width horizontal line, one pixel tall.
    pub fn hline(&mut self, y: u32, color: Rgb) {
        let start = self.at(0, y);
        self.px[start..start + self.width as usize].fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared_to_dead() {
        let c = Canvas::new(4, 3);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(c.pixel(x, y), DEAD_COLOR);
            }
        }
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut c = Canvas::new(8, 8);
        c.fill_rect(2, 3, 3, 2, ALIVE_COLOR);

        assert_eq!(c.pixel(2, 3), ALIVE_COLOR);
        assert_eq!(c.pixel(4, 4), ALIVE_COLOR);
        assert_eq!(c.pixel(1, 3), DEAD_COLOR);
        assert_eq!(c.pixel(5, 3), DEAD_COLOR);
        assert_eq!(c.pixel(2, 2), DEAD_COLOR);
        assert_eq!(c.pixel(2, 5), DEAD_COLOR);
    }

    #[test]
    fn lines_span_the_surface() {
        let mut c = Canvas::new(5, 4);
        c.vline(2, GRID_COLOR);
        c.hline(1, GRID_COLOR);

        assert_eq!(c.pixel(2, 0), GRID_COLOR);
        assert_eq!(c.pixel(2, 3), GRID_COLOR);
        assert_eq!(c.pixel(0, 1), GRID_COLOR);
        assert_eq!(c.pixel(4, 1), GRID_COLOR);
    }
}
