/// Fixed cell-to-pixel layout of the grid.
///
/// Every cell occupies a `cell_size` square, with a 1px border reserved on
/// each side plus one trailing border, so the canvas is
/// `(cell_size + 1) * dim + 1` pixels along each axis.
///
/// All functions here are pure; inputs are pre-validated by contract, so
/// there are no error conditions.
#[derive(Clone, Copy, Debug)]
pub struct GridGeometry {
    cell_size: u32,
    width: u32,
    height: u32,
}

impl GridGeometry {
    pub fn new(cell_size: u32, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The distance in pixels between two cell origins.
    fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    pub fn canvas_width(&self) -> u32 {
        self.pitch() * self.width + 1
    }

    pub fn canvas_height(&self) -> u32 {
        self.pitch() * self.height + 1
    }

    /// Top-left pixel of the cell at (`row`, `col`), just inside its border.
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.pitch() + 1, row * self.pitch() + 1)
    }

    /// Map a canvas-pixel position to the cell under it.
    ///
    /// Each axis is clamped independently, so positions beyond the last
    /// border (or negative ones) still resolve to the nearest valid cell.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> (u32, u32) {
        let pitch = self.pitch() as f64;

        let row = (y / pitch).floor().clamp(0.0, (self.height - 1) as f64);
        let col = (x / pitch).floor().clamp(0.0, (self.width - 1) as f64);

        (row as u32, col as u32)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn canvas_size() {
        let g = GridGeometry::new(5, 64, 48);

        assert_eq!(g.canvas_width(), 6 * 64 + 1);
        assert_eq!(g.canvas_height(), 6 * 48 + 1);
    }

    #[test]
    fn origin_of_first_cell() {
        let g = GridGeometry::new(5, 64, 48);

        assert_eq!(g.cell_origin(0, 0), (1, 1));
        assert_eq!(g.cell_origin(2, 3), (3 * 6 + 1, 2 * 6 + 1));
    }

    #[test]
    fn clamps_out_of_canvas_positions() {
        let g = GridGeometry::new(5, 10, 8);

        assert_eq!(g.pixel_to_cell(-40.0, -3.0), (0, 0));
        assert_eq!(g.pixel_to_cell(10_000.0, 2.0), (0, 9));
        assert_eq!(g.pixel_to_cell(2.0, 10_000.0), (7, 0));

        // the trailing border column still maps to the last cell
        let x = g.canvas_width() as f64 - 1.0;
        let y = g.canvas_height() as f64 - 1.0;
        assert_eq!(g.pixel_to_cell(x, y), (7, 9));
    }

    proptest! {
        #[test]
        fn origin_round_trips(
            cell_size in 1u32..32,
            width in 1u32..256,
            height in 1u32..256,
            row_seed: u32,
            col_seed: u32,
        ) {
            let g = GridGeometry::new(cell_size, width, height);
            let row = row_seed % height;
            let col = col_seed % width;

            let (x, y) = g.cell_origin(row, col);
            prop_assert_eq!(g.pixel_to_cell(x as f64, y as f64), (row, col));
        }

        #[test]
        fn never_out_of_range(
            cell_size in 1u32..32,
            width in 1u32..256,
            height in 1u32..256,
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
        ) {
            let g = GridGeometry::new(cell_size, width, height);

            let (row, col) = g.pixel_to_cell(x, y);
            prop_assert!(row < height);
            prop_assert!(col < width);
        }
    }
}
