use crate::canvas::{ALIVE_COLOR, Canvas, DEAD_COLOR, GRID_COLOR};
use crate::geometry::GridGeometry;
use crate::universe::Cell;

/// Repaints the whole grid every call.
///
/// No incremental diffing happens here: the grid is fixed and small, so a
/// deterministic full repaint is both simpler and fast enough. Dead cells
/// are painted explicitly so the result does not depend on prior surface
/// contents.
pub struct Renderer {
    geometry: GridGeometry,
}

impl Renderer {
    pub fn new(geometry: GridGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Draw the `width + 1` vertical and `height + 1` horizontal border
    /// lines in a single pass.
    pub fn draw_grid(&self, canvas: &mut Canvas) {
        let pitch = self.geometry.cell_size() + 1;

        for i in 0..=self.geometry.width() {
            canvas.vline(i * pitch, GRID_COLOR);
        }

        for j in 0..=self.geometry.height() {
            canvas.hline(j * pitch, GRID_COLOR);
        }
    }

    /// Paint every cell of the snapshot, alive or dead.
    ///
    /// A snapshot shorter than `width * height` is a contract violation and
    /// panics through indexing.
    pub fn draw_cells(&self, canvas: &mut Canvas, snapshot: &[Cell]) {
        let size = self.geometry.cell_size();

        for row in 0..self.geometry.height() {
            for col in 0..self.geometry.width() {
                let idx = (row * self.geometry.width() + col) as usize;
                let color = if snapshot[idx].is_alive() {
                    ALIVE_COLOR
                } else {
                    DEAD_COLOR
                };

                let (x, y) = self.geometry.cell_origin(row, col);
                canvas.fill_rect(x, y, size, size, color);
            }
        }
    }

    /// One full frame: grid lines, then cells.
    pub fn draw(&self, canvas: &mut Canvas, snapshot: &[Cell]) {
        self.draw_grid(canvas);
        self.draw_cells(canvas, snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::Universe;

    fn setup(width: u32, height: u32) -> (Renderer, Canvas) {
        let geometry = GridGeometry::new(3, width, height);
        let canvas = Canvas::new(geometry.canvas_width(), geometry.canvas_height());

        (Renderer::new(geometry), canvas)
    }

    #[test]
    fn grid_lines_land_on_borders() {
        let (renderer, mut canvas) = setup(4, 4);
        renderer.draw_grid(&mut canvas);

        // borders every cell_size + 1 pixels, on both axes
        for i in 0..=4 {
            assert_eq!(canvas.pixel(i * 4, 7), GRID_COLOR);
            assert_eq!(canvas.pixel(7, i * 4), GRID_COLOR);
        }

        // cell interiors untouched
        assert_eq!(canvas.pixel(1, 1), DEAD_COLOR);
        assert_eq!(canvas.pixel(6, 5), DEAD_COLOR);
    }

    #[test]
    fn live_cell_fills_its_rect_only() {
        let (renderer, mut canvas) = setup(4, 4);
        let mut universe = Universe::new_dead(4, 4);
        universe.toggle_cell(1, 2);

        renderer.draw(&mut canvas, universe.cells());

        // cell (1, 2) spans pixels x 9..12, y 5..8
        for y in 5..8 {
            for x in 9..12 {
                assert_eq!(canvas.pixel(x, y), ALIVE_COLOR);
            }
        }

        // neighbors stay dead-colored
        assert_eq!(canvas.pixel(5, 5), DEAD_COLOR);
        assert_eq!(canvas.pixel(13, 5), DEAD_COLOR);

        // the border between cells survives the fill
        assert_eq!(canvas.pixel(8, 6), GRID_COLOR);
        assert_eq!(canvas.pixel(12, 6), GRID_COLOR);
    }

    #[test]
    fn repaint_clears_stale_cells() {
        let (renderer, mut canvas) = setup(4, 4);
        let mut universe = Universe::new_dead(4, 4);

        universe.toggle_cell(0, 0);
        renderer.draw(&mut canvas, universe.cells());
        assert_eq!(canvas.pixel(1, 1), ALIVE_COLOR);

        universe.toggle_cell(0, 0);
        renderer.draw(&mut canvas, universe.cells());
        assert_eq!(canvas.pixel(1, 1), DEAD_COLOR);
    }
}
