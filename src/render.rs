use ndarray::Array2;

use crate::colormap::{heat_rgb, normalize};

// Faint grid-line overlay at interior cell boundaries.
const GRID_LINE: [u8; 3] = [40, 40, 40];
const GRID_LINE_BLEND: f64 = 0.25;

#[inline]
fn blend(c: [u8; 3], toward: [u8; 3], t: f64) -> [u8; 3] {
    [
        (c[0] as f64 + (toward[0] as f64 - c[0] as f64) * t) as u8,
        (c[1] as f64 + (toward[1] as f64 - c[1] as f64) * t) as u8,
        (c[2] as f64 + (toward[2] as f64 - c[2] as f64) * t) as u8,
    ]
}

/// Rasterize the field into a `width * height * 3` RGB byte buffer.
///
/// The raster is partitioned into `nx`-by-`ny` cells, each filled with the
/// heat-map color of its cell's temperature against `(min, max)`. The
/// vertical axis is flipped so field row `j` draws at raster cell row
/// `ny - 1 - j` and physical y points up. Faint grid lines mark interior
/// cell boundaries; they only touch the output pixels, never the field.
pub fn render_field(
    u: &Array2<f64>,
    (min, max): (f64, f64),
    width: usize,
    height: usize,
) -> Vec<u8> {
    let (nx, ny) = u.dim();

    assert!(width >= nx);
    assert!(height >= ny);

    // Cell index per pixel row/column of the raster.
    let col_cell: Vec<usize> = (0..width).map(|px| px * nx / width).collect();
    let row_cell: Vec<usize> = (0..height).map(|py| py * ny / height).collect();

    let mut rgb = vec![0u8; width * height * 3];

    for py in 0..height {
        let j = ny - 1 - row_cell[py];
        let on_row_line = py > 0 && row_cell[py] != row_cell[py - 1];

        for px in 0..width {
            let i = col_cell[px];
            let mut color = heat_rgb(normalize(u[[i, j]], min, max));

            let on_col_line = px > 0 && col_cell[px] != col_cell[px - 1];
            if on_row_line || on_col_line {
                color = blend(color, GRID_LINE, GRID_LINE_BLEND);
            }

            let o = (py * width + px) * 3;
            rgb[o..o + 3].copy_from_slice(&color);
        }
    }

    rgb
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::Array;

    #[test]
    fn test_buffer_size() {
        let u = Array::zeros((4, 3));
        let rgb = render_field(&u, (0.0, 1.0), 40, 30);
        assert_eq!(rgb.len(), 40 * 30 * 3);
    }

    #[test]
    fn test_vertical_flip() {
        // One hot cell at (i = 0, j = ny - 1): physically the top-left
        // corner, so it must land in the top-left of the raster.
        let mut u = Array::zeros((4, 4));
        u[[0, 3]] = 1.0;

        let rgb = render_field(&u, (0.0, 1.0), 8, 8);

        assert_eq!(&rgb[0..3], &[255, 0, 0]);
        // Bottom-left raster corner shows field row j = 0, which is cold.
        let o = 7 * 8 * 3;
        assert_eq!(&rgb[o..o + 3], &[0, 0, 255]);
    }

    #[test]
    fn test_degenerate_range_renders_cold() {
        let u = Array::from_elem((3, 3), 7.0);
        let rgb = render_field(&u, (7.0, 7.0), 6, 6);
        // normalized falls back to 0 everywhere -> pure blue fill.
        assert_eq!(&rgb[0..3], &[0, 0, 255]);
    }

    #[test]
    fn test_grid_lines_darken_cell_boundaries() {
        let u = Array::zeros((2, 2));
        let rgb = render_field(&u, (0.0, 1.0), 8, 8);

        // Pixel (4, 0) is the first column of the second cell.
        let line = &rgb[4 * 3..4 * 3 + 3];
        let fill = &rgb[0..3];
        assert_ne!(line, fill);
        assert_eq!(fill, &[0, 0, 255]);
    }

    #[test]
    fn test_render_leaves_field_untouched() {
        let u = Array::from_elem((3, 3), 1.25);
        let before = u.clone();
        let _ = render_field(&u, (0.0, 2.0), 9, 9);
        assert_eq!(u, before);
    }
}
