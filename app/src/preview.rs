use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use walkgrid::utils::normalize2;
use walkgrid::{CellKind, GeneratedMap};

const FLAT_GROUND: [u8; 3] = [40, 40, 40];
const VISITED: [u8; 3] = [255, 255, 255];
const PATH: [u8; 3] = [220, 30, 30];
const START: [u8; 3] = [30, 200, 60];
const END: [u8; 3] = [40, 90, 230];

// Linearly interpolate between two RGB triples
fn lerp_color(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t) as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t) as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t) as u8,
    ]
}

// Top-down image of a generated map, `cell_px` pixels per cell.
// Grid y grows upward, image rows grow downward.
pub fn render_preview(map: &GeneratedMap, cell_px: u32) -> RgbImage {
    let grid = &map.grid;
    let dim = grid.dimension() as u32;
    let cell_px = cell_px.max(1);
    let mut img = RgbImage::new(dim * cell_px, dim * cell_px);

    // deep water to sand to grass to rock
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.1, 0.4)),
        (0.35, LinSrgb::new(0.8, 0.75, 0.5)),
        (0.60, LinSrgb::new(0.15, 0.55, 0.2)),
        (1.00, LinSrgb::new(0.45, 0.4, 0.35)),
    ]);
    let heights = normalize2(&grid.elevations());
    let has_relief = grid.cells().any(|c| c.elevation != 0.0);
    let max_weight = grid.cells().map(|c| c.weight).max().unwrap_or(0).max(1);

    for cell in grid.cells() {
        let (x, y) = cell.position();
        let base = if has_relief {
            let col: LinSrgb = gradient.get(heights[y][x]);
            let rgb = col.into_format::<u8>();
            [rgb.red, rgb.green, rgb.blue]
        } else {
            FLAT_GROUND
        };
        let color = match cell.kind {
            CellKind::Start => START,
            CellKind::End => END,
            CellKind::Empty if cell.visited() => {
                // heavier traffic reads brighter
                lerp_color(base, VISITED, 0.4 + 0.6 * cell.weight as f32 / max_weight as f32)
            }
            CellKind::Empty => base,
        };
        fill_cell(&mut img, x as u32, y as u32, dim, cell_px, color);
    }

    let mut prev = map.start;
    for &next in &map.path {
        let a = cell_center(prev, dim, cell_px);
        let b = cell_center(next, dim, cell_px);
        draw_line(&mut img, a, b, PATH);
        prev = next;
    }

    img
}

fn fill_cell(img: &mut RgbImage, x: u32, y: u32, dim: u32, cell_px: u32, color: [u8; 3]) {
    let row = dim - 1 - y;
    for py in row * cell_px..(row + 1) * cell_px {
        for px in x * cell_px..(x + 1) * cell_px {
            img.put_pixel(px, py, Rgb(color));
        }
    }
}

fn cell_center(pos: (usize, usize), dim: u32, cell_px: u32) -> (i64, i64) {
    let row = dim - 1 - pos.1 as u32;
    (
        (pos.0 as u32 * cell_px + cell_px / 2) as i64,
        (row * cell_px + cell_px / 2) as i64,
    )
}

// Bresenham, clipped to the image
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: [u8; 3]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, Rgb(color));
        }
        if (x, y) == to {
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
}

#[cfg(test)]
mod tests {
    use super::{PATH, cell_center, render_preview};
    use image::Rgb;
    use walkgrid::{GeneratorConfig, generate};

    fn sample_map() -> walkgrid::GeneratedMap {
        let config = GeneratorConfig {
            dimension: 17,
            steps: 12,
            step_range: 4,
            ..GeneratorConfig::with_seed("preview")
        };
        generate(&config).unwrap()
    }

    #[test]
    fn preview_size_follows_cell_px() {
        let map = sample_map();
        let img = render_preview(&map, 4);
        assert_eq!(img.dimensions(), (68, 68));
        let img = render_preview(&map, 0);
        assert_eq!(img.dimensions(), (17, 17));
    }

    #[test]
    fn preview_draws_path_through_cell_centers() {
        let map = sample_map();
        let img = render_preview(&map, 6);
        for &pos in &map.path {
            let (cx, cy) = cell_center(pos, 17, 6);
            assert_eq!(img.get_pixel(cx as u32, cy as u32), &Rgb(PATH));
        }
    }
}
