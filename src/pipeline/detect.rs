use std::collections::HashSet;

use tracing::debug;

use crate::raster::PixelBuffer;
use crate::tokens::BoundingBox;

/// Minimum grayscale difference to a neighbor for a pixel to count as an edge.
pub const EDGE_THRESHOLD: f32 = 30.0;
/// Spacing of the seed grid, both axes.
pub const GRID_STEP: u32 = 10;
/// Growth per expansion step.
pub const EXPANSION_STEP: u32 = 10;
/// Furthest a region grows from its seed in any direction.
pub const MAX_EXPANSION: u32 = 100;
pub const MIN_REGION_WIDTH: u32 = 30;
pub const MIN_REGION_HEIGHT: u32 = 20;

/// One flag per pixel, row-major like the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    edges: Vec<bool>,
}

impl EdgeMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        self.edges[y as usize * self.width as usize + x as usize]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.edges
    }

    pub fn count(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }
}

/// Mark pixels whose grayscale value differs from one of their four
/// axis neighbors by more than [`EDGE_THRESHOLD`]. Pixels on the image
/// border are never edges.
pub fn detect_edges(pixels: &PixelBuffer) -> EdgeMap {
    let (width, height) = (pixels.width(), pixels.height());
    let gray: Vec<f32> = pixels
        .data()
        .chunks_exact(4)
        .map(|px| (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0)
        .collect();

    let w = width as usize;
    let mut edges = vec![false; gray.len()];
    for y in 1..height.saturating_sub(1) as usize {
        for x in 1..width.saturating_sub(1) as usize {
            let i = y * w + x;
            let center = gray[i];
            let max_diff = [gray[i - 1], gray[i + 1], gray[i - w], gray[i + w]]
                .iter()
                .map(|n| (center - n).abs())
                .fold(0.0, f32::max);
            edges[i] = max_diff > EDGE_THRESHOLD;
        }
    }

    let map = EdgeMap {
        width,
        height,
        edges,
    };
    debug!(edge_pixels = map.count(), "detected edges");
    map
}

/// Find candidate component rectangles by growing boxes from a coarse
/// seed grid.
///
/// Overlapping boxes from different seeds are all kept; only seeds on the
/// row and column a region grew along are skipped afterwards.
pub fn detect_regions(edges: &EdgeMap) -> Vec<BoundingBox> {
    let mut visited: HashSet<(u32, u32)> = HashSet::new();
    let mut regions = Vec::new();

    for y in (0..edges.height).step_by(GRID_STEP as usize) {
        for x in (0..edges.width).step_by(GRID_STEP as usize) {
            if !visited.insert((x, y)) {
                continue;
            }
            let Some(region) = grow_region(edges, x, y) else {
                continue;
            };
            mark_seed_cross(&mut visited, &region, x, y);
            regions.push(region);
        }
    }

    debug!(regions = regions.len(), "segmented regions");
    regions
}

/// Grow a box along the seed's own row and column, one ring of
/// [`EXPANSION_STEP`] pixels at a time, until a ring holds no edge pixel.
/// Returns `None` for boxes under the size floor.
fn grow_region(edges: &EdgeMap, x: u32, y: u32) -> Option<BoundingBox> {
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (x, x, y, y);
    let mut inner = 0;

    for radius in (EXPANSION_STEP..=MAX_EXPANSION).step_by(EXPANSION_STEP as usize) {
        let mut found = false;
        for d in inner + 1..=radius {
            if x >= d && edges.is_edge(x - d, y) {
                min_x = min_x.min(x - d);
                found = true;
            }
            if x + d < edges.width && edges.is_edge(x + d, y) {
                max_x = max_x.max(x + d);
                found = true;
            }
            if y >= d && edges.is_edge(x, y - d) {
                min_y = min_y.min(y - d);
                found = true;
            }
            if y + d < edges.height && edges.is_edge(x, y + d) {
                max_y = max_y.max(y + d);
                found = true;
            }
        }
        if !found {
            break;
        }
        inner = radius;
    }

    let width = max_x - min_x;
    let height = max_y - min_y;
    if width < MIN_REGION_WIDTH || height < MIN_REGION_HEIGHT {
        return None;
    }
    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width,
        height,
    })
}

fn mark_seed_cross(visited: &mut HashSet<(u32, u32)>, region: &BoundingBox, x: u32, y: u32) {
    let grid_from = |start: u32| start.div_ceil(GRID_STEP) * GRID_STEP;
    let right = region.x + region.width;
    let bottom = region.y + region.height;
    for gx in (grid_from(region.x)..=right).step_by(GRID_STEP as usize) {
        visited.insert((gx, y));
    }
    for gy in (grid_from(region.y)..=bottom).step_by(GRID_STEP as usize) {
        visited.insert((x, gy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 3]) -> PixelBuffer {
        let pixels: Vec<[u8; 3]> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| paint(x, y))
            .collect();
        PixelBuffer::from_rgb(width, height, &pixels).unwrap()
    }

    /// White canvas with a 5px black/white checker patch.
    fn checker_patch(width: u32, height: u32, patch: BoundingBox) -> PixelBuffer {
        canvas(width, height, |x, y| {
            let inside = x >= patch.x
                && x < patch.x + patch.width
                && y >= patch.y
                && y < patch.y + patch.height;
            if inside && ((x / 5) + (y / 5)) % 2 == 0 {
                [0, 0, 0]
            } else {
                [255, 255, 255]
            }
        })
    }

    fn bbox(x: u32, y: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            x,
            y,
            width,
            height,
        }
    }

    /// Edge map holding only the outlines of `(x0, y0, x1, y1)` rectangles.
    fn outlines(width: u32, height: u32, rects: &[(u32, u32, u32, u32)]) -> EdgeMap {
        let on_outline = |x: u32, y: u32| {
            rects.iter().any(|&(x0, y0, x1, y1)| {
                let on_side = (x == x0 || x == x1) && (y0..=y1).contains(&y);
                let on_cap = (y == y0 || y == y1) && (x0..=x1).contains(&x);
                on_side || on_cap
            })
        };
        let edges = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| on_outline(x, y))
            .collect();
        EdgeMap {
            width,
            height,
            edges,
        }
    }

    #[test]
    fn uniform_image_has_no_edges() {
        let pixels = canvas(20, 20, |_, _| [120, 120, 120]);
        let edges = detect_edges(&pixels);
        assert_eq!(edges.count(), 0);
        assert!(detect_regions(&edges).is_empty());
    }

    #[test]
    fn step_produces_edges_on_both_sides() {
        let pixels = canvas(10, 5, |x, _| [if x < 5 { 0 } else { 255 }; 3]);
        let edges = detect_edges(&pixels);
        assert!(edges.is_edge(4, 2));
        assert!(edges.is_edge(5, 2));
        assert!(!edges.is_edge(3, 2));
        assert_eq!(edges.as_slice().len(), 50);
    }

    #[test]
    fn border_pixels_are_never_edges() {
        let pixels = canvas(6, 6, |x, y| [if (x + y) % 2 == 0 { 0 } else { 255 }; 3]);
        let edges = detect_edges(&pixels);
        for i in 0..6 {
            assert!(!edges.is_edge(i, 0));
            assert!(!edges.is_edge(i, 5));
            assert!(!edges.is_edge(0, i));
            assert!(!edges.is_edge(5, i));
        }
        assert!(edges.is_edge(2, 2));
    }

    #[test]
    fn small_difference_is_not_an_edge() {
        let pixels = canvas(5, 5, |x, _| [if x < 2 { 100 } else { 130 }; 3]);
        assert_eq!(detect_edges(&pixels).count(), 0);
    }

    #[test]
    fn tiny_images_do_not_panic() {
        let pixels = canvas(1, 1, |_, _| [0, 0, 0]);
        let edges = detect_edges(&pixels);
        assert_eq!(edges.count(), 0);
        assert!(detect_regions(&edges).is_empty());
    }

    #[test]
    fn checker_patch_yields_region_covering_it() {
        let patch = BoundingBox {
            x: 20,
            y: 20,
            width: 120,
            height: 40,
        };
        let edges = detect_edges(&checker_patch(200, 100, patch));
        let regions = detect_regions(&edges);
        assert!(!regions.is_empty());

        let covering = regions.iter().any(|r| {
            r.x <= patch.x
                && r.y <= patch.y
                && r.x + r.width >= patch.x + patch.width - 1
                && r.y + r.height >= patch.y + patch.height - 1
        });
        assert!(covering, "no region covers the patch: {regions:?}");
    }

    #[test]
    fn regions_respect_size_floor() {
        let patch = BoundingBox {
            x: 10,
            y: 10,
            width: 25,
            height: 15,
        };
        let edges = detect_edges(&checker_patch(100, 60, patch));
        for r in detect_regions(&edges) {
            assert!(r.width >= MIN_REGION_WIDTH, "{r:?}");
            assert!(r.height >= MIN_REGION_HEIGHT, "{r:?}");
        }
    }

    #[test]
    fn growth_is_capped_at_max_expansion() {
        let patch = BoundingBox {
            x: 0,
            y: 0,
            width: 400,
            height: 60,
        };
        let edges = detect_edges(&checker_patch(400, 60, patch));
        for r in detect_regions(&edges) {
            assert!(r.width <= 2 * MAX_EXPANSION, "{r:?}");
        }
    }

    #[test]
    fn detection_is_deterministic() {
        let patch = BoundingBox {
            x: 15,
            y: 25,
            width: 90,
            height: 50,
        };
        let pixels = checker_patch(160, 120, patch);
        let first = detect_regions(&detect_edges(&pixels));
        let second = detect_regions(&detect_edges(&pixels));
        assert_eq!(first, second);
    }

    #[test]
    fn overlapping_regions_are_all_kept() {
        // Seeds (30, 20), (40, 30) and (50, 40) each grow their own box.
        let edges = outlines(110, 90, &[(15, 15, 55, 45), (25, 25, 65, 55)]);
        let regions = detect_regions(&edges);
        assert_eq!(
            regions,
            vec![
                bbox(15, 15, 40, 40),
                bbox(15, 15, 50, 40),
                bbox(15, 15, 50, 40),
            ]
        );
    }

    #[test]
    fn one_outline_is_found_from_several_rows() {
        let edges = outlines(80, 70, &[(15, 15, 55, 45)]);
        let regions = detect_regions(&edges);
        assert_eq!(regions, vec![bbox(15, 15, 40, 30), bbox(15, 15, 40, 30)]);
    }
}
