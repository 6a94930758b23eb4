use image::{Rgba, RgbaImage};
use crate::traits::OutlineExtractor;

/// Left, right, up, down. Diagonals are never inspected.
const NEIGHBOUR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
fn is_transparent(pixel: &Rgba<u8>) -> bool {
    pixel.0[3] == 0
}

/// Returns true when any 4-connected neighbour of `(x, y)` is transparent or outside the image.
///
/// The pixel at `(x, y)` itself is not inspected; callers skip transparent pixels first.
pub fn is_boundary(source: &RgbaImage, x: u32, y: u32) -> bool {
    let (width, height) = source.dimensions();

    NEIGHBOUR_OFFSETS.iter().any(|&(dx, dy)| {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;

        // Outside counts as transparent
        if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
            return true;
        }

        is_transparent(source.get_pixel(nx as u32, ny as u32))
    })
}

/// Extract the outline of the opaque region of `source`.
///
/// The result has the same dimensions. Every pixel is either `(0, 0, 0, 0)` or an exact
/// copy of the source pixel at the same coordinate, kept only when that pixel is opaque
/// and has a transparent or out-of-bounds neighbour.
pub fn extract_outline(source: &RgbaImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut outline = RgbaImage::new(width, height);

    for (x, y, pixel) in source.enumerate_pixels() {
        if is_transparent(pixel) {
            continue;
        }
        if is_boundary(source, x, y) {
            outline.put_pixel(x, y, *pixel);
        }
    }

    outline
}

/// Outline extractor using the 4-neighbour boundary rule
#[derive(Debug, Clone, Copy, Default)]
pub struct FourNeighbourExtractor;

impl OutlineExtractor for FourNeighbourExtractor {
    fn extract(&self, source: &RgbaImage) -> RgbaImage {
        extract_outline(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([220, 40, 40, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn opaque_count(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| !is_transparent(p)).count()
    }

    /// A `size`x`size` canvas with a filled square covering `start..end` on both axes
    fn square_on_canvas(size: u32, start: u32, end: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (start..end).contains(&x) && (start..end).contains(&y) {
                RED
            } else {
                CLEAR
            }
        })
    }

    /// Deterministic mix of colors, partial alpha and holes
    fn patterned_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let seed = (x * 7 + y * 13) % 5;
            let alpha = if seed == 0 { 0 } else { (seed * 50) as u8 };
            Rgba([(x * 17) as u8, (y * 31) as u8, (x + y) as u8, alpha])
        })
    }

    #[test]
    fn test_dimensions_preserved() {
        for (w, h) in [(1, 1), (3, 7), (16, 16), (0, 5), (5, 0)] {
            let source = patterned_image(w, h);
            let outline = extract_outline(&source);
            assert_eq!(outline.dimensions(), (w, h));
        }
    }

    #[test]
    fn test_zero_sized_image() {
        let source = RgbaImage::new(0, 0);
        let outline = extract_outline(&source);
        assert_eq!(outline.dimensions(), (0, 0));
        assert!(outline.as_raw().is_empty());
    }

    #[test]
    fn test_fully_transparent_image() {
        let source = RgbaImage::new(6, 3);
        let outline = extract_outline(&source);
        assert_eq!(outline, source);
    }

    #[test]
    fn test_transparent_pixels_map_to_zero() {
        // Colour data in a transparent pixel must not leak into the output
        let mut source = RgbaImage::from_pixel(3, 3, RED);
        source.put_pixel(1, 1, Rgba([255, 255, 255, 0]));

        let outline = extract_outline(&source);
        assert_eq!(*outline.get_pixel(1, 1), CLEAR);
    }

    #[test]
    fn test_output_is_subset_of_source() {
        let source = patterned_image(23, 17);
        let outline = extract_outline(&source);

        for (x, y, pixel) in outline.enumerate_pixels() {
            if *pixel == CLEAR {
                continue;
            }
            assert_eq!(pixel, source.get_pixel(x, y), "pixel ({x}, {y}) was modified");
        }
        for (x, y, pixel) in source.enumerate_pixels() {
            if is_transparent(pixel) {
                assert_eq!(*outline.get_pixel(x, y), CLEAR);
            }
        }
    }

    #[test]
    fn test_solid_rectangle_keeps_border_ring() {
        let (w, h) = (5, 4);
        let source = RgbaImage::from_pixel(w, h, RED);
        let outline = extract_outline(&source);

        for (x, y, pixel) in outline.enumerate_pixels() {
            let on_ring = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            if on_ring {
                assert_eq!(*pixel, RED, "ring pixel ({x}, {y}) missing");
            } else {
                assert_eq!(*pixel, CLEAR, "interior pixel ({x}, {y}) kept");
            }
        }
        assert_eq!(opaque_count(&outline), (2 * w + 2 * (h - 2)) as usize);
    }

    #[test]
    fn test_single_isolated_pixel() {
        let mut source = RgbaImage::new(3, 3);
        source.put_pixel(1, 1, RED);

        let outline = extract_outline(&source);
        assert_eq!(outline, source);
    }

    #[test]
    fn test_single_row_and_column_are_all_boundary() {
        let row = RgbaImage::from_pixel(8, 1, RED);
        assert_eq!(extract_outline(&row), row);

        let column = RgbaImage::from_pixel(1, 8, RED);
        assert_eq!(extract_outline(&column), column);
    }

    #[test]
    fn test_diagonal_transparency_is_ignored() {
        let mut source = RgbaImage::from_pixel(5, 5, RED);
        source.put_pixel(1, 1, CLEAR);

        // (2, 2) touches the hole only diagonally
        assert!(!is_boundary(&source, 2, 2));
        assert!(is_boundary(&source, 2, 1));
        assert!(is_boundary(&source, 1, 2));

        let outline = extract_outline(&source);
        assert_eq!(*outline.get_pixel(2, 2), CLEAR);
        assert_eq!(*outline.get_pixel(2, 1), RED);
        assert_eq!(*outline.get_pixel(3, 3), CLEAR);
    }

    #[test]
    fn test_diagonal_line_is_all_boundary() {
        let mut source = RgbaImage::new(4, 4);
        for i in 0..4 {
            source.put_pixel(i, i, RED);
        }
        assert_eq!(extract_outline(&source), source);
    }

    #[test]
    fn test_partial_alpha_counts_as_opaque() {
        let faint = Rgba([10, 20, 30, 1]);
        let mut source = RgbaImage::from_pixel(3, 3, RED);
        source.put_pixel(0, 1, faint);

        let outline = extract_outline(&source);
        assert_eq!(*outline.get_pixel(0, 1), faint);
        // The faint neighbour is opaque, so the centre stays interior
        assert_eq!(*outline.get_pixel(1, 1), CLEAR);
    }

    #[test]
    fn test_extraction_shrinks_thick_shapes() {
        let source = square_on_canvas(7, 1, 6);
        let outline = extract_outline(&source);

        assert_eq!(opaque_count(&source), 25);
        assert_eq!(opaque_count(&outline), 16);
        assert!(opaque_count(&outline) < opaque_count(&source));
    }

    #[test]
    fn test_re_extraction_is_a_fixed_point() {
        // Every kept pixel still has the transparent neighbour that made it boundary
        for source in [square_on_canvas(7, 1, 6), RgbaImage::from_pixel(6, 4, RED), patterned_image(19, 11)] {
            let once = extract_outline(&source);
            let twice = extract_outline(&once);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_extractor_trait_matches_function() {
        let source = patterned_image(9, 9);
        let extractor = FourNeighbourExtractor;
        assert_eq!(extractor.extract(&source), extract_outline(&source));
    }
}
