//! Rotate-flip-crop transform for uploaded images.
//!
//! Produces the pixel rectangle a user selected in the admin cropper,
//! after an arbitrary rotation and optional flips. There is no single
//! "rotate around a point, then crop" primitive, so this runs in two
//! passes: render the source onto a square canvas large enough to
//! bound any rotation of it, rotating/flipping around the canvas
//! center, then copy the requested rectangle out of that canvas so it
//! lands at the origin of the result.

use image::{DynamicImage, Rgba, RgbaImage};

/// Pixel rectangle selected in source-image coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CropRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Mirroring applied around the canvas center before cropping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Side length of the square canvas that bounds every rotation of the
/// source: the diagonal of the largest centered square, rounded up.
///
/// Also the largest crop side [`crop_rotated`] supports for a source
/// of this size; anything beyond it can only produce transparent
/// pixels, so callers reject bigger rectangles up front.
pub fn safe_area(width: u32, height: u32) -> u32 {
    let max_size = f64::from(width.max(height));
    (2.0 * (max_size / 2.0) * std::f64::consts::SQRT_2).ceil() as u32
}

/// Apply rotation (degrees, clockwise), flips, and a crop to `source`.
///
/// The crop rectangle is expressed in the source image's own
/// coordinates; it may extend past the source bounds, in which case
/// the uncovered pixels come out transparent. With a full-image
/// rectangle, zero rotation, and no flips the output is the source,
/// pixel for pixel.
pub fn crop_rotated(
    source: &DynamicImage,
    crop: CropRect,
    rotation_degrees: f64,
    flip: Flip,
) -> RgbaImage {
    let src = source.to_rgba8();
    let (src_w, src_h) = src.dimensions();

    let side = safe_area(src_w, src_h);
    let center = f64::from(side) / 2.0;
    // Integer draw offset keeps the zero-rotation path an exact pixel copy.
    let off_x = (i64::from(side) - i64::from(src_w)) / 2;
    let off_y = (i64::from(side) - i64::from(src_h)) / 2;

    // Pass 1: rotated/flipped source rendered around the canvas center.
    // Inverse mapping with nearest-neighbor sampling, pixel-center convention.
    let theta = rotation_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let flip_x = if flip.horizontal { -1.0 } else { 1.0 };
    let flip_y = if flip.vertical { -1.0 } else { 1.0 };

    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT);
    for (cx, cy, px) in canvas.enumerate_pixels_mut() {
        let vx = f64::from(cx) + 0.5 - center;
        let vy = f64::from(cy) + 0.5 - center;
        // Undo the forward rotate-then-flip around the center.
        let rx = vx * cos + vy * sin;
        let ry = -vx * sin + vy * cos;
        let sx = (rx / flip_x + center).floor() as i64 - off_x;
        let sy = (ry / flip_y + center).floor() as i64 - off_y;
        if (0..i64::from(src_w)).contains(&sx) && (0..i64::from(src_h)).contains(&sy) {
            *px = *src.get_pixel(sx as u32, sy as u32);
        }
    }

    // Pass 2: lift the requested rectangle out of the canvas. The crop
    // origin in canvas coordinates is the draw offset plus the crop
    // offset in source coordinates.
    let mut out = RgbaImage::from_pixel(crop.width, crop.height, TRANSPARENT);
    for (ox, oy, px) in out.enumerate_pixels_mut() {
        let cx = i64::from(ox) + off_x + crop.x;
        let cy = i64::from(oy) + off_y + crop.y;
        if (0..i64::from(side)).contains(&cx) && (0..i64::from(side)).contains(&cy) {
            *px = *canvas.get_pixel(cx as u32, cy as u32);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 test image where every pixel value encodes its position.
    fn gradient() -> DynamicImage {
        let img = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8 * 16, y as u8 * 16, 200, 255]));
        DynamicImage::ImageRgba8(img)
    }

    fn full_rect() -> CropRect {
        CropRect {
            x: 0,
            y: 0,
            width: 4,
            height: 4,
        }
    }

    #[test]
    fn identity_crop_preserves_pixels() {
        let src = gradient();
        let out = crop_rotated(&src, full_rect(), 0.0, Flip::default());
        assert_eq!(out, src.to_rgba8());
    }

    #[test]
    fn horizontal_flip_mirrors_columns() {
        let src = gradient();
        let out = crop_rotated(
            &src,
            full_rect(),
            0.0,
            Flip {
                horizontal: true,
                vertical: false,
            },
        );
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(out.get_pixel(x, y), src.to_rgba8().get_pixel(3 - x, y));
            }
        }
    }

    #[test]
    fn rotate_180_reverses_both_axes() {
        let src = gradient();
        let out = crop_rotated(&src, full_rect(), 180.0, Flip::default());
        let src = src.to_rgba8();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(out.get_pixel(x, y), src.get_pixel(3 - x, 3 - y));
            }
        }
    }

    #[test]
    fn sub_rectangle_is_offset_copy() {
        let src = gradient();
        let out = crop_rotated(
            &src,
            CropRect {
                x: 1,
                y: 2,
                width: 2,
                height: 2,
            },
            0.0,
            Flip::default(),
        );
        let src = src.to_rgba8();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(out.get_pixel(x, y), src.get_pixel(x + 1, y + 2));
            }
        }
    }

    #[test]
    fn out_of_bounds_crop_is_transparent() {
        let src = gradient();
        let out = crop_rotated(
            &src,
            CropRect {
                x: -2,
                y: -2,
                width: 2,
                height: 2,
            },
            0.0,
            Flip::default(),
        );
        assert!(out.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn crop_up_to_the_canvas_side_is_supported() {
        let src = gradient();
        let side = safe_area(4, 4);
        let out = crop_rotated(
            &src,
            CropRect {
                x: -1,
                y: -1,
                width: side,
                height: side,
            },
            0.0,
            Flip::default(),
        );
        assert_eq!(out.dimensions(), (side, side));
        // The source sits at the draw offset, padded with transparency.
        assert_eq!(out.get_pixel(1, 1), src.to_rgba8().get_pixel(0, 0));
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn safe_area_bounds_the_diagonal() {
        // Must cover the source diagonal so no rotation clips it.
        let side = safe_area(100, 60);
        assert!(f64::from(side) >= 100.0 * std::f64::consts::SQRT_2);
    }
}
