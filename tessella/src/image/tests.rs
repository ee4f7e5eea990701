use common::float_ext::FloatExt;
use glam::Vec3;

use super::*;

fn gradient(width: usize, height: usize) -> Image<f32> {
    Image::from_fn(width, height, |x, _| x as f32)
}

#[test]
fn test_nearest_rounds_to_closest_texel() {
    let image = gradient(4, 1);
    // s * w = 1.4 -> texel 1, 1.6 -> texel 2
    assert_eq!(sample_nearest(&image, 0.35, 0.0), 1.0);
    assert_eq!(sample_nearest(&image, 0.4, 0.0), 2.0);
    assert_eq!(sample_nearest(&image, 0.0, 0.0), 0.0);
}

#[test]
fn test_nearest_clamps_at_last_texel() {
    let image = gradient(4, 2);
    // 0.99 * 4 rounds to 4, which is clamped to column 3
    assert_eq!(sample_nearest(&image, 0.99, 0.99), 3.0);
}

#[test]
fn test_bilinear_hits_texels_exactly() {
    let image = Image::from_fn(4, 4, |x, y| (x + 10 * y) as f32);
    for y in 0..4 {
        for x in 0..4 {
            let s = x as f32 / 4.0;
            let t = y as f32 / 4.0;
            assert_eq!(sample_bilinear(&image, s, t), (x + 10 * y) as f32);
        }
    }
}

#[test]
fn test_bilinear_interpolates_between_taps() {
    let image = Image::from_row_major(2, 2, vec![0.0f32, 1.0, 2.0, 3.0]);
    // Halfway between all four taps
    assert!(sample_bilinear(&image, 0.25, 0.25).approximately_eq(1.5));
    // Halfway along the top row
    assert!(sample_bilinear(&image, 0.25, 0.0).approximately_eq(0.5));
    // Quarter of the way down the left column
    assert!(sample_bilinear(&image, 0.0, 0.125).approximately_eq(0.5));
}

#[test]
fn test_bilinear_clamps_past_last_column_and_row() {
    let image = Image::from_row_major(2, 2, vec![0.0f32, 1.0, 2.0, 3.0]);
    // u = 1.5 blends column 1 with itself
    assert!(sample_bilinear(&image, 0.75, 0.0).approximately_eq(1.0));
    assert!(sample_bilinear(&image, 0.75, 0.75).approximately_eq(3.0));
    assert!(sample_bilinear(&image, 0.0, 0.75).approximately_eq(2.0));
}

#[test]
fn test_bilinear_constant_image_is_constant() {
    let color = Vec3::new(0.2, 0.5, 0.9);
    let image = Image::filled(5, 3, color);
    for i in 0..100 {
        let s = i as f32 / 100.0;
        let t = (99 - i) as f32 / 100.0;
        let sampled = sample_bilinear(&image, s, t);
        assert!((sampled - color).abs().max_element() < 1e-6);
    }
}

#[test]
fn test_resize_constant_image() {
    let image = Image::filled(4, 4, 0.75f32);
    for filter in [ResizeFilter::Nearest, ResizeFilter::Bilinear] {
        let out = resize(&image, 9, 7, filter);
        assert_eq!((out.width(), out.height()), (9, 7));
        assert!(out.iter().all(|(_, _, v)| v.approximately_eq(0.75)));
    }
}

#[test]
fn test_resize_upscale_by_two_interpolates() {
    let image = gradient(2, 1);
    let out = resize(&image, 4, 1, ResizeFilter::Bilinear);
    let values: Vec<f32> = out.to_row_major();
    // u = 0, 0.5, 1.0, 1.5 (clamped)
    assert_eq!(values, vec![0.0, 0.5, 1.0, 1.0]);
}

#[test]
fn test_resize_nearest_downscale_picks_texels() {
    let image = gradient(8, 1);
    let out = resize(&image, 4, 1, ResizeFilter::Nearest);
    assert_eq!(out.to_row_major(), vec![0.0, 2.0, 4.0, 6.0]);
}

#[test]
#[should_panic(expected = "dimensions must be non-zero")]
fn test_resize_to_zero_panics() {
    let image = gradient(2, 2);
    let _ = resize(&image, 0, 2, ResizeFilter::Bilinear);
}

#[test]
fn test_default_filter_is_bilinear() {
    assert_eq!(ResizeFilter::default(), ResizeFilter::Bilinear);
}
