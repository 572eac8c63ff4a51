//! Brightness/contrast adjustment for the displayed image.
//!
//! Both values are percentages (0–200, neutral 100) with CSS-filter
//! semantics: brightness multiplies each channel, then contrast pivots it
//! around mid-grey. Filtering always starts from the untouched decoded
//! source pixels, so adjustments never accumulate or destroy data.

use image::RgbaImage;

/// Apply brightness then contrast to a copy of `source`. Alpha is preserved.
pub fn apply_display_filter(source: &RgbaImage, brightness: u32, contrast: u32) -> RgbaImage {
    let b = brightness as f32 / 100.0;
    let c = contrast as f32 / 100.0;

    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        for channel in 0..3 {
            let v = pixel.0[channel] as f32 / 255.0;
            let v = (v * b - 0.5) * c + 0.5;
            pixel.0[channel] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn single_pixel(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba([value, value, value, 255]))
    }

    #[test]
    fn test_neutral_settings_are_identity() {
        for value in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let src = single_pixel(value);
            let out = apply_display_filter(&src, 100, 100);
            assert_eq!(out.get_pixel(0, 0).0, [value, value, value, 255]);
        }
    }

    #[test]
    fn test_zero_brightness_is_black() {
        let out = apply_display_filter(&single_pixel(200), 0, 100);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn test_zero_contrast_is_mid_grey() {
        for value in [0u8, 90, 255] {
            let out = apply_display_filter(&single_pixel(value), 100, 0);
            assert_eq!(out.get_pixel(0, 0).0[0], 128);
        }
    }

    #[test]
    fn test_double_brightness_clamps() {
        // 200/255 * 2.0 > 1.0, must clamp to white rather than wrap
        let out = apply_display_filter(&single_pixel(200), 200, 100);
        assert_eq!(out.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_double_brightness_scales_dark_values() {
        // 50 * 2.0 = 100
        let out = apply_display_filter(&single_pixel(50), 200, 100);
        assert_eq!(out.get_pixel(0, 0).0[0], 100);
    }

    #[test]
    fn test_contrast_pushes_away_from_mid_grey() {
        let dark = apply_display_filter(&single_pixel(64), 100, 200);
        let bright = apply_display_filter(&single_pixel(192), 100, 200);
        assert!(dark.get_pixel(0, 0).0[0] < 64);
        assert!(bright.get_pixel(0, 0).0[0] > 192);
    }

    #[test]
    fn test_alpha_untouched() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 77]));
        let out = apply_display_filter(&src, 150, 150);
        assert_eq!(out.get_pixel(0, 0).0[3], 77);
    }

    #[test]
    fn test_source_not_mutated() {
        let src = single_pixel(90);
        let _ = apply_display_filter(&src, 0, 200);
        assert_eq!(src.get_pixel(0, 0).0[0], 90);
    }
}
