//! 8-bit HSV conversion: hue in `0..180` (two degrees per step),
//! saturation and value in `0..=255`.

use image::Rgb;

/// Number of hue steps in a full turn.
pub const HUE_RANGE: u8 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

pub fn rgb_to_hsv(pixel: Rgb<u8>) -> Hsv {
    let [r, g, b] = pixel.0.map(f32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };

    let mut h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let mut h = (h / 2.0).round() as u8;
    if h >= HUE_RANGE {
        h -= HUE_RANGE;
    }

    Hsv {
        h,
        s: s.round() as u8,
        v: v as u8,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb<u8> {
    let v = f32::from(hsv.v) / 255.0;
    let s = f32::from(hsv.s) / 255.0;

    if hsv.s == 0 {
        return Rgb([hsv.v; 3]);
    }

    let h = f32::from(hsv.h) * 2.0 / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb([to_byte(r), to_byte(g), to_byte(b)])
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(Rgb([255, 0, 0])), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(Rgb([0, 255, 0])), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 255])), Hsv { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(Rgb([77, 77, 77])), Hsv { h: 0, s: 0, v: 77 });
        assert_eq!(hsv_to_rgb(Hsv { h: 90, s: 0, v: 77 }), Rgb([77, 77, 77]));
    }

    #[test]
    fn test_back_conversion_is_close() {
        for pixel in [
            Rgb([12u8, 200, 99]),
            Rgb([250, 128, 3]),
            Rgb([40, 41, 180]),
            Rgb([255, 0, 254]),
        ] {
            let back = hsv_to_rgb(rgb_to_hsv(pixel));
            for c in 0..3 {
                let delta = (i16::from(back[c]) - i16::from(pixel[c])).abs();
                assert!(delta <= 5, "{pixel:?} came back as {back:?}");
            }
        }
    }

    #[test]
    fn test_hue_wraps_below_range() {
        // Hue just under 360 degrees rounds to the top of the range.
        let hsv = rgb_to_hsv(Rgb([255, 0, 1]));
        assert!(hsv.h < HUE_RANGE);
    }
}
