//! Stateless pixel operations. Every operation borrows its input and
//! returns a fresh image.

pub mod hsv;
mod line;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::config::{MAX_DIMENSION, MAX_PIXELS, MAX_THICKNESS};
use crate::error::InputError;

pub type OpResult = Result<RgbImage, InputError>;

/// Colour of lines drawn by [`draw_line`].
pub const LINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Looks a channel up by name. Unknown names fall back to red.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => Channel::Green,
            "blue" => Channel::Blue,
            _ => Channel::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Keeps one colour channel and zeroes the other two.
pub fn isolate(img: &RgbImage, channel: Channel) -> RgbImage {
    let index = channel.index();
    let mut out = RgbImage::new(img.width(), img.height());
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        dst[index] = src[index];
    }
    out
}

/// Scales to exactly `width` x `height` with bilinear filtering.
pub fn resize(img: &RgbImage, width: i32, height: i32) -> OpResult {
    let in_range = |d: i32| d > 0 && d as u32 <= MAX_DIMENSION;
    if !in_range(width) || !in_range(height) {
        return Err(InputError::InvalidDimensions {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    let (width, height) = (width as u32, height as u32);
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(InputError::TooManyPixels {
            width,
            height,
            max: MAX_PIXELS,
        });
    }
    Ok(imageops::resize(img, width, height, FilterType::Triangle))
}

/// Adds `delta` to the HSV value of every pixel, saturating at 255.
pub fn adjust_brightness(img: &RgbImage, delta: i32) -> OpResult {
    if !(0..=100).contains(&delta) {
        return Err(InputError::OutOfRange(delta));
    }
    let delta = delta as u8;

    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let mut value = hsv::rgb_to_hsv(*pixel);
        value.v = value.v.saturating_add(delta);
        *pixel = hsv::hsv_to_rgb(value);
    }
    Ok(out)
}

/// Draws a green segment of the given thickness onto a copy of `img`.
///
/// Endpoints outside the image are allowed; the part outside is clipped.
pub fn draw_line(img: &RgbImage, from: (i32, i32), to: (i32, i32), thickness: i32) -> OpResult {
    if !(1..=MAX_THICKNESS).contains(&thickness) {
        return Err(InputError::InvalidThickness {
            value: thickness,
            max: MAX_THICKNESS,
        });
    }
    let mut out = img.clone();
    line::stroke_segment(&mut out, from, to, thickness as u32, LINE_COLOR);
    Ok(out)
}
