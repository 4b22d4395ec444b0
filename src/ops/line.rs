use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

type Segment = ((f64, f64), (f64, f64));

/// Rasterizes a solid segment with round caps into `canvas`.
///
/// Coordinates may lie anywhere; the segment is first clipped against the
/// canvas grown by the cap radius, so nothing off-canvas is walked.
pub(crate) fn stroke_segment(
    canvas: &mut RgbImage,
    from: (i32, i32),
    to: (i32, i32),
    thickness: u32,
    color: Rgb<u8>,
) {
    let margin = f64::from(thickness / 2 + 1);
    let bounds = (
        -margin,
        -margin,
        f64::from(canvas.width()) - 1.0 + margin,
        f64::from(canvas.height()) - 1.0 + margin,
    );

    let start = (f64::from(from.0), f64::from(from.1));
    let end = (f64::from(to.0), f64::from(to.1));
    let Some((a, b)) = clip_segment((start, end), bounds) else {
        return;
    };

    if thickness <= 1 {
        draw_line_segment_mut(canvas, (a.0 as f32, a.1 as f32), (b.0 as f32, b.1 as f32), color);
        return;
    }

    // Offsets from the centre line; together they span exactly `thickness` pixels.
    let near = f64::from((thickness - 1) / 2);
    let far = f64::from(thickness / 2);
    let cap = ((thickness - 1) / 2) as i32;
    draw_filled_circle_mut(canvas, round_point(a), cap, color);
    draw_filled_circle_mut(canvas, round_point(b), cap, color);

    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length = dx.hypot(dy);
    if length < 0.5 {
        return;
    }
    let (nx, ny) = (-dy / length, dx / length);
    let body = [
        round_point((a.0 + nx * far, a.1 + ny * far)),
        round_point((b.0 + nx * far, b.1 + ny * far)),
        round_point((b.0 - nx * near, b.1 - ny * near)),
        round_point((a.0 - nx * near, a.1 - ny * near)),
    ]
    .map(|(x, y)| Point::new(x, y));
    if body[0] != body[3] {
        draw_polygon_mut(canvas, &body, color);
    }
}

fn round_point(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

/// Liang-Barsky clipping against `(min_x, min_y, max_x, max_y)`.
fn clip_segment(segment: Segment, bounds: (f64, f64, f64, f64)) -> Option<Segment> {
    let ((x0, y0), (x1, y1)) = segment;
    let (min_x, min_y, max_x, max_y) = bounds;
    let (dx, dy) = (x1 - x0, y1 - y0);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (x0 + t0 * dx, y0 + t0 * dy),
        (x0 + t1 * dx, y0 + t1 * dy),
    ))
}
