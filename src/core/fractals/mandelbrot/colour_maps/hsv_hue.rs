use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, EscapeCount};
use crate::core::data::colour::Colour;
use std::error::Error;

fn wrap_hue(hue: f64) -> f64 {
    let mut h = hue;
    while h < 0.0 {
        h += 360.0;
    }
    while h >= 360.0 {
        h -= 360.0;
    }
    h
}

fn to_channel(value: f64) -> u8 {
    ((value * 255.0) as i32).clamp(0, 255) as u8
}

/// HSV to RGB using six 60 degree sectors. `s` and `v` are in `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> Colour {
    let (r, g, b) = if v <= 0.0 {
        (0.0, 0.0, 0.0)
    } else if s <= 0.0 || !hue.is_finite() {
        (v, v, v)
    } else {
        let hf = wrap_hue(hue) / 60.0;
        let i = hf.floor() as i32;
        let f = hf - f64::from(i);
        let pv = v * (1.0 - s);
        let qv = v * (1.0 - s * f);
        let tv = v * (1.0 - s * (1.0 - f));

        match i {
            0 | 6 => (v, tv, pv),
            1 => (qv, v, pv),
            2 => (pv, v, tv),
            3 => (pv, qv, v),
            4 => (tv, pv, v),
            5 | -1 => (v, pv, qv),
            _ => (v, v, v),
        }
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Hue follows the escape count in degrees; interior points are black.
#[must_use]
pub fn map_colour(iterations: u32, max_depth: u32) -> Colour {
    let value = if iterations < max_depth { 1.0 } else { 0.0 };

    hsv_to_rgb(f64::from(iterations), 1.0, value)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HsvHueColourMap;

impl ColourMap<EscapeCount> for HsvHueColourMap {
    fn map(&self, value: EscapeCount) -> Result<Colour, Box<dyn Error>> {
        Ok(map_colour(value.iterations, value.max_depth))
    }

    fn display_name(&self) -> &str {
        "HSV Hue"
    }
}
