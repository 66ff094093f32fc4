// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perceptual color ramps for continuous encodings.
//!
//! Interpolation runs in CIE L*a*b* space (via the `palette` crate), so a
//! ramp from a light neutral to a saturated brand color reads as an even
//! density gradient rather than a muddy sRGB lerp.

use palette::{IntoColor, Laba, Mix, Srgba};
use peniko::Color;

/// A two-stop Lab-space color ramp over a continuous domain.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    domain: (f64, f64),
    low: Laba,
    high: Laba,
}

impl ColorScale {
    /// Creates a ramp mapping `domain.0` to `low` and `domain.1` to `high`.
    pub fn new(domain: (f64, f64), low: Color, high: Color) -> Self {
        Self {
            domain,
            low: to_lab(low),
            high: to_lab(high),
        }
    }

    /// Maps a domain value to a color.
    ///
    /// Input is normalized and clamped to `[0, 1]`; a collapsed domain maps
    /// everything to the low stop.
    pub fn color_at(&self, v: f64) -> Color {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        let t = if denom == 0.0 || !v.is_finite() {
            0.0
        } else {
            ((v - d0) / denom).clamp(0.0, 1.0)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "t is clamped to [0, 1] before narrowing"
        )]
        let mixed = self.low.mix(self.high, t as f32);
        from_lab(mixed)
    }
}

fn to_lab(color: Color) -> Laba {
    let rgba = color.to_rgba8();
    let srgba = Srgba::from_components((
        f32::from(rgba.r) / 255.0,
        f32::from(rgba.g) / 255.0,
        f32::from(rgba.b) / 255.0,
        f32::from(rgba.a) / 255.0,
    ));
    srgba.into_color()
}

fn from_lab(lab: Laba) -> Color {
    let srgba: Srgba = lab.into_color();
    let (r, g, b, a) = srgba.into_components();
    Color::from_rgba8(
        channel_to_u8(r),
        channel_to_u8(g),
        channel_to_u8(b),
        channel_to_u8(a),
    )
}

fn channel_to_u8(v: f32) -> u8 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to [0, 255] before narrowing"
    )]
    {
        (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_reproduce_the_stops() {
        let low = Color::from_rgb8(0xDD, 0xDD, 0xDD);
        let high = Color::from_rgb8(0x01, 0xB8, 0xAA);
        let ramp = ColorScale::new((0.0, 10.0), low, high);

        assert_eq!(ramp.color_at(0.0).to_rgba8(), low.to_rgba8());
        assert_eq!(ramp.color_at(10.0).to_rgba8(), high.to_rgba8());
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let low = Color::from_rgb8(0xDD, 0xDD, 0xDD);
        let high = Color::from_rgb8(0x37, 0x46, 0x49);
        let ramp = ColorScale::new((0.0, 1.0), low, high);

        assert_eq!(ramp.color_at(-5.0).to_rgba8(), low.to_rgba8());
        assert_eq!(ramp.color_at(99.0).to_rgba8(), high.to_rgba8());
        assert_eq!(ramp.color_at(f64::NAN).to_rgba8(), low.to_rgba8());
    }

    #[test]
    fn collapsed_domain_maps_to_low() {
        let low = Color::from_rgb8(0xDD, 0xDD, 0xDD);
        let high = Color::from_rgb8(0x01, 0xB8, 0xAA);
        let ramp = ColorScale::new((3.0, 3.0), low, high);
        assert_eq!(ramp.color_at(3.0).to_rgba8(), low.to_rgba8());
    }

    #[test]
    fn midpoint_lies_between_the_stops() {
        let low = Color::from_rgb8(0x00, 0x00, 0x00);
        let high = Color::from_rgb8(0xFF, 0xFF, 0xFF);
        let ramp = ColorScale::new((0.0, 1.0), low, high);
        let mid = ramp.color_at(0.5).to_rgba8();
        assert!(mid.r > 0 && mid.r < 255);
        // Grey stays grey through Lab.
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }
}
