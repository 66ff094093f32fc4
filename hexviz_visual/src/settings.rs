// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual settings with host-facing defaults.

use peniko::Color;

/// Hexbin layer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinSettings {
    /// Whether hexagon cells are drawn.
    pub show: bool,
    /// Whether per-cell count labels are drawn.
    pub show_labels: bool,
    /// High stop of the density color ramp.
    pub color: Color,
    /// Cell outline color.
    pub outline: Color,
    /// Grid density divisor: the cell radius is the plot width divided by
    /// this. Hosts deliver it as free text; see [`parse_bin_divisor`].
    pub divisor: u32,
}

impl Default for BinSettings {
    fn default() -> Self {
        Self {
            show: true,
            show_labels: true,
            color: Color::from_rgb8(0x01, 0xB8, 0xAA),
            outline: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            divisor: 30,
        }
    }
}

/// Scatter dot settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotSettings {
    /// Whether dots are drawn.
    pub show: bool,
    /// Flat dot fill; also the high stop of the measure color ramp.
    pub color: Color,
    /// Dot radius in scene coordinates.
    pub size: f64,
}

impl Default for DotSettings {
    fn default() -> Self {
        Self {
            show: true,
            color: Color::from_rgb8(0x37, 0x46, 0x49),
            size: 4.0,
        }
    }
}

/// Axis and domain settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSettings {
    /// Draw the bottom axis line, ticks and labels.
    pub x_axis: bool,
    /// Draw the left axis line, ticks and labels.
    pub y_axis: bool,
    /// Draw the x axis title.
    pub x_title: bool,
    /// Draw the y axis title.
    pub y_title: bool,
    /// Anchor both domains at zero instead of at the data minimum.
    pub origin_zero_zero: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            x_axis: true,
            y_axis: true,
            x_title: true,
            y_title: true,
            origin_zero_zero: false,
        }
    }
}

/// All visual settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualSettings {
    /// Hexbin layer.
    pub bins: BinSettings,
    /// Dot layer.
    pub dots: DotSettings,
    /// Axes and domains.
    pub axes: AxisSettings,
}

/// Parses the host's free-text bin divisor, taking the leading integer the
/// way `parseInt` would and falling back to the default for anything
/// unusable (empty, non-numeric, zero).
pub fn parse_bin_divisor(text: &str) -> u32 {
    let text = text.trim();
    let digits: &str = {
        let end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(text.len(), |(i, _)| i);
        &text[..end]
    };
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => BinSettings::default().divisor,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_match_the_shipped_capabilities() {
        let s = VisualSettings::default();
        assert!(s.bins.show && s.bins.show_labels);
        assert_eq!(s.bins.color.to_rgba8().r, 0x01);
        assert_eq!(s.bins.divisor, 30);
        assert_eq!(s.dots.size, 4.0);
        assert!(!s.axes.origin_zero_zero);
        assert!(s.axes.x_axis && s.axes.y_axis && s.axes.x_title && s.axes.y_title);
    }

    #[test]
    fn bin_divisor_parses_like_parse_int() {
        assert_eq!(parse_bin_divisor("30"), 30);
        assert_eq!(parse_bin_divisor("45px"), 45);
        assert_eq!(parse_bin_divisor(" 12 "), 12);
        assert_eq!(parse_bin_divisor("abc"), 30);
        assert_eq!(parse_bin_divisor(""), 30);
        assert_eq!(parse_bin_divisor("0"), 30);
    }
}
