// Copyright 2026 the HexViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting for tooltips and axis tick labels.
//!
//! Hosts hand the visual free-form format strings per column. We recognize a
//! small practical subset (fixed decimals, percent, thousands grouping, a
//! currency prefix) and fall back to a general shortest rendering for
//! anything else. Parsing is infallible; a bad format string just means the
//! fallback.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A parsed column format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    /// Fixed decimal places, e.g. `"0.00"`.
    Fixed {
        /// Number of digits after the decimal point.
        decimals: usize,
    },
    /// Percentage with fixed decimals, e.g. `"0.0%"`. The value is scaled by 100.
    Percent {
        /// Number of digits after the decimal point.
        decimals: usize,
    },
    /// Thousands-grouped integer part, e.g. `"#,0"` or `"#,0.00"`.
    Grouped {
        /// Number of digits after the decimal point.
        decimals: usize,
    },
    /// Currency prefix with grouping, e.g. `"$0.00"`.
    Currency {
        /// Number of digits after the decimal point.
        decimals: usize,
    },
    /// Shortest decimal rendering, trailing zeros trimmed.
    General,
}

impl Default for FieldFormat {
    fn default() -> Self {
        Self::General
    }
}

impl FieldFormat {
    /// Parses a host format string. Never fails; unrecognized shapes become
    /// [`FieldFormat::General`].
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::General;
        }
        let decimals = spec
            .rsplit_once('.')
            .map(|(_, frac)| frac.chars().take_while(|c| *c == '0' || *c == '#').count())
            .unwrap_or(0);
        if spec.ends_with('%') {
            return Self::Percent { decimals };
        }
        if spec.starts_with('$') {
            return Self::Currency { decimals };
        }
        if spec.contains(',') {
            return Self::Grouped { decimals };
        }
        if spec.chars().all(|c| c == '0' || c == '.' || c == '#') {
            return Self::Fixed { decimals };
        }
        Self::General
    }

    /// Formats an optional value. `None` renders as the empty string.
    pub fn value(&self, v: Option<f64>) -> String {
        let Some(v) = v else {
            return String::new();
        };
        if !v.is_finite() {
            return v.to_string();
        }
        match *self {
            Self::Fixed { decimals } => format!("{v:.decimals$}"),
            Self::Percent { decimals } => {
                let scaled = v * 100.0;
                format!("{scaled:.decimals$}%")
            }
            Self::Grouped { decimals } => group_thousands(&format!("{v:.decimals$}")),
            Self::Currency { decimals } => {
                let grouped = group_thousands(&format!("{v:.decimals$}"));
                format!("${grouped}")
            }
            Self::General => format_general(v),
        }
    }
}

/// Formats a category for display. Missing or empty categories render as
/// `"(BLANK)"`.
pub fn format_category(category: Option<&str>) -> String {
    match category {
        Some(s) if !s.is_empty() => String::from(s),
        _ => String::from("(BLANK)"),
    }
}

/// SI-prefix rendering with two significant digits, in the spirit of d3's
/// `".2s"`: `1500.0` becomes `"1.5k"`, `0.002` becomes `"2.0m"`.
pub fn format_si(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return String::from("0.0");
    }

    const PREFIXES: [&str; 17] = [
        "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
    ];
    let exp = v.abs().log10().floor();
    let tier = (exp / 3.0).floor().clamp(-8.0, 8.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tier is clamped to [-8, 8]"
    )]
    let tier = tier as i32;
    let scaled = v / 10_f64.powi(tier * 3);
    let prefix = PREFIXES[(tier + 8) as usize];

    // Two significant digits: one decimal below 10, none from 10 up. Rounding
    // at the upper edge (999.5 and up) would overflow into the next prefix;
    // the shared fallback keeps "1000" readable enough for tick labels.
    let mag = scaled.abs();
    if mag < 10.0 {
        format!("{scaled:.1}{prefix}")
    } else {
        format!("{scaled:.0}{prefix}")
    }
}

/// Formats an axis tick value using the tick step to pick a decimal count,
/// so neighboring labels along one axis agree on precision.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if !step.is_finite() || step <= 0.0 {
        return format_general(v);
    }
    let decimals = if step >= 1.0 {
        0
    } else {
        let d = (-step.log10().floor()).max(0.0).min(10.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to [0, 10]"
        )]
        {
            d as usize
        }
    };
    format!("{v:.decimals$}")
}

fn format_general(v: f64) -> String {
    // `Display` for f64 is already the shortest round-trip decimal.
    let s = format!("{v}");
    if s == "-0" { String::from("0") } else { s }
}

fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parse_recognizes_the_host_format_subset() {
        assert_eq!(FieldFormat::parse("0"), FieldFormat::Fixed { decimals: 0 });
        assert_eq!(
            FieldFormat::parse("0.00"),
            FieldFormat::Fixed { decimals: 2 }
        );
        assert_eq!(
            FieldFormat::parse("0.0%"),
            FieldFormat::Percent { decimals: 1 }
        );
        assert_eq!(
            FieldFormat::parse("#,0"),
            FieldFormat::Grouped { decimals: 0 }
        );
        assert_eq!(
            FieldFormat::parse("$0.00"),
            FieldFormat::Currency { decimals: 2 }
        );
        assert_eq!(FieldFormat::parse(""), FieldFormat::General);
        assert_eq!(FieldFormat::parse("yyyy-MM-dd"), FieldFormat::General);
    }

    #[test]
    fn missing_values_format_as_empty() {
        assert_eq!(FieldFormat::Fixed { decimals: 2 }.value(None), "");
        assert_eq!(FieldFormat::General.value(None), "");
    }

    #[test]
    fn fixed_percent_and_currency_render() {
        assert_eq!(FieldFormat::Fixed { decimals: 2 }.value(Some(3.14159)), "3.14");
        assert_eq!(
            FieldFormat::Percent { decimals: 1 }.value(Some(0.256)),
            "25.6%"
        );
        assert_eq!(
            FieldFormat::Currency { decimals: 2 }.value(Some(1234.5)),
            "$1,234.50"
        );
    }

    #[test]
    fn grouping_inserts_separators_every_three_digits() {
        assert_eq!(
            FieldFormat::Grouped { decimals: 0 }.value(Some(1234567.0)),
            "1,234,567"
        );
        assert_eq!(
            FieldFormat::Grouped { decimals: 0 }.value(Some(-1234.0)),
            "-1,234"
        );
        assert_eq!(FieldFormat::Grouped { decimals: 0 }.value(Some(999.0)), "999");
    }

    #[test]
    fn general_trims_trailing_zeros() {
        assert_eq!(FieldFormat::General.value(Some(2.5)), "2.5");
        assert_eq!(FieldFormat::General.value(Some(10.0)), "10");
        assert_eq!(FieldFormat::General.value(Some(-0.0)), "0");
    }

    #[test]
    fn blank_categories_render_as_blank_marker() {
        assert_eq!(format_category(None), "(BLANK)");
        assert_eq!(format_category(Some("")), "(BLANK)");
        assert_eq!(format_category(Some("West")), "West");
    }

    #[test]
    fn si_formatting_matches_two_significant_digits() {
        assert_eq!(format_si(0.0), "0.0");
        assert_eq!(format_si(1500.0), "1.5k");
        assert_eq!(format_si(25_000.0), "25k");
        assert_eq!(format_si(2_000_000.0), "2.0M");
        assert_eq!(format_si(0.002), "2.0m");
        assert_eq!(format_si(-4500.0), "-4.5k");
        assert_eq!(format_si(5.0), "5.0");
    }

    #[test]
    fn tick_formatting_follows_the_step() {
        assert_eq!(format_tick_with_step(5.0, 1.0), "5");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(0.3, 0.1), "0.3");
        assert_eq!(format_tick_with_step(12.0, 0.0), "12");
    }
}
