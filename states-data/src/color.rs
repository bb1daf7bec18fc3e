//! Continuous color scales for the map and its legend.
//!
//! Higher-is-better metrics use a sequential blue ramp over
//! `[min * 0.6, max]`; the 0.6 floor keeps mid-range states from washing
//! out. Lower-is-better metrics use a red/yellow/green ramp over the
//! reversed domain `[max, min]`, so the largest value lands on red.

use crate::metric::Polarity;
use std::fmt;

/// Fraction of the minimum used as the low end of sequential domains.
pub const SEQUENTIAL_FLOOR: f64 = 0.6;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

const BLUES: [[u8; 3]; 9] = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

const RD_YL_GN: [[u8; 3]; 11] = [
    [0xa5, 0x00, 0x26],
    [0xd7, 0x30, 0x27],
    [0xf4, 0x6d, 0x43],
    [0xfd, 0xae, 0x61],
    [0xfe, 0xe0, 0x8b],
    [0xff, 0xff, 0xbf],
    [0xd9, 0xef, 0x8b],
    [0xa6, 0xd9, 0x6a],
    [0x66, 0xbd, 0x63],
    [0x1a, 0x98, 0x50],
    [0x00, 0x68, 0x37],
];

/// Color ramps sampled with `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Light to dark blue.
    Blues,
    /// Red through yellow to green.
    RdYlGn,
}

impl Palette {
    pub fn for_polarity(polarity: Polarity) -> Self {
        match polarity {
            Polarity::HigherIsBetter => Palette::Blues,
            Polarity::LowerIsBetter => Palette::RdYlGn,
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Palette::Blues => &BLUES,
            Palette::RdYlGn => &RD_YL_GN,
        }
    }

    /// Sample the ramp with a uniform B-spline through the scheme colors.
    /// `t` is clamped to `[0, 1]`.
    pub fn interpolate(self, t: f64) -> Rgb {
        let stops = self.stops();
        let channel = |c: usize| {
            let values: Vec<f64> = stops.iter().map(|s| s[c] as f64).collect();
            basis_spline(&values, t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(0),
            g: channel(1),
            b: channel(2),
        }
    }
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

/// Minimum and maximum of the non-NaN values, or None if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Maps a metric value to a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: (f64, f64),
    palette: Palette,
}

impl ColorScale {
    /// Build a scale over `values` for a metric of the given polarity.
    ///
    /// Returns None when there are no values to take a range from.
    pub fn build(values: impl IntoIterator<Item = f64>, polarity: Polarity) -> Option<Self> {
        let (lo, hi) = extent(values)?;
        let domain = match polarity {
            Polarity::HigherIsBetter => (lo * SEQUENTIAL_FLOOR, hi),
            Polarity::LowerIsBetter => (hi, lo),
        };
        Some(Self {
            domain,
            palette: Palette::for_polarity(polarity),
        })
    }

    /// Domain start and end; reversed for lower-is-better scales.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Position of `value` along the domain. A degenerate domain maps to the middle.
    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            0.5
        } else {
            (value - d0) / (d1 - d0)
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.palette.interpolate(self.position(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_END: Rgb = Rgb { r: 0xa5, g: 0x00, b: 0x26 };
    const GREEN_END: Rgb = Rgb { r: 0x00, g: 0x68, b: 0x37 };
    const DARKEST_BLUE: Rgb = Rgb { r: 0x08, g: 0x30, b: 0x6b };

    #[test]
    fn ramps_hit_their_end_colors() {
        assert_eq!(Palette::RdYlGn.interpolate(0.0), RED_END);
        assert_eq!(Palette::RdYlGn.interpolate(1.0), GREEN_END);
        assert_eq!(Palette::Blues.interpolate(1.0), DARKEST_BLUE);
        assert_eq!(
            Palette::Blues.interpolate(0.0),
            Rgb { r: 0xf7, g: 0xfb, b: 0xff }
        );
    }

    #[test]
    fn out_of_range_positions_clamp() {
        assert_eq!(Palette::Blues.interpolate(-0.5), Palette::Blues.interpolate(0.0));
        assert_eq!(Palette::RdYlGn.interpolate(1.7), GREEN_END);
    }

    #[test]
    fn ramp_midpoint_of_rdylgn_is_yellowish() {
        let mid = Palette::RdYlGn.interpolate(0.5);
        assert!(mid.r > 200 && mid.g > 200, "{mid}");
    }

    #[test]
    fn lower_is_better_maps_max_to_red_and_min_to_green() {
        let values = [5.4, 3.1, 4.4, 4.1, 2.2];
        let scale = ColorScale::build(values, Polarity::LowerIsBetter).unwrap();
        assert_eq!(scale.domain(), (5.4, 2.2));
        assert_eq!(scale.color(5.4), RED_END);
        assert_eq!(scale.color(2.2), GREEN_END);

        let worst = scale.color(5.4);
        let best = scale.color(2.2);
        assert!(worst.r > worst.g);
        assert!(best.g > best.r);
    }

    #[test]
    fn higher_is_better_uses_floored_sequential_domain() {
        let values = [54203.0, 96334.0, 84578.0];
        let scale = ColorScale::build(values, Polarity::HigherIsBetter).unwrap();
        let (d0, d1) = scale.domain();
        assert!((d0 - 54203.0 * 0.6).abs() < 1e-9);
        assert_eq!(d1, 96334.0);
        assert_eq!(scale.color(96334.0), DARKEST_BLUE);

        // the minimum sits 40% of the way up, not at the palest end
        let low = scale.color(54203.0);
        assert_ne!(low, Palette::Blues.interpolate(0.0));
        // darker blue for larger values
        let high = scale.color(96334.0);
        assert!(high.r < low.r && high.g < low.g);
    }

    #[test]
    fn zero_used_for_missing_values_clamps_to_the_low_end() {
        let scale = ColorScale::build([54203.0, 96334.0], Polarity::HigherIsBetter).unwrap();
        assert_eq!(scale.color(0.0), Palette::Blues.interpolate(0.0));
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        assert!(ColorScale::build(Vec::<f64>::new(), Polarity::HigherIsBetter).is_none());
        assert!(ColorScale::build([f64::NAN], Polarity::LowerIsBetter).is_none());

        let single = ColorScale::build([4.0], Polarity::LowerIsBetter).unwrap();
        assert_eq!(single.position(4.0), 0.5);
        assert_eq!(single.color(4.0), Palette::RdYlGn.interpolate(0.5));
    }

    #[test]
    fn rgb_display() {
        assert_eq!(RED_END.to_string(), "rgb(165, 0, 38)");
    }
}
