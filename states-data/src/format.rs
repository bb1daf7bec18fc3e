//! Number formatting for metric values.

/// Shown wherever a metric value is missing.
pub const MISSING: &str = "—";

/// Format with a fixed number of decimals and comma thousands separators.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Grouped integer, e.g. `1,234,567`.
pub fn format_grouped(value: f64) -> String {
    group_thousands(value, 0)
}

/// Whole dollars, e.g. `$96,334`.
pub fn format_dollars(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// One decimal with a percent sign, e.g. `5.4%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed, two decimals, e.g. `+0.59%`.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// One decimal in years, e.g. `79.0 yrs`.
pub fn format_years(value: f64) -> String {
    format!("{:.1} yrs", value)
}

/// Three-tier large number rule: trillions and billions as currency,
/// millions as a plain count, anything smaller grouped.
pub fn format_large_number(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format_grouped(value)
    }
}

/// GDP stored in billions of dollars, e.g. `$153.6B` or `$4.10T`.
pub fn format_gdp_billions(value: f64) -> String {
    if value >= 1.0 {
        format_large_number(value * 1e9)
    } else {
        format!("${:.1}B", value)
    }
}

/// Population: millions with two decimals, otherwise a grouped integer.
pub fn format_population(value: f64) -> String {
    if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format_grouped(value)
    }
}

/// Apply `format` to a present value, or return the absence indicator.
pub fn format_optional(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(1000.0, 0), "1,000");
        assert_eq!(group_thousands(648493.0, 0), "648,493");
        assert_eq!(group_thousands(39431263.0, 0), "39,431,263");
        assert_eq!(group_thousands(4103.14, 1), "4,103.1");
        assert_eq!(group_thousands(-1234.5, 1), "-1,234.5");
        assert_eq!(group_thousands(-0.01, 0), "0");
    }

    #[test]
    fn population_format_tiers() {
        assert_eq!(format_population(39431263.0), "39.43M");
        assert_eq!(format_population(1_000_000.0), "1.00M");
        assert_eq!(format_population(999_999.0), "999,999");
        assert_eq!(format_population(648493.0), "648,493");
    }

    #[test]
    fn population_format_shape_holds_across_magnitudes() {
        for value in [1e6, 2_943_045.0, 19_867_248.0, 39_431_263.0, 123_456_789.0] {
            let out = format_population(value);
            let number = out.strip_suffix('M').unwrap();
            let (_, decimals) = number.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2, "{out}");
            assert!(!out.contains(','), "{out}");
        }
        for value in [0.0, 12.0, 5_000.0, 648_493.0, 999_999.0] {
            let out = format_population(value);
            assert!(!out.ends_with('M'), "{out}");
            assert!(out.chars().all(|c| c.is_ascii_digit() || c == ','), "{out}");
        }
    }

    #[test]
    fn large_number_tiers() {
        assert_eq!(format_large_number(4.1031e12), "$4.10T");
        assert_eq!(format_large_number(1.536e11), "$153.6B");
        assert_eq!(format_large_number(2.5e6), "2.50M");
        assert_eq!(format_large_number(54203.0), "54,203");
    }

    #[test]
    fn gdp_in_billions() {
        assert_eq!(format_gdp_billions(4103.1), "$4.10T");
        assert_eq!(format_gdp_billions(153.6), "$153.6B");
        assert_eq!(format_gdp_billions(45.7), "$45.7B");
    }

    #[test]
    fn unit_formats() {
        assert_eq!(format_dollars(96334.0), "$96,334");
        assert_eq!(format_percent(5.4), "5.4%");
        assert_eq!(format_years(79.0), "79.0 yrs");
        assert_eq!(format_signed_percent(0.59), "+0.59%");
        assert_eq!(format_signed_percent(-0.12), "-0.12%");
        assert_eq!(format_signed_percent(0.0), "0.00%");
    }

    #[test]
    fn missing_values_use_the_indicator() {
        assert_eq!(format_optional(None, format_percent), MISSING);
        assert_eq!(format_optional(Some(3.6), format_percent), "3.6%");
    }
}
