// on-core/src/units.rs

use uom::si::electrical_resistance::ohm;
use uom::si::f64::ElectricalResistance as UomElectricalResistance;

// Public canonical unit type (SI, f64)
pub type Resistance = UomElectricalResistance;

#[inline]
pub fn ohms(v: f64) -> Resistance {
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn as_ohms(r: Resistance) -> f64 {
    r.get::<ohm>()
}

/// Parse a numeric field with an optional SI suffix.
///
/// Suffixes are case-insensitive, so mega is spelled `MEG` and `M` is milli:
/// `T`, `G`, `MEG`, `K`, `M`, `U`, `N`, `P`, `F`.
pub fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim().to_uppercase();

    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }

    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(s.len());
    if num_end == 0 {
        return None;
    }

    let (num_str, suffix) = s.split_at(num_end);
    let value: f64 = num_str.parse().ok()?;

    let multiplier = match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "K" => 1e3,
        "M" => 1e-3,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return None,
    };

    Some(value * multiplier)
}

/// Format a value with a compact SI prefix (`4.7k`, `1.5M`, `220`).
pub fn format_value(value: f64) -> String {
    let abs_value = value.abs();

    let (scaled, suffix) = if abs_value >= 1e9 {
        (value / 1e9, "G")
    } else if abs_value >= 1e6 {
        (value / 1e6, "M")
    } else if abs_value >= 1e3 {
        (value / 1e3, "k")
    } else if abs_value >= 1.0 || abs_value == 0.0 {
        (value, "")
    } else if abs_value >= 1e-3 {
        (value * 1e3, "m")
    } else {
        (value * 1e6, "u")
    };

    let mut digits = format!("{scaled:.4}");
    if digits.contains('.') {
        let trimmed = digits.trim_end_matches('0').trim_end_matches('.').len();
        digits.truncate(trimmed);
    }
    format!("{digits}{suffix}")
}
