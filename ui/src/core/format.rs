//! Formatting helpers for presenting production figures.

const SI_PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

/// Two significant digits with an SI suffix: `1234567 → 1.2M`, `45000 → 45k`, `5 → 5.0`.
pub fn format_si(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let rounded = round_significant(value, 2);
    let exponent = decimal_exponent(rounded);
    let group = (exponent.div_euclid(3)).clamp(0, SI_PREFIXES.len() as i32 - 1);
    let scaled = rounded / 10f64.powi(group * 3);
    let decimals = (1 - (exponent - group * 3)).max(0) as usize;
    format!("{scaled:.decimals$}{}", SI_PREFIXES[group as usize])
}

fn decimal_exponent(value: f64) -> i32 {
    (value.abs().log10() + 1e-9).floor() as i32
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let power = digits - 1 - decimal_exponent(value);
    if power >= 0 {
        let factor = 10f64.powi(power);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-power);
        (value / factor).round() * factor
    }
}

/// Tooltip value for a state share: one decimal, or `N/A`.
pub fn format_share(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1}"),
        _ => "N/A".to_string(),
    }
}

pub fn format_percent(fraction: f64) -> String {
    if fraction.is_finite() {
        format!("{:.1}%", fraction * 100.0)
    } else {
        "—".to_string()
    }
}

/// Full figure with thousands separators, e.g. `1,234,567`.
pub fn format_tonnes(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
