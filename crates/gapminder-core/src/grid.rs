// File: crates/gapminder-core/src/grid.rs
// Summary: Tick layout helpers (1/2/5 x 10^n nice steps) and tick label formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step between ticks covering `[start, stop]` with roughly `count` intervals.
/// Always positive; 0.0 when no step exists (empty span or zero count).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Nice tick values inside `[start, stop]` (either order), ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if lo == hi {
        return vec![lo];
    }
    let step = tick_step(lo, hi, count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    if step >= 1.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        // Divide by the inverse step to keep decimals like 0.1 exact.
        let inv = (1.0 / step).round();
        let first = (lo * inv).ceil() as i64;
        let last = (hi * inv).floor() as i64;
        (first..=last).map(|i| i as f64 / inv).collect()
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.abs().log10().floor()).max(0.0) as usize
}

/// Insert `,` between thousands groups of the integer part.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(formatted.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    out.push_str(frac_part);
    out
}

/// Format a number with fixed decimals and thousands separators, e.g. `1,234,567`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    group_thousands(&format_fixed(value, decimals))
}

/// Fixed-decimal formatting that never prints `-0`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
