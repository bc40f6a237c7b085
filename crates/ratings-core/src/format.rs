// File: crates/ratings-core/src/format.rs
// Summary: Thousands grouping for tooltip values, tick labels and numbers.

/// Format a number with comma-grouped integer digits.
///
/// Integral values print without a fraction (`1234567.0` → `"1,234,567"`);
/// anything else keeps Rust's shortest round-trip representation.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        group_thousands(&format!("{}", n as i64))
    } else {
        group_thousands(&n.to_string())
    }
}

/// Format a number with a fixed number of decimals, grouping the integer part.
pub fn format_fixed(n: f64, decimals: usize) -> String {
    group_thousands(&format!("{n:.decimals$}"))
}

/// Insert commas between every three digits of each integer digit run in `text`.
///
/// Every run of ASCII digits is grouped (`"Episode 1000"` → `"Episode 1,000"`)
/// except the fraction digits that follow a decimal point
/// (`"1234.5678"` → `"1,234.5678"`). Everything else is copied through.
pub fn group_thousands(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + text.len() / 3);
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&text[i..i + ch_len]);
            i += ch_len;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let run = &text[start..i];
        let is_fraction = start >= 2 && bytes[start - 1] == b'.' && bytes[start - 2].is_ascii_digit();
        if is_fraction {
            out.push_str(run);
            continue;
        }
        for (k, ch) in run.chars().enumerate() {
            if k > 0 && (run.len() - k) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
    }
    out
}

/// Round to one decimal and print it the way a JS number would print
/// (`2.0` → `"2"`, `2.17` → `"2.2"`).
pub fn format_one_decimal(n: f64) -> String {
    let rounded = (n * 10.0).round() / 10.0;
    let s = format!("{rounded:.1}");
    match s.strip_suffix(".0") {
        Some(whole) if whole != "-0" => whole.to_string(),
        Some(_) => "0".to_string(),
        None => s,
    }
}
