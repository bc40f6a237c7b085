// File: crates/ratings-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps, label precision).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick range plus increment. A negative `inc` means ticks are `i / -inc`,
/// which keeps sub-unit steps exact (0.2 is 1/5, not 0.2000000000000001).
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round() as i64;
        i2 = (stop * k).round() as i64;
        if (i1 as f64) / k < start { i1 += 1; }
        if (i2 as f64) / k > stop { i2 -= 1; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round() as i64;
        i2 = (stop / k).round() as i64;
        if (i1 as f64) * k < start { i1 += 1; }
        if (i2 as f64) * k > stop { i2 -= 1; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced round values covering `[a, b]` (either order).
/// Output follows the direction of the input interval.
pub fn ticks(a: f64, b: f64, count: usize) -> Vec<f64> {
    if count == 0 || !a.is_finite() || !b.is_finite() { return Vec::new(); }
    if a == b { return vec![a]; }
    let reverse = b < a;
    let (start, stop) = if reverse { (b, a) } else { (a, b) };
    let (i1, i2, inc) = tick_spec(start, stop, count as f64);
    if i2 < i1 || !inc.is_finite() { return Vec::new(); }

    let mut out: Vec<f64> = (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect();
    if reverse { out.reverse(); }
    out
}

/// Step between consecutive ticks for `[a, b]`, always positive.
pub fn tick_step(a: f64, b: f64, count: usize) -> f64 {
    let (start, stop) = if b < a { (b, a) } else { (a, b) };
    if count == 0 || start == stop { return 0.0; }
    let (_, _, inc) = tick_spec(start, stop, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() { return 0; }
    (-step.abs().log10().floor()).max(0.0) as usize
}
