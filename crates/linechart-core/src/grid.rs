// File: crates/linechart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" tick steps over a domain and tick label formatting.

/// `(first, stop, step)` for ticks covering `[d0, d1]` with roughly `count` ticks.
/// `stop` is exclusive and padded by half a step so the last tick survives rounding.
pub fn tick_range(d0: f64, d1: f64, count: usize) -> Option<(f64, f64, f64)> {
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let span = hi - lo;
    if !(span > 0.0) || !span.is_finite() || count == 0 {
        return None;
    }
    let m = count as f64;
    let mut step = 10f64.powf((span / m).log10().floor());
    let err = m / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    let first = (lo / step).ceil() * step;
    let stop = (hi / step).floor() * step + step * 0.5;
    Some((first, stop, step))
}

/// Tick values for `[d0, d1]`, ascending.
pub fn ticks(d0: f64, d1: f64, count: usize) -> Vec<f64> {
    match tick_range(d0, d1, count) {
        Some((start, stop, step)) => range(start, stop, step),
        None if d0.is_finite() => vec![d0],
        None => Vec::new(),
    }
}

/// Evenly stepped values in `[start, stop)`. Values are computed on an integer
/// grid so decimal steps such as 0.1 do not accumulate error.
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop > start) {
        return Vec::new();
    }
    let k = integer_scale(step);
    let (start, stop, step) = (start * k, stop * k, step * k);
    let mut out = Vec::new();
    let mut i = 0.0;
    loop {
        let v = start + step * i;
        if v >= stop {
            break;
        }
        out.push(v / k);
        i += 1.0;
    }
    out
}

fn integer_scale(x: f64) -> f64 {
    let mut k = 1.0;
    while (x * k) % 1.0 != 0.0 && k < 1e15 {
        k *= 10.0;
    }
    k
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn precision(step: f64) -> usize {
    let p = -((step.log10() + 0.01).floor());
    if p.is_finite() && p > 0.0 { p as usize } else { 0 }
}

/// Fixed-point label with `,` thousands grouping, e.g. `1234567.0 -> "1,234,567"`.
pub fn format_tick(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", s.as_str()),
    };
    let (int, frac) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Ticks and their labels for one axis.
pub fn labelled_ticks(d0: f64, d1: f64, count: usize) -> Vec<(f64, String)> {
    // a zero-width domain has no step; print its single tick with the digits it has
    let prec = match tick_range(d0, d1, count) {
        Some((_, _, step)) => precision(step),
        None => shortest_precision(d0),
    };
    ticks(d0, d1, count)
        .into_iter()
        .map(|v| (v, format_tick(v, prec)))
        .collect()
}

fn shortest_precision(v: f64) -> usize {
    let s = v.to_string();
    s.split_once('.').map_or(0, |(_, frac)| frac.len())
}
