//! Zero-Crossing Counter
//!
//! Counts positions i in 1..N where sign(x[i]) - sign(x[i-1]) != 0.
//! sign(0) is 0, so moving onto or off an exact zero counts as a crossing:
//! [1, 0, -1] has two.

/// Three-way sign: -1, 0 or +1 (unlike `f64::signum`, zero maps to 0)
fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Count sign changes between consecutive elements
pub fn zero_crossings(series: &[f64]) -> usize {
    series
        .windows(2)
        .filter(|w| sign(w[1]) != sign(w[0]))
        .count()
}
