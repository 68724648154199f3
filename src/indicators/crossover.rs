//! Line crossover detection shared by MACD, stochastic and average crosses.

use crate::models::indicators::CrossoverType;

/// Compare two consecutive readings of a fast and a slow line.
///
/// A bullish crossover needs the fast line at or below the slow line on the
/// previous bar and strictly above it on the current one; bearish mirrors it.
pub fn detect_crossover(prev_fast: f64, prev_slow: f64, fast: f64, slow: f64) -> CrossoverType {
    if prev_fast <= prev_slow && fast > slow {
        CrossoverType::Bullish
    } else if prev_fast >= prev_slow && fast < slow {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Crossover on the last bar of two aligned series.
pub fn latest_crossover(fast: &[f64], slow: &[f64]) -> CrossoverType {
    let n = fast.len().min(slow.len());
    if n < 2 {
        return CrossoverType::None;
    }
    let (f, s) = (&fast[fast.len() - n..], &slow[slow.len() - n..]);
    detect_crossover(f[n - 2], s[n - 2], f[n - 1], s[n - 1])
}

/// Every crossover in two series aligned on their last element.
///
/// Returned indices are positions in the shorter series counted from its
/// start, shifted by `offset`.
pub fn find_crossovers(fast: &[f64], slow: &[f64], offset: usize) -> Vec<(usize, CrossoverType)> {
    let n = fast.len().min(slow.len());
    let (f, s) = (&fast[fast.len() - n..], &slow[slow.len() - n..]);
    (1..n)
        .filter_map(|i| match detect_crossover(f[i - 1], s[i - 1], f[i], s[i]) {
            CrossoverType::None => None,
            cross => Some((offset + i, cross)),
        })
        .collect()
}
