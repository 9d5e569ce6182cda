//! Nearest-value and peak search over sample sequences.
//!
//! One shared implementation serves both target-frequency selection and
//! decay-crossing search, which otherwise tend to grow duplicate ad hoc
//! argmin helpers.

/// Index and value of the element closest to `target`.
///
/// Stable argmin: on a distance tie the lowest index wins. Returns `None`
/// for an empty slice.
pub fn nearest(values: &[f32], target: f32) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        let dist = (v - target).abs();
        match best {
            Some((_, _, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, v, dist)),
        }
    }
    best.map(|(i, v, _)| (i, v))
}

/// Index of the maximum element, first occurrence on ties.
///
/// Returns `None` for an empty slice. NaN elements never win.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, best_v)) if !(v > best_v) => {}
            _ if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
