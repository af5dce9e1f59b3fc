//! Sampling helpers shared by every simulation domain.
//!
//! All functions take the RNG explicitly so callers stay deterministic
//! under a seeded `SmallRng` and testable with a scripted generator.

use rand::Rng;

/// Uniform integer in `[min, max]` (both ends inclusive).
pub fn range_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Uniform float in `[min, max)`.
pub fn range_float(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    rng.random_range(min..max)
}

/// True with probability `p`. Values of `p` at or below 0.0 never fire,
/// at or above 1.0 always fire.
pub fn with_probability(rng: &mut impl Rng, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Uniform pick from a slice. Returns `None` on an empty slice.
pub fn pick_uniform<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}

/// Weighted pick: sum the weights, draw a point in `[0, total)`, then walk
/// the slice subtracting weights until the draw lands inside an item.
///
/// The last item is the fallback for floating-point shortfall, which also
/// means a single-item slice is always returned even at weight zero.
pub fn pick_weighted<'a, T>(
    rng: &mut impl Rng,
    items: &'a [T],
    weight_of: impl Fn(&T) -> f64,
) -> Option<&'a T> {
    let (last, _) = items.split_last()?;
    let total: f64 = items.iter().map(&weight_of).sum();
    let mut roll = rng.random::<f64>() * total;
    for item in items {
        let w = weight_of(item);
        if roll < w {
            return Some(item);
        }
        roll -= w;
    }
    Some(last)
}
