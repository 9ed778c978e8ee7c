//! Uniform random index source for food placement. `Math.random` in the
//! browser; a small seeded generator elsewhere so the simulation tests can
//! run under a plain `cargo test`.

/// Returns a uniform value in `[0, max)`, or 0 when `max` is 0.
#[cfg(target_arch = "wasm32")]
pub fn below(max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    // Math.random is in [0, 1), so the product floors below max.
    (js_sys::Math::random() * max as f64) as usize
}

#[cfg(not(target_arch = "wasm32"))]
pub fn below(max: usize) -> usize {
    use std::cell::Cell;
    use std::time::{SystemTime, UNIX_EPOCH};

    thread_local! {
        static STATE: Cell<u64> = Cell::new(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed)
                | 1,
        );
    }

    if max == 0 {
        return 0;
    }
    STATE.with(|state| {
        // xorshift64
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        state.set(x);
        (x % max as u64) as usize
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_range() {
        for max in 1..50 {
            for _ in 0..100 {
                assert!(below(max) < max);
            }
        }
    }

    #[test]
    fn empty_range_yields_zero() {
        assert_eq!(below(0), 0);
    }
}
