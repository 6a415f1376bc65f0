// ============================================================
// Layer 4 - Shuffle Buffer
// ============================================================
// Bounded, streaming shuffle for sequences too long to hold in
// memory at once.
//
// How it works (capacity = 3):
//   1. Fill the buffer with the first 3 items   [a b c]
//   2. Emit a random slot (say b)                [a c]
//   3. Refill from the input                     [a c d]
//   4. Repeat; at end of input drain randomly
//
// Larger buffers give a more thorough mix. A capacity of 1 keeps
// the input order unchanged. With a fixed seed the output order is
// reproducible, and it is always a permutation of the input.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub struct Shuffled<I: Iterator> {
    inner:    I,
    buffer:   Vec<I::Item>,
    capacity: usize,
    rng:      StdRng,
}

/// Wrap `inner` in a shuffle buffer of `capacity` items.
///
/// # Panics
/// Panics if `capacity` is 0; config validation rejects that earlier.
pub fn shuffle_buffer<I: Iterator>(inner: I, capacity: usize, seed: u64) -> Shuffled<I> {
    assert!(capacity > 0, "shuffle buffer capacity must be positive");
    Shuffled {
        inner,
        buffer: Vec::with_capacity(capacity),
        capacity,
        rng: StdRng::seed_from_u64(seed),
    }
}

impl<I: Iterator> Iterator for Shuffled<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.len() < self.capacity {
            match self.inner.next() {
                Some(item) => self.buffer.push(item),
                None => break,
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        let slot = self.rng.gen_range(0..self.buffer.len());
        Some(self.buffer.swap_remove(slot))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_permutation() {
        let mut out: Vec<u32> = shuffle_buffer(0..100u32, 16, 7).collect();
        out.sort_unstable();
        assert_eq!(out, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_capacity_one_preserves_order() {
        let out: Vec<u32> = shuffle_buffer(0..20u32, 1, 123).collect();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a: Vec<u32> = shuffle_buffer(0..50u32, 10, 42).collect();
        let b: Vec<u32> = shuffle_buffer(0..50u32, 10, 42).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_buffer_actually_reorders() {
        let out: Vec<u32> = shuffle_buffer(0..200u32, 200, 1).collect();
        assert_ne!(out, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_input() {
        let out: Vec<u32> = shuffle_buffer(std::iter::empty(), 4, 0).collect();
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _ = shuffle_buffer(0..3u32, 0, 0);
    }
}
