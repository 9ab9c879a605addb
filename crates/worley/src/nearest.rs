//! Bounded buffer of the three smallest distances seen.

/// The three smallest distances inserted so far, ascending.
///
/// Slots not yet filled hold `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestDistances {
    slots: [f64; 3],
}

impl Default for NearestDistances {
    fn default() -> Self {
        Self::new()
    }
}

impl NearestDistances {
    pub fn new() -> Self {
        Self {
            slots: [f64::INFINITY; 3],
        }
    }

    /// Inserts `distance`, dropping whichever value falls off the end.
    pub fn insert(&mut self, distance: f64) {
        if distance >= self.slots[2] {
            return;
        }
        self.slots[2] = distance;
        if self.slots[2] < self.slots[1] {
            self.slots.swap(1, 2);
            if self.slots[1] < self.slots[0] {
                self.slots.swap(0, 1);
            }
        }
    }

    /// Raw distances, ascending.
    pub fn distances(&self) -> [f64; 3] {
        self.slots
    }

    /// Distances clamped to `[0, 1]`.
    pub fn clamped(&self) -> [f64; 3] {
        self.slots.map(|d| d.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_holds_sentinels() {
        let n = NearestDistances::new();
        assert!(n.distances().iter().all(|d| d.is_infinite()));
        assert_eq!(n.clamped(), [1.0; 3]);
    }

    #[test]
    fn insertions_stay_sorted() {
        let mut n = NearestDistances::new();
        for d in [0.9, 0.2, 0.5, 0.1, 0.7] {
            n.insert(d);
        }
        assert_eq!(n.distances(), [0.1, 0.2, 0.5]);
    }

    #[test]
    fn larger_values_are_dropped() {
        let mut n = NearestDistances::new();
        for d in [0.1, 0.2, 0.3] {
            n.insert(d);
        }
        n.insert(0.4);
        assert_eq!(n.distances(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn clamp_caps_far_distances() {
        let mut n = NearestDistances::new();
        n.insert(0.25);
        n.insert(4.0);
        assert_eq!(n.clamped(), [0.25, 1.0, 1.0]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn keeps_the_three_smallest_in_order(
                values in proptest::collection::vec(0.0f64..100.0, 0..64),
            ) {
                let mut n = NearestDistances::new();
                for &v in &values {
                    n.insert(v);
                    let d = n.distances();
                    prop_assert!(d[0] <= d[1] && d[1] <= d[2]);
                }

                let mut sorted = values.clone();
                sorted.sort_by(|a, b| a.total_cmp(b));
                for (slot, expected) in n.distances().iter().zip(sorted.iter()) {
                    prop_assert_eq!(slot, expected);
                }
            }
        }
    }
}
