//! Floor penalties.

use crate::board::FLOOR_CAPACITY;

/// Points lost for each floor slot, left to right.
pub const FLOOR_PENALTIES: [u32; FLOOR_CAPACITY] = [1, 1, 2, 2, 2, 3, 3];

/// Total penalty for a floor with `occupied` slots filled.
///
/// ```
/// use azul_engine::scoring::floor_penalty;
///
/// assert_eq!(floor_penalty(0), 0);
/// assert_eq!(floor_penalty(5), 8);
/// assert_eq!(floor_penalty(7), 14);
/// ```
#[must_use]
pub fn floor_penalty(occupied: usize) -> u32 {
    FLOOR_PENALTIES.iter().take(occupied).sum()
}

/// Extra penalty caused by growing the floor from `before` to `after` slots.
#[must_use]
pub fn floor_penalty_delta(before: usize, after: usize) -> u32 {
    floor_penalty(after).saturating_sub(floor_penalty(before))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_schedule() {
        let expected = [0, 1, 2, 4, 6, 8, 11, 14];
        for (occupied, &penalty) in expected.iter().enumerate() {
            assert_eq!(floor_penalty(occupied), penalty);
        }
    }

    #[test]
    fn test_capped_at_capacity() {
        assert_eq!(floor_penalty(12), floor_penalty(FLOOR_CAPACITY));
    }

    #[test]
    fn test_delta() {
        assert_eq!(floor_penalty_delta(2, 4), 4);
        assert_eq!(floor_penalty_delta(7, 7), 0);
    }
}
