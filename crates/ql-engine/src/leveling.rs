//! The leveling function shared by the approval and blessing paths.
//!
//! XP accumulates toward a threshold of `level * 100`, evaluated at the
//! level the hero held when the credit arrived. Each full threshold
//! contained in the running total converts into one level, so a single
//! large credit can cross several levels at once. The reduction is a
//! loop, not a one-shot check.

/// XP needed to fill the bar at `level`.
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(100)
}

/// Add `delta` XP to `(xp, level)` and resolve level-ups.
///
/// The threshold is fixed at `level * 100` for the whole reduction:
/// a credit landing at level 1 converts every full 100 XP into a level.
/// Returns the new `(xp, level)` pair; the returned xp is always below
/// the returned level's threshold.
pub fn apply_xp(xp: u32, level: u32, delta: u32) -> (u32, u32) {
    let level = level.max(1);
    let step = level_threshold(level);
    let mut xp = xp.saturating_add(delta);
    let mut level = level;
    while xp >= step {
        xp -= step;
        level += 1;
    }
    (xp, level)
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn resolved_xp_is_below_threshold(
            level in 1u32..=100,
            raw_xp in 0u32..10_000,
            delta in 0u32..=1_000_000,
        ) {
            let xp = raw_xp % level_threshold(level);
            let (new_xp, new_level) = apply_xp(xp, level, delta);
            prop_assert!(new_xp < level_threshold(new_level));
        }

        #[test]
        fn level_never_decreases(
            level in 1u32..=100,
            raw_xp in 0u32..10_000,
            delta in 0u32..=1_000_000,
        ) {
            let xp = raw_xp % level_threshold(level);
            let (_, new_level) = apply_xp(xp, level, delta);
            prop_assert!(new_level >= level);
        }

        #[test]
        fn credit_is_conserved(
            level in 1u32..=100,
            raw_xp in 0u32..10_000,
            delta in 0u32..=1_000_000,
        ) {
            let xp = raw_xp % level_threshold(level);
            let step = u64::from(level_threshold(level));
            let (new_xp, new_level) = apply_xp(xp, level, delta);
            // Every level gained consumed exactly one entry-level threshold.
            prop_assert_eq!(
                u64::from(new_xp) + u64::from(new_level - level) * step,
                u64::from(xp) + u64::from(delta)
            );
        }
    }
}
