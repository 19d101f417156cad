//! Scoring module - line-clear points and level gravity
//!
//! Both formulas are fixed:
//! - a clear of `n` rows scores `n * 10 * n` (1 → 10, 2 → 40, 3 → 90, 4 → 160)
//! - gravity at level `L` is `max(150, 1000 - (L - 1) * 75)` milliseconds

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_POINTS, MIN_DROP_MS};

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_POINTS).saturating_mul(lines)
}

/// Gravity interval for a level (1-based), floored at 150ms
pub fn drop_interval_for_level(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

/// Whether the running line total has reached the end of `level`
pub fn level_up_due(total_lines: u32, level: u32) -> bool {
    total_lines >= level.saturating_mul(LINES_PER_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_are_quadratic() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 40);
        assert_eq!(line_clear_score(3), 90);
        assert_eq!(line_clear_score(4), 160);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_for_level(1), 1000);
        assert_eq!(drop_interval_for_level(2), 925);
        assert_eq!(drop_interval_for_level(5), 700);
        assert_eq!(drop_interval_for_level(12), 175);
        assert_eq!(drop_interval_for_level(13), 150); // 100 before the floor
        assert_eq!(drop_interval_for_level(40), 150);
        assert_eq!(drop_interval_for_level(u32::MAX), 150);
    }

    #[test]
    fn test_level_up_threshold() {
        assert!(!level_up_due(9, 1));
        assert!(level_up_due(10, 1));
        assert!(level_up_due(13, 1));
        assert!(!level_up_due(13, 2));
        assert!(level_up_due(20, 2));
    }
}
