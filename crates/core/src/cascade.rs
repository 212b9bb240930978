//! Cascade module - row clearing and recursive settling of the landscape
//!
//! Clearing a row lets everything above it fall. Each row above is lifted out
//! and dropped one level at a time: cells with support (floor, or a settled
//! cell directly below) stay, the rest keep falling. When a level plus the
//! cells falling into it reaches the scene width, that level is cleared on the
//! spot (the falling cells are consumed) and everything above it settles again.
//!
//! Nested settling uses an explicit stack of upward walks instead of recursion:
//!
//! ```text
//! walk(from = 4)       rows 4, 3, 2 ...   -- row 6 fills while settling row 3
//!   walk(from = 5)     rows 5, 4, ... 0   -- runs to completion first
//! walk resumes at 2
//! ```
//!
//! Falling cells of one row are a single `u64` column mask, so no column can
//! ever be duplicated within a row.

use crate::landscape::Landscape;

/// Summary of one `clear_and_cascade` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CascadeReport {
    /// Rows cleared by settling, not counting the initial row.
    pub extra_rows_cleared: u32,
    /// Settle steps taken (one per row visited by a falling set).
    pub settle_steps: u32,
}

impl Landscape {
    /// Empty `row`, then settle everything above it.
    ///
    /// Out-of-scene rows are ignored and produce an empty report.
    pub fn clear_and_cascade(&mut self, row: i32) -> CascadeReport {
        let mut report = CascadeReport::default();
        if row < 0 || row > self.scene().max_y() {
            return report;
        }

        self.clear_row(row);

        // Each entry is the next row a walk will settle; walks go toward row 0.
        let mut walks: Vec<i32> = vec![row - 1];
        while let Some(next) = walks.pop() {
            if next < 0 {
                continue;
            }
            // Keep this walk's continuation below any walk the settle spawns.
            walks.push(next - 1);
            if let Some(cleared) = self.settle_row(next, &mut report) {
                report.extra_rows_cleared += 1;
                walks.push(cleared - 1);
            }
        }

        report
    }

    /// Lift `row` out and let its cells fall. Returns the level cleared by
    /// the falling cells, if any.
    fn settle_row(&mut self, row: i32, report: &mut CascadeReport) -> Option<i32> {
        let width = self.scene().width() as u32;
        let max_y = self.scene().max_y();

        let mut falling = self.row_mask(row);
        self.set_row_mask(row, 0);
        let mut level = row;

        while falling != 0 {
            report.settle_steps += 1;

            let here = self.row_mask(level);
            if here.count_ones() + falling.count_ones() == width {
                self.set_row_mask(level, 0);
                return Some(level);
            }

            let resting = if level == max_y {
                falling
            } else {
                falling & self.row_mask(level + 1)
            };
            self.set_row_mask(level, here | resting);
            falling &= !resting;
            level += 1;
        }

        None
    }
}
