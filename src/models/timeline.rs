//! Execution timeline model.
//!
//! A timeline is the ordered sequence of non-overlapping execution
//! blocks produced by one scheduling run. Policies report every executed
//! interval through [`Timeline::record`] (which coalesces consecutive
//! same-process intervals into one block) or [`Timeline::append`] (which
//! always opens a new block — Round-Robin treats each quantum as its own
//! dispatch).

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous interval of CPU occupancy by a single process.
///
/// `start_time < end_time` always holds. Blocks for a single process
/// need not be contiguous under preemptive policies, but the blocks of a
/// run are pairwise non-overlapping and ordered by `start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBlock {
    /// The process occupying the CPU.
    pub process_id: String,
    /// Interval start (ticks, inclusive).
    pub start_time: i64,
    /// Interval end (ticks, exclusive).
    pub end_time: i64,
    /// Display hint copied from the process.
    #[serde(default)]
    pub color: String,
}

impl ExecutionBlock {
    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered accumulator of execution blocks for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Blocks in `start_time` order.
    pub blocks: Vec<ExecutionBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an executed interval, extending the last block when the
    /// same process continues without a gap.
    pub fn record(&mut self, process: &Process, start_time: i64, end_time: i64) {
        if let Some(last) = self.blocks.last_mut() {
            if last.process_id == process.id && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.append(process, start_time, end_time);
    }

    /// Records an executed interval as a new block, never coalescing.
    pub fn append(&mut self, process: &Process, start_time: i64, end_time: i64) {
        self.blocks.push(ExecutionBlock {
            process_id: process.id.clone(),
            start_time,
            end_time,
            color: process.color.clone(),
        });
    }

    /// The blocks in `start_time` order.
    pub fn blocks(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the timeline has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// End of the last block, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.blocks.last().map(|b| b.end_time).unwrap_or(0)
    }

    /// Total executed time for one process across all its blocks.
    pub fn busy_time_for(&self, process_id: &str) -> i64 {
        self.blocks
            .iter()
            .filter(|b| b.process_id == process_id)
            .map(|b| b.duration())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: &str) -> Process {
        Process::new(id, 0, 10).with_color("#ccc")
    }

    #[test]
    fn test_record_coalesces_contiguous_same_process() {
        let mut t = Timeline::new();
        let p = proc("P1");
        t.record(&p, 0, 1);
        t.record(&p, 1, 2);
        t.record(&p, 2, 3);
        assert_eq!(t.block_count(), 1);
        assert_eq!(t.blocks()[0].start_time, 0);
        assert_eq!(t.blocks()[0].end_time, 3);
    }

    #[test]
    fn test_record_opens_new_block_on_context_switch() {
        let mut t = Timeline::new();
        let p1 = proc("P1");
        let p2 = proc("P2");
        t.record(&p1, 0, 1);
        t.record(&p2, 1, 2);
        t.record(&p1, 2, 3);
        assert_eq!(t.block_count(), 3);
    }

    #[test]
    fn test_record_does_not_coalesce_across_gap() {
        let mut t = Timeline::new();
        let p = proc("P1");
        t.record(&p, 0, 2);
        t.record(&p, 5, 6); // idle gap between 2 and 5
        assert_eq!(t.block_count(), 2);
        assert_eq!(t.blocks()[1].start_time, 5);
    }

    #[test]
    fn test_append_never_coalesces() {
        let mut t = Timeline::new();
        let p = proc("P1");
        t.append(&p, 0, 2);
        t.append(&p, 2, 4);
        assert_eq!(t.block_count(), 2);
    }

    #[test]
    fn test_block_carries_color() {
        let mut t = Timeline::new();
        t.record(&proc("P1"), 0, 1);
        assert_eq!(t.blocks()[0].color, "#ccc");
    }

    #[test]
    fn test_busy_time_sums_all_blocks() {
        let mut t = Timeline::new();
        let p1 = proc("P1");
        let p2 = proc("P2");
        t.append(&p1, 0, 2);
        t.append(&p2, 2, 5);
        t.append(&p1, 5, 6);
        assert_eq!(t.busy_time_for("P1"), 3);
        assert_eq!(t.busy_time_for("P2"), 3);
        assert_eq!(t.busy_time_for("P3"), 0);
    }

    #[test]
    fn test_makespan_and_empty() {
        let mut t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        t.record(&proc("P1"), 3, 7);
        assert_eq!(t.makespan(), 7);
    }

    #[test]
    fn test_block_duration() {
        let mut t = Timeline::new();
        t.record(&proc("P1"), 2, 9);
        assert_eq!(t.blocks()[0].duration(), 7);
    }
}
