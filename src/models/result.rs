//! Simulation result model.
//!
//! The output contract of one policy invocation: the execution timeline,
//! the completed process records, and the run-wide averages. Consumed by
//! timeline renderers, tabular reports, cross-run comparison, and
//! document export.

use serde::{Deserialize, Serialize};

use super::{ProcessMetrics, Timeline};

/// Arithmetic means of the three timing metrics over one run.
///
/// Averages are taken over the full input process count. An empty run
/// reports all-zero averages rather than NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAverages {
    /// Mean waiting time.
    pub waiting_time: f64,
    /// Mean turnaround time.
    pub turnaround_time: f64,
    /// Mean response time.
    pub response_time: f64,
}

impl RunAverages {
    /// Computes the averages over `input_count` processes.
    ///
    /// `input_count` is the size of the original input, independent of
    /// completion order; zero yields all-zero averages.
    pub fn over(completed: &[ProcessMetrics], input_count: usize) -> Self {
        if input_count == 0 {
            return Self::default();
        }
        let n = input_count as f64;
        Self {
            waiting_time: completed.iter().map(|m| m.waiting_time as f64).sum::<f64>() / n,
            turnaround_time: completed.iter().map(|m| m.turnaround_time as f64).sum::<f64>() / n,
            response_time: completed.iter().map(|m| m.response_time as f64).sum::<f64>() / n,
        }
    }
}

/// The complete, immutable output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Execution blocks in `start_time` order.
    pub timeline: Timeline,
    /// Completed processes, in completion order.
    pub processes: Vec<ProcessMetrics>,
    /// Run-wide averages over the full input count.
    pub averages: RunAverages,
}

impl SimulationResult {
    /// Assembles a result, computing averages over `input_count`.
    pub fn new(timeline: Timeline, processes: Vec<ProcessMetrics>, input_count: usize) -> Self {
        let averages = RunAverages::over(&processes, input_count);
        Self {
            timeline,
            processes,
            averages,
        }
    }

    /// The empty result: no blocks, no processes, zero averages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Finds the completed record for a given process.
    pub fn metrics_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == process_id)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Number of execution blocks.
    pub fn block_count(&self) -> usize {
        self.timeline.block_count()
    }

    /// End of the last execution block.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn metrics(id: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> ProcessMetrics {
        ProcessMetrics::finalize(&Process::new(id, arrival, burst), start, completion)
    }

    #[test]
    fn test_averages_over_full_input_count() {
        let completed = vec![
            metrics("P1", 0, 5, 0, 5),  // waiting 0, turnaround 5, response 0
            metrics("P2", 1, 3, 5, 8),  // waiting 4, turnaround 7, response 4
            metrics("P3", 2, 1, 8, 9),  // waiting 6, turnaround 7, response 6
        ];
        let avg = RunAverages::over(&completed, 3);
        assert!((avg.waiting_time - 10.0 / 3.0).abs() < 1e-9);
        assert!((avg.turnaround_time - 19.0 / 3.0).abs() < 1e-9);
        assert!((avg.response_time - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_averages_empty_input_is_zero_not_nan() {
        let avg = RunAverages::over(&[], 0);
        assert_eq!(avg.waiting_time, 0.0);
        assert_eq!(avg.turnaround_time, 0.0);
        assert_eq!(avg.response_time, 0.0);
    }

    #[test]
    fn test_result_metrics_for() {
        let result = SimulationResult::new(
            Timeline::new(),
            vec![metrics("P1", 0, 2, 0, 2), metrics("P2", 0, 3, 2, 5)],
            2,
        );
        assert_eq!(result.metrics_for("P2").map(|m| m.completion_time), Some(5));
        assert!(result.metrics_for("P9").is_none());
    }

    #[test]
    fn test_empty_result() {
        let result = SimulationResult::empty();
        assert_eq!(result.process_count(), 0);
        assert_eq!(result.block_count(), 0);
        assert_eq!(result.makespan(), 0);
        assert_eq!(result.averages, RunAverages::default());
    }

    #[test]
    fn test_result_serializes_with_camel_case_averages() {
        let result = SimulationResult::new(Timeline::new(), vec![metrics("P1", 0, 2, 0, 2)], 1);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"waitingTime\":0.0"));
        assert!(json.contains("\"turnaroundTime\":2.0"));
    }
}
