//! Process model.
//!
//! A process is the unit of CPU demand: it arrives at a fixed time,
//! requires a fixed total burst, and optionally carries a priority
//! (lower value = more urgent, used only by the Priority policy).
//!
//! The input-facing fields double as the persisted interchange form:
//! process lists round-trip through JSON with camelCase names, and any
//! derived fields present in imported data are ignored.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Carries only input-facing data; timing metrics produced by a run live
/// in [`ProcessMetrics`]. The `color` is an opaque display hint passed
/// through to execution blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes ready (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time the process requires (ticks, > 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Required only for the
    /// Priority policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Display hint, opaque to the engine.
    #[serde(default)]
    pub color: String,
}

impl Process {
    /// Creates a new process with the given ID, arrival time, and burst time.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
            color: String::new(),
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A completed process with its derived timing metrics.
///
/// Produced exactly once per process, when its completion time is known.
/// For any correct schedule `waiting_time >= 0` and
/// `turnaround_time >= burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: String,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Total CPU demand (ticks).
    pub burst_time: i64,
    /// Scheduling priority, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Display hint, opaque to the engine.
    #[serde(default)]
    pub color: String,
    /// Time of first dispatch.
    pub start_time: i64,
    /// Time at which the last unit of burst finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`: time spent ready but not running.
    pub waiting_time: i64,
    /// `start_time - arrival_time`: delay until first dispatch.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Finalizes a process once its first-dispatch and completion times
    /// are known, deriving turnaround, waiting, and response time.
    pub fn finalize(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            color: process.color.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2).with_color("#ff0000");
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(2));
        assert_eq!(p.color, "#ff0000");
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, None);
        assert!(p.color.is_empty());
    }

    #[test]
    fn test_finalize_derives_metrics() {
        let p = Process::new("P2", 1, 3);
        let m = ProcessMetrics::finalize(&p, 5, 8);
        assert_eq!(m.start_time, 5);
        assert_eq!(m.completion_time, 8);
        assert_eq!(m.turnaround_time, 7); // 8 - 1
        assert_eq!(m.waiting_time, 4); // 7 - 3
        assert_eq!(m.response_time, 4); // 5 - 1
    }

    #[test]
    fn test_finalize_immediate_dispatch() {
        let p = Process::new("P1", 0, 5);
        let m = ProcessMetrics::finalize(&p, 0, 5);
        assert_eq!(m.turnaround_time, 5);
        assert_eq!(m.waiting_time, 0);
        assert_eq!(m.response_time, 0);
    }

    #[test]
    fn test_interchange_round_trip() {
        let processes = vec![
            Process::new("P1", 0, 5).with_color("#4f46e5"),
            Process::new("P2", 1, 3).with_priority(1),
        ];
        let json = serde_json::to_string(&processes).unwrap();
        let back: Vec<Process> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, processes);
    }

    #[test]
    fn test_interchange_field_names_are_camel_case() {
        let p = Process::new("P1", 2, 4).with_priority(1);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"arrivalTime\":2"));
        assert!(json.contains("\"burstTime\":4"));
        assert!(json.contains("\"priority\":1"));
    }

    #[test]
    fn test_interchange_omits_absent_priority() {
        let json = serde_json::to_string(&Process::new("P1", 0, 1)).unwrap();
        assert!(!json.contains("priority"));
    }

    #[test]
    fn test_import_ignores_derived_fields() {
        // Exports from older sessions may still carry derived fields.
        let json = r##"{
            "id": "P1",
            "arrivalTime": 0,
            "burstTime": 5,
            "color": "#eee",
            "remainingTime": 2,
            "startTime": 0,
            "completionTime": 5,
            "turnaroundTime": 5,
            "waitingTime": 0,
            "responseTime": 0
        }"##;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p, Process::new("P1", 0, 5).with_color("#eee"));
    }

    #[test]
    fn test_import_defaults_optional_fields() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrivalTime":1,"burstTime":2}"#).unwrap();
        assert_eq!(p.priority, None);
        assert!(p.color.is_empty());
    }
}
