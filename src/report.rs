//! Plain-text simulation reports.
//!
//! Renders a [`SimulationResult`] and its policy parameters into the
//! document layout consumed by exporters: a title, the algorithm and
//! its parameters, the run averages to two decimals, and a per-process
//! metrics table.

use crate::models::SimulationResult;
use crate::policies::Policy;

/// Renders a simulation result as a plain-text report.
pub fn render_report(result: &SimulationResult, policy: &Policy) -> String {
    let mut out = String::new();
    out.push_str("CPU Scheduler Simulation Results\n\n");
    out.push_str(&format!("Algorithm: {}\n", policy.name()));

    match policy {
        Policy::RoundRobin { quantum } => {
            out.push_str(&format!("Time Quantum: {quantum}\n"));
        }
        Policy::Priority { preemptive } => {
            let mode = if *preemptive {
                "Preemptive"
            } else {
                "Non-preemptive"
            };
            out.push_str(&format!("Mode: {mode}\n"));
        }
        _ => {}
    }

    out.push_str("\nAverage Metrics:\n");
    out.push_str(&format!(
        "  Waiting Time: {:.2}\n",
        result.averages.waiting_time
    ));
    out.push_str(&format!(
        "  Turnaround Time: {:.2}\n",
        result.averages.turnaround_time
    ));
    out.push_str(&format!(
        "  Response Time: {:.2}\n",
        result.averages.response_time
    ));

    out.push_str("\nProcess Details:\n");
    out.push_str(&format!(
        "  {:<10}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}\n",
        "Process", "AT", "BT", "CT", "TAT", "WT", "RT"
    ));
    for m in &result.processes {
        out.push_str(&format!(
            "  {:<10}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}\n",
            m.id,
            m.arrival_time,
            m.burst_time,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::policies::simulate;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_report_fcfs_layout() {
        let result = simulate(&sample_processes(), Policy::Fcfs);
        let report = render_report(&result, &Policy::Fcfs);

        assert!(report.starts_with("CPU Scheduler Simulation Results\n"));
        assert!(report.contains("Algorithm: FCFS\n"));
        assert!(report.contains("  Waiting Time: 3.33\n"));
        assert!(report.contains("  Turnaround Time: 6.33\n"));
        assert!(report.contains("Process Details:"));
        // No parameter lines for FCFS.
        assert!(!report.contains("Time Quantum"));
        assert!(!report.contains("Mode:"));
    }

    #[test]
    fn test_report_round_robin_includes_quantum() {
        let policy = Policy::RoundRobin { quantum: 2 };
        let result = simulate(&sample_processes(), policy);
        let report = render_report(&result, &policy);
        assert!(report.contains("Algorithm: RoundRobin\n"));
        assert!(report.contains("Time Quantum: 2\n"));
    }

    #[test]
    fn test_report_priority_includes_mode() {
        let preemptive = Policy::Priority { preemptive: true };
        let result = simulate(&sample_processes(), preemptive);
        assert!(render_report(&result, &preemptive).contains("Mode: Preemptive\n"));

        let cooperative = Policy::Priority { preemptive: false };
        let result = simulate(&sample_processes(), cooperative);
        assert!(render_report(&result, &cooperative).contains("Mode: Non-preemptive\n"));
    }

    #[test]
    fn test_report_one_row_per_process() {
        let result = simulate(&sample_processes(), Policy::Fcfs);
        let report = render_report(&result, &Policy::Fcfs);
        for id in ["P1", "P2", "P3"] {
            assert!(report.lines().any(|l| l.trim_start().starts_with(id)));
        }
    }

    #[test]
    fn test_report_empty_run() {
        let report = render_report(&SimulationResult::empty(), &Policy::Sjf);
        assert!(report.contains("  Waiting Time: 0.00\n"));
        assert!(report.contains("Process Details:"));
    }
}
