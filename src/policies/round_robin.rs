//! Round-Robin scheduling (quantum-based).
//!
//! # Algorithm
//!
//! Two queues: an arrival-ordered intake queue and a FIFO ready queue.
//! Each dispatch pops the ready-queue head and runs it for
//! `min(quantum, remaining)` units, emitting one block per quantum (a
//! context switch is implicit each round, so quanta are never
//! coalesced). When the ready queue drains while processes are still
//! inbound, the clock jumps to the next arrival.
//!
//! # Fairness rule
//!
//! After a non-final quantum, processes that arrived during the quantum
//! are enqueued **before** the just-run process returns to the tail.
//! Reversing that order changes wait times.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{Process, ProcessMetrics, SimulationResult, Timeline};

/// Runs Round-Robin with the given time quantum (> 0).
pub fn round_robin(processes: &[Process], quantum: i64) -> SimulationResult {
    let total = processes.len();
    let mut intake: VecDeque<usize> = {
        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by_key(|&idx| processes[idx].arrival_time); // stable
        order.into()
    };
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_dispatch: Vec<Option<i64>> = vec![None; total];
    let mut completed = Vec::with_capacity(total);
    let mut timeline = Timeline::new();
    let mut current_time = 0;

    loop {
        admit_arrived(&mut intake, &mut ready, processes, current_time);
        let Some(idx) = ready.pop_front() else {
            match intake.front() {
                // Ready queue drained; jump to the next arrival.
                Some(&next) => {
                    current_time = processes[next].arrival_time;
                    continue;
                }
                None => break,
            }
        };
        let process = &processes[idx];
        let start_time = *first_dispatch[idx].get_or_insert(current_time);
        let slice = quantum.min(remaining[idx]);
        timeline.append(process, current_time, current_time + slice);
        remaining[idx] -= slice;
        current_time += slice;
        if remaining[idx] == 0 {
            completed.push(ProcessMetrics::finalize(process, start_time, current_time));
        } else {
            // Arrivals during this quantum enter the queue ahead of the
            // returning process.
            admit_arrived(&mut intake, &mut ready, processes, current_time);
            ready.push_back(idx);
        }
    }

    SimulationResult::new(timeline, completed, total)
}

/// Moves every process with `arrival_time <= current_time` from intake
/// to the back of the ready queue, in arrival order.
fn admit_arrived(
    intake: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    processes: &[Process],
    current_time: i64,
) {
    while let Some(&idx) = intake.front() {
        if processes[idx].arrival_time > current_time {
            break;
        }
        intake.pop_front();
        ready.push_back(idx);
    }
}
