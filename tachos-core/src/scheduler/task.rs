//! Task table
//!
//! Priority order is load-bearing: the emergency latch must run before any
//! other writer that is due in the same window, so its zero cannot be
//! overwritten by a stale target within one control period.

/// Controller tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Emergency button + latch
    Safety,
    /// Slew-limited motor ramp and status line
    Ramp,
    /// Object-counting sensor
    Counter,
    /// Potentiometer acquisition
    Speed,
    /// Periodic motor readback (diagnostics only)
    EncoderSense,
}

/// Static scheduling parameters of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskSpec {
    pub id: TaskId,
    pub name: &'static str,
    /// Loop period in milliseconds
    pub period_ms: u32,
    /// Higher runs first
    pub priority: u8,
}

/// Encoder sense reports once every this many iterations (~100 ms)
pub const ENCODER_SENSE_REPORT_EVERY: u32 = 20;

/// All tasks, highest priority first
pub const TASKS: [TaskSpec; 5] = [
    TaskSpec {
        id: TaskId::Safety,
        name: "safety",
        period_ms: 10,
        priority: 7,
    },
    TaskSpec {
        id: TaskId::Ramp,
        name: "ramp",
        period_ms: 50,
        priority: 6,
    },
    TaskSpec {
        id: TaskId::Counter,
        name: "counter",
        period_ms: 20,
        priority: 4,
    },
    TaskSpec {
        id: TaskId::Speed,
        name: "speed",
        period_ms: 50,
        priority: 3,
    },
    TaskSpec {
        id: TaskId::EncoderSense,
        name: "encoder_sense",
        period_ms: 5,
        priority: 3,
    },
];

/// Tasks that read or write control state, highest priority first
pub const CONTROL_TASKS: [TaskId; 4] = [TaskId::Safety, TaskId::Ramp, TaskId::Counter, TaskId::Speed];

impl TaskId {
    /// Scheduling parameters for this task
    pub fn spec(&self) -> &'static TaskSpec {
        match self {
            TaskId::Safety => &TASKS[0],
            TaskId::Ramp => &TASKS[1],
            TaskId::Counter => &TASKS[2],
            TaskId::Speed => &TASKS[3],
            TaskId::EncoderSense => &TASKS[4],
        }
    }

    /// Loop period in milliseconds
    pub fn period_ms(&self) -> u32 {
        self.spec().period_ms
    }

    /// Whether the task's loop body runs at time `now_ms`
    pub fn is_due(&self, now_ms: u32) -> bool {
        now_ms % self.period_ms() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_by_priority() {
        for pair in TASKS.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn test_spec_lookup_matches_id() {
        for spec in TASKS.iter() {
            assert_eq!(spec.id.spec(), spec);
        }
    }

    #[test]
    fn test_safety_outranks_writers() {
        let safety = TaskId::Safety.spec().priority;
        for id in [TaskId::Ramp, TaskId::Counter, TaskId::Speed] {
            assert!(safety > id.spec().priority);
        }
        assert!(TaskId::Safety.period_ms() < TaskId::Speed.period_ms());
    }

    #[test]
    fn test_control_tasks_in_priority_order() {
        for pair in CONTROL_TASKS.windows(2) {
            assert!(pair[0].spec().priority >= pair[1].spec().priority);
        }
    }

    #[test]
    fn test_is_due() {
        assert!(TaskId::Speed.is_due(0));
        assert!(!TaskId::Speed.is_due(10));
        assert!(TaskId::Speed.is_due(50));
        assert!(TaskId::Counter.is_due(40));
        assert!(TaskId::Safety.is_due(10));
    }
}
