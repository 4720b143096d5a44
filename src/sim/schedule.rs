//! Timer task scheduling
//!
//! The four gameplay cadences run as named periodic tasks polled from the
//! driver loop. Every cadence change (pause, resume, boost toggle, game over)
//! is a cancel-and-reschedule on a task handle, never conditional logic
//! inside a fixed-period tick.

/// Periodic gameplay tasks. When several are due in the same poll they fire
/// in declaration order; handlers touch disjoint or commutative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Movement,
    Spawn,
    DespawnSweep,
    HealthDrain,
}

impl Task {
    pub const ALL: [Task; 4] = [
        Task::Movement,
        Task::Spawn,
        Task::DespawnSweep,
        Task::HealthDrain,
    ];

    fn index(self) -> usize {
        match self {
            Task::Movement => 0,
            Task::Spawn => 1,
            Task::DespawnSweep => 2,
            Task::HealthDrain => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Task::Movement => "movement",
            Task::Spawn => "spawn",
            Task::DespawnSweep => "despawn-sweep",
            Task::HealthDrain => "health-drain",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    interval_ms: u64,
    due_at_ms: u64,
}

/// Cooperative single-threaded timer set, polled once per animation frame
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: [Option<Entry>; 4],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a task, replacing any existing schedule. The first
    /// firing lands one full interval from `now_ms`.
    pub fn arm(&mut self, task: Task, now_ms: u64, interval_ms: u64) {
        self.entries[task.index()] = Some(Entry {
            interval_ms,
            due_at_ms: now_ms + interval_ms,
        });
    }

    pub fn cancel(&mut self, task: Task) {
        self.entries[task.index()] = None;
    }

    pub fn cancel_all(&mut self) {
        self.entries = [None; 4];
    }

    pub fn is_armed(&self, task: Task) -> bool {
        self.entries[task.index()].is_some()
    }

    /// Current interval of an armed task
    pub fn interval_ms(&self, task: Task) -> Option<u64> {
        self.entries[task.index()].map(|e| e.interval_ms)
    }

    /// Collect the tasks due at `now_ms`, re-arming each at `now_ms + interval`.
    /// A stalled frame fires each due task once; intervals drift rather than
    /// burst to catch up, matching browser interval timers.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Task> {
        let mut due = Vec::new();
        for task in Task::ALL {
            if let Some(entry) = &mut self.entries[task.index()] {
                if now_ms >= entry.due_at_ms {
                    entry.due_at_ms = now_ms + entry.interval_ms;
                    due.push(task);
                }
            }
        }
        due
    }
}
