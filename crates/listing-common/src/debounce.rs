/// Single-deadline debouncer for collapsing bursts of input events.
///
/// Each `input` call (re)sets the one pending deadline; `fire` succeeds only
/// once the deadline has elapsed, and clears it. The caller owns the clock
/// and the timer — this type only decides whether a given instant is late
/// enough, which keeps the quiescence logic testable without real timers.
///
/// Timestamps are milliseconds as `f64`, matching `Date.now()` on the web
/// side.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer {
    window_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            deadline: None,
        }
    }

    /// Record an input event at `now`, pushing the pending deadline out to
    /// the end of a fresh quiescence window.
    pub fn input(&mut self, now: f64) {
        self.deadline = Some(now + self.window_ms);
    }

    /// Attempt to fire at `now`. Returns `true` (and clears the deadline)
    /// iff a deadline is pending and has elapsed. Callbacks scheduled for
    /// deadlines that were since pushed out land here early and get `false`.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Discard any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
