//! Startup trace: grouped, human-readable listing of what a composition pass registered.
//!
//! The driver receives a [`StartupTrace`] instead of writing to a global console, so
//! tests can swap in [`RecordingTrace`] or [`NoopTrace`].

use tracing::info;

/// `tracing` target of startup trace lines; loggers keep it visible in quiet mode.
pub const STARTUP_TARGET: &str = "orrery::startup";

/// Observer for grouped startup output. Implementations must not fail.
pub trait StartupTrace {
    fn enter_group(&mut self, label: &str);
    fn log(&mut self, line: &str);
    fn exit_group(&mut self);
}

/// Emits trace lines as `INFO` events, indented two spaces per open group.
#[derive(Debug, Default)]
pub struct TracingTrace {
    depth: usize,
}

impl TracingTrace {
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl StartupTrace for TracingTrace {
    fn enter_group(&mut self, label: &str) {
        info!(target: STARTUP_TARGET, "{}{label}", self.indent());
        self.depth += 1;
    }

    fn log(&mut self, line: &str) {
        info!(target: STARTUP_TARGET, "{}· {line}", self.indent());
    }

    fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl StartupTrace for NoopTrace {
    fn enter_group(&mut self, _label: &str) {}
    fn log(&mut self, _line: &str) {}
    fn exit_group(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Enter(String),
    Line(String),
    Exit,
}

/// Keeps every trace call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Lines logged directly inside the group labelled `label`.
    #[must_use]
    pub fn lines_in(&self, label: &str) -> Vec<&str> {
        let mut lines = Vec::new();
        let mut depth = 0usize;
        let mut inside: Option<usize> = None;

        for event in &self.events {
            match event {
                TraceEvent::Enter(l) => {
                    depth += 1;
                    if inside.is_none() && l == label {
                        inside = Some(depth);
                    }
                },
                TraceEvent::Line(line) if inside == Some(depth) => lines.push(line.as_str()),
                TraceEvent::Line(_) => {},
                TraceEvent::Exit => {
                    if inside == Some(depth) {
                        inside = None;
                    }
                    depth = depth.saturating_sub(1);
                },
            }
        }
        lines
    }

    /// Whether every entered group was exited.
    #[must_use]
    pub fn balanced(&self) -> bool {
        let enters = self.events.iter().filter(|e| matches!(e, TraceEvent::Enter(_))).count();
        let exits = self.events.iter().filter(|e| matches!(e, TraceEvent::Exit)).count();
        enters == exits
    }
}

impl StartupTrace for RecordingTrace {
    fn enter_group(&mut self, label: &str) {
        self.events.push(TraceEvent::Enter(label.to_owned()));
    }

    fn log(&mut self, line: &str) {
        self.events.push(TraceEvent::Line(line.to_owned()));
    }

    fn exit_group(&mut self) {
        self.events.push(TraceEvent::Exit);
    }
}
