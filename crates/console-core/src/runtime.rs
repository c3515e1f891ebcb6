use crate::events::ConsoleEvent;

/// Bridge between the controller and whatever front end is observing it.
/// Implementations forward events onto their own channel (the TUI uses an
/// unbounded mpsc sender; tests record them).
pub trait ConsoleRuntime: Send + Sync {
    fn emit(&self, event: ConsoleEvent);
}
