/// Everything that can drive the running tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard, or a second invocation forwarding its toggle.
    ToggleRequested,
    /// The system is about to sleep: close the session unconditionally.
    SuspendRequested,
    /// Quit. Without `force`, quitting mid-session asks for confirmation.
    ShutdownRequested { force: bool },
    /// Periodic redraw. Never changes state.
    TickElapsed,
}
