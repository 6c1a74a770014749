//! Diagnostic sink for verbose mode

/// Tag attached to every entry
pub const TAG: &str = "[RandomColor]";

/// Receives trace entries while a generator is verbose
pub trait Logger {
    fn debug(&self, tag: &str, message: &str);
}

/// Discards everything, the default
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _tag: &str, _message: &str) {}
}

/// Adapter to use a closure as a [`Logger`]
pub struct FnLogger<F>(pub F);

impl<F> Logger for FnLogger<F>
where
    F: Fn(&str, &str),
{
    fn debug(&self, tag: &str, message: &str) {
        (self.0)(tag, message)
    }
}
