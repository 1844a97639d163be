//! User-facing notifications.

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Surface for transient user notifications.
pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);
}

/// Notifier writing to stderr, keeping stdout free for payload output.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Warn => eprintln!("warning: {message}"),
            Level::Info => eprintln!("{message}"),
        }
    }
}
