//! Leveled diagnostic sink for code built on top of this crate
//!
//! The conversion primitives never log. Format encoders and other callers report through these
//! macros, which forward to [`tracing`] events with one target per level so a subscriber can
//! route e.g. [`LogLevel::File`] to a file and [`LogLevel::Screen`] to the console.

/// Severity and destination of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Warning,
    Screen,
    Note,
    File,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Screen,
        LogLevel::Note,
        LogLevel::File,
    ];

    /// Target of the events emitted for this level
    pub const fn target(self) -> &'static str {
        match self {
            LogLevel::Error => "ezk_binutil::error",
            LogLevel::Warning => "ezk_binutil::warning",
            LogLevel::Screen => "ezk_binutil::screen",
            LogLevel::Note => "ezk_binutil::note",
            LogLevel::File => "ezk_binutil::file",
        }
    }

    /// The [`tracing::Level`] the events are emitted with
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Screen => tracing::Level::INFO,
            LogLevel::Note => tracing::Level::DEBUG,
            LogLevel::File => tracing::Level::TRACE,
        }
    }
}

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

#[macro_export]
macro_rules! log_err {
    ($($arg:tt)+) => {
        $crate::log::__private::tracing::error!(target: "ezk_binutil::error", $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::log::__private::tracing::warn!(target: "ezk_binutil::warning", $($arg)+)
    };
}

#[macro_export]
macro_rules! log_screen {
    ($($arg:tt)+) => {
        $crate::log::__private::tracing::info!(target: "ezk_binutil::screen", $($arg)+)
    };
}

#[macro_export]
macro_rules! log_note {
    ($($arg:tt)+) => {
        $crate::log::__private::tracing::debug!(target: "ezk_binutil::note", $($arg)+)
    };
}

#[macro_export]
macro_rules! log_file {
    ($($arg:tt)+) => {
        $crate::log::__private::tracing::trace!(target: "ezk_binutil::file", $($arg)+)
    };
}
