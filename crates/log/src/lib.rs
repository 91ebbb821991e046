//! A small leveled logging library for the random source crates.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg_attr(target_arch = "wasm32", path = "wasm.rs")]
#[cfg_attr(not(target_arch = "wasm32"), path = "std.rs")]
mod imp;

/// The name of the environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "SQUIRREL_LOG";

/// A verbosity level for a [`Message`].
///
/// # Remarks
///
/// The ordering of the verbosity levels is in *increasing verbosity*, meaning that
/// [`Error`] is the *least verbose*, and [`Trace`] is the *most verbose*.
///
/// [`Error`]: Verbosity::Error
/// [`Trace`]: Verbosity::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Verbosity {
    /// Something went wrong and an operation could not complete.
    Error,
    /// Something unexpected happened, but the library recovered from it.
    Warning,
    /// Notable events, such as a generator being seeded from the clock.
    Info,
    /// Step-by-step details about reseeding and seeking.
    Trace,
}

impl Verbosity {
    fn from_u8(x: u8) -> Self {
        match x {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            _ => Self::Trace,
        }
    }
}

/// The error returned when parsing an unknown [`Verbosity`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerbosity(pub String);

impl fmt::Display for UnknownVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verbosity level `{}`", self.0)
    }
}

impl std::error::Error for UnknownVerbosity {}

impl FromStr for Verbosity {
    type Err = UnknownVerbosity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "trace" | "debug" => Ok(Self::Trace),
            _ => Err(UnknownVerbosity(s.to_owned())),
        }
    }
}

static MAX_VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Warning as u8);

/// Sets the most verbose level that will be emitted.
pub fn set_max_verbosity(verbosity: Verbosity) {
    MAX_VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Returns the most verbose level that will be emitted.
pub fn max_verbosity() -> Verbosity {
    Verbosity::from_u8(MAX_VERBOSITY.load(Ordering::Relaxed))
}

/// Returns whether messages of the provided verbosity are currently emitted.
#[inline]
pub fn enabled(verbosity: Verbosity) -> bool {
    verbosity as u8 <= MAX_VERBOSITY.load(Ordering::Relaxed)
}

/// Reads the maximum verbosity from the [`ENV_VAR`] environment variable.
///
/// Nothing changes when the variable is unset. An unparsable value is reported and otherwise
/// ignored.
pub fn init_from_env() {
    let Ok(value) = std::env::var(ENV_VAR) else {
        return;
    };

    match value.parse() {
        Ok(verbosity) => set_max_verbosity(verbosity),
        Err(err) => crate::warning!("{}: {}", ENV_VAR, err),
    }
}

/// A message that can be logged.
pub struct Message<'a> {
    /// The name of the file in which the message was logged.
    pub file: &'static str,
    /// The line at which the message was logged.
    pub line: u32,
    /// The verbosity level of the message.
    pub verbosity: Verbosity,
    /// The module in which the message was logged.
    pub module: &'static str,
    /// The message itself.
    pub message: Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Logs this message, unless its verbosity is filtered out.
    pub fn log(self) {
        if enabled(self.verbosity) {
            imp::log(self);
        }
    }
}

/// Creates a [`Message`] instance with the current invoking location.
#[macro_export]
macro_rules! message {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message {
            file: ::core::file!(),
            line: ::core::line!(),
            verbosity: $verbosity,
            module: ::core::module_path!(),
            message: ::core::format_args!($($args)*),
        }
    };
}

/// Logs a message with the current invoking location.
#[macro_export]
macro_rules! log {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message::log($crate::message!($verbosity, $($args)*))
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Error`].
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Error, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Warning`].
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Warning, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Info`].
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Info, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Trace`].
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Trace, $($args)*)
    };
}
