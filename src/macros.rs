//! Formatting macros for [`Logger`](crate::Logger).
//!
//! Each macro takes the logger first and `format!`-style arguments after it.
//! Arguments are only formatted when the level allows the message.
//!
//! ```
//! use severino_logger::{info, Level, Logger};
//!
//! let logger = Logger::new("payments", Level::Info);
//! info!(logger, "charged {} cents", 1250);
//! ```

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Evaluates to the [`FatalSignal`](crate::FatalSignal).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}
