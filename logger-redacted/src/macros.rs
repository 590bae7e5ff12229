// Logging macros
//
// `redacted_info!(logger, "format {}", args)` or
// `redacted_info!(logger, data: json!({...}); "format {}", args)`.
// The formatted message is redacted like any other message. Nothing is
// formatted or evaluated for a level the logger drops.

#[macro_export]
macro_rules! redacted_log {
    ($logger:expr, $level:expr, data: $data:expr; $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, &format!($($arg)+), Some($data));
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, &format!($($arg)+), None);
        }
    }};
}

#[macro_export]
macro_rules! redacted_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::redacted_log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! redacted_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::redacted_log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! redacted_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::redacted_log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! redacted_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::redacted_log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
