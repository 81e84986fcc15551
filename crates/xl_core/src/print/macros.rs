/// Print to stderr, or stdout under Git Bash
/// (which swallows stderr of native programs).
#[macro_export]
macro_rules! eeprintln {
    ($($arg:tt)*) => {{
        if *$crate::print::IS_GIT_BASH {
            println!("{}", format_args!($($arg)*));
        } else {
            eprintln!("{}", format_args!($($arg)*));
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($sink:ident, $ty:expr, $($arg:tt)*) => {{
        let msg = format!("{}", format_args!($($arg)*));
        let redacted = $crate::print::auto_redact(&msg);
        if $crate::print::is_print() {
            match $ty {
                $crate::print::LogType::Info => {
                    println!("{} {}", $crate::__owo_colors::OwoColorize::yellow(&"[info]"), redacted);
                }
                $crate::print::LogType::Error => {
                    $crate::eeprintln!("{} {}", $crate::__owo_colors::OwoColorize::red(&"[error]"), redacted);
                }
                $crate::print::LogType::Point => {
                    println!("{} {}", $crate::__owo_colors::OwoColorize::bold(&"-"), redacted);
                }
            }
        }
        $crate::print::$sink(&redacted, $ty);
    }};
}

/// Print an informational message
///
/// Prefix with `no_log,` to keep it out of the log file.
#[macro_export]
macro_rules! info {
    (no_log, $($arg:tt)*) => {
        $crate::__log_line!(print_to_memory, $crate::print::LogType::Info, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__log_line!(print_to_file, $crate::print::LogType::Info, $($arg)*)
    };
}

/// Print an error message
#[macro_export]
macro_rules! err {
    (no_log, $($arg:tt)*) => {
        $crate::__log_line!(print_to_memory, $crate::print::LogType::Error, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__log_line!(print_to_file, $crate::print::LogType::Error, $($arg)*)
    };
}

/// Print a point message, i.e. a small step in some process
#[macro_export]
macro_rules! pt {
    (no_log, $($arg:tt)*) => {
        $crate::__log_line!(print_to_memory, $crate::print::LogType::Point, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__log_line!(print_to_file, $crate::print::LogType::Point, $($arg)*)
    };
}
