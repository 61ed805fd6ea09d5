/// Browser console logging with a millisecond timestamp prefix.
///
/// All level macros route through `console_at!`, which formats the message
/// before handing it to gloo_console so only a plain string crosses into JS.
#[macro_export]
macro_rules! console_at {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::console_at!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::console_at!(debug, $($arg)*)
    };
}
