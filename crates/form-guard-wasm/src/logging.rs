//! Console logging for the browser guard
//!
//! On wasm32 these go to `console.*`; elsewhere to stderr. Info and warning
//! output is compiled out of release builds, errors are always reported.

#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        ::web_sys::console::info_1(&format!($($arg)*).into());
    }};
}

#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        eprintln!("[INFO] {}", format!($($arg)*));
    }};
}

#[cfg(not(debug_assertions))]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        ::web_sys::console::warn_1(&format!($($arg)*).into());
    }};
}

#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        eprintln!("[WARN] {}", format!($($arg)*));
    }};
}

#[cfg(not(debug_assertions))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        ::web_sys::console::error_1(&format!($($arg)*).into());
    }};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}
