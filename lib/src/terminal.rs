//! Terminal color capability detection

/// Whether a `TERM` value indicates ANSI support
pub fn term_supports_ansi(term: Option<&str>) -> bool {
    matches!(term, Some(t) if t != "dumb")
}

/// Whether standard output can display ANSI color escapes
///
/// On Unix-like systems this checks `TERM`. On Windows it tries to enable
/// virtual terminal processing on the console and reports whether that
/// succeeded.
#[cfg(not(windows))]
pub fn supports_ansi_color() -> bool {
    let term = std::env::var("TERM").ok();
    term_supports_ansi(term.as_deref())
}

#[cfg(windows)]
pub fn supports_ansi_color() -> bool {
    use winapi::shared::minwindef::DWORD;
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: the handle comes from GetStdHandle and is checked before use;
    // `mode` outlives the call that writes it.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return false;
        }
        let mut mode: DWORD = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return false;
        }
        SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) != 0
    }
}
