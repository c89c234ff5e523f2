//! Exit handling: signal handlers and terminal restoration.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the widget owns the alternate screen.
static ALTERNATE_SCREEN: AtomicBool = AtomicBool::new(false);

pub fn set_alternate_screen(active: bool) {
    ALTERNATE_SCREEN.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

fn write_stdout(bytes: &[u8]) {
    unsafe {
        libc::write(1, bytes.as_ptr() as *const libc::c_void, bytes.len());
    }
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Escape codes only make sense on a TTY (not when piping)
    if unsafe { libc::isatty(1) } == 1 {
        if ALTERNATE_SCREEN.swap(false, Ordering::SeqCst) {
            write_stdout(b"\x1b[?1049l");
        }
        write_stdout(b"\x1b[0m\x1b[?25h");
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}
