//! Exit handling: terminal restore on exit and on termination signals.

/// Restore cooked mode with termios directly; crossterm state may be gone
/// by the time atexit handlers run.
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

/// termios reset plus escape codes. Only async-signal-safe calls.
fn restore_terminal() {
    reset_terminal_termios();
    // Escape codes only when stdout is a TTY (not when piping passwords)
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(1, &mut termios) == 0 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// Registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    restore_terminal();
}

/// SIGINT/SIGTERM/SIGHUP - restore and `_exit`; atexit handlers and stdio
/// flushing are not safe inside a handler.
extern "C" fn signal_handler(_: libc::c_int) {
    restore_terminal();
    unsafe { libc::_exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// No core dumps, no ptrace attach from other processes of the same user.
#[cfg(target_os = "linux")]
pub fn harden_process() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden_process() {}
