/// SIGINT wiring for the command line tool.
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::core::Context;

/// Raised by the signal handler, consumed by the watcher thread.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// How often the watcher looks at the flag.
const WATCH_INTERVAL: Duration = Duration::from_millis(20);

extern "C" fn on_interrupt(_signum: libc::c_int) {
    // Only async-signal-safe work here.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Cancel `ctx` when the process receives SIGINT.
///
/// The handler itself only flips an atomic flag; a watcher thread turns the
/// flag into `ctx.cancel()` and exits once the context is done for any
/// reason.
pub fn cancel_on_interrupt(ctx: &Context) {
    INTERRUPTED.store(false, Ordering::SeqCst);
    unsafe {
        libc::signal(
            libc::SIGINT,
            on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t,
        );
    }

    let ctx = ctx.clone();
    thread::spawn(move || {
        while ctx.sleep(WATCH_INTERVAL).is_ok() {
            if INTERRUPTED.swap(false, Ordering::SeqCst) {
                tracing::debug!("interrupt received, cancelling");
                ctx.cancel();
            }
        }
    });
}
