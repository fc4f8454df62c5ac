//! The fatal-error sink.
//!
//! Every unrecoverable condition in this crate — an exhausted OS mapping, an
//! envelope that fails verification, a failed unmap — routes through
//! [`fatal_error`]. There is no recoverable error path: an allocator that has
//! lost track of its own bookkeeping cannot reliably service further
//! requests, so the conservative response is to abort loudly.
//!
//! The fatal path must not allocate: it can run while the arena's
//! `spin::Mutex` is held (any sub-allocator's growth failure reaches it from
//! inside `Arena::alloc`), and this crate is meant to be installed as the
//! `#[global_allocator]`. A `format!` here would re-enter `Allocator::alloc`
//! to grow a `String` and spin-deadlock on the very lock it's already
//! holding, turning a reportable error into a silent hang. [`fatal!`] builds
//! its message in a fixed-size stack buffer instead.

use core::fmt::{self, Write as _};

const MESSAGE_CAPACITY: usize = 96;

/// A fixed-capacity, non-allocating `core::fmt::Write` sink. Messages longer
/// than its capacity are silently truncated.
pub(crate) struct MessageBuf {
    bytes: [u8; MESSAGE_CAPACITY],
    len: usize,
}
impl MessageBuf {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0; MESSAGE_CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("<fatal: unprintable message>")
    }
}
impl fmt::Write for MessageBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MESSAGE_CAPACITY - self.len;
        let n = remaining.min(s.len());
        self.bytes[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

/// Format a message into a stack buffer and abort the process through
/// [`fatal_error`]. Use this instead of `fatal_error(&format!(...))`
/// everywhere: the latter allocates.
macro_rules! fatal {
    ($($arg:tt)*) => {{
        let mut message = $crate::fatal::MessageBuf::new();
        let _ = core::fmt::Write::write_fmt(&mut message, format_args!($($arg)*));
        $crate::fatal::fatal_error(message.as_str())
    }};
}
pub(crate) use fatal;

/// Report `tag` and terminate the process immediately.
///
/// The diagnostic is emitted both through the `log` facade (for hosts that
/// have installed a logger) and directly to stderr, so it is never silently
/// dropped on a host that hasn't configured logging.
pub(crate) fn fatal_error(tag: &str) -> ! {
    log::error!(target: "triclass_alloc", "fatal: {tag}");
    eprintln!("triclass-alloc: fatal: {tag}");
    std::process::abort()
}
