//! The OS mapping shim: the allocator's sole point of contact with `libc`.
//!
//! Every sub-allocator's growth path and the large allocator funnel through
//! [`map_anonymous`] and [`unmap`], which keeps the host-operating-system
//! boundary mechanically enforced to this one module.

use core::fmt;
use std::io;
use std::ptr;

/// A failure reported by a mapping or unmapping syscall.
#[derive(Debug)]
pub(crate) enum MapError {
    Mmap(io::Error),
    Munmap(io::Error),
}
impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Mmap(e) => write!(f, "mmap failed: {e}"),
            MapError::Munmap(e) => write!(f, "munmap failed: {e}"),
        }
    }
}

/// Reserve a contiguous region of `size` bytes of anonymous, read/write
/// memory from the OS.
///
/// Unlike the original C source, this does not request `PROT_EXEC`: an
/// allocator has no legitimate reason to hand out executable heap memory.
pub(crate) fn map_anonymous(size: usize) -> Result<*mut u8, MapError> {
    // SAFETY: `mmap` with `MAP_ANONYMOUS` ignores the fd/offset arguments;
    // passing `-1`/`0` for them is the documented convention. The returned
    // pointer is checked against `MAP_FAILED` below before use.
    let ptr = unsafe {
        libc::mmap(
            ptr::null_mut(),
            size,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
            -1,
            0,
        )
    };
    if ptr == libc::MAP_FAILED {
        Err(MapError::Mmap(io::Error::last_os_error()))
    } else {
        Ok(ptr.cast::<u8>())
    }
}

/// Release a region previously returned by [`map_anonymous`].
pub(crate) fn unmap(base: *mut u8, size: usize) -> Result<(), MapError> {
    // SAFETY: caller guarantees `base`/`size` match a prior `map_anonymous`
    // call that has not yet been unmapped.
    let ret = unsafe { libc::munmap(base.cast(), size) };
    if ret == -1 {
        Err(MapError::Munmap(io::Error::last_os_error()))
    } else {
        Ok(())
    }
}
