//! The large-class allocator: every request gets its own OS mapping,
//! returned to the OS in full on release. No arena state is touched here —
//! a large allocation's only "bookkeeping" is the envelope itself.

use super::envelope::{self, Alloc, Class};
use super::os;
use crate::fatal::fatal;

/// Map `n + 32` bytes anonymously and stamp them as a large-class allocation.
pub(super) fn alloc(n: usize) -> *mut u8 {
    let physical_size = n + super::consts::ENVELOPE;
    let base = os::map_anonymous(physical_size).unwrap_or_else(|e| fatal!("large allocation: {e}"));

    // SAFETY: `map_anonymous` succeeded, so `base..base + physical_size` is
    // freshly mapped, writable, exclusively-owned memory.
    unsafe { envelope::stamp(base, physical_size as u64, Class::Large) }
}

/// Unmap the region backing a large allocation.
pub(super) fn free(alloc: Alloc) {
    debug_assert_eq!(alloc.class, Class::Large);
    if let Err(e) = os::unmap(alloc.base, alloc.physical_size as usize) {
        fatal!("large release: {e}");
    }
}
