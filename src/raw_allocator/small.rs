//! The small-class allocator: a pool of fixed-size chunks handed out and
//! reclaimed through an intrusive, singly-linked free list.
//!
//! The free list's `next` pointer lives in the first word of the chunk
//! itself. This is safe because a free chunk is by definition untyped
//! storage; the pointer is read and written through raw pointer casts, never
//! through a typed reference that would imply the chunk holds a live value.

use super::consts::{CHUNK_SIZE, SMALL_POOL_BASE};
use super::envelope::{self, Alloc, Class};
use super::os;
use super::Arena;
use crate::fatal::fatal;

/// Allocate one chunk from the small pool, growing it first if empty.
pub(super) fn alloc(arena: &mut Arena) -> *mut u8 {
    if arena.small_head.is_null() {
        grow(arena);
    }

    let chunk = arena.small_head;
    // SAFETY: `chunk` is the head of the free list, which by construction
    // points at a chunk whose first word holds the next free chunk (or null).
    arena.small_head = unsafe { chunk.cast::<*mut u8>().read() };

    // SAFETY: `chunk` is `CHUNK_SIZE` bytes of writable, exclusively-owned
    // memory just popped from the free list.
    unsafe { envelope::stamp(chunk, CHUNK_SIZE as u64, Class::Small) }
}

/// Return a chunk to the head of the small free list.
pub(super) fn free(arena: &mut Arena, alloc: Alloc) {
    let chunk = alloc.base;
    // SAFETY: `chunk` is a `CHUNK_SIZE`-byte block the caller has released
    // exclusive ownership of; we may reinterpret its first word as a free-list
    // link.
    unsafe { chunk.cast::<*mut u8>().write(arena.small_head) };
    arena.small_head = chunk;
}

/// Request a new region of `(CHUNK_SIZE * 128) * 2^small_exp` bytes from the
/// OS and thread its chunks into a fresh free list.
fn grow(arena: &mut Arena) {
    let region_size = SMALL_POOL_BASE << arena.small_exp;
    let region = os::map_anonymous(region_size).unwrap_or_else(|e| fatal!("small pool growth: {e}"));
    arena.small_exp += 1;

    let chunk_count = region_size / CHUNK_SIZE;
    for i in 0..chunk_count {
        // SAFETY: `i * CHUNK_SIZE` and `(i + 1) * CHUNK_SIZE` are both within
        // `region_size` bytes of `region`, which `map_anonymous` guarantees
        // are ours to write.
        unsafe {
            let current = region.add(i * CHUNK_SIZE);
            let next = if i + 1 < chunk_count {
                region.add((i + 1) * CHUNK_SIZE)
            } else {
                core::ptr::null_mut()
            };
            current.cast::<*mut u8>().write(next);
        }
    }
    arena.small_head = region;
}
