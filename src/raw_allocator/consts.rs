//! Size-class constants shared by every sub-allocator.
//!
//! These mirror the original `mem_internals.h` constants one-to-one; only
//! the names are adjusted to this crate's conventions.

/// Largest raw request size still served by the small-class allocator.
pub(crate) const S_MAX: usize = 64;

/// Physical size of every small-class chunk: `S_MAX` payload + 32 envelope.
pub(crate) const CHUNK_SIZE: usize = 96;

/// Smallest raw request size served by the large-class allocator.
pub(crate) const L_MIN: usize = 1 << 17;

/// Combined header + footer size framing every allocation.
pub(crate) const ENVELOPE: usize = 32;

/// Minimum populated exponent of the buddy table; `2^E0` is the smallest
/// pool size the medium allocator ever requests from the OS.
pub(crate) const E0: usize = 17;

/// Number of entries in the buddy free-list table.
pub(crate) const BUDDY_TABLE_LEN: usize = 48;

/// Base region size for the first small-pool growth (`g = 0`): 128 chunks.
pub(crate) const SMALL_POOL_BASE: usize = CHUNK_SIZE * 128;
