//! This module provides the arena state and its size-class dispatcher.
//!
//! The public entry points are [`Arena::alloc`] and [`Arena::free`]: they
//! classify an incoming request by raw size, route it to the matching
//! sub-allocator (`small`, `medium`, `large`), and — for `alloc` — wrap the
//! result with the envelope stamp (`free` un-wraps it via [`envelope::verify`]
//! before dispatching). Neither entry point interprets the payload between
//! envelope bounds.
//!
//! Callers are expected to serialize access themselves (see [`crate::Allocator`],
//! which holds an `Arena` behind a `spin::Mutex`); this module assumes
//! `&mut self` access already implies exclusivity.

mod consts;
mod envelope;
mod large;
mod medium;
mod os;
mod small;

use consts::{BUDDY_TABLE_LEN, L_MIN, S_MAX};
use envelope::Class;

/// The process-wide allocator state: the small pool's free-list head, the
/// buddy free-list table, and the growth exponents for each sub-allocator.
///
/// Zero-initialized: both heads start null and both exponents start at zero,
/// matching an arena that has never grown.
pub(crate) struct Arena {
    small_head: *mut u8,
    buddy_table: [*mut u8; BUDDY_TABLE_LEN],
    small_exp: u32,
    medium_exp: u32,
}
// SAFETY: every pointer `Arena` holds refers to heap memory obtained from the
// OS, not to anything thread-local; all access is already serialized by the
// `spin::Mutex` wrapping this type in `crate::Allocator`, so moving an `Arena`
// (and hence its raw pointers) across threads is sound.
unsafe impl Send for Arena {}

impl Arena {
    /// Create an empty arena. No OS memory is reserved until first demand.
    pub(crate) const fn new() -> Self {
        Self {
            small_head: core::ptr::null_mut(),
            buddy_table: [core::ptr::null_mut(); BUDDY_TABLE_LEN],
            small_exp: 0,
            medium_exp: 0,
        }
    }

    /// Allocate `n` raw bytes, routing to the small, medium, or large
    /// sub-allocator by size. `n` must be nonzero; the zero-size case is
    /// handled by the caller (`crate::Allocator::allocate`) before the lock
    /// is even taken.
    pub(crate) fn alloc(&mut self, n: usize) -> *mut u8 {
        debug_assert_ne!(n, 0);
        match classify(n) {
            Class::Small => small::alloc(self),
            Class::Medium => medium::alloc(self, n),
            Class::Large => large::alloc(n),
        }
    }

    /// Release a pointer previously returned by [`Arena::alloc`].
    ///
    /// # Safety
    /// `user_ptr` must have been returned by a prior `alloc` call on *some*
    /// `Arena` and must not have been released since.
    pub(crate) unsafe fn free(&mut self, user_ptr: *mut u8) {
        // SAFETY: forwarded from the caller's precondition.
        let a = unsafe { envelope::verify(user_ptr) };
        match a.class {
            Class::Small => small::free(self, a),
            Class::Medium => medium::free(self, a),
            Class::Large => large::free(a),
        }
    }

    /// Count populated entries of the buddy free-list table. A pure
    /// debug/introspection helper with no effect on allocator state; exists
    /// for tests.
    pub(crate) fn populated_buddy_lists(&self) -> usize {
        populated_buddy_lists(self)
    }
}

/// Classify a raw request size into one of the three size classes.
fn classify(n: usize) -> Class {
    if n <= S_MAX {
        Class::Small
    } else if n < L_MIN {
        Class::Medium
    } else {
        Class::Large
    }
}

/// Count the non-empty entries of `arena.buddy_table`. Free function so the
/// sub-allocator unit tests (which construct bare `Arena`s) can call it
/// without going through the `#[cfg(test)]`-gated inherent method.
pub(crate) fn populated_buddy_lists(arena: &Arena) -> usize {
    arena.buddy_table.iter().filter(|p| !p.is_null()).count()
}
