use quickcheck_macros::quickcheck;
use triclass_alloc::Allocator;

#[test]
fn small_medium_large_round_trip_through_each_class() {
    let allocator = Allocator::new();
    for size in [1, 64, 65, 131_071, 131_072, 500_000] {
        let ptr = allocator.allocate(size);
        assert!(!ptr.is_null(), "allocate({size}) returned null");
        unsafe {
            ptr.write_bytes(0xAB, size);
        }
        unsafe { allocator.release(ptr) };
    }
}

#[test]
fn freed_small_allocation_is_reused_before_growing_again() {
    let allocator = Allocator::new();
    let first = allocator.allocate(16);
    unsafe { allocator.release(first) };
    let second = allocator.allocate(16);
    assert_eq!(first, second);
}

#[test]
fn medium_allocations_fully_coalesce_after_release() {
    let allocator = Allocator::new();
    let a = allocator.allocate(200);
    let b = allocator.allocate(200);
    unsafe {
        allocator.release(a);
        allocator.release(b);
    }
    assert_eq!(allocator.populated_buddy_lists(), 1);
}

#[test]
fn cold_arena_climbs_every_geometric_growth_step_for_one_request() {
    let allocator = Allocator::new();
    // envelope-adjusted payload lands exactly on the 2^20 boundary, so this
    // single allocate call must climb growths at E0, E0+1, ... up through
    // index 20 before it can be satisfied, rather than growing only once.
    let ptr = allocator.allocate((1 << 20) - 32);
    assert!(!ptr.is_null());
    unsafe { allocator.release(ptr) };
}

/// Every nonzero allocation returns a non-null, writable region of at least
/// the requested size; releasing it never panics or aborts.
#[quickcheck]
fn allocate_of_any_nonzero_size_is_writable(size: u32) -> bool {
    let size = (size as usize % 300_000).max(1);
    let allocator = Allocator::new();
    let ptr = allocator.allocate(size);
    if ptr.is_null() {
        return false;
    }
    unsafe {
        ptr.write_bytes(0x5A, size);
        allocator.release(ptr);
    }
    true
}

/// A sequence of allocate/release pairs of varying sizes never corrupts the
/// allocator's bookkeeping badly enough to make a later allocation fail.
#[quickcheck]
fn interleaved_allocate_release_sequence_never_fails(sizes: Vec<u32>) -> bool {
    let allocator = Allocator::new();
    let mut live = Vec::new();
    for raw in sizes.into_iter().take(64) {
        let size = (raw as usize % 300_000).max(1);
        let ptr = allocator.allocate(size);
        if ptr.is_null() {
            return false;
        }
        live.push(ptr);
        if live.len() > 8 {
            let stale = live.remove(0);
            unsafe { allocator.release(stale) };
        }
    }
    for ptr in live {
        unsafe { allocator.release(ptr) };
    }
    true
}
