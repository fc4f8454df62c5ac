#[global_allocator]
static ALLOCATOR: triclass_alloc::Allocator = triclass_alloc::Allocator::new();

#[test]
fn vec() {
    let mut v = vec![1, 2, 3];
    v.push(4);

    assert_eq!((1..=4).collect::<Vec<_>>(), v);
}

#[test]
fn map_and_formatting() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(10, "Hello");
    map.insert(11, "world");
    map.insert(20, "Hallo");
    map.insert(21, "Welt");
    map.insert(-1, "english");
    map.insert(-2, "german");

    let english = format!("[{}]: {}, {}!", map[&-1], map[&10], map[&11]);
    let german = format!("[{}]: {}, {}!", map[&-2], map[&20], map[&21]);
    assert_eq!(english, "[english]: Hello, world!");
    assert_eq!(german, "[german]: Hallo, Welt!");
}

#[test]
fn boxed_large_allocation_survives_class_boundary() {
    let boxed: Box<[u8; 200_000]> = Box::new([7; 200_000]);
    assert!(boxed.iter().all(|&b| b == 7));
}

#[test]
fn string_growth_crosses_all_three_size_classes() {
    let mut s = String::new();
    for _ in 0..200_000 {
        s.push('a');
    }
    assert_eq!(s.len(), 200_000);
}
