use super::*;

#[test]
fn stores_and_overwrites() {
    let mut cache = EvalCache::new();
    cache.insert("a".to_string(), 10);
    cache.insert("a".to_string(), 20);
    assert_eq!(cache.get("a"), Some(20));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("b"), None);
}

#[test]
fn eviction_pass_shrinks_an_overfull_cache() {
    let mut cache = EvalCache::new();
    for i in 0..=DEFAULT_CAPACITY {
        cache.insert(format!("pos-{i}"), i as i32);
    }
    // 10 001 entries: over capacity, nothing evicted yet
    assert_eq!(cache.len(), DEFAULT_CAPACITY + 1);

    let removed = cache.evict();
    assert!(removed > 0);
    assert!(cache.len() < DEFAULT_CAPACITY);
}

#[test]
fn insert_triggers_eviction_and_keeps_oldest_half() {
    let mut cache = EvalCache::new();
    for i in 0..=DEFAULT_CAPACITY + 1 {
        cache.insert(format!("pos-{i}"), i as i32);
    }
    assert_eq!(cache.len(), DEFAULT_CAPACITY / 2 + 1);
    assert_eq!(cache.get("pos-0"), Some(0));
    assert_eq!(cache.get("pos-4999"), Some(4999));
    assert_eq!(cache.get("pos-5000"), None);
    // The entry inserted after the pass survives
    assert_eq!(
        cache.get(&format!("pos-{}", DEFAULT_CAPACITY + 1)),
        Some(DEFAULT_CAPACITY as i32 + 1)
    );
}

#[test]
fn small_capacity_never_grows_unbounded() {
    let mut cache = EvalCache::with_capacity(8);
    for i in 0..1000 {
        cache.insert(i.to_string(), i);
        assert!(cache.len() <= 9);
    }
}

#[test]
fn evict_below_capacity_is_a_no_op() {
    let mut cache = EvalCache::with_capacity(4);
    cache.insert("x".to_string(), 1);
    assert_eq!(cache.evict(), 0);
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
}
