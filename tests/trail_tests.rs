// Host-side tests for the bounded trail pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod trail {
    include!("../src/core/trail.rs");
}

use trail::*;

#[test]
fn pool_never_exceeds_capacity() {
    let mut pool = TrailPool::new(5);
    for id in 0..50u64 {
        pool.push(id);
        assert!(pool.len() <= 5);
    }
    assert_eq!(pool.len(), 5);
}

#[test]
fn full_pool_evicts_oldest_first() {
    let mut pool = TrailPool::new(3);
    assert_eq!(pool.push(1), None);
    assert_eq!(pool.push(2), None);
    assert_eq!(pool.push(3), None);
    assert_eq!(pool.push(4), Some(1));
    assert_eq!(pool.push(5), Some(2));
    assert!(!pool.contains(&1));
    assert!(pool.contains(&5));
}

#[test]
fn expire_removes_live_node() {
    let mut pool = TrailPool::new(3);
    pool.push(10);
    pool.push(11);
    assert_eq!(pool.expire(&10), Some(10));
    assert_eq!(pool.len(), 1);
    // A freed slot means the next push does not evict.
    pool.push(12);
    assert_eq!(pool.push(13), None);
}

#[test]
fn expire_after_eviction_is_noop() {
    let mut pool = TrailPool::new(1);
    pool.push(1);
    assert_eq!(pool.push(2), Some(1));
    assert_eq!(pool.expire(&1), None);
    assert_eq!(pool.len(), 1);
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let mut pool = TrailPool::new(0);
    assert_eq!(pool.capacity(), 1);
    pool.push('a');
    assert_eq!(pool.push('b'), Some('a'));
}

#[test]
fn drain_empties_in_insertion_order() {
    let mut pool = TrailPool::new(4);
    for id in [7, 8, 9] {
        pool.push(id);
    }
    assert_eq!(pool.drain(), vec![7, 8, 9]);
    assert!(pool.is_empty());
}
