//! Comprehensive tests for the mutex-guarded queue
//!
//! 互斥锁保护队列的全面测试

use crate::{MIN_CAPACITY, QueueError, RingQueue, SyncRingQueue};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

// ============================================================================
// SEGMENT 1: Single-threaded Contract Tests
// 第1段：单线程契约测试
// ============================================================================

#[test]
fn test_simple() {
    let queue = SyncRingQueue::new();

    for i in 0..MIN_CAPACITY {
        queue.add(i);
    }
    for i in 0..MIN_CAPACITY {
        assert_eq!(queue.peek(), Ok(i));
        assert_eq!(queue.remove(), Ok(i));
    }
}

#[test]
fn test_wrapping() {
    let queue = SyncRingQueue::new();

    for i in 0..MIN_CAPACITY {
        queue.add(i);
    }
    for i in 0..3 {
        queue.remove().unwrap();
        queue.add(MIN_CAPACITY + i);
    }

    for i in 0..MIN_CAPACITY {
        assert_eq!(queue.peek(), Ok(i + 3));
        queue.remove().unwrap();
    }
}

#[test]
fn test_length() {
    let queue = SyncRingQueue::new();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());

    for i in 0..1000 {
        queue.add(i);
        assert_eq!(queue.len(), i + 1);
    }
    for i in 0..1000 {
        queue.remove().unwrap();
        assert_eq!(queue.len(), 1000 - i - 1);
    }
}

#[test]
fn test_get() {
    let queue = SyncRingQueue::new();

    for i in 0..200 {
        queue.add(i);
        for j in 0..queue.len() {
            assert_eq!(queue.get(j as isize), Ok(j));
        }
        assert_eq!(queue.get(-1), Ok(i));
    }
}

#[test]
fn test_pops() {
    let queue = SyncRingQueue::new();

    for i in 0..100 {
        queue.add(i);
    }
    for i in 0..100 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_out_of_range_errors() {
    let queue: SyncRingQueue<i32> = SyncRingQueue::new();

    assert_eq!(queue.peek(), Err(QueueError::Empty));
    assert_eq!(queue.remove(), Err(QueueError::Empty));
    assert_eq!(
        queue.get(0),
        Err(QueueError::IndexOutOfRange { index: 0, len: 0 })
    );

    queue.add(1);
    assert_eq!(
        queue.get(1),
        Err(QueueError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        queue.get(-2),
        Err(QueueError::IndexOutOfRange { index: -2, len: 1 })
    );
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_capacity_and_clear() {
    let queue = SyncRingQueue::new();
    assert_eq!(queue.capacity(), MIN_CAPACITY);

    for i in 0..MIN_CAPACITY + 1 {
        queue.add(i);
    }
    assert_eq!(queue.capacity(), MIN_CAPACITY * 2);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), MIN_CAPACITY * 2);
}

#[test]
fn test_matches_unsynchronized_queue() {
    // Same operation sequence on both queues gives identical results
    // 相同操作序列在两种队列上得到相同结果
    let shared = SyncRingQueue::new();
    let mut local = RingQueue::new();

    for i in 0..500 {
        shared.add(i);
        local.add(i);
        if i % 3 == 0 {
            assert_eq!(shared.remove(), local.remove());
        }
        assert_eq!(shared.capacity(), local.capacity());
        assert_eq!(shared.get(-1), local.get(-1).copied());
    }

    let local_items: Vec<_> = local.drain().collect();
    let shared_items: Vec<_> = shared.into_inner().drain().collect();
    assert_eq!(shared_items, local_items);
}

// ============================================================================
// SEGMENT 2: Concurrent Access Tests
// 第2段：并发访问测试
// ============================================================================

#[test]
fn test_concurrent_producers() {
    let queue = Arc::new(SyncRingQueue::new());
    let mut handles = vec![];

    for thread_id in 0..4u64 {
        let queue = Arc::clone(&queue);
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                queue.add(thread_id * 1000 + i);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(queue.len(), 4000);
    let capacity = queue.capacity();
    assert!(capacity.is_power_of_two());
    assert!(capacity >= 4000);

    // Per-producer order is preserved
    // 每个生产者的顺序得以保持
    let mut last = [None::<u64>; 4];
    while let Some(value) = queue.pop() {
        let producer = (value / 1000) as usize;
        if let Some(prev) = last[producer] {
            assert!(value > prev);
        }
        last[producer] = Some(value);
    }
}

#[test]
fn test_concurrent_producers_consumers_no_loss() {
    // Every added value is removed exactly once or stays in the queue
    // 每个添加的值恰好被移除一次或仍留在队列中
    const PRODUCERS: u64 = 4;
    const CONSUMERS: usize = 4;
    const PER_PRODUCER: u64 = 2500;

    let queue = Arc::new(SyncRingQueue::new());
    let barrier = Arc::new(Barrier::new(PRODUCERS as usize + CONSUMERS));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|id| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_PRODUCER {
                    queue.add(id * PER_PRODUCER + i);
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut received = Vec::new();
                for _ in 0..2000 {
                    match queue.remove() {
                        Ok(value) => received.push(value),
                        Err(QueueError::Empty) => thread::yield_now(),
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
                received
            })
        })
        .collect();

    for handle in producers {
        handle.join().unwrap();
    }

    let mut seen = HashSet::new();
    for handle in consumers {
        for value in handle.join().unwrap() {
            assert!(seen.insert(value), "value {value} removed twice");
        }
    }

    let remaining = Arc::try_unwrap(queue)
        .ok()
        .map(SyncRingQueue::into_inner)
        .unwrap();
    for value in remaining.iter() {
        assert!(seen.insert(*value), "value {value} both removed and retained");
    }

    assert_eq!(seen.len() as u64, PRODUCERS * PER_PRODUCER);
    assert!(remaining.capacity().is_power_of_two());
    assert!(remaining.capacity() >= MIN_CAPACITY);
}

#[test]
fn test_concurrent_readers_see_consistent_state() {
    let queue = Arc::new(SyncRingQueue::new());
    let barrier = Arc::new(Barrier::new(3));

    let writer = {
        let queue = Arc::clone(&queue);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..5000u64 {
                queue.add(i);
                if i % 2 == 0 {
                    queue.remove().unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..5000 {
                    // Front is always older than back
                    // 头部总是比尾部更旧
                    if let (Ok(front), Ok(back)) = (queue.peek(), queue.get(-1)) {
                        assert!(front <= back);
                    }
                    let capacity = queue.capacity();
                    assert!(capacity.is_power_of_two());
                    assert!(capacity >= MIN_CAPACITY);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(queue.len(), 2500);
}
