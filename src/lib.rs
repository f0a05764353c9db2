//! # Growable Ring Buffer Queue
//!
//! 可增长环形缓冲区队列
//!
//! `ringqueue` is a FIFO queue backed by a contiguous, power-of-2 ring buffer
//! that grows and shrinks on demand. It avoids the per-element allocations of
//! linked-list queues and the repeated front shifting of naive `Vec` queues.
//!
//! `ringqueue` 是一个由连续的、2 的幂次环形缓冲区支撑的 FIFO 队列，可按需扩容和缩容。
//! 它避免了链表队列的逐元素分配，也避免了朴素 `Vec` 队列反复移动头部的开销。
//!
//! ## Features
//!
//! 特性
//!
//! - **Unbounded** - `add` never fails, storage doubles when full
//! - **Memory Aware** - Storage halves when occupancy drops to exactly 25%
//! - **Negative Indexing** - `get(-1)` is the most recently added element
//! - **Structured Errors** - Every fallible operation returns [`QueueError`]
//! - **Thread-Safe Variant** - [`SyncRingQueue`] serializes access with a mutex
//!
//! - **无界** - `add` 永不失败，满时存储扩大一倍
//! - **内存友好** - 占用率恰好降到 25% 时存储减半
//! - **负索引** - `get(-1)` 为最近添加的元素
//! - **结构化错误** - 所有可失败操作都返回 [`QueueError`]
//! - **线程安全变体** - [`SyncRingQueue`] 通过互斥锁串行化访问
//!
//! ## Quick Start
//!
//! 快速开始
//!
//! ```rust
//! use ringqueue::{QueueError, RingQueue};
//!
//! let mut queue = RingQueue::new();
//!
//! queue.add("first");
//! queue.add("second");
//!
//! assert_eq!(queue.peek(), Ok(&"first"));
//! assert_eq!(queue.get(-1), Ok(&"second"));
//!
//! assert_eq!(queue.remove(), Ok("first"));
//! assert_eq!(queue.pop(), Some("second"));
//! assert_eq!(queue.remove(), Err(QueueError::Empty));
//! ```
//!
//! ## Multi-threaded Usage
//!
//! 多线程使用
//!
//! ```rust
//! use ringqueue::SyncRingQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(SyncRingQueue::new());
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             queue.add(i);
//!         }
//!     })
//! };
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut received = Vec::new();
//!         while received.len() < 100 {
//!             match queue.pop() {
//!                 Some(value) => received.push(value),
//!                 None => thread::yield_now(),
//!             }
//!         }
//!         received
//!     })
//! };
//!
//! producer.join().unwrap();
//! let received = consumer.join().unwrap();
//! assert_eq!(received, (0..100).collect::<Vec<_>>());
//! ```
//!
//! ## Capacity Policy
//!
//! 容量策略
//!
//! ```rust
//! use ringqueue::{MIN_CAPACITY, RingQueue};
//!
//! let mut queue = RingQueue::new();
//! assert_eq!(queue.capacity(), MIN_CAPACITY);
//!
//! // Filling the floor does not resize, one more element doubles it
//! // 填满下限容量不会扩容，再多一个元素则扩大一倍
//! queue.extend(0..16);
//! assert_eq!(queue.capacity(), 16);
//! queue.add(16);
//! assert_eq!(queue.capacity(), 32);
//!
//! // Removing down to exactly a quarter halves it
//! // 移除到恰好四分之一时减半
//! while queue.len() > 8 {
//!     queue.remove().unwrap();
//! }
//! assert_eq!(queue.capacity(), 16);
//! ```
//!
//! ## API Overview
//!
//! API 概览
//!
//! - `add(value)` - Append to the back
//! - `peek()` - View the front element
//! - `get(index)` - Positional read, negative indices count from the back
//! - `remove()` - Remove the front element, `Err(QueueError::Empty)` if none
//! - `pop()` - `remove()` as an `Option`
//! - `len()` / `is_empty()` - Number of elements
//! - `capacity()` - Allocated slots
//! - `clear()` - Drop all elements, keep the allocation
//!
//! - `add(value)` - 追加到尾部
//! - `peek()` - 查看头部元素
//! - `get(index)` - 按位置读取，负索引从尾部开始计数
//! - `remove()` - 移除头部元素，为空时返回 `Err(QueueError::Empty)`
//! - `pop()` - 以 `Option` 形式返回的 `remove()`
//! - `len()` / `is_empty()` - 元素数量
//! - `capacity()` - 已分配的槽位数
//! - `clear()` - 丢弃所有元素，保留已分配的存储
//!
//! ## Notes
//!
//! 注意事项
//!
//! - [`RingQueue`] is not synchronized; use [`SyncRingQueue`] to share across threads
//! - Operations never block, apart from lock contention in [`SyncRingQueue`]
//! - Removed slots are reset immediately, so the queue never keeps stale values alive
//!
//! - [`RingQueue`] 不带同步；跨线程共享请使用 [`SyncRingQueue`]
//! - 除 [`SyncRingQueue`] 的锁竞争外，操作从不阻塞
//! - 被移除的槽位会立即重置，队列不会持有过期的值

mod core;
mod error;
mod queue;
mod shim;
mod sync;

#[cfg(all(test, not(feature = "loom")))]
mod tests;

pub use error::{QueueError, Result};
pub use queue::{Drain, Iter, RingQueue};
pub use sync::SyncRingQueue;

/// Smallest number of slots a queue may have
///
/// 队列可拥有的最小槽位数
///
/// Must be a power of 2 so that `x % n == x & (n - 1)`.
///
/// 必须为 2 的幂次，以满足 `x % n == x & (n - 1)`。
pub const MIN_CAPACITY: usize = 16;

const _: () = assert!(MIN_CAPACITY.is_power_of_two());
