//! Mutex-guarded queue for multi-threaded use
//!
//! 供多线程使用的互斥锁保护队列
//!
//! [`SyncRingQueue`] wraps one [`RingQueue`] behind one exclusive lock.
//! Every operation, reads included, takes the lock, delegates unchanged to
//! the inner queue and releases the lock when the guard goes out of scope.
//! There is no reader/writer distinction and no lock-free fast path.
//!
//! [`SyncRingQueue`] 用一把互斥锁包装一个 [`RingQueue`]。每个操作（包括只读操作）
//! 都会获取锁，原样委托给内部队列，并在 guard 离开作用域时释放锁。
//! 不区分读写锁，也没有无锁快速路径。

use crate::error::Result;
use crate::queue::RingQueue;
use crate::shim::sync::{Mutex, MutexGuard};
use std::fmt;
use std::sync::PoisonError;

/// Thread-safe growable FIFO queue
///
/// 线程安全的可增长 FIFO 队列
///
/// Share it between threads with an `Arc`. Reads return clones because no
/// reference may outlive the lock.
///
/// 通过 `Arc` 在线程间共享。读操作返回克隆值，因为引用不能比锁活得更久。
///
/// # Examples
///
/// ```
/// use ringqueue::SyncRingQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(SyncRingQueue::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|id| {
///         let queue = Arc::clone(&queue);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 queue.add(id * 100 + i);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(queue.len(), 400);
/// ```
pub struct SyncRingQueue<T> {
    inner: Mutex<RingQueue<T>>,
}

impl<T> SyncRingQueue<T> {
    /// Create an empty queue with [`MIN_CAPACITY`](crate::MIN_CAPACITY) slots
    ///
    /// 创建具有 [`MIN_CAPACITY`](crate::MIN_CAPACITY) 个槽位的空队列
    pub fn new() -> Self {
        Self::from(RingQueue::new())
    }

    /// Acquire the lock
    ///
    /// 获取锁
    ///
    /// A poisoned lock is recovered: a panicking element `Drop` cannot leave
    /// the cursors of the inner queue inconsistent.
    ///
    /// 被毒化的锁会被恢复：元素 `Drop` 中的 panic 不会使内部队列的游标不一致。
    #[inline]
    fn lock(&self) -> MutexGuard<'_, RingQueue<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of allocated slots, for diagnostics
    ///
    /// 已分配的槽位数量，用于诊断
    #[inline]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Put an element at the back of the queue
    ///
    /// 将元素放入队列尾部
    #[inline]
    pub fn add(&self, value: T) {
        self.lock().add(value);
    }

    /// Remove and return the element at the front of the queue
    ///
    /// 移除并返回队列头部元素
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::Empty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueError::Empty)`。
    #[inline]
    pub fn remove(&self) -> Result<T> {
        self.lock().remove()
    }

    /// Equivalent to `self.remove().ok()`.
    #[inline]
    pub fn pop(&self) -> Option<T> {
        self.lock().pop()
    }

    /// Drop every element, keeping the current capacity
    ///
    /// 丢弃所有元素，保留当前容量
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consume the wrapper and return the inner queue
    ///
    /// 消耗包装器并返回内部队列
    pub fn into_inner(self) -> RingQueue<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SyncRingQueue<T> {
    /// Clone of the element at the front of the queue
    ///
    /// 获取队列头部元素的克隆
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::Empty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueError::Empty)`。
    pub fn peek(&self) -> Result<T> {
        self.lock().peek().cloned()
    }

    /// Clone of the element at position `index`, negative indices count from the back
    ///
    /// 获取位置 `index` 处元素的克隆，负索引从尾部开始计数
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::IndexOutOfRange)` unless `-len <= index < len`.
    ///
    /// # 错误
    ///
    /// 除非 `-len <= index < len`，否则返回 `Err(QueueError::IndexOutOfRange)`。
    pub fn get(&self, index: isize) -> Result<T> {
        self.lock().get(index).cloned()
    }
}

impl<T> Default for SyncRingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<RingQueue<T>> for SyncRingQueue<T> {
    fn from(queue: RingQueue<T>) -> Self {
        Self {
            inner: Mutex::new(queue),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncRingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncRingQueue").field(&*self.lock()).finish()
    }
}
