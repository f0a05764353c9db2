//! Unsynchronized growable FIFO queue
//!
//! 非同步的可增长 FIFO 队列
//!
//! [`RingQueue`] is the canonical queue: every other type in this crate
//! delegates to it. It takes `&mut self` for mutation and performs no
//! internal locking, so all operations are O(1) amortized.
//!
//! [`RingQueue`] 是规范的队列实现，本 crate 中其他类型都委托给它。
//! 修改操作需要 `&mut self`，内部不加锁，因此所有操作均摊 O(1)。

use super::core::RingCore;
use crate::error::{QueueError, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Growable FIFO queue backed by a power-of-2 ring buffer
///
/// 由 2 的幂次环形缓冲区支撑的可增长 FIFO 队列
///
/// # Features
///
/// - **Never full**: `add` doubles the storage when every slot is in use
/// - **Shrinks**: storage is halved when occupancy drops to exactly 25%
/// - **Negative indexing**: `get(-1)` is the most recently added element
/// - **Capacity floor**: storage never drops below [`MIN_CAPACITY`](crate::MIN_CAPACITY) slots
///
/// # 特性
///
/// - **永不满**: 所有槽位被占用时 `add` 会将存储扩大一倍
/// - **自动缩容**: 占用率恰好降到 25% 时存储减半
/// - **负索引**: `get(-1)` 为最近添加的元素
/// - **容量下限**: 存储永远不会低于 [`MIN_CAPACITY`](crate::MIN_CAPACITY) 个槽位
///
/// # Examples
///
/// ```
/// use ringqueue::{QueueError, RingQueue};
///
/// let mut queue = RingQueue::new();
/// queue.add(1);
/// queue.add(2);
/// queue.add(3);
///
/// assert_eq!(queue.get(-1), Ok(&3));
/// assert_eq!(queue.remove(), Ok(1));
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.remove(), Ok(2));
/// assert_eq!(queue.remove(), Ok(3));
/// assert_eq!(queue.remove(), Err(QueueError::Empty));
/// ```
pub struct RingQueue<T> {
    core: RingCore<T>,
}

impl<T> RingQueue<T> {
    /// Create an empty queue with [`MIN_CAPACITY`](crate::MIN_CAPACITY) slots
    ///
    /// 创建具有 [`MIN_CAPACITY`](crate::MIN_CAPACITY) 个槽位的空队列
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for at least `capacity` elements
    ///
    /// 创建至少可容纳 `capacity` 个元素的空队列
    ///
    /// Capacity will be rounded up to the next power of 2, and never below
    /// [`MIN_CAPACITY`](crate::MIN_CAPACITY).
    ///
    /// 容量将向上取整到下一个 2 的幂次，且不低于 [`MIN_CAPACITY`](crate::MIN_CAPACITY)。
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<u8> = RingQueue::with_capacity(100);
    /// assert_eq!(queue.capacity(), 128);
    ///
    /// let queue: RingQueue<u8> = RingQueue::with_capacity(3);
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: RingCore::with_capacity(capacity),
        }
    }

    /// Number of elements in the queue
    ///
    /// 队列中的元素数量
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Number of allocated slots, for diagnostics
    ///
    /// 已分配的槽位数量，用于诊断
    #[inline]
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    /// Put an element at the back of the queue
    ///
    /// 将元素放入队列尾部
    ///
    /// Always succeeds. May reallocate when the queue is full.
    ///
    /// 总是成功。队列满时可能重新分配存储。
    #[inline]
    pub fn add(&mut self, value: T) {
        self.core.push_back(value);
    }

    /// Reference to the element at the front of the queue
    ///
    /// 获取队列头部元素的引用
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::Empty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueError::Empty)`。
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.core.get(0).ok_or(QueueError::Empty)
    }

    /// Reference to the element at position `index`
    ///
    /// 获取位置 `index` 处元素的引用
    ///
    /// Index 0 is the front of the queue. Negative indices count from the
    /// back, so -1 is the last element added.
    ///
    /// 索引 0 为队列头部。负索引从尾部开始计数，-1 为最后添加的元素。
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueError::IndexOutOfRange)` unless `-len <= index < len`.
    ///
    /// # 错误
    ///
    /// 除非 `-len <= index < len`，否则返回 `Err(QueueError::IndexOutOfRange)`。
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::{QueueError, RingQueue};
    ///
    /// let queue: RingQueue<char> = "abc".chars().collect();
    /// assert_eq!(queue.get(0), Ok(&'a'));
    /// assert_eq!(queue.get(-1), Ok(&'c'));
    /// assert_eq!(queue.get(-3), Ok(&'a'));
    /// assert_eq!(queue.get(-4), Err(QueueError::IndexOutOfRange { index: -4, len: 3 }));
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let len = self.core.len();
        let out_of_range = QueueError::IndexOutOfRange { index, len };

        let offset = if index < 0 {
            len.checked_sub(index.unsigned_abs()).ok_or(out_of_range)?
        } else {
            index.unsigned_abs()
        };

        self.core.get(offset).ok_or(out_of_range)
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
    pub fn remove(&mut self) -> Result<T> {
        self.core.pop_front().ok_or(QueueError::Empty)
    }

    /// Remove the front element, discarding the reason on failure
    ///
    /// 移除头部元素，失败时不区分原因
    ///
    /// Equivalent to `self.remove().ok()`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.remove().ok()
    }

    /// Drop every element, keeping the current capacity
    ///
    /// 丢弃所有元素，保留当前容量
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<u32> = (0..100).collect();
    /// let capacity = queue.capacity();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Front-to-back iterator over references
    ///
    /// 从头到尾遍历元素引用的迭代器
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            core: &self.core,
            front: 0,
            back: self.core.len(),
        }
    }

    /// Remove elements front-to-back through an iterator
    ///
    /// 通过迭代器从头到尾移除元素
    ///
    /// Elements not consumed are dropped along with the iterator.
    ///
    /// 未被消费的元素会随迭代器一起被 drop。
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator for the queue
///
/// 队列的借用迭代器
pub struct Iter<'a, T> {
    core: &'a RingCore<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.core.get(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.core.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Draining iterator for the queue
///
/// 队列的消费迭代器
pub struct Drain<'a, T> {
    queue: &'a mut RingQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_add_remove() {
        let mut queue = RingQueue::new();

        queue.add(1);
        queue.add(2);
        queue.add(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.remove().unwrap(), 1);
        assert_eq!(queue.remove().unwrap(), 2);
        assert_eq!(queue.remove().unwrap(), 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: RingQueue<i32> = RingQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 16);
        assert_eq!(queue.peek(), Err(QueueError::Empty));
        assert_eq!(queue.remove(), Err(QueueError::Empty));
        assert_eq!(queue.pop(), None);
        assert!(matches!(
            queue.get(0),
            Err(QueueError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_scenario() {
        let mut queue = RingQueue::new();
        queue.add(1);
        queue.add(2);
        queue.add(3);

        assert_eq!(queue.get(-1), Ok(&3));
        assert_eq!(queue.remove(), Ok(1));
        assert_eq!(queue.get(-1), Ok(&3));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.remove(), Ok(2));
        assert_eq!(queue.remove(), Ok(3));
        assert_eq!(queue.remove(), Err(QueueError::Empty));
    }

    #[test]
    fn test_get_extreme_indices() {
        let queue: RingQueue<i32> = (0..4).collect();
        assert!(queue.get(isize::MIN).is_err());
        assert!(queue.get(isize::MAX).is_err());
        assert_eq!(queue.get(-4), Ok(&0));
        assert_eq!(queue.get(3), Ok(&3));
        assert_eq!(
            queue.get(4),
            Err(QueueError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_iter_both_ends() {
        let queue: RingQueue<i32> = (0..5).collect();

        let forward: Vec<_> = queue.iter().copied().collect();
        assert_eq!(forward, vec![0, 1, 2, 3, 4]);

        let backward: Vec<_> = queue.iter().rev().copied().collect();
        assert_eq!(backward, vec![4, 3, 2, 1, 0]);

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_drain() {
        let mut queue: RingQueue<i32> = (0..5).collect();

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());

        queue.extend(0..5);
        {
            let mut drain = queue.drain();
            assert_eq!(drain.next(), Some(0));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_debug_and_clone() {
        let queue: RingQueue<i32> = (1..=3).collect();
        assert_eq!(format!("{:?}", queue), "[1, 2, 3]");

        let mut copy = queue.clone();
        copy.add(4);
        assert_eq!(queue.len(), 3);
        assert_eq!(copy.len(), 4);
    }
}
