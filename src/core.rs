//! Core ring storage - Cursor arithmetic and resize policy shared by every queue
//!
//! 核心环形存储 - 所有队列共享的游标运算与扩缩容策略
//!
//! This module owns the parts of the queue with real algorithmic content:
//! - Slot storage as a boxed slice of `Option<T>` (power-of-2 length)
//! - Head/tail/count cursors with bitwise masking
//! - Grow-on-full and shrink-at-quarter resize, with wrap-around handling
//!
//! 此模块包含队列中真正的算法部分：
//! - 以 `Option<T>` 装箱切片存储槽位（长度为 2 的幂次）
//! - 使用位掩码的 head/tail/count 游标
//! - 满时扩容、四分之一占用时缩容，并处理环绕

use crate::MIN_CAPACITY;
use std::mem;

/// Core ring storage structure
///
/// 核心环形存储结构
///
/// Every slot in the logical range `[head, head + count)` holds `Some`,
/// every other slot holds `None`.
///
/// 逻辑区间 `[head, head + count)` 内的每个槽位均为 `Some`，其余槽位均为 `None`。
pub struct RingCore<T> {
    /// Slot storage, length is always a power of 2 and >= MIN_CAPACITY
    ///
    /// 槽位存储，长度始终为 2 的幂次且 >= MIN_CAPACITY
    slots: Box<[Option<T>]>,

    /// Index of the oldest occupied slot
    ///
    /// 最旧已占用槽位的索引
    head: usize,

    /// Index of the next free slot
    ///
    /// 下一个空闲槽位的索引
    tail: usize,

    /// Number of occupied slots
    ///
    /// 已占用槽位数量
    count: usize,
}

impl<T> RingCore<T> {
    /// Create an empty core with `capacity` slots
    ///
    /// 创建具有 `capacity` 个槽位的空核心
    ///
    /// The capacity is rounded with [`round_capacity`], so the result always
    /// satisfies the power-of-2 and floor invariants.
    ///
    /// 容量经 [`round_capacity`] 取整，因此结果始终满足 2 的幂次与下限约束。
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(round_capacity(capacity)),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Number of allocated slots
    ///
    /// 已分配的槽位数量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Mask for fast modulo operation (capacity - 1)
    ///
    /// 快速取模运算的掩码（capacity - 1）
    #[inline]
    pub fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Append a value at the tail, doubling the storage first when full
    ///
    /// 在尾部追加元素，满时先将存储扩大一倍
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.resize(self.count << 1);
        }

        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) & self.mask();
        self.count += 1;
    }

    /// Take the value at the head, or `None` when empty
    ///
    /// 取出头部元素，为空时返回 `None`
    ///
    /// The vacated slot is reset to `None`. When the buffer is above the
    /// floor and the remaining count is exactly a quarter of the capacity,
    /// the storage is halved to `count * 2`.
    ///
    /// 被腾出的槽位重置为 `None`。当容量高于下限且剩余数量恰好为容量的四分之一时，
    /// 存储缩小为 `count * 2`。
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self.slots[self.head].take();
        self.head = (self.head + 1) & self.mask();
        self.count -= 1;

        // Exact quarter only; stepping over the boundary skips the shrink
        if self.slots.len() > MIN_CAPACITY && (self.count << 2) == self.slots.len() {
            self.resize(self.count << 1);
        }

        value
    }

    /// Reference to the element at logical `offset` from the head
    ///
    /// 获取距头部逻辑偏移 `offset` 处元素的引用
    ///
    /// Returns `None` when `offset >= len()`.
    ///
    /// 当 `offset >= len()` 时返回 `None`。
    #[inline]
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.count {
            return None;
        }
        self.slots[(self.head + offset) & self.mask()].as_ref()
    }

    /// Drop every element and reset the cursors, keeping the allocation
    ///
    /// 丢弃所有元素并重置游标，保留已分配的存储
    pub fn clear(&mut self) {
        let head = self.head;
        let count = mem::take(&mut self.count);
        self.head = 0;
        self.tail = 0;

        let mask = self.mask();
        for offset in 0..count {
            self.slots[(head + offset) & mask] = None;
        }
    }

    /// Move the live elements into fresh storage of `new_capacity` slots
    ///
    /// 将存活元素移动到具有 `new_capacity` 个槽位的新存储中
    ///
    /// Elements are laid out from index 0 in logical order, so afterwards
    /// `head == 0` and `tail == count`.
    ///
    /// 元素按逻辑顺序从索引 0 开始排列，因此之后 `head == 0` 且 `tail == count`。
    ///
    /// # Panics
    /// Debug builds assert that `new_capacity` is a power of 2, no smaller
    /// than the floor, and can hold every live element.
    ///
    /// # 恐慌
    /// Debug 构建下断言 `new_capacity` 为 2 的幂次、不小于下限且能容纳所有存活元素。
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(new_capacity >= MIN_CAPACITY);
        debug_assert!(new_capacity >= self.count);

        tracing::trace!(
            from = self.slots.len(),
            to = new_capacity,
            len = self.count,
            "resizing ring storage"
        );

        let mut slots = empty_slots(new_capacity);

        if self.tail > self.head {
            // No wrap-around: single contiguous move
            // 无环绕：单次连续移动
            move_slots(&mut self.slots[self.head..self.tail], &mut slots[..self.count]);
        } else if self.count > 0 {
            // Wrap-around: [head, len) then [0, tail)
            // 环绕：先 [head, len)，再 [0, tail)
            let first_part = self.slots.len() - self.head;
            let (front, back) = slots[..self.count].split_at_mut(first_part);
            move_slots(&mut self.slots[self.head..], front);
            move_slots(&mut self.slots[..self.tail], back);
        }

        self.head = 0;
        self.tail = self.count & (new_capacity - 1);
        self.slots = slots;
    }
}

impl<T: Clone> Clone for RingCore<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            head: self.head,
            tail: self.tail,
            count: self.count,
        }
    }
}

/// Round a requested capacity up to a valid slot count
///
/// 将期望容量向上取整为合法的槽位数量
///
/// # Returns
/// The smallest power of 2 that is >= capacity and >= MIN_CAPACITY
///
/// # 返回值
/// >= capacity 且 >= MIN_CAPACITY 的最小 2 的幂次
#[inline]
pub fn round_capacity(capacity: usize) -> usize {
    capacity.max(MIN_CAPACITY).next_power_of_two()
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

fn move_slots<T>(src: &mut [Option<T>], dst: &mut [Option<T>]) {
    for (to, from) in dst.iter_mut().zip(src.iter_mut()) {
        *to = from.take();
    }
}
