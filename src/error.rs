//! Error types for queue operations
//!
//! 队列操作的错误类型

/// Result type alias for queue operations
///
/// 队列操作的 Result 类型别名
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue operation error
///
/// 队列操作错误
///
/// Both variants are recoverable. A failed operation leaves the queue
/// untouched, so retrying on an unchanged queue yields the same error.
///
/// 两种错误均可恢复。失败的操作不会修改队列，因此在未变化的队列上重试会得到相同的错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// Queue is empty (peek / remove)
    ///
    /// 队列为空（peek / remove）
    #[error("queue is empty")]
    Empty,

    /// Index outside `[-len, len)` (get)
    ///
    /// 索引超出 `[-len, len)` 范围（get）
    #[error("index {index} is out of range for queue of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}
