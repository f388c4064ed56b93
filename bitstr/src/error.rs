//! Error definitions
//! 错误定义

use thiserror::Error;

/// Result type
/// 结果类型
pub type R<T> = Result<T, E>;

/// Error type
/// 错误类型
#[derive(Error, Debug)]
pub enum E {
  #[error("invalid binary digit: {0:?}")]
  Bit(char),

  #[error("invalid hex digit: {0:?}")]
  Hex(char),

  #[error("binary length {0} is not a multiple of 4")]
  Chunk(usize),

  #[error("bit width {0} exceeds u32")]
  Width(usize),
}
