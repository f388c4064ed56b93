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
  #[error("bits: {0}")]
  Bits(#[from] bitstr::E),

  #[error("text: {0}")]
  Text(#[from] url64::E),

  #[error("unsupported bookmark version: {0:?}")]
  Version(String),

  #[error("unknown layer kind: {0:?}")]
  Kind(char),

  #[error("bookmark grammar: {0}")]
  Grammar(&'static str),
}
