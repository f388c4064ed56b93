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
  #[error("base64: {0}")]
  B64(#[from] base64::DecodeError),

  #[error("utf8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}
