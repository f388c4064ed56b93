//! Base64 with the URL-safe alphabet, no padding
//! URL 安全字母表的 base64，无填充

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::error::R;

/// Encode raw bytes; output never contains '+', '/' or '='
/// 编码原始字节；输出不含 '+'、'/'、'='
#[inline]
pub fn encode(s: &str) -> String {
  URL_SAFE_NO_PAD.encode(s.as_bytes())
}

/// Exact inverse of [`encode`] for single-byte-safe text
/// 对单字节安全文本为 [`encode`] 的精确逆运算
#[inline]
pub fn decode(s: &str) -> R<String> {
  let bytes = URL_SAFE_NO_PAD.decode(s)?;
  Ok(String::from_utf8(bytes)?)
}
