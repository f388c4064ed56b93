//! Single-bit boolean ↔ binary digit
//! 单比特布尔 ↔ 二进制数字

use crate::error::{E, R};

/// '1' for true, '0' for false
/// true 为 '1'，false 为 '0'
#[inline]
pub const fn encode_bool(b: bool) -> char {
  if b { '1' } else { '0' }
}

/// Strict inverse of [`encode_bool`]
/// [`encode_bool`] 的严格逆运算
#[inline]
pub fn decode_bool(c: char) -> R<bool> {
  match c {
    '0' => Ok(false),
    '1' => Ok(true),
    _ => Err(E::Bit(c)),
  }
}
