//! Fixed-width unsigned integer ↔ binary digit text
//! 定宽无符号整数 ↔ 二进制数字文本

use crate::error::{E, R};

/// Encode `value` as exactly `width` binary digits, MSB first.
/// An oversized value is masked to the low `width` bits.
/// 将 `value` 编码为恰好 `width` 位二进制数字，高位在前。
/// 超宽的值被截断为低 `width` 位。
#[inline]
pub fn encode_uint(value: u32, width: usize) -> String {
  let mut out = String::with_capacity(width);
  for i in (0..width).rev() {
    let bit = if i < 32 { (value >> i) & 1 } else { 0 };
    out.push(if bit == 1 { '1' } else { '0' });
  }
  out
}

/// Strict inverse of [`encode_uint`]
/// [`encode_uint`] 的严格逆运算
#[inline]
pub fn decode_uint(bits: &str) -> R<u32> {
  if bits.len() > 32 {
    return Err(E::Width(bits.len()));
  }
  let mut v = 0u32;
  for c in bits.chars() {
    v <<= 1;
    match c {
      '0' => {}
      '1' => v |= 1,
      _ => return Err(E::Bit(c)),
    }
  }
  Ok(v)
}
