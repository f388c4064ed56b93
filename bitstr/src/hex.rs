//! Binary digit string ↔ hex digit string, 4 bits per hex digit
//! 二进制数字字符串 ↔ 十六进制数字字符串，每个十六进制位对应 4 比特

use crate::error::{E, R};

const TABLE: &[u8; 16] = b"0123456789ABCDEF";

/// 4-bit chunks to uppercase hex digits
/// 每 4 比特映射为一个大写十六进制数字
pub fn bin_to_hex(bits: &str) -> R<String> {
  if bits.len() % 4 != 0 {
    return Err(E::Chunk(bits.len()));
  }
  let mut out = String::with_capacity(bits.len() / 4);
  for chunk in bits.as_bytes().chunks_exact(4) {
    let mut v = 0u8;
    for &b in chunk {
      v <<= 1;
      match b {
        b'0' => {}
        b'1' => v |= 1,
        _ => return Err(E::Bit(b as char)),
      }
    }
    out.push(TABLE[v as usize] as char);
  }
  Ok(out)
}

/// Each hex digit (either case) to 4 binary digits
/// 每个十六进制数字（大小写均可）映射为 4 位二进制数字
pub fn hex_to_bin(hex: &str) -> R<String> {
  let mut out = String::with_capacity(hex.len() * 4);
  for c in hex.chars() {
    let v = c.to_digit(16).ok_or(E::Hex(c))?;
    for i in (0..4).rev() {
      out.push(if (v >> i) & 1 == 1 { '1' } else { '0' });
    }
  }
  Ok(out)
}
