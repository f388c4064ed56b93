//! Child-entry codec, one 24-bit record per sub-layer
//! 子图层编解码，每个子图层一条 24 位记录

use bitstr::{decode_bool, decode_uint, encode_bool, encode_uint, hex_to_bin};

use crate::{
  consts::{CHILD_HEX, INDEX_BITS},
  error::{E, R},
  layer::ChildSettings,
  opacity::{decode_opacity, encode_opacity},
};

/// Reserved padding, written as zero and never read back
/// 保留填充位，写零且从不读取
const PAD: &str = "00";

/// 24 bits: opacity(7) visible(1) queryable(1) root(1) index(12) pad(2)
/// 24 位：不透明度(7) 可见(1) 可查询(1) 根级(1) 索引(12) 填充(2)
pub fn encode_child(c: &ChildSettings) -> String {
  let mut bits = String::with_capacity(CHILD_HEX * 4);
  bits.push_str(&encode_opacity(c.opacity));
  bits.push(encode_bool(c.visible));
  bits.push(encode_bool(c.queryable));
  bits.push(encode_bool(c.root_level));
  bits.push_str(&encode_uint(c.entry_index as u32, INDEX_BITS));
  bits.push_str(PAD);
  bits
}

/// Decode one 6-hex-digit record. The 2 padding bits stay unread.
/// 解码一条 6 位十六进制记录。2 个填充位保持未读。
pub fn decode_child(hex: &str) -> R<ChildSettings> {
  if hex.len() != CHILD_HEX {
    return Err(E::Grammar("child record length"));
  }
  let bits = hex_to_bin(hex)?;
  // hex_to_bin output is pure ASCII '0'/'1'
  let b = bits.as_bytes();
  Ok(ChildSettings {
    opacity: decode_opacity(&bits[0..7])?,
    visible: decode_bool(b[7] as char)?,
    queryable: decode_bool(b[8] as char)?,
    root_level: decode_bool(b[9] as char)?,
    entry_index: decode_uint(&bits[10..22])? as u16,
  })
}
