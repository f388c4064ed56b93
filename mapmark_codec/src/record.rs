//! Layer-entry codec, one variable-length segment per top-level layer
//! 图层编解码，每个顶层图层一条变长段

use bitstr::{bin_to_hex, decode_bool, decode_uint, encode_bool, encode_uint, hex_to_bin};
use log::warn;

use crate::{
  child::{decode_child, encode_child},
  consts::{CHILD_HEX, COUNT_BITS, SETTINGS_HEX},
  error::{E, R},
  kind::LayerKind,
  layer::{LayerEntry, LayerSettings, LayerSnapshot},
  opacity::{decode_opacity, encode_opacity},
  walk::flatten,
};

/// Segment = kind digit + hex(settings(11) + count(9) + children(24n)) + raw id.
/// Children are emitted only for a ready composite layer with an exposed
/// hierarchy; otherwise they reset to configuration defaults on
/// re-application. A count past 511 truncates in the count field, caller
/// contract.
/// 段 = 类型数字 + hex(设置(11) + 数量(9) + 子记录(24n)) + 原始标识。
/// 仅当复合图层就绪且暴露层级时才输出子记录；否则重新应用时恢复配置默认。
/// 数量超过 511 时数量字段截断，由调用方保证。
pub fn encode_layer(layer: &LayerSnapshot) -> String {
  let children = if layer.kind == LayerKind::Dynamic && layer.load_state.is_ready() {
    layer.children.as_deref().map(flatten).unwrap_or_default()
  } else {
    Vec::new()
  };

  let s = &layer.settings;
  let mut bits = String::with_capacity((SETTINGS_HEX + children.len() * CHILD_HEX) * 4);
  bits.push_str(&encode_opacity(s.opacity));
  bits.push(encode_bool(s.visible));
  bits.push(encode_bool(s.bounding_box));
  bits.push(encode_bool(s.snapshot));
  bits.push(encode_bool(s.queryable));
  bits.push_str(&encode_uint(children.len() as u32, COUNT_BITS));
  for c in &children {
    bits.push_str(&encode_child(c));
  }

  let mut seg = String::with_capacity(1 + bits.len() / 4 + layer.id.len());
  seg.push(layer.kind.code());
  // 20 + 24n bits, always a multiple of 4
  // 20 + 24n 比特，恒为 4 的倍数
  seg.push_str(&bin_to_hex(&bits).unwrap());
  seg.push_str(&layer.id);
  seg
}

/// Decode one segment. Wrong lengths, an unknown kind digit or non-hex
/// where hex is expected fail closed.
/// 解码一条段。长度错误、未知类型数字或十六进制位置出现非十六进制均直接失败。
pub fn decode_layer(seg: &str) -> R<LayerEntry> {
  let kind = match seg.chars().next() {
    Some(c) => LayerKind::from_code(c)?,
    None => return Err(E::Grammar("empty layer segment")),
  };

  let fixed = seg
    .get(1..1 + SETTINGS_HEX)
    .ok_or(E::Grammar("settings block"))?;
  let bits = hex_to_bin(fixed)?;
  let b = bits.as_bytes();
  let settings = LayerSettings {
    opacity: decode_opacity(&bits[0..7])?,
    visible: decode_bool(b[7] as char)?,
    bounding_box: decode_bool(b[8] as char)?,
    snapshot: decode_bool(b[9] as char)?,
    queryable: decode_bool(b[10] as char)?,
  };
  let count = decode_uint(&bits[11..20])? as usize;

  let mut children = Vec::with_capacity(count);
  let mut at = 1 + SETTINGS_HEX;
  for _ in 0..count {
    let rec = seg.get(at..at + CHILD_HEX).ok_or_else(|| {
      warn!("layer segment shorter than its declared child count {count}");
      E::Grammar("child records")
    })?;
    children.push(decode_child(rec)?);
    at += CHILD_HEX;
  }

  let id = seg.get(at..).ok_or(E::Grammar("layer id"))?.to_owned();
  Ok(LayerEntry {
    kind,
    settings,
    children,
    id,
  })
}
