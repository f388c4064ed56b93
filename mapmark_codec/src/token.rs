//! Bookmark token assembler / parser
//! 书签令牌组装 / 解析

use log::warn;

use crate::{
  consts::{FLAG_DIGIT, VERSION_CURRENT},
  error::{E, R},
  layer::{Bookmark, LayerSnapshot},
  record::{decode_layer, encode_layer},
  view::ViewState,
};

/// Comma-join version, transported view fields, then one transported
/// segment per layer in display order. User-added layers are skipped.
/// Well-formed input never fails to assemble.
/// 逗号连接版本、传输后的视图字段，以及按显示顺序每图层一条传输后的段。
/// 运行时添加的图层被跳过。合法输入的组装不会失败。
pub fn assemble(version: &str, view: &ViewState, layers: &[LayerSnapshot]) -> String {
  let mut basemap = String::with_capacity(view.basemap.len() + 1);
  basemap.push_str(&view.basemap);
  basemap.push(FLAG_DIGIT);

  let mut token = [
    version.to_owned(),
    url64::encode(&basemap),
    url64::encode(&view.x),
    url64::encode(&view.y),
    url64::encode(&view.scale),
  ]
  .join(",");

  for layer in layers.iter().filter(|l| !l.user_added) {
    token.push(',');
    token.push_str(&url64::encode(&encode_layer(layer)));
  }
  token
}

/// Parse a token into a [`Bookmark`]. Fails closed: a malformed field or
/// layer segment yields no partial result. The retired version and any
/// unrecognized tag are rejected before any field decode.
/// 将令牌解析为 [`Bookmark`]。快速失败：字段或图层段损坏时无部分结果。
/// 已退役版本与无法识别的标签在解码任何字段前被拒绝。
pub fn parse(token: &str) -> R<Bookmark> {
  let token = url64::unescape(token)?;
  let mut fields = token.split(',');

  let version = fields.next().unwrap_or_default();
  if version != VERSION_CURRENT {
    return Err(E::Version(version.to_owned()));
  }

  let mut basemap = url64::decode(fields.next().ok_or(E::Grammar("basemap field"))?)?;
  // reserved flag char, always present, never interpreted
  // 保留标志位，恒存在，从不解读
  if basemap.pop().is_none() {
    return Err(E::Grammar("basemap flag"));
  }
  let x = url64::decode(fields.next().ok_or(E::Grammar("x field"))?)?;
  let y = url64::decode(fields.next().ok_or(E::Grammar("y field"))?)?;
  let scale = url64::decode(fields.next().ok_or(E::Grammar("scale field"))?)?;

  let mut layers = Vec::new();
  for (i, seg) in fields.enumerate() {
    let seg = url64::decode(seg)?;
    match decode_layer(&seg) {
      Ok(layer) => layers.push(layer),
      Err(e) => {
        warn!("layer segment {i} rejected: {e}");
        return Err(e);
      }
    }
  }

  Ok(Bookmark {
    version: version.to_owned(),
    view: ViewState {
      basemap,
      blank: false,
      x,
      y,
      scale,
    },
    layers,
  })
}
