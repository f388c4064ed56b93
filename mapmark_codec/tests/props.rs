//! Round-trip and quantization properties
//! 往返与量化属性

use mapmark_codec::{
  Bookmark, ChildNode, ChildSettings, LayerEntry, LayerKind, LayerSettings, LayerSnapshot,
  LoadState, VERSION_CURRENT, ViewState, assemble, decode_opacity, encode_opacity, flatten, parse,
};
use proptest::prelude::*;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn kind_strategy() -> impl Strategy<Value = LayerKind> {
  prop_oneof![
    Just(LayerKind::Feature),
    Just(LayerKind::Wms),
    Just(LayerKind::Tile),
    Just(LayerKind::Dynamic),
    Just(LayerKind::Image),
  ]
}

fn settings_strategy() -> impl Strategy<Value = LayerSettings> {
  (0u32..=100, any::<[bool; 4]>()).prop_map(|(pct, [visible, bounding_box, snapshot, queryable])| {
    LayerSettings {
      opacity: pct as f64 / 100.0,
      visible,
      bounding_box,
      snapshot,
      queryable,
    }
  })
}

fn child_strategy() -> impl Strategy<Value = ChildSettings> {
  (0u32..=100, any::<bool>(), any::<bool>(), 0u16..4096).prop_map(
    |(pct, visible, queryable, entry_index)| ChildSettings {
      opacity: pct as f64 / 100.0,
      visible,
      queryable,
      entry_index,
      // derived during the walk
      // 在遍历中推导
      root_level: false,
    },
  )
}

fn node_strategy() -> impl Strategy<Value = ChildNode> {
  child_strategy()
    .prop_map(ChildNode::Entry)
    .prop_recursive(2, 8, 3, |inner| {
      prop::collection::vec(inner, 0..3).prop_map(ChildNode::Group)
    })
}

fn layer_strategy() -> impl Strategy<Value = LayerSnapshot> {
  (
    kind_strategy(),
    "[a-z0-9._-]{1,12}",
    settings_strategy(),
    prop::option::of(prop::collection::vec(node_strategy(), 0..4)),
  )
    .prop_map(|(kind, id, settings, children)| LayerSnapshot {
      kind,
      id,
      settings,
      load_state: LoadState::Loaded,
      children,
      user_added: false,
    })
}

fn view_strategy() -> impl Strategy<Value = ViewState> {
  (
    "[a-zA-Z0-9]{1,16}",
    "-?[0-9]{1,7}\\.[0-9]{1,3}",
    "-?[0-9]{1,7}\\.[0-9]{1,3}",
    "[0-9]{1,9}",
  )
    .prop_map(|(basemap, x, y, scale)| ViewState {
      basemap,
      blank: false,
      x,
      y,
      scale,
    })
}

/// The entry the decoder must produce for a snapshot
/// 解码器必须为快照产出的条目
fn expected(s: &LayerSnapshot) -> LayerEntry {
  let children = if s.kind == LayerKind::Dynamic && s.load_state.is_ready() {
    s.children.as_deref().map(flatten).unwrap_or_default()
  } else {
    Vec::new()
  };
  LayerEntry {
    kind: s.kind,
    settings: s.settings.clone(),
    children,
    id: s.id.clone(),
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  /// Parse(Assemble(v, view, layers)) reproduces the view fields as
  /// decimal text and the ordered layer entries exactly
  /// Parse(Assemble(...)) 精确还原十进制文本视图字段与有序图层条目
  #[test]
  fn prop_roundtrip(view in view_strategy(), layers in prop::collection::vec(layer_strategy(), 0..6)) {
    let bm = parse(&assemble(VERSION_CURRENT, &view, &layers)).unwrap();
    let want = Bookmark {
      version: VERSION_CURRENT.to_owned(),
      view: view.clone(),
      layers: layers.iter().map(expected).collect(),
    };
    prop_assert_eq!(bm, want);
  }

  /// Quantization lands on round(v*100)/100 and is a fixed point after
  /// the first cycle
  /// 量化落在 round(v*100)/100，首轮之后为不动点
  #[test]
  fn prop_opacity_fixed_point(v in 0.0f64..=1.0) {
    let q = decode_opacity(&encode_opacity(v)).unwrap();
    prop_assert_eq!(q, (v * 100.0).round() / 100.0);
    let q2 = decode_opacity(&encode_opacity(q)).unwrap();
    prop_assert_eq!(q, q2);
  }

  /// Token alphabet stays URL-parameter-safe
  /// 令牌字母表保持 URL 参数安全
  #[test]
  fn prop_token_url_safe(view in view_strategy(), layers in prop::collection::vec(layer_strategy(), 0..4)) {
    let token = assemble(VERSION_CURRENT, &view, &layers);
    prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, ',' | '-' | '_')));
  }
}
