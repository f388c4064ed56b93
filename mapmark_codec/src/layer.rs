//! Layer state model
//! 图层状态模型

use crate::{
  kind::{LayerKind, LoadState},
  view::ViewState,
};

/// Per-layer settings carried in a bookmark
/// 书签中每个图层携带的设置
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSettings {
  /// [0,1], quantized to 1/100 on round-trip
  /// [0,1]，往返时量化到 1/100
  pub opacity: f64,
  pub visible: bool,
  pub bounding_box: bool,
  pub snapshot: bool,
  pub queryable: bool,
}

/// State of one sub-layer of a composite layer
/// 复合图层中单个子图层的状态
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSettings {
  pub opacity: f64,
  pub visible: bool,
  pub queryable: bool,
  /// 0-4095
  pub entry_index: u16,
  /// Directly under the layer, not under an intermediate group
  /// 直接位于图层之下，而非中间分组之下
  pub root_level: bool,
}

/// Encode-side child hierarchy node. Strict tree, no cycles.
/// 编码侧子图层层级节点。严格树结构，无环。
#[derive(Debug, Clone, PartialEq)]
pub enum ChildNode {
  /// Intermediate group, no record of its own
  /// 中间分组，自身不产生记录
  Group(Vec<ChildNode>),
  /// Leaf entry. `root_level` is derived during the walk, the value here
  /// is ignored.
  /// 叶子条目。`root_level` 在遍历中推导，此处的值被忽略。
  Entry(ChildSettings),
}

/// Encode-side input for one top-level layer
/// 编码侧单个顶层图层的输入
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSnapshot {
  pub kind: LayerKind,
  /// Raw layer identifier, appended to the segment unencoded
  /// 原始图层标识，不编码直接追加到段尾
  pub id: String,
  pub settings: LayerSettings,
  pub load_state: LoadState,
  /// None = no child hierarchy currently exposed
  /// None = 当前未暴露子图层层级
  pub children: Option<Vec<ChildNode>>,
  /// Runtime-added layers are excluded from the token
  /// 运行时添加的图层不写入令牌
  pub user_added: bool,
}

/// Decode-side output for one layer segment
/// 解码侧单个图层段的输出
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
  pub kind: LayerKind,
  pub settings: LayerSettings,
  /// Flat, in encoded order
  /// 展平，按编码顺序
  pub children: Vec<ChildSettings>,
  pub id: String,
}

/// One decoded bookmark
/// 一条解码后的书签
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
  pub version: String,
  pub view: ViewState,
  /// Authoritative display order, survives decode
  /// 权威显示顺序，解码后保持
  pub layers: Vec<LayerEntry>,
}

impl Bookmark {
  /// Layer ids in display order
  /// 按显示顺序的图层标识
  pub fn layer_ids(&self) -> Vec<String> {
    self.layers.iter().map(|l| l.id.clone()).collect()
  }
}
