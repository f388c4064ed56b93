//! Bookmark store, the only stateful entity
//! 书签存储，唯一的有状态实体

use log::debug;
use mapmark_codec::{Bookmark, LayerEntry, R, parse};

use crate::catalog::{is_external, rewrite_lang};

/// Holds the single most-recently-decoded bookmark and its derived
/// layer-id order. Owned by the session controller; under threads the
/// host serializes read-modify-write sequences.
/// 保存最近一次解码的书签及派生的图层标识顺序。由会话控制器独占持有；
/// 多线程下由宿主串行化读-改-写序列。
#[derive(Debug, Default)]
pub struct BookmarkStore {
  current: Option<Bookmark>,
  order: Vec<String>,
}

impl BookmarkStore {
  /// Empty at construction
  /// 构造时为空
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse a token and atomically replace the contents. A failing parse
  /// leaves the prior contents untouched.
  /// 解析令牌并原子替换内容。解析失败时原内容保持不变。
  pub fn load(&mut self, token: &str) -> R<&Bookmark> {
    let bookmark = parse(token)?;
    debug!(
      "bookmark loaded: version {}, {} layers / 书签已加载",
      bookmark.version,
      bookmark.layers.len()
    );
    self.order = bookmark.layer_ids();
    Ok(self.current.insert(bookmark))
  }

  /// Explicitly drop the current bookmark
  /// 显式丢弃当前书签
  pub fn clear(&mut self) {
    self.current = None;
    self.order.clear();
  }

  /// Current bookmark, if a decode has succeeded since the last clear
  /// 自上次清空以来成功解码的当前书签
  #[inline]
  pub fn bookmark(&self) -> Option<&Bookmark> {
    self.current.as_ref()
  }

  /// Layer ids in display order
  /// 按显示顺序的图层标识
  #[inline]
  pub fn layer_ids(&self) -> &[String] {
    &self.order
  }

  /// Drain externally-catalogued entries out of the stored bookmark,
  /// returned separately in stored order.
  /// 将外部目录条目从存储书签中抽出，按存储顺序单独返回。
  pub fn split_external(&mut self) -> Vec<LayerEntry> {
    let Some(bm) = self.current.as_mut() else {
      return Vec::new();
    };
    let mut external = Vec::new();
    let mut kept = Vec::with_capacity(bm.layers.len());
    for layer in bm.layers.drain(..) {
      if is_external(&layer.id) {
        external.push(layer);
      } else {
        kept.push(layer);
      }
    }
    bm.layers = kept;
    self.order.retain(|id| !is_external(id));
    external
  }

  /// Re-merge a previously split list; the id order is re-derived
  /// 重新并入先前抽出的列表；标识顺序重新派生
  pub fn merge_external(&mut self, entries: Vec<LayerEntry>) {
    let Some(bm) = self.current.as_mut() else {
      return;
    };
    bm.layers.extend(entries);
    self.order = bm.layer_ids();
  }

  /// Rewrite the language tag on stored external ids when the UI
  /// language changes
  /// UI 语言切换时重写存储的外部标识语言标签
  pub fn set_language(&mut self, lang: &str) {
    if let Some(bm) = self.current.as_mut() {
      for layer in &mut bm.layers {
        if is_external(&layer.id) {
          layer.id = rewrite_lang(&layer.id, lang);
        }
      }
      self.order = bm.layer_ids();
    }
  }
}
