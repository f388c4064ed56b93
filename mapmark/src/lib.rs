#![cfg_attr(docsrs, feature(doc_cfg))]

//! mapmark - map session bookmark codec and store
//! mapmark - 地图会话书签编解码与存储

mod catalog;
mod order;
mod store;

pub use catalog::{EXTERNAL_PREFIX, is_external, rewrite_lang};
pub use mapmark_codec::{
  Bookmark, ChildNode, ChildSettings, E, LayerEntry, LayerKind, LayerSettings, LayerSnapshot,
  LoadState, R, VERSION_CURRENT, VERSION_RETIRED, ViewState, assemble, parse,
};
pub use order::{LegendMode, display_order};
pub use store::BookmarkStore;
