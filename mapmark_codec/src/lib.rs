#![cfg_attr(docsrs, feature(doc_cfg))]

//! Versioned, bit-packed, URL-safe bookmark codec for map session state
//! 地图会话状态的版本化、位压缩、URL 安全书签编解码

mod child;
mod consts;
mod error;
mod kind;
mod layer;
mod opacity;
mod record;
mod token;
mod view;
mod walk;

pub use child::{decode_child, encode_child};
pub use consts::{
  CHILD_HEX, COUNT_BITS, FLAG_DIGIT, INDEX_BITS, MAX_CHILDREN, OPACITY_BITS, SETTINGS_HEX,
  VERSION_CURRENT, VERSION_RETIRED,
};
pub use error::{E, R};
pub use kind::{LayerKind, LoadState};
pub use layer::{Bookmark, ChildNode, ChildSettings, LayerEntry, LayerSettings, LayerSnapshot};
pub use opacity::{decode_opacity, encode_opacity};
pub use record::{decode_layer, encode_layer};
pub use token::{assemble, parse};
pub use view::ViewState;
pub use walk::flatten;
