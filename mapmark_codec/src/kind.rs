//! Layer kinds and load states
//! 图层类型与加载状态

use crate::error::{E, R};

/// The 5 known layer kinds and their fixed wire digits
/// 5 种已知图层类型及其固定线格式数字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
  Feature,
  Wms,
  Tile,
  /// Composite kind, may expose a tree of addressable sub-layers
  /// 复合类型，可能暴露可寻址的子图层树
  Dynamic,
  Image,
}

impl LayerKind {
  /// Wire digit
  /// 线格式数字
  #[inline]
  pub const fn code(self) -> char {
    match self {
      Self::Feature => '0',
      Self::Wms => '1',
      Self::Tile => '2',
      Self::Dynamic => '3',
      Self::Image => '4',
    }
  }

  /// Parse a wire digit
  /// 解析线格式数字
  #[inline]
  pub fn from_code(c: char) -> R<Self> {
    Ok(match c {
      '0' => Self::Feature,
      '1' => Self::Wms,
      '2' => Self::Tile,
      '3' => Self::Dynamic,
      '4' => Self::Image,
      _ => return Err(E::Kind(c)),
    })
  }
}

/// Layer load state at encode time
/// 编码时的图层加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
  New,
  Loading,
  #[default]
  Loaded,
  Refresh,
  Error,
}

impl LoadState {
  /// Child structure is safe to read
  /// 子图层结构可安全读取
  #[inline]
  pub const fn is_ready(self) -> bool {
    !matches!(self, Self::New | Self::Loading | Self::Error)
  }
}
