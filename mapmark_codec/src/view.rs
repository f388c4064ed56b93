//! Live view state of a session
//! 会话的实时视图状态

/// Basemap and view center/scale. Numbers travel as decimal text so the
/// round-trip is exact.
/// 底图与视图中心/比例。数值以十进制文本传输，往返精确。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
  /// Selected basemap id
  /// 选中的底图标识
  pub basemap: String,
  /// Blank-basemap mode. Modeled but not wire-carried: the encoder writes
  /// a fixed flag digit and the decoder strips it unread.
  /// 空白底图模式。仅建模不上线：编码写固定标志位，解码剥离且不读取。
  pub blank: bool,
  /// Center x as decimal text
  /// 中心 x，十进制文本
  pub x: String,
  /// Center y as decimal text
  /// 中心 y，十进制文本
  pub y: String,
  /// Scale as decimal text
  /// 比例，十进制文本
  pub scale: String,
}
