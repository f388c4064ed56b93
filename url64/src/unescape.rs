//! Percent-unescape of a whole token
//! 整个令牌的百分号反转义

use std::borrow::Cow;

use crate::error::R;

/// Undo URI escaping applied by the embedding URL
/// 还原嵌入 URL 时施加的 URI 转义
#[inline]
pub fn unescape(s: &str) -> R<Cow<'_, str>> {
  Ok(urlencoding::decode(s)?)
}
