//! Externally-catalogued layer ids
//! 外部目录图层标识

/// Reserved prefix marking ids sourced from an external registry
/// 标记来源于外部注册表的保留前缀
pub const EXTERNAL_PREFIX: &str = "rcs.";

/// Id carries the external-registry prefix
/// 标识带有外部注册表前缀
#[inline]
pub fn is_external(id: &str) -> bool {
  id.starts_with(EXTERNAL_PREFIX)
}

/// Rewrite the trailing two-character language tag of an external id.
/// `lang` is a two-character tag, caller contract. Non-external ids and
/// ids too short to carry a tag pass through unchanged.
/// 重写外部标识末尾的两字符语言标签。`lang` 为两字符标签，由调用方保证。
/// 非外部标识或短于标签长度的标识原样返回。
pub fn rewrite_lang(id: &str, lang: &str) -> String {
  if !is_external(id) || id.len() < EXTERNAL_PREFIX.len() + 2 {
    return id.to_owned();
  }
  match id.get(..id.len() - 2) {
    Some(head) => {
      let mut out = String::with_capacity(head.len() + lang.len());
      out.push_str(head);
      out.push_str(lang);
      out
    }
    None => id.to_owned(),
  }
}
