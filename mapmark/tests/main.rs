use aok::{OK, Void};
use log::info;
use mapmark::{
  BookmarkStore, LayerKind, LayerSettings, LayerSnapshot, LegendMode, LoadState, VERSION_CURRENT,
  ViewState, assemble, display_order, is_external, rewrite_lang,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test() -> Void {
  info!("> test {}", 123456);
  OK
}

fn snapshot(id: &str) -> LayerSnapshot {
  LayerSnapshot {
    kind: LayerKind::Feature,
    id: id.to_owned(),
    settings: LayerSettings {
      opacity: 1.0,
      visible: true,
      bounding_box: false,
      snapshot: false,
      queryable: true,
    },
    load_state: LoadState::Loaded,
    children: None,
    user_added: false,
  }
}

fn token(ids: &[&str]) -> String {
  let view = ViewState {
    basemap: "topo".to_owned(),
    blank: false,
    x: "100.5".to_owned(),
    y: "-42.25".to_owned(),
    scale: "50000".to_owned(),
  };
  let layers: Vec<LayerSnapshot> = ids.iter().map(|id| snapshot(id)).collect();
  assemble(VERSION_CURRENT, &view, &layers)
}

#[test]
fn test_store_lifecycle() -> Void {
  let mut store = BookmarkStore::new();
  // Empty at construction
  // 构造时为空
  assert!(store.bookmark().is_none());
  assert!(store.layer_ids().is_empty());

  store.load(&token(&["a", "b"]))?;
  assert_eq!(store.layer_ids(), ["a", "b"]);
  assert_eq!(store.bookmark().map(|b| b.view.basemap.as_str()), Some("topo"));

  store.clear();
  assert!(store.bookmark().is_none());
  assert!(store.layer_ids().is_empty());
  OK
}

#[test]
fn test_failed_load_keeps_prior() -> Void {
  let mut store = BookmarkStore::new();
  store.load(&token(&["keep"]))?;

  // Retired version and garbage both leave the store untouched
  // 已退役版本与乱码都不影响存储内容
  assert!(store.load("A,x,y,z,w").is_err());
  assert!(store.load("B,%%bad").is_err());
  assert_eq!(store.layer_ids(), ["keep"]);
  assert_eq!(store.bookmark().map(|b| b.layers.len()), Some(1));
  OK
}

#[test]
fn test_reload_replaces() -> Void {
  let mut store = BookmarkStore::new();
  store.load(&token(&["old1", "old2"]))?;
  store.load(&token(&["new1"]))?;
  assert_eq!(store.layer_ids(), ["new1"]);
  OK
}

#[test]
fn test_is_external() {
  assert!(is_external("rcs.MyKey.en"));
  assert!(!is_external("layer7"));
  assert!(!is_external("Rcs.MyKey.en"));
}

#[test]
fn test_rewrite_lang() {
  assert_eq!(rewrite_lang("rcs.MyKey.en", "fr"), "rcs.MyKey.fr");
  // Non-external ids pass through unchanged
  // 非外部标识原样返回
  assert_eq!(rewrite_lang("layer7en", "fr"), "layer7en");
  // Too short to carry a tag
  // 短于语言标签长度
  assert_eq!(rewrite_lang("rcs.", "fr"), "rcs.");
}

#[test]
fn test_split_merge_external() -> Void {
  let mut store = BookmarkStore::new();
  store.load(&token(&["a", "rcs.X.en", "b", "rcs.Y.en"]))?;

  let external = store.split_external();
  let ids: Vec<&str> = external.iter().map(|l| l.id.as_str()).collect();
  assert_eq!(ids, ["rcs.X.en", "rcs.Y.en"]);
  assert_eq!(store.layer_ids(), ["a", "b"]);

  store.merge_external(external);
  assert_eq!(store.layer_ids(), ["a", "b", "rcs.X.en", "rcs.Y.en"]);
  OK
}

#[test]
fn test_split_without_bookmark() {
  let mut store = BookmarkStore::new();
  assert!(store.split_external().is_empty());
}

#[test]
fn test_set_language() -> Void {
  let mut store = BookmarkStore::new();
  store.load(&token(&["plain", "rcs.K.en"]))?;
  store.set_language("fr");
  assert_eq!(store.layer_ids(), ["plain", "rcs.K.fr"]);
  OK
}

#[test]
fn test_display_order() {
  let legend = [snapshot("l1"), snapshot("l2")];
  let configured = [snapshot("c1"), snapshot("c2")];
  assert_eq!(
    display_order(LegendMode::AutoPopulate, &legend, &configured),
    &legend
  );
  assert_eq!(
    display_order(LegendMode::Structured, &legend, &configured),
    &configured
  );
}
