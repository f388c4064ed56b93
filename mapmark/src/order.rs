//! Display-order selection for the assembler
//! 组装器的显示顺序选择

use mapmark_codec::LayerSnapshot;

/// Legend population mode of the session
/// 会话的图例填充模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
  /// Legend mirrors the layer list; its current order is authoritative
  /// 图例镜像图层列表；其当前顺序为权威顺序
  AutoPopulate,
  /// Authored legend; the raw configured order is authoritative
  /// 人工编排图例；原始配置顺序为权威顺序
  Structured,
}

/// Pick the slice the assembler consumes
/// 选择组装器消费的切片
#[inline]
pub fn display_order<'a>(
  mode: LegendMode,
  legend: &'a [LayerSnapshot],
  configured: &'a [LayerSnapshot],
) -> &'a [LayerSnapshot] {
  match mode {
    LegendMode::AutoPopulate => legend,
    LegendMode::Structured => configured,
  }
}
