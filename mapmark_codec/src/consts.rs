//! Wire format constants
//! 线格式常量

/// Retired first format version, recognized only to be rejected
/// 已退役的第一版格式，仅被识别并拒绝
pub const VERSION_RETIRED: &str = "A";

/// Current format version
/// 当前格式版本
pub const VERSION_CURRENT: &str = "B";

/// Reserved basemap flag digit, appended on encode, stripped on decode
/// 保留的底图标志位，编码时追加，解码时剥离
pub const FLAG_DIGIT: char = '0';

/// Opacity field width, 0-100 percent
/// 不透明度字段宽度，0-100 百分比
pub const OPACITY_BITS: usize = 7;

/// Child entry index width
/// 子图层条目索引宽度
pub const INDEX_BITS: usize = 12;

/// Child count width
/// 子图层数量宽度
pub const COUNT_BITS: usize = 9;

/// Most children a layer can declare
/// 单个图层可声明的最大子图层数
pub const MAX_CHILDREN: usize = (1 << COUNT_BITS) - 1;

/// Hex digits per 24-bit child record
/// 每条 24 位子图层记录的十六进制位数
pub const CHILD_HEX: usize = 6;

/// Hex digits in the fixed 20-bit layer settings block
/// 固定 20 位图层设置块的十六进制位数
pub const SETTINGS_HEX: usize = 5;
