//! Opacity quantizer, 7-bit percent
//! 不透明度量化器，7 位百分比

use bitstr::{decode_uint, encode_uint};

use crate::{consts::OPACITY_BITS, error::R};

/// Quantize a [0,1] opacity to the nearest percent for the 7-bit field.
/// Lossy by half a percent at most.
/// 将 [0,1] 不透明度量化到最近的百分比以适配 7 位字段。最多损失 0.5%。
#[inline]
pub fn encode_opacity(v: f64) -> String {
  encode_uint((v * 100.0).round() as u32, OPACITY_BITS)
}

/// Inverse, at 1/100 resolution
/// 逆运算，精度 1/100
#[inline]
pub fn decode_opacity(bits: &str) -> R<f64> {
  Ok(decode_uint(bits)? as f64 / 100.0)
}
