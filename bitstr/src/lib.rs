#![cfg_attr(docsrs, feature(doc_cfg))]

//! Binary digit string primitives
//! 二进制数字字符串原语

mod boolean;
mod error;
mod hex;
mod uint;

pub use boolean::{decode_bool, encode_bool};
pub use error::{E, R};
pub use hex::{bin_to_hex, hex_to_bin};
pub use uint::{decode_uint, encode_uint};
