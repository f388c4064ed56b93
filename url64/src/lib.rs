#![cfg_attr(docsrs, feature(doc_cfg))]

//! URL-safe text transport
//! URL 安全文本传输

mod error;
mod text;
mod unescape;

pub use error::{E, R};
pub use text::{decode, encode};
pub use unescape::unescape;
