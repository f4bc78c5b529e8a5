//! Clonable type-erased values.
//!
//! `DrawBox` owns a value of any drawable type and copies it on clone, so a
//! `Document` of mixed entries behaves like a plain value: copying a document
//! copies every entry, and a document can hold (a copy of) another document.

mod document;
mod draw;

pub use document::Document;
pub use draw::{Draw, DrawBox, pad};
