// src/core/mod.rs

pub mod digits;
pub mod html;
pub mod net;

pub use digits::digits_from_class_tokens;
