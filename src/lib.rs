#![allow(clippy::many_single_char_names)]

pub mod buffer;
pub mod camera;
pub mod error;
pub mod lighting;
pub mod logger;
pub mod material;
pub mod math;
pub mod object;
pub mod options;
pub mod pass;
