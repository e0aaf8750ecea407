//! Core building blocks: run parameters and the post renderer. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod render;
