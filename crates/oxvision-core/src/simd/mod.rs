//! SIMD-multiversioned pixel loops
//!
//! The batch conversions here are compiled per target feature set
//! (AVX2, SSE4.1, NEON) and dispatched at runtime.

mod batch;

pub use batch::{gray8_to_f64_batch, luma_rgb8_batch, LUMA_B, LUMA_G, LUMA_R};
