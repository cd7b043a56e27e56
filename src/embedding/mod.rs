//! C6 support — the embedding side of the ML fallback: the swap-ready
//! `Embedder` trait, a local ONNX implementation, nearest-centroid scoring,
//! and the model download helper.

pub mod download;
pub mod fallback;
pub mod onnx;
pub mod traits;

pub use onnx::OnnxEmbedder;
pub use traits::Embedder;
