//! Minification capability

use crate::types::Html;

/// Byte-size reduction applied to fully composed content in production mode.
pub trait Compressor: Send + Sync {
    /// Compress in place
    fn compress(&self, content: &mut Html);
}

/// Leaves content untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCompressor;

impl Compressor for NoopCompressor {
    fn compress(&self, _content: &mut Html) {}
}
