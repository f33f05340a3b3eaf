//! Buffer abstraction layer
//!
//! The seam between the jump engine and the host document model. The engine
//! only ever reads line text; storage may be a gap buffer, rope, or piece
//! table. Chunked access mirrors what those structures hand out natively.
//!
//! All columns derived from this view are code-point indices, not bytes and
//! not grapheme clusters.

/// Read-only view of the host document.
pub trait BufferView {
    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Contents of `line` without the trailing newline, as an iterator over
    /// byte slices. Chunks are contiguous in the underlying storage.
    fn line_bytes(&self, line: usize) -> impl Iterator<Item = &[u8]> + '_;
}

/// Materialize one line into a contiguous string.
pub fn line_text<V: BufferView + ?Sized>(view: &V, line: usize) -> String {
    let mut bytes = Vec::new();
    for chunk in view.line_bytes(line) {
        bytes.extend_from_slice(chunk);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
