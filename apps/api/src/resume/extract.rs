//! PDF text extraction — turns an uploaded résumé blob into plain text.

use tracing::warn;

/// Extracts raw text from PDF bytes held in memory.
///
/// Returns `None` when the document cannot be parsed or contains no
/// extractable text; callers surface that as an "empty document" rejection.
pub fn extract_text(document: &[u8]) -> Option<String> {
    let text = match pdf_extract::extract_text_from_mem(document) {
        Ok(t) => t,
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            return None;
        }
    };

    if text.trim().is_empty() {
        return None;
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_none() {
        assert!(extract_text(b"this is not a pdf").is_none());
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(extract_text(&[]).is_none());
    }
}
