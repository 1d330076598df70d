//! HTML report extraction from free-form model output
//!
//! Models often wrap the document in commentary or code fences. The
//! extractor keeps everything from the first `<!DOCTYPE html>` through the
//! last `</html>` that follows it, matched ASCII case-insensitively. Anything
//! without such a span is returned unchanged.

/// Opening token of the extraction span (compared lowercase)
const DOCTYPE_TOKEN: &str = "<!doctype html>";

/// Closing token of the extraction span (compared lowercase)
const CLOSING_TAG: &str = "</html>";

/// Result of scanning a response for an HTML document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction<'a> {
    /// A complete document span was found
    Document(&'a str),
    /// No span found; the input is passed through untouched
    Verbatim(&'a str),
}

impl<'a> Extraction<'a> {
    /// Text to persist
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Document(text) | Self::Verbatim(text) => text,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

/// Extract the HTML document span from a model response
///
/// Linear in the input length and never panics: ASCII lowercasing keeps
/// byte offsets intact, and both tokens are ASCII, so the span always
/// falls on char boundaries.
pub fn extract_report(response: &str) -> Extraction<'_> {
    let lowered = response.to_ascii_lowercase();

    let Some(start) = lowered.find(DOCTYPE_TOKEN) else {
        return Extraction::Verbatim(response);
    };

    match lowered[start..].rfind(CLOSING_TAG) {
        Some(offset) => {
            let end = start + offset + CLOSING_TAG.len();
            Extraction::Document(&response[start..end])
        }
        None => Extraction::Verbatim(response),
    }
}
