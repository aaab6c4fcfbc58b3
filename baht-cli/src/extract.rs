//! Document-to-text extraction.
//!
//! The parser only ever sees one text blob per statement. Pages are joined
//! with a form feed; whitespace normalization treats it like any other space.

use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Separator placed between pages when an extractor joins them.
pub const PAGE_SEPARATOR: &str = "\n\x0c\n";

pub trait TextExtractor: Send + Sync {
    /// Return the concatenated page text of the document at `path`.
    fn extract(&self, path: &Path, password: Option<&str>) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Reads text that was already extracted (`.txt`), e.g. by `pdftotext`.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path, password: Option<&str>) -> Result<String> {
        if password.is_some() {
            warn!(path = %path.display(), "password ignored for plain text input");
        }
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Decodes PDF statements, including password-protected ones.
#[cfg(feature = "pdf")]
pub struct PdfTextExtractor;

#[cfg(feature = "pdf")]
impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path, password: Option<&str>) -> Result<String> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let text = match password {
            Some(pw) => pdf_extract::extract_text_from_mem_encrypted(&bytes, pw),
            None => pdf_extract::extract_text_from_mem(&bytes),
        };
        text.map_err(|e| anyhow!("extract text from {}: {e}", path.display()))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

/// Pick an extractor by file extension.
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        #[cfg(feature = "pdf")]
        Some("pdf") => Ok(Box::new(PdfTextExtractor)),
        #[cfg(not(feature = "pdf"))]
        Some("pdf") => bail!(
            "{} is a PDF; rebuild with `--features pdf` or convert it to text first",
            path.display()
        ),
        _ => Ok(Box::new(PlainTextExtractor)),
    }
}

/// Extract on the blocking pool, bounded by `timeout` when given.
pub async fn extract_text(
    path: PathBuf,
    password: Option<String>,
    timeout: Option<Duration>,
) -> Result<String> {
    let extractor = extractor_for(&path)?;
    debug!(path = %path.display(), extractor = extractor.name(), "extracting text");

    let display = path.display().to_string();
    let job = tokio::task::spawn_blocking(move || extractor.extract(&path, password.as_deref()));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, job)
            .await
            .map_err(|_| anyhow!("extracting {display} took longer than {limit:?}"))?,
        None => job.await,
    };

    // a panic inside the decoder surfaces as a join error
    joined.map_err(|e| anyhow!("text extraction for {display} crashed: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("statement.txt");
        let text = format!("page one{PAGE_SEPARATOR}page two");
        fs::write(&p, &text).unwrap();

        let got = extract_text(p, None, Some(Duration::from_secs(5))).await.unwrap();
        assert_eq!(got, text);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text(dir.path().join("missing.txt"), None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_extractor_choice() {
        assert_eq!(extractor_for(Path::new("a.txt")).unwrap().name(), "text");
        assert_eq!(extractor_for(Path::new("noext")).unwrap().name(), "text");
        #[cfg(not(feature = "pdf"))]
        assert!(extractor_for(Path::new("a.PDF")).is_err());
        #[cfg(feature = "pdf")]
        assert_eq!(extractor_for(Path::new("a.PDF")).unwrap().name(), "pdf");
    }
}
