//! baht-ingest: statement text segmentation, bank-specific field extraction and header parsing.

pub mod detect;
pub mod error;
pub mod header;
pub mod keywords;
pub mod parsers;
pub mod profile;
pub mod segment;
pub mod types;

pub use detect::{DEFAULT_FORMAT, detect_format};
pub use error::IngestError;
pub use header::extract_header;
pub use parsers::{ExtractOutcome, extract_candidates};
pub use profile::{FormatProfile, ReconcileRule, StatementPatterns};
pub use segment::{normalize_text, segment};
pub use types::{RawTransactionCandidate, Span};
