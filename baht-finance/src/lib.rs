//! baht-finance: income/expense classification via running-balance reconciliation,
//! the statement pipeline and statement totals

pub mod reconcile;
pub mod statement;
pub mod summary;

pub use reconcile::{ClassificationBasis, Classified, classify, reconcile};
pub use statement::{ClassifyOptions, StatementError, classify_statement, classify_statement_with};
pub use summary::StatementSummary;
