//! baht-core: statement data model and locale converters shared by the parser crates

pub mod error;
pub mod locale;
pub mod model;

pub use error::FormatError;
pub use locale::{CalendarKind, convert_date, parse_amount, parse_time};
pub use model::{BankFormat, Polarity, StatementHeader, StatementResult, Transaction};
