//! Domain Layer - Core types for the cointegration pipeline
//!
//! Pure data types and validation with no statistics. Results are plain
//! values; nothing here holds state between calls.

pub mod error;
pub mod series;
pub mod result;
pub mod request;

pub use error::CointError;
pub use series::{PairedSeries, MIN_SERIES_LEN};
pub use result::{round2, CointegrationResult, CriticalValues, StationarityTestResult};
pub use request::{CointegrationRequest, SpreadRequest};
