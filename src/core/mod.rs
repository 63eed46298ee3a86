// Public modules
pub mod coefficients;
pub mod config;
pub mod error;
pub mod mapcss;
pub mod pending;
pub mod project;
pub mod rewrite;
pub mod scale;

// Re-export common types for convenience
pub use coefficients::CoefficientTable;
pub use config::ScaleOptions;
pub use error::{Error, ErrorCode, Result};
pub use mapcss::BoundaryMode;
pub use scale::{DocumentReport, ScaleReport, ScaleWarning};
