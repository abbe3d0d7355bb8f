pub mod error;
pub mod config;
pub mod timestamp;
pub mod parser;
pub mod stats;
pub mod grouping;
pub mod ranking;
pub mod temporal;
pub mod crosstab;
pub mod insights;
pub mod metrics;
pub mod aggregate;
pub mod source;

pub use aggregate::{aggregate, aggregate_with_opts, AggregationBundle};
pub use error::{AggregateError, ParseError};
