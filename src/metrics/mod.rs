//! # Rolling Metrics Module
//!
//! The computational core of a monitoring run: encode outcome labels to
//! numeric codes, then compute named scalar metrics over rolling time
//! windows anchored backward from the newest observation.
//!
//! ## Pipeline position
//!
//! Predictions come in from the model step with truth and predicted labels
//! side by side; this module produces the `(window, metric)` rows that the
//! report renders. Everything here is pure and synchronous: no retries, no
//! concurrency, no mutation of inputs.
//!
//! ## Error contract
//!
//! - `InvalidConfiguration`: empty metric list, non-positive period, or an
//!   unknown metric name
//! - `EmptyInput`: zero observation records, signaled instead of an empty
//!   table
//! - `UnknownLabel`: a truth/predicted label outside the declared mapping

pub mod error;
pub mod functions;
pub mod labels;
pub mod rolling;
pub mod types;

pub use error::MetricsError;
pub use functions::{Metric, MetricFn};
pub use labels::LabelMap;
pub use rolling::{overall_metrics, rolling_metrics};
pub use types::{EncodedObservation, MetricRow};
