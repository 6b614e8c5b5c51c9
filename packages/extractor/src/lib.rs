//! DWML Extractor - Read NWS Digital Weather Markup Language forecasts.
//!
//! DWML links its pieces together with string keys: each `parameters` block
//! names a location by `applicable-location`, and each parameter names its
//! time layout by `time-layout`. This crate wraps a parsed `roxmltree` tree
//! in lazily evaluated views that resolve those keys and pair every value
//! with its valid-time interval.
//!
//! # Example
//!
//! ```
//! use dwml_extractor::Forecast;
//!
//! let xml = r#"<dwml><data>
//!   <location><location-key>point1</location-key><point latitude="38.99" longitude="-77.01"/></location>
//!   <time-layout time-coordinate="local">
//!     <layout-key>k-p24h-n2-1</layout-key>
//!     <start-valid-time>2024-01-15T07:00:00-05:00</start-valid-time>
//!     <start-valid-time>2024-01-16T07:00:00-05:00</start-valid-time>
//!   </time-layout>
//!   <parameters applicable-location="point1">
//!     <temperature type="maximum" units="Fahrenheit" time-layout="k-p24h-n2-1">
//!       <value>72.5</value><value>68.0</value>
//!     </temperature>
//!   </parameters>
//! </data></dwml>"#;
//!
//! let tree = roxmltree::Document::parse(xml).unwrap();
//! let forecast = Forecast::new(&tree).unwrap();
//!
//! let temperature = forecast.parameters()[0].as_numeric().unwrap();
//! let series = temperature.series().unwrap();
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].value, 72.5);
//! assert_eq!(series[0].time.start_offset_seconds, -5 * 3600);
//! ```
//!
//! # Architecture
//!
//! - [`document`]: The `Forecast` container and its key-indexed registries
//! - [`location`]: `location` views
//! - [`time_layout`]: `time-layout` views and layout-key parsing
//! - [`parameter`]: Icon and numeric parameter views
//! - [`registry`]: Tag-name dispatch for parameter elements
//! - [`summary`]: Owned, serializable summaries
//! - [`extract`]: File and JSON entry points
//! - [`types`]: Plain value types
//! - [`xml`]: XML utilities
//! - [`config`]: Schema constants and input validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod location;
pub mod parameter;
pub mod registry;
pub mod summary;
pub mod time_layout;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use document::Forecast;
pub use error::{DwmlError, Result, TimestampError};
pub use extract::{extract_file, extract_str, read_input, to_json, write_json};
pub use parameter::{IconSeriesParameter, NumericSeriesParameter, Parameter};
pub use registry::{create_dwml_registry, ParameterKind, ParameterRegistry};
pub use summary::{summarize, ForecastSummary, ParameterSummary};
pub use types::{IconEntry, NumericEntry, ParsedLayoutKey, Point, ValidTimeInterval};
