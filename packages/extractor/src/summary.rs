//! Owned, serializable summary of a forecast.
//!
//! The views in this crate borrow the XML tree. A summary copies out what a
//! consumer needs (names, units, the resolved point and layout metadata, and
//! the paired series) so it can be serialized or kept after the tree is gone.

use serde::Serialize;

use crate::document::Forecast;
use crate::error::Result;
use crate::parameter::Parameter;
use crate::types::{ParsedLayoutKey, Point, ValidTimeInterval};

/// Summary of every parameter in a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub parameters: Vec<ParameterSummary>,
}

/// One parameter with its references resolved and its series paired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSummary {
    pub element_name: String,
    pub kind: &'static str,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub parameter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    pub location_key: Option<String>,
    pub time_layout_key: Option<String>,
    /// Point of the resolved location.
    pub point: Option<Point>,
    /// Parsed key of the resolved time layout.
    pub time_layout: Option<ParsedLayoutKey>,
    pub series: Vec<SeriesPoint>,
}

/// One paired entry of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub time: ValidTimeInterval,
    #[serde(flatten)]
    pub datum: SeriesDatum,
}

/// The payload of a series entry; serialized as a `value` or `url` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesDatum {
    Value(f64),
    Url(String),
}

impl ParameterSummary {
    /// Copy a parameter view into an owned summary.
    ///
    /// # Errors
    /// Fails if the resolved time layout has an unparsable valid time.
    pub fn from_parameter(parameter: &Parameter<'_, '_>) -> Result<Self> {
        let series = match parameter {
            Parameter::Icon(icons) => icons
                .series()?
                .into_iter()
                .map(|entry| SeriesPoint {
                    time: entry.time.clone(),
                    datum: SeriesDatum::Url(entry.url.to_string()),
                })
                .collect(),
            Parameter::Numeric(numbers) => numbers
                .series()?
                .into_iter()
                .map(|entry| SeriesPoint {
                    time: entry.time.clone(),
                    datum: SeriesDatum::Value(entry.value),
                })
                .collect(),
        };

        Ok(Self {
            element_name: parameter.element_name().to_string(),
            kind: parameter.kind().as_str(),
            name: parameter.name().map(String::from),
            parameter_type: parameter.parameter_type().map(String::from),
            units: parameter.units().map(String::from),
            location_key: parameter.location_key().map(String::from),
            time_layout_key: parameter.time_layout_key().map(String::from),
            point: parameter.location().and_then(|location| location.point()),
            time_layout: parameter
                .time_layout()
                .map(|layout| layout.parsed_key().clone()),
            series,
        })
    }
}

/// Summarize every parameter of a forecast, in document order.
///
/// # Errors
/// Fails on the first parameter whose time layout has an unparsable valid time.
pub fn summarize(forecast: &Forecast<'_, '_>) -> Result<ForecastSummary> {
    let parameters = forecast
        .parameters()
        .iter()
        .map(ParameterSummary::from_parameter)
        .collect::<Result<Vec<_>>>()?;

    Ok(ForecastSummary { parameters })
}
