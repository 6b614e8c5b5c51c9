//! Types for the parameter registry.

/// How a parameter element carries its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// A list of `icon-link` URLs (conditions-icon).
    IconSeries,
    /// A list of `value` numbers with a `units` attribute (temperature, pop).
    NumericSeries,
}

impl ParameterKind {
    /// Name used in logs and summaries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IconSeries => "icon-series",
            Self::NumericSeries => "numeric-series",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_kind_as_str() {
        assert_eq!(ParameterKind::IconSeries.as_str(), "icon-series");
        assert_eq!(ParameterKind::NumericSeries.as_str(), "numeric-series");
    }
}
