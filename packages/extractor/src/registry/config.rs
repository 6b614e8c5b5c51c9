//! Default parameter registry for NWS DWML forecasts.

use super::table::ParameterRegistry;
use super::types::ParameterKind;

/// Create a registry for the parameters found in NWS forecast products.
///
/// Textual and structured parameters (`weather`, `hazards`,
/// `wordedForecast`) have no series view and are left unregistered.
#[must_use]
pub fn create_dwml_registry() -> ParameterRegistry {
    let mut registry = ParameterRegistry::new();

    // Icon series
    registry.register("conditions-icon", ParameterKind::IconSeries);

    // Numeric series
    registry.register("temperature", ParameterKind::NumericSeries);
    registry.register("precipitation", ParameterKind::NumericSeries);
    registry.register("probability-of-precipitation", ParameterKind::NumericSeries);
    registry.register("wind-speed", ParameterKind::NumericSeries);
    registry.register("direction", ParameterKind::NumericSeries);
    registry.register("cloud-amount", ParameterKind::NumericSeries);
    registry.register("humidity", ParameterKind::NumericSeries);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dwml_registry_icon_tags() {
        let registry = create_dwml_registry();
        assert_eq!(
            registry.kind_for("conditions-icon"),
            Some(ParameterKind::IconSeries)
        );
    }

    #[test]
    fn test_dwml_registry_numeric_tags() {
        let registry = create_dwml_registry();
        for tag in ["temperature", "probability-of-precipitation", "wind-speed", "humidity"] {
            assert_eq!(
                registry.kind_for(tag),
                Some(ParameterKind::NumericSeries),
                "{tag} should be numeric"
            );
        }
    }

    #[test]
    fn test_dwml_registry_unmapped_tags() {
        let registry = create_dwml_registry();
        assert_eq!(registry.kind_for("hazard-conditions"), None);
        assert_eq!(registry.kind_for("weather"), None);
        assert_eq!(registry.kind_for("wordedForecast"), None);
    }
}
