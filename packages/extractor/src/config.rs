//! Schema constants and input validation.

use std::path::Path;

use crate::error::{DwmlError, Result};

/// Container of all forecast content.
pub const DATA_TAG: &str = "data";

/// A forecast point.
pub const LOCATION_TAG: &str = "location";

/// Key child of a `location`.
pub const LOCATION_KEY_TAG: &str = "location-key";

/// Coordinates child of a `location`.
pub const POINT_TAG: &str = "point";

/// Latitude attribute on `point`.
pub const LATITUDE_ATTR: &str = "latitude";

/// Longitude attribute on `point`.
pub const LONGITUDE_ATTR: &str = "longitude";

/// A set of valid-time intervals shared by one or more parameters.
pub const TIME_LAYOUT_TAG: &str = "time-layout";

/// Key child of a `time-layout`.
pub const LAYOUT_KEY_TAG: &str = "layout-key";

/// Attribute on `time-layout` naming its clock (e.g. "local").
pub const TIME_COORDINATE_ATTR: &str = "time-coordinate";

/// Interval start within a `time-layout`.
pub const START_VALID_TIME_TAG: &str = "start-valid-time";

/// Interval end within a `time-layout`.
pub const END_VALID_TIME_TAG: &str = "end-valid-time";

/// Group of parameters sharing a location.
pub const PARAMETERS_TAG: &str = "parameters";

/// Location reference on `parameters`.
pub const APPLICABLE_LOCATION_ATTR: &str = "applicable-location";

/// Time-layout reference on a parameter element.
pub const TIME_LAYOUT_ATTR: &str = "time-layout";

/// Parameter sub-type (e.g. "maximum", "hourly").
pub const TYPE_ATTR: &str = "type";

/// Units of a numeric parameter.
pub const UNITS_ATTR: &str = "units";

/// Human-readable parameter name.
pub const NAME_TAG: &str = "name";

/// One numeric sample.
pub const VALUE_TAG: &str = "value";

/// One condition icon URL.
pub const ICON_LINK_TAG: &str = "icon-link";

/// Separator of the `k-period-times-seq` layout key convention.
pub const LAYOUT_KEY_SEPARATOR: char = '-';

/// Validate that an input path points to a readable file.
///
/// # Arguments
/// * `path` - Path given on the command line
///
/// # Returns
/// * `Ok(())` if the path exists and is a regular file
/// * `Err(DwmlError::Io)` otherwise
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DwmlError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(DwmlError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a file: {}", path.display()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_input_path_missing() {
        let dir = tempdir().unwrap();
        let err = validate_input_path(&dir.path().join("nope.xml")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_input_path_directory() {
        let dir = tempdir().unwrap();
        let err = validate_input_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_validate_input_path_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forecast.xml");
        std::fs::write(&path, "<dwml/>").unwrap();
        assert!(validate_input_path(&path).is_ok());
    }
}
