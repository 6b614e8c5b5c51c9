//! View over a `location` element.

use std::cell::OnceCell;
use std::fmt;

use roxmltree::Node;

use crate::config::{LATITUDE_ATTR, LOCATION_KEY_TAG, LONGITUDE_ATTR, POINT_TAG};
use crate::types::Point;
use crate::xml::{child_text, first_child, parse_float};

/// A forecast location, identified by its `location-key`.
pub struct Location<'a, 'input> {
    node: Node<'a, 'input>,
    key: OnceCell<Option<String>>,
    point: OnceCell<Option<Point>>,
}

impl<'a, 'input> Location<'a, 'input> {
    /// Wrap a `location` element.
    #[must_use]
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self {
            node,
            key: OnceCell::new(),
            point: OnceCell::new(),
        }
    }

    /// The underlying element.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// Text of the `location-key` child, if present.
    pub fn location_key(&self) -> Option<&str> {
        self.key
            .get_or_init(|| child_text(self.node, LOCATION_KEY_TAG))
            .as_deref()
    }

    /// Coordinates from the first `point` child.
    ///
    /// A location without a `point` has no point. A `point` whose
    /// coordinates are missing or malformed still yields a point, with `NaN`
    /// in the affected fields.
    pub fn point(&self) -> Option<Point> {
        *self.point.get_or_init(|| {
            first_child(self.node, POINT_TAG).map(|point| Point {
                latitude: parse_float(point.attribute(LATITUDE_ATTR)),
                longitude: parse_float(point.attribute(LONGITUDE_ATTR)),
            })
        })
    }
}

impl fmt::Debug for Location<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("key", &self.location_key())
            .field("point", &self.point())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_location_key_and_point() {
        let xml = r#"<location>
            <location-key>point1</location-key>
            <point latitude="38.99" longitude="-77.01"/>
        </location>"#;
        let doc = Document::parse(xml).unwrap();
        let location = Location::new(doc.root_element());

        assert_eq!(location.location_key(), Some("point1"));
        assert_eq!(
            location.point(),
            Some(Point {
                latitude: 38.99,
                longitude: -77.01
            })
        );
    }

    #[test]
    fn test_location_without_point() {
        let xml = "<location><location-key>point1</location-key></location>";
        let doc = Document::parse(xml).unwrap();
        let location = Location::new(doc.root_element());

        assert_eq!(location.point(), None);
    }

    #[test]
    fn test_location_without_key() {
        let xml = r#"<location><point latitude="1" longitude="2"/></location>"#;
        let doc = Document::parse(xml).unwrap();
        let location = Location::new(doc.root_element());

        assert_eq!(location.location_key(), None);
        assert!(location.point().is_some());
    }

    #[test]
    fn test_location_malformed_coordinates_are_nan() {
        let xml = r#"<location><point latitude="north" /></location>"#;
        let doc = Document::parse(xml).unwrap();
        let point = Location::new(doc.root_element()).point().unwrap();

        assert!(point.latitude.is_nan());
        assert!(point.longitude.is_nan());
    }

    #[test]
    fn test_location_uses_first_point() {
        let xml = r#"<location>
            <point latitude="1" longitude="2"/>
            <point latitude="3" longitude="4"/>
        </location>"#;
        let doc = Document::parse(xml).unwrap();
        let point = Location::new(doc.root_element()).point().unwrap();

        assert_eq!(point.latitude, 1.0);
        assert_eq!(point.longitude, 2.0);
    }

    #[test]
    fn test_location_key_is_memoized() {
        let xml = "<location><location-key>k</location-key></location>";
        let doc = Document::parse(xml).unwrap();
        let location = Location::new(doc.root_element());

        let first = location.location_key().unwrap().as_ptr();
        let second = location.location_key().unwrap().as_ptr();
        assert_eq!(first, second);
    }
}
