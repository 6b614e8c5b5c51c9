//! Helpers for pulling elements, text and numbers out of a `roxmltree` tree.
//!
//! Tag comparisons use the local name only, so namespaced DWML documents
//! match the same way as plain ones.

use roxmltree::Node;

/// Find the first direct child element with the given local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use dwml_extractor::xml::first_child;
///
/// let doc = Document::parse("<location><point/><point/></location>").unwrap();
/// let location = doc.root_element();
///
/// assert!(first_child(location, "point").is_some());
/// assert!(first_child(location, "location-key").is_none());
/// ```
pub fn first_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Iterate direct child elements with the given local name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use dwml_extractor::xml::children_named;
///
/// let xml = "<temperature><name>Max</name><value>70</value><value>72</value></temperature>";
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(children_named(doc.root_element(), "value").count(), 2);
/// ```
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Iterate every descendant element (excluding `node` itself) with the given
/// local name, in document order.
///
/// This is the `getElementsByTagName` lookup the schema relies on.
pub fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

/// Iterate all element children, skipping text, comments and processing
/// instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Trimmed text content of a node, or an empty string.
pub fn node_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of the first child element named `tag`.
///
/// Returns `None` only when there is no such child; an empty child yields
/// `Some("")`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use dwml_extractor::xml::child_text;
///
/// let doc = Document::parse("<location><location-key> point1 </location-key></location>").unwrap();
/// let location = doc.root_element();
///
/// assert_eq!(child_text(location, "location-key").as_deref(), Some("point1"));
/// assert_eq!(child_text(location, "point"), None);
/// ```
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    first_child(node, tag).map(node_text)
}

/// Parse a decimal number the permissive way the format has always been
/// read: surrounding whitespace is ignored and anything unparsable, including
/// an absent value or a non-finite word such as `inf`, becomes `NaN`.
///
/// # Examples
/// ```
/// use dwml_extractor::xml::parse_float;
///
/// assert_eq!(parse_float(Some(" 38.99 ")), 38.99);
/// assert!(parse_float(Some("n/a")).is_nan());
/// assert!(parse_float(None).is_nan());
/// ```
pub fn parse_float(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_first_child_ignores_namespace_prefix() {
        let xml = r#"<d:data xmlns:d="urn:dwml"><d:location/></d:data>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(first_child(doc.root_element(), "location").is_some());
    }

    #[test]
    fn test_first_child_is_not_recursive() {
        let xml = "<data><parameters><temperature/></parameters></data>";
        let doc = Document::parse(xml).unwrap();
        assert!(first_child(doc.root_element(), "temperature").is_none());
    }

    #[test]
    fn test_descendants_named_excludes_self() {
        let xml = "<location><location><location-key>inner</location-key></location></location>";
        let doc = Document::parse(xml).unwrap();
        let found: Vec<_> = descendants_named(doc.root_element(), "location").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(child_text(found[0], "location-key").as_deref(), Some("inner"));
    }

    #[test]
    fn test_descendants_named_document_order() {
        let xml = r#"<data>
            <time-layout><layout-key>a</layout-key></time-layout>
            <group><time-layout><layout-key>b</layout-key></time-layout></group>
            <time-layout><layout-key>c</layout-key></time-layout>
        </data>"#;
        let doc = Document::parse(xml).unwrap();
        let keys: Vec<_> = descendants_named(doc.root_element(), "time-layout")
            .filter_map(|n| child_text(n, "layout-key"))
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_element_children_skips_text_and_comments() {
        let xml = "<parameters>text<!-- c --><temperature/>more<weather/></parameters>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(element_children(doc.root_element()).count(), 2);
    }

    #[test]
    fn test_child_text_empty_element() {
        let xml = "<location><location-key/></location>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(child_text(doc.root_element(), "location-key").as_deref(), Some(""));
    }

    #[test]
    fn test_parse_float_variants() {
        assert_eq!(parse_float(Some("72.5")), 72.5);
        assert_eq!(parse_float(Some("-97.1")), -97.1);
        assert_eq!(parse_float(Some("0")), 0.0);
        assert!(parse_float(Some("")).is_nan());
        assert!(parse_float(Some("12abc")).is_nan());
        assert!(parse_float(Some("inf")).is_nan());
        assert!(parse_float(Some("-Infinity")).is_nan());
        assert!(parse_float(Some("NaN")).is_nan());
        assert_eq!(parse_float(Some("1e3")), 1000.0);
    }
}
