//! Views over forecast parameter elements.
//!
//! A parameter element (e.g. `<temperature type="maximum" time-layout="k-p24h-n7-1">`)
//! sits inside a `parameters` block whose `applicable-location` names the
//! location it belongs to. Both references are resolved once, when the view
//! is built, against the registries of the owning [`Forecast`].
//!
//! [`Forecast`]: crate::document::Forecast

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use roxmltree::Node;

use crate::config::{
    APPLICABLE_LOCATION_ATTR, ICON_LINK_TAG, NAME_TAG, TIME_LAYOUT_ATTR, TYPE_ATTR, UNITS_ATTR,
    VALUE_TAG,
};
use crate::document::{LocationMap, TimeLayoutMap};
use crate::error::TimestampError;
use crate::location::Location;
use crate::registry::ParameterKind;
use crate::time_layout::TimeLayout;
use crate::types::{IconEntry, NumericEntry, ValidTimeInterval};
use crate::xml::{child_text, children_named, node_text, parse_float};

/// Fields shared by every parameter view.
pub struct ParameterBase<'a, 'input> {
    node: Node<'a, 'input>,
    location_key: Option<&'a str>,
    time_layout_key: Option<&'a str>,
    location: Option<Rc<Location<'a, 'input>>>,
    time_layout: Option<Rc<TimeLayout<'a, 'input>>>,
    name: OnceCell<Option<String>>,
}

impl<'a, 'input> ParameterBase<'a, 'input> {
    /// Read the reference keys and resolve them against the registries.
    ///
    /// A key that matches no registry entry leaves the reference unresolved.
    pub fn resolve(
        parameters: Node<'a, 'input>,
        node: Node<'a, 'input>,
        locations: &LocationMap<'a, 'input>,
        time_layouts: &TimeLayoutMap<'a, 'input>,
    ) -> Self {
        let location_key = parameters.attribute(APPLICABLE_LOCATION_ATTR);
        let time_layout_key = node.attribute(TIME_LAYOUT_ATTR);

        let location = location_key.and_then(|key| locations.get(key).cloned());
        let time_layout = time_layout_key.and_then(|key| time_layouts.get(key).cloned());

        if let (Some(key), None) = (location_key, &location) {
            tracing::debug!(
                element = node.tag_name().name(),
                location_key = key,
                "Unresolved location reference"
            );
        }
        if let (Some(key), None) = (time_layout_key, &time_layout) {
            tracing::debug!(
                element = node.tag_name().name(),
                time_layout_key = key,
                "Unresolved time-layout reference"
            );
        }

        Self {
            node,
            location_key,
            time_layout_key,
            location,
            time_layout,
            name: OnceCell::new(),
        }
    }

    /// The underlying element.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// Tag name of the parameter element.
    #[must_use]
    pub fn element_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// Text of the first `name` child.
    pub fn name(&self) -> Option<&str> {
        self.name
            .get_or_init(|| child_text(self.node, NAME_TAG))
            .as_deref()
    }

    /// The `type` attribute.
    #[must_use]
    pub fn parameter_type(&self) -> Option<&'a str> {
        self.node.attribute(TYPE_ATTR)
    }

    /// `applicable-location` of the enclosing `parameters` element.
    #[must_use]
    pub fn location_key(&self) -> Option<&'a str> {
        self.location_key
    }

    /// `time-layout` attribute of this element.
    #[must_use]
    pub fn time_layout_key(&self) -> Option<&'a str> {
        self.time_layout_key
    }

    /// The location this parameter applies to, if the key resolved.
    #[must_use]
    pub fn location(&self) -> Option<&Location<'a, 'input>> {
        self.location.as_deref()
    }

    /// The time layout of this parameter, if the key resolved.
    #[must_use]
    pub fn time_layout(&self) -> Option<&TimeLayout<'a, 'input>> {
        self.time_layout.as_deref()
    }

    /// Valid times to pair raw values with; empty without a resolved layout.
    fn paired_times(&self) -> Result<&[ValidTimeInterval], TimestampError> {
        match self.time_layout() {
            Some(layout) => layout.valid_times(),
            None => Ok(&[]),
        }
    }
}

impl fmt::Debug for ParameterBase<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterBase")
            .field("element_name", &self.element_name())
            .field("location_key", &self.location_key)
            .field("time_layout_key", &self.time_layout_key)
            .field("location_resolved", &self.location.is_some())
            .field("time_layout_resolved", &self.time_layout.is_some())
            .finish()
    }
}

/// A parameter carrying condition icon URLs.
#[derive(Debug)]
pub struct IconSeriesParameter<'a, 'input> {
    base: ParameterBase<'a, 'input>,
    icon_urls: OnceCell<Vec<String>>,
}

impl<'a, 'input> IconSeriesParameter<'a, 'input> {
    #[must_use]
    pub fn new(base: ParameterBase<'a, 'input>) -> Self {
        Self {
            base,
            icon_urls: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &ParameterBase<'a, 'input> {
        &self.base
    }

    /// Text of every `icon-link` child, in document order.
    ///
    /// Empty links are kept so positions stay aligned with the layout.
    pub fn icon_urls(&self) -> &[String] {
        self.icon_urls.get_or_init(|| {
            children_named(self.base.node, ICON_LINK_TAG)
                .map(node_text)
                .collect()
        })
    }

    /// Icon URLs paired by position with the layout's valid times.
    pub fn series(&self) -> Result<Vec<IconEntry<'_>>, TimestampError> {
        let times = self.base.paired_times()?;
        Ok(times
            .iter()
            .zip(self.icon_urls())
            .map(|(time, url)| IconEntry { time, url })
            .collect())
    }
}

/// A parameter carrying numeric values.
#[derive(Debug)]
pub struct NumericSeriesParameter<'a, 'input> {
    base: ParameterBase<'a, 'input>,
    values: OnceCell<Vec<f64>>,
}

impl<'a, 'input> NumericSeriesParameter<'a, 'input> {
    #[must_use]
    pub fn new(base: ParameterBase<'a, 'input>) -> Self {
        Self {
            base,
            values: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &ParameterBase<'a, 'input> {
        &self.base
    }

    /// The `units` attribute.
    #[must_use]
    pub fn units(&self) -> Option<&'a str> {
        self.base.node.attribute(UNITS_ATTR)
    }

    /// Every `value` child as a number, in document order.
    ///
    /// Malformed or empty values (NWS writes `xsi:nil="true"` for missing
    /// data) become `NaN` rather than being dropped.
    pub fn values(&self) -> &[f64] {
        self.values.get_or_init(|| {
            children_named(self.base.node, VALUE_TAG)
                .map(|value| parse_float(value.text()))
                .collect()
        })
    }

    /// Values paired by position with the layout's valid times.
    pub fn series(&self) -> Result<Vec<NumericEntry<'_>>, TimestampError> {
        let times = self.base.paired_times()?;
        Ok(times
            .iter()
            .zip(self.values())
            .map(|(time, &value)| NumericEntry { time, value })
            .collect())
    }
}

/// A forecast parameter, dispatched on its element name.
#[derive(Debug)]
pub enum Parameter<'a, 'input> {
    Icon(IconSeriesParameter<'a, 'input>),
    Numeric(NumericSeriesParameter<'a, 'input>),
}

impl<'a, 'input> Parameter<'a, 'input> {
    /// Wrap a resolved base in the view for `kind`.
    #[must_use]
    pub fn new(kind: ParameterKind, base: ParameterBase<'a, 'input>) -> Self {
        match kind {
            ParameterKind::IconSeries => Self::Icon(IconSeriesParameter::new(base)),
            ParameterKind::NumericSeries => Self::Numeric(NumericSeriesParameter::new(base)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Icon(_) => ParameterKind::IconSeries,
            Self::Numeric(_) => ParameterKind::NumericSeries,
        }
    }

    #[must_use]
    pub fn base(&self) -> &ParameterBase<'a, 'input> {
        match self {
            Self::Icon(p) => p.base(),
            Self::Numeric(p) => p.base(),
        }
    }

    #[must_use]
    pub fn element_name(&self) -> &'a str {
        self.base().element_name()
    }

    pub fn name(&self) -> Option<&str> {
        self.base().name()
    }

    #[must_use]
    pub fn parameter_type(&self) -> Option<&'a str> {
        self.base().parameter_type()
    }

    #[must_use]
    pub fn location_key(&self) -> Option<&'a str> {
        self.base().location_key()
    }

    #[must_use]
    pub fn time_layout_key(&self) -> Option<&'a str> {
        self.base().time_layout_key()
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location<'a, 'input>> {
        self.base().location()
    }

    #[must_use]
    pub fn time_layout(&self) -> Option<&TimeLayout<'a, 'input>> {
        self.base().time_layout()
    }

    /// Units of a numeric parameter; icon series have none.
    #[must_use]
    pub fn units(&self) -> Option<&'a str> {
        match self {
            Self::Icon(_) => None,
            Self::Numeric(p) => p.units(),
        }
    }

    /// Number of raw values or links, before pairing.
    pub fn raw_len(&self) -> usize {
        match self {
            Self::Icon(p) => p.icon_urls().len(),
            Self::Numeric(p) => p.values().len(),
        }
    }

    #[must_use]
    pub fn as_icon(&self) -> Option<&IconSeriesParameter<'a, 'input>> {
        match self {
            Self::Icon(p) => Some(p),
            Self::Numeric(_) => None,
        }
    }

    #[must_use]
    pub fn as_numeric(&self) -> Option<&NumericSeriesParameter<'a, 'input>> {
        match self {
            Self::Numeric(p) => Some(p),
            Self::Icon(_) => None,
        }
    }
}
