//! The top-level view over a DWML document.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use roxmltree::Node;

use crate::config::{DATA_TAG, LOCATION_TAG, PARAMETERS_TAG, TIME_LAYOUT_TAG};
use crate::error::{DwmlError, Result};
use crate::location::Location;
use crate::parameter::{Parameter, ParameterBase};
use crate::registry::{create_dwml_registry, ParameterRegistry};
use crate::time_layout::TimeLayout;
use crate::xml::{descendants_named, element_children};

/// Locations indexed by `location-key`.
pub type LocationMap<'a, 'input> = BTreeMap<String, Rc<Location<'a, 'input>>>;

/// Time layouts indexed by `layout-key`.
pub type TimeLayoutMap<'a, 'input> = BTreeMap<String, Rc<TimeLayout<'a, 'input>>>;

/// A parsed DWML forecast.
///
/// Borrows the parsed tree and builds its registries and parameter views the
/// first time they are asked for.
pub struct Forecast<'a, 'input> {
    data: Node<'a, 'input>,
    registry: ParameterRegistry,
    locations: OnceCell<LocationMap<'a, 'input>>,
    time_layouts: OnceCell<TimeLayoutMap<'a, 'input>>,
    parameters: OnceCell<Vec<Parameter<'a, 'input>>>,
}

impl<'a, 'input> Forecast<'a, 'input> {
    /// Wrap a parsed tree using the default NWS parameter registry.
    ///
    /// # Errors
    /// `DwmlError::MissingElement` if the tree has no `data` element.
    ///
    /// # Examples
    /// ```
    /// use dwml_extractor::Forecast;
    ///
    /// let tree = roxmltree::Document::parse("<dwml><data/></dwml>").unwrap();
    /// let forecast = Forecast::new(&tree).unwrap();
    /// assert!(forecast.parameters().is_empty());
    ///
    /// let tree = roxmltree::Document::parse("<dwml><head/></dwml>").unwrap();
    /// assert!(Forecast::new(&tree).is_err());
    /// ```
    pub fn new(tree: &'a roxmltree::Document<'input>) -> Result<Self> {
        Self::with_registry(tree, create_dwml_registry())
    }

    /// Wrap a parsed tree using a custom parameter registry.
    pub fn with_registry(
        tree: &'a roxmltree::Document<'input>,
        registry: ParameterRegistry,
    ) -> Result<Self> {
        let data = tree
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == DATA_TAG)
            .ok_or_else(|| DwmlError::MissingElement {
                element: DATA_TAG.to_string(),
                context: tree.root_element().tag_name().name().to_string(),
            })?;

        Ok(Self {
            data,
            registry,
            locations: OnceCell::new(),
            time_layouts: OnceCell::new(),
            parameters: OnceCell::new(),
        })
    }

    /// The `data` element everything is read from.
    #[must_use]
    pub fn data(&self) -> Node<'a, 'input> {
        self.data
    }

    /// The dispatch table used to enumerate parameters.
    #[must_use]
    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// Every keyed `location`, last occurrence winning on duplicate keys.
    pub fn locations(&self) -> &LocationMap<'a, 'input> {
        self.locations.get_or_init(|| {
            let mut map = LocationMap::new();
            for node in descendants_named(self.data, LOCATION_TAG) {
                let location = Location::new(node);
                let Some(key) = location.location_key().map(String::from) else {
                    tracing::trace!("Skipping location without location-key");
                    continue;
                };
                if map.insert(key.clone(), Rc::new(location)).is_some() {
                    tracing::debug!(
                        location_key = %key,
                        "Duplicate location key, keeping the later one"
                    );
                }
            }
            tracing::debug!(count = map.len(), "Indexed locations");
            map
        })
    }

    /// Every keyed `time-layout`, last occurrence winning on duplicate keys.
    pub fn time_layouts(&self) -> &TimeLayoutMap<'a, 'input> {
        self.time_layouts.get_or_init(|| {
            let mut map = TimeLayoutMap::new();
            for node in descendants_named(self.data, TIME_LAYOUT_TAG) {
                let layout = TimeLayout::new(node);
                let Some(key) = layout.layout_key().map(String::from) else {
                    tracing::trace!("Skipping time-layout without layout-key");
                    continue;
                };
                if map.insert(key.clone(), Rc::new(layout)).is_some() {
                    tracing::debug!(
                        layout_key = %key,
                        "Duplicate layout key, keeping the later one"
                    );
                }
            }
            tracing::debug!(count = map.len(), "Indexed time layouts");
            map
        })
    }

    /// Look up a location by key.
    #[must_use]
    pub fn location(&self, key: &str) -> Option<&Location<'a, 'input>> {
        self.locations().get(key).map(Rc::as_ref)
    }

    /// Look up a time layout by key.
    #[must_use]
    pub fn time_layout(&self, key: &str) -> Option<&TimeLayout<'a, 'input>> {
        self.time_layouts().get(key).map(Rc::as_ref)
    }

    /// Views over every registered parameter element, in document order.
    ///
    /// Direct children of each `parameters` block are dispatched on their tag
    /// name; unregistered tags produce no view.
    pub fn parameters(&self) -> &[Parameter<'a, 'input>] {
        self.parameters.get_or_init(|| {
            let locations = self.locations();
            let time_layouts = self.time_layouts();
            let mut parameters = Vec::new();

            for block in descendants_named(self.data, PARAMETERS_TAG) {
                for node in element_children(block) {
                    let Some(kind) = self.registry.kind_of(node) else {
                        tracing::trace!(
                            element = node.tag_name().name(),
                            "Skipping unmapped element"
                        );
                        continue;
                    };
                    let base = ParameterBase::resolve(block, node, locations, time_layouts);
                    parameters.push(Parameter::new(kind, base));
                }
            }

            tracing::debug!(count = parameters.len(), "Enumerated parameters");
            parameters
        })
    }
}

impl fmt::Debug for Forecast<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forecast")
            .field("locations_indexed", &self.locations.get().map(BTreeMap::len))
            .field("time_layouts_indexed", &self.time_layouts.get().map(BTreeMap::len))
            .field("parameters_enumerated", &self.parameters.get().map(Vec::len))
            .finish()
    }
}
