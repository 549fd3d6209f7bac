//! Page Module
//! Read access to the hosting page and an in-memory page implementation.

use crate::render::MountPoints;
use std::collections::HashMap;

/// Read-only view of the page the histogram lives on.
pub trait PageAccessor {
    fn has_element(&self, element_id: &str) -> bool;

    /// Attribute value of an element; `None` when the element or the
    /// attribute does not exist.
    fn get_attribute(&self, element_id: &str, attr_name: &str) -> Option<String>;
}

/// Page held in memory as elements with string attributes.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    elements: HashMap<String, HashMap<String, String>>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element without attributes.
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.elements.entry(element_id.into()).or_default();
        self
    }

    /// Set an attribute, creating the element if needed.
    pub fn with_attribute(
        mut self,
        element_id: impl Into<String>,
        attr_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.elements
            .entry(element_id.into())
            .or_default()
            .insert(attr_name.into(), value.into());
        self
    }

    /// The histogram output page: a data-source element carrying `payload`
    /// and an empty render target.
    pub fn histogram_output(mounts: &MountPoints, payload: impl Into<String>) -> Self {
        Self::new()
            .with_attribute(&mounts.data_element, &mounts.data_attribute, payload)
            .with_element(&mounts.render_target)
    }
}

impl PageAccessor for StaticPage {
    fn has_element(&self, element_id: &str) -> bool {
        self.elements.contains_key(element_id)
    }

    fn get_attribute(&self, element_id: &str, attr_name: &str) -> Option<String> {
        self.elements.get(element_id)?.get(attr_name).cloned()
    }
}
