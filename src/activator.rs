//! Section activation and click wiring.
//!
//! [`SectionActivator::activate`] is a full sweep: every captured section and nav item has its
//! marker recomputed from the requested id alone, so the result never depends on earlier calls.
//! An id that matches nothing leaves every element inactive; it is not an error.
//!
//! [`ClickBindings`] is the explicit table from a nav item (by capture index) to the activation
//! it triggers. It is built once per snapshot and never rebuilt.

use std::cell::Cell;

use crate::{
    config::NavConfig,
    error::NavError,
    page::{PageDocument, PageElement},
    snapshot::{ActivationState, ElementState, Snapshot},
};

#[derive(Debug, Clone)]
pub struct SectionActivator<E> {
    snapshot: Snapshot<E>,
    active_class: String,
}

impl<E: PageElement> SectionActivator<E> {
    pub fn new(snapshot: Snapshot<E>, active_class: impl Into<String>) -> Self {
        SectionActivator {
            snapshot,
            active_class: active_class.into(),
        }
    }

    /// Captures `document` with `config` and builds the activator and its bindings.
    pub fn install<D>(
        document: &D,
        config: &NavConfig,
    ) -> Result<(SectionActivator<E>, ClickBindings), NavError>
    where
        D: PageDocument<Element = E>,
    {
        config.validate()?;
        let snapshot = Snapshot::capture(document, config)?;
        let bindings = ClickBindings::for_snapshot(&snapshot);
        Ok((
            SectionActivator::new(snapshot, config.active_class.clone()),
            bindings,
        ))
    }

    /// Marks the section whose id equals `section_id`, and the nav items targeting it, active.
    /// Everything else captured is marked inactive.
    pub fn activate(&self, section_id: &str) {
        self.activate_target(Some(section_id));
    }

    /// General form used by click bindings.
    ///
    /// `None` is what a nav item without a target attribute activates: no section matches it,
    /// while every nav item that also lacks the attribute does.
    pub fn activate_target(&self, target: Option<&str>) {
        tracing::debug!("Activating section {:?}", target);
        let mut matched = 0usize;
        for section in &self.snapshot.sections {
            let on = target == Some(section.id.as_str());
            matched += on as usize;
            section.element.toggle_class(&self.active_class, on);
        }
        for item in &self.snapshot.nav_items {
            item.element
                .toggle_class(&self.active_class, item.section_id.as_deref() == target);
        }
        if matched == 0 {
            tracing::debug!("No captured section matches {:?}", target);
        }
    }

    /// Id of the first section currently carrying the marker.
    pub fn active_section(&self) -> Option<&str> {
        self.snapshot
            .sections
            .iter()
            .find(|section| section.element.has_class(&self.active_class))
            .map(|section| section.id.as_str())
    }

    pub fn state(&self) -> ActivationState {
        ActivationState {
            sections: self
                .snapshot
                .sections
                .iter()
                .map(|section| ElementState {
                    id: Some(section.id.clone()),
                    active: section.element.has_class(&self.active_class),
                })
                .collect(),
            nav_items: self
                .snapshot
                .nav_items
                .iter()
                .map(|item| ElementState {
                    id: item.section_id.clone(),
                    active: item.element.has_class(&self.active_class),
                })
                .collect(),
        }
    }
}

impl<E> SectionActivator<E> {
    pub fn snapshot(&self) -> &Snapshot<E> {
        &self.snapshot
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }
}

/// One nav item's bound activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub nav_index: usize,
    pub target: Option<String>,
}

/// Click handler table: one [`Binding`] per captured nav item, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickBindings {
    bindings: Vec<Binding>,
}

impl ClickBindings {
    pub fn for_snapshot<E>(snapshot: &Snapshot<E>) -> ClickBindings {
        ClickBindings {
            bindings: snapshot
                .nav_items
                .iter()
                .enumerate()
                .map(|(nav_index, item)| Binding {
                    nav_index,
                    target: item.section_id.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, nav_index: usize) -> Option<&Binding> {
        self.bindings.get(nav_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Runs the activation bound to `nav_index`. Returns `false` for an unknown index.
    pub fn dispatch<E: PageElement>(
        &self,
        nav_index: usize,
        activator: &SectionActivator<E>,
    ) -> bool {
        match self.get(nav_index) {
            Some(binding) => {
                tracing::debug!("Click on nav item {}", nav_index);
                activator.activate_target(binding.target.as_deref());
                true
            }
            None => {
                tracing::debug!("No binding for nav item {}", nav_index);
                false
            }
        }
    }
}

/// One-shot flag for wiring click handlers into a document.
///
/// Handlers are registered once per nav item; a second claim fails instead of stacking a second
/// listener on every element.
#[derive(Debug, Default)]
pub struct InstallGuard {
    installed: Cell<bool>,
}

impl InstallGuard {
    pub const fn new() -> Self {
        InstallGuard {
            installed: Cell::new(false),
        }
    }

    pub fn claim(&self) -> Result<(), NavError> {
        if self.installed.replace(true) {
            return Err(NavError::Dom(
                "click handlers are already installed for this document".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_claimed(&self) -> bool {
        self.installed.get()
    }
}
