//! # section-nav
//!
//! Toggles which page section is visible from clicks on navigation items.
//!
//! ## Overview
//!
//! A page carries navigation items (`.nav-item` by default) and content sections (`.section`).
//! Each navigation item names the section it shows through a data attribute (`data-section`).
//! Activating a section id adds the marker class (`active`) to the matching section and to the
//! nav items pointing at it, and removes it from every other captured element.
//!
//! Elements are captured once, when the activator is installed. Activation with an id that no
//! section carries is a no-op sweep that leaves everything inactive, never an error.
//!
//! ## Architecture
//!
//! - **[`page`]**: `PageDocument` / `PageElement`, the host seam (browser DOM or in-memory)
//! - **[`snapshot`]**: the captured `Section` and `NavItem` collections
//! - **[`activator`]**: `SectionActivator` and the `ClickBindings` handler table
//! - **[`static_page`]**: an in-memory page loadable from TOML or JSON
//! - **[`selector`]**: compound selectors for the in-memory page
//! - **[`config`]**: `NavConfig`, loaded from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use section_nav::{
//!     activator::SectionActivator,
//!     config::NavConfig,
//!     static_page::{ElementData, StaticPage},
//! };
//!
//! # fn main() -> Result<(), section_nav::NavError> {
//! let mut page = StaticPage::new();
//! for id in ["home", "about"] {
//!     page.append(ElementData::new("a").with_class("nav-item").with_attribute("data-section", id));
//!     page.append(ElementData::new("section").with_id(id).with_class("section"));
//! }
//!
//! let (activator, bindings) = SectionActivator::install(&page, &NavConfig::default())?;
//!
//! activator.activate("about");
//! assert_eq!(activator.active_section(), Some("about"));
//!
//! // Clicking the first nav item goes back home
//! bindings.dispatch(0, &activator);
//! assert_eq!(activator.active_section(), Some("home"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **default**: activation core and in-memory pages
//! - **wasm**: browser binding (`SectionNav`) over `web-sys`
//! - **bin**: the `secnav` CLI
//! - **service**: `secnav serve`, a static file server for local development

pub mod activator;
pub mod config;
pub mod error;
pub mod page;
pub mod selector;
#[cfg(all(feature = "service", not(target_arch = "wasm32")))]
pub mod serve;
pub mod snapshot;
pub mod static_page;
#[cfg(test)]
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::*;
