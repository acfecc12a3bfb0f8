// src/render/mod.rs

//! Turns `StateVector`s into text. This module contains the
//! `DrawerRegistry` dispatch surface and the built-in textual renderers
//! (`repr`, `text`, and the misty notation `mist`).
//!
//! Graphical renderings (Bloch spheres, qspheres, amplitude cities and
//! the like) belong to plotting libraries and are deliberately not
//! implemented here; callers attach such backends to a registry with
//! [`DrawerRegistry::register`] and dispatch to them by name.

mod mist;
mod text;

// Re-export the renderer entry points
pub use mist::{COEFFICIENT_DECIMALS, state_to_mist};
pub use text::state_to_text;

use crate::core::{MistError, StateVector};
use std::collections::BTreeMap;
use std::fmt;

/// A rendering backend: maps a state vector to its serialized form.
pub type Drawer = Box<dyn Fn(&StateVector) -> Result<String, MistError> + Send + Sync>;

/// String-keyed table of rendering backends.
///
/// Format names are matched case-insensitively. A fresh registry knows
/// the built-in textual renderers and uses `repr` as its default format;
/// both the table and the default can be changed by the caller, so one
/// registry value captures a complete rendering configuration.
pub struct DrawerRegistry {
    /// Registered renderers, keyed by lowercased format name. A `BTreeMap`
    /// keeps `formats()` and error messages in deterministic order.
    drawers: BTreeMap<String, Drawer>,
    /// Format used when `draw` is called without an explicit name.
    default_format: String,
}

impl DrawerRegistry {
    /// Creates a registry with the built-in textual renderers registered
    /// and `repr` selected as the default format.
    pub fn new() -> Self {
        let mut registry = Self {
            drawers: BTreeMap::new(),
            default_format: "repr".to_string(),
        };
        registry.register("repr", Box::new(|state: &StateVector| Ok(state.to_string())));
        registry.register("text", Box::new(state_to_text));
        registry.register("mist", Box::new(state_to_mist));
        registry
    }

    /// Adds a renderer under `name`, replacing any previous entry with
    /// that name. The name is stored lowercased.
    pub fn register(&mut self, name: &str, drawer: Drawer) {
        self.drawers.insert(name.to_lowercase(), drawer);
    }

    /// The registered format names, in sorted order.
    pub fn formats(&self) -> Vec<String> {
        self.drawers.keys().cloned().collect()
    }

    /// The format used when `draw` is called without an explicit name.
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Selects the default format.
    ///
    /// # Errors
    /// `MistError::UnknownFormat` when `name` is not registered.
    pub fn set_default_format(&mut self, name: &str) -> Result<(), MistError> {
        let name = name.to_lowercase();
        if !self.drawers.contains_key(&name) {
            return Err(self.unknown_format(&name));
        }
        self.default_format = name;
        Ok(())
    }

    /// Renders `state` with the named format, or with the default format
    /// when `format` is `None`.
    ///
    /// # Errors
    /// `MistError::UnknownFormat` when the name is not registered, with
    /// the valid names enumerated in the message; otherwise whatever
    /// error the selected renderer itself produces.
    pub fn draw(&self, state: &StateVector, format: Option<&str>) -> Result<String, MistError> {
        let name = format.unwrap_or(&self.default_format).to_lowercase();
        match self.drawers.get(&name) {
            Some(drawer) => drawer(state),
            None => Err(self.unknown_format(&name)),
        }
    }

    fn unknown_format(&self, requested: &str) -> MistError {
        MistError::UnknownFormat {
            requested: requested.to_string(),
            valid: self.formats(),
        }
    }
}

// Implement Default for convenient creation of registries.
impl Default for DrawerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Drawer closures are opaque; show the observable configuration instead.
impl fmt::Debug for DrawerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerRegistry")
            .field("formats", &self.formats())
            .field("default_format", &self.default_format)
            .finish()
    }
}
