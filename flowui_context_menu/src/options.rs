// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options and tunables.

use std::fmt;
use std::str::FromStr;

use flowui_dom::ElementId;

use crate::item::MenuEntry;

/// Presentation theme of the rendered menu.
///
/// Forwarded to the container as `data-appearance`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Appearance {
    /// Light chrome (default).
    #[default]
    Light,
    /// Dark, translucent chrome.
    Dark,
}

impl Appearance {
    /// Attribute value, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Appearance`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown appearance '{0}', expected \"light\" or \"dark\"")]
pub struct ParseAppearanceError(String);

impl FromStr for Appearance {
    type Err = ParseAppearanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseAppearanceError(other.to_string())),
        }
    }
}

/// Elements whose context-menu gesture is intercepted.
///
/// Resolved once, when the menu is constructed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// All connected elements matching a CSS selector, in document order.
    Selector(String),
    /// One specific element.
    Element(ElementId),
    /// Nothing; reported as a diagnostic.
    #[default]
    Absent,
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl<T: Into<Target>> From<Option<T>> for Target {
    fn from(target: Option<T>) -> Self {
        target.map_or(Self::Absent, Into::into)
    }
}

/// What to build: targets, entries, and theme.
#[derive(Clone, Debug, Default)]
pub struct ContextMenuOptions {
    /// Where the gesture is intercepted.
    pub target: Target,
    /// Menu definition; insertion order is rendering order.
    pub menu_items: Vec<MenuEntry>,
    /// Theme; `None` means [`Appearance::Light`].
    pub appearance: Option<Appearance>,
}

impl ContextMenuOptions {
    /// Options with the default appearance.
    pub fn new(target: impl Into<Target>, menu_items: impl IntoIterator<Item = MenuEntry>) -> Self {
        Self {
            target: target.into(),
            menu_items: menu_items.into_iter().collect(),
            appearance: None,
        }
    }

    /// Set the appearance.
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }
}

/// Tunables shared by every menu built with them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Gap kept between a flipped menu and the far viewport edge.
    pub viewport_margin: f64,
    /// Entrance animation delay added per top-level entry, in seconds.
    pub stagger_step: f64,
    /// Stacking order of the open menu.
    pub z_index: i32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            viewport_margin: 20.0,
            stagger_step: 0.08,
            z_index: 99,
        }
    }
}
