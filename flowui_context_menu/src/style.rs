// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared menu stylesheet.

use flowui_dom::{Document, ElementId};

/// Id of the injected `style` element.
pub const STYLE_ELEMENT_ID: &str = "@flowui/vanilla-context-menu";

/// Menu chrome, both color themes, and the entrance keyframes.
///
/// The container reads its geometry from the `--top`, `--left`, `--width`
/// and `--height` custom properties.
pub const STYLES: &str = r#"
.contextMenu {
  --menu-border: rgba(255, 255, 255, 0.08);
  --menu-bg: rgba(10, 20, 28, 0.7);
  --item-border: rgba(255, 255, 255, 0.1);
  --item-color: #fff;
  --item-bg-hover: rgba(255, 255, 255, 0.1);
  height: 0;
  min-width: 8rem;
  overflow: hidden;
  background: var(--menu-bg);
  backdrop-filter: blur(5px);
  -webkit-backdrop-filter: blur(5px);
  position: fixed;
  top: var(--top);
  left: var(--left);
  animation: menuAnimation 0.4s 0s both;
  -webkit-animation: menuAnimation 0.4s 0s both;
  transform-origin: left;
  margin: 4px;
  padding: 0;
  display: flex;
  flex-direction: column;
  z-index: 99;
  box-shadow: 0 0 0 1px var(--menu-border), 0 2px 2px rgba(0, 0, 0, 0.03), 0 4px 4px rgba(0, 0, 0, 0.04), 0 10px 8px rgba(0, 0, 0, 0.05), 0 15px 15px rgba(0, 0, 0, 0.06), 0 30px 30px rgba(0, 0, 0, 0.07), 0 70px 65px rgba(0, 0, 0, 0.09);
}

.contextMenu-item {
  padding: 4px;
}

.contextMenu-item[data-divider]:not(:last-child) {
  border-bottom: 1px solid var(--item-border);
}

.contextMenu-button {
  color: var(--item-color);
  background: 0;
  border: 0;
  white-space: nowrap;
  width: 100%;
  border-radius: 4px;
  padding: 6px 24px 6px 7px;
  text-align: left;
  display: flex;
  align-items: center;
  font-size: 14px;
  -webkit-animation: menuItemAnimation 0.2s 0s both;
  animation: menuItemAnimation 0.2s 0s both;
  cursor: pointer;
}

.contextMenu-button:hover {
  background-color: var(--item-bg-hover);
}

.contextMenu[data-appearance=light] {
  --menu-bg: rgba(255, 255, 255, 0.85);
  --menu-border: rgba(0, 0, 0, 0.08);
  --item-border: rgba(30, 30, 30, 0.1);
  --item-color: rgb(10, 20, 28);
  --item-bg-hover: rgba(10, 20, 28, 0.09);
}

@-webkit-keyframes menuAnimation {
  0% {
    opacity: 0;
    transform: scale(0.5);
  }
  100% {
    height: var(--height);
    opacity: 1;
    border-radius: 8px;
    transform: scale(1);
  }
}

@keyframes menuAnimation {
  0% {
    opacity: 0;
    transform: scale(0.5);
  }
  100% {
    height: var(--height);
    opacity: 1;
    border-radius: 8px;
    transform: scale(1);
  }
}

@-webkit-keyframes menuItemAnimation {
  0% {
    opacity: 0;
    transform: translateX(-10px);
  }
  100% {
    opacity: 1;
    transform: translateX(0);
  }
}

@keyframes menuItemAnimation {
  0% {
    opacity: 0;
    transform: translateX(-10px);
  }
  100% {
    opacity: 1;
    transform: translateX(0);
  }
}
"#;

/// Ensure the menu stylesheet is present in `head`, returning its element.
///
/// An existing element with [`STYLE_ELEMENT_ID`] is returned untouched, so
/// every menu on a document shares one stylesheet.
pub fn inject_styles(doc: &mut Document) -> ElementId {
    if let Some(existing) = doc.get_element_by_id(STYLE_ELEMENT_ID) {
        tracing::trace!(?existing, "menu stylesheet already present");
        return existing;
    }
    let style = doc.create_element("style");
    doc.set_attribute(style, "id", STYLE_ELEMENT_ID);
    doc.set_text_content(style, STYLES);
    let head = doc.head();
    doc.append_child(head, style);
    tracing::debug!(?style, "injected menu stylesheet");
    style
}
