//! Overlay panel for actions missing from the hotbars.
//!
//! This crate is the rendering consumer of `slotwatch-core`: it turns
//! the frame's missing-action list into panel rows (with category group
//! headers), draws them through the host's immediate-mode UI binding,
//! and parks the panel window next to the native Actions window.
//!
//! The host supplies the drawing surface ([`panel::UiDraw`]) and the
//! icon textures ([`panel::IconSource`]); everything in here is plain
//! layout logic and runs fine against fabricated implementations.

pub mod anchor;
pub mod panel;

pub use anchor::anchor_position;
pub use panel::{ActionPanel, Icon, IconSource, PanelRow, PanelView, TextureHandle, UiDraw};

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}
