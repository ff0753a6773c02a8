//! Missing-action panel: row building and drawing.

use slotwatch_core::host::{ActionData, ActionMenuSnapshot, AddonMetrics, ROLE_ACTION_PARAM};
use slotwatch_types::{ActionCategory, PanelConfig, formatting};

use crate::anchor::anchor_position;
use crate::{Point, Size};

/// Drawable texture handle supplied by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle(pub u64);

/// An icon ready to draw: host texture plus its native pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub texture: TextureHandle,
    pub size: Size,
}

/// Icon lookup, one call per displayed action per frame. Hosts hand back
/// an empty placeholder texture when an id has no backing asset, so the
/// call is infallible.
pub trait IconSource {
    fn icon(&self, icon_id: u32) -> Icon;
}

/// The slice of the host's immediate-mode UI binding the panel draws
/// with. One implementation wraps the real binding; tests and the demo
/// binary substitute their own.
pub trait UiDraw {
    fn text(&mut self, text: &str);
    fn image(&mut self, texture: TextureHandle, size: Size);
    /// Keep the next item on the current line.
    fn same_line(&mut self);
    fn cursor_y(&self) -> f32;
    fn set_cursor_y(&mut self, y: f32);
    fn text_size(&self, text: &str) -> Size;
    fn frame_padding_y(&self) -> f32;
    /// The host UI's global scale factor.
    fn global_scale(&self) -> f32;
    /// Width of the panel window as laid out this frame.
    fn window_width(&self) -> f32;
    fn viewport_size(&self) -> Size;
}

/// One visual row of the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow {
    /// Category group header.
    Header(&'static str),
    /// Icon plus trimmed action name.
    Action { icon_id: u32, label: String },
}

/// View flags of the native window that change the grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelView {
    pub window_param: u32,
    pub compact_view: bool,
}

impl PanelView {
    pub fn from_menu(menu: &ActionMenuSnapshot) -> Self {
        Self {
            window_param: menu.window_param,
            compact_view: menu.compact_view,
        }
    }
}

/// Build the visual rows for a frame's missing actions.
///
/// The role-action view gets a single "Role Actions" header above the
/// whole list. The compact view gets a header above the first action of
/// each category, in display order. The tabbed (non-compact) view shows
/// one category at a time and needs no headers.
pub fn build_rows(actions: &[ActionData], view: PanelView, show_headers: bool) -> Vec<PanelRow> {
    let mut rows = Vec::with_capacity(actions.len() + 4);
    for (i, action) in actions.iter().enumerate() {
        if show_headers {
            if view.window_param == ROLE_ACTION_PARAM {
                if i == 0 {
                    rows.push(PanelRow::Header("Role Actions"));
                }
            } else if view.compact_view {
                if let Some(category) = ActionCategory::from_id(action.category_id) {
                    let first_of_category = actions
                        .iter()
                        .position(|a| a.category_id == action.category_id);
                    if first_of_category == Some(i) {
                        rows.push(PanelRow::Header(category.header_label()));
                    }
                }
            }
        }
        rows.push(PanelRow::Action {
            icon_id: action.icon_id,
            label: formatting::trim_name(&action.name).to_string(),
        });
    }
    rows
}

/// The overlay panel itself. Holds the user config plus the last
/// observed placement of the native window; all per-frame data arrives
/// as arguments.
pub struct ActionPanel {
    config: PanelConfig,
    addon: AddonMetrics,
}

impl ActionPanel {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            addon: AddonMetrics::default(),
        }
    }

    pub fn set_config(&mut self, config: PanelConfig) {
        self.config = config;
    }

    /// Track the native window so the anchor calculation has something
    /// to attach to.
    pub fn set_addon_metrics(&mut self, addon: AddonMetrics) {
        self.addon = addon;
    }

    /// The panel only draws when there is something to report.
    pub fn should_draw(&self, missing: &[ActionData]) -> bool {
        !missing.is_empty()
    }

    /// Draw one frame of the panel and return where the window belongs,
    /// anchored beside the native Actions window.
    pub fn draw<U, I>(&self, ui: &mut U, icons: &I, actions: &[ActionData], view: PanelView) -> Point
    where
        U: UiDraw,
        I: IconSource,
    {
        let rows = build_rows(actions, view, self.config.show_category_headers);
        let action_total = actions.len();

        let mut actions_drawn = 0;
        for row in &rows {
            match row {
                PanelRow::Header(label) => ui.text(label),
                PanelRow::Action { icon_id, label } => {
                    let icon = icons.icon(*icon_id);
                    let scaled = Size {
                        width: icon.size.width * self.config.icon_scale,
                        height: icon.size.height * self.config.icon_scale,
                    };
                    ui.image(icon.texture, scaled);
                    ui.same_line();

                    // Center the label vertically on the icon.
                    let text_height = ui.text_size(label).height;
                    let centered = ui.cursor_y()
                        + (scaled.height - ui.frame_padding_y() / 2.0 - text_height) / 2.0;
                    ui.set_cursor_y(centered);
                    ui.text(label);

                    actions_drawn += 1;
                    if actions_drawn < action_total {
                        ui.set_cursor_y(ui.cursor_y() + self.config.row_gap * ui.global_scale());
                    }
                }
            }
        }

        // Placement comes last: the window's width is only known once
        // the rows are laid out.
        anchor_position(
            self.addon,
            ui.window_width(),
            ui.viewport_size(),
            self.config.anchor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u32, category_id: u8, name: &str) -> ActionData {
        ActionData {
            action_id: id,
            category_id,
            required_level: 1,
            slotable: true,
            icon_id: 1000 + id,
            name: name.to_string(),
        }
    }

    fn labels(rows: &[PanelRow]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                PanelRow::Header(h) => format!("# {h}"),
                PanelRow::Action { label, .. } => label.clone(),
            })
            .collect()
    }

    #[test]
    fn test_compact_view_headers_at_first_of_each_category() {
        let actions = vec![
            action(1, 3, "Heavy Swing"),
            action(2, 3, "Maim"),
            action(3, 2, "Cure"),
            action(4, 4, "Provoke"),
        ];
        let view = PanelView { window_param: 0, compact_view: true };
        let rows = build_rows(&actions, view, true);
        assert_eq!(
            labels(&rows),
            vec![
                "# Weaponskills",
                "Heavy Swing",
                "Maim",
                "# Spells",
                "Cure",
                "# Abilities",
                "Provoke"
            ]
        );
    }

    #[test]
    fn test_role_action_view_single_header() {
        let actions = vec![action(1, 4, "Rampart"), action(2, 4, "Provoke")];
        let view = PanelView { window_param: ROLE_ACTION_PARAM, compact_view: true };
        let rows = build_rows(&actions, view, true);
        assert_eq!(labels(&rows), vec!["# Role Actions", "Rampart", "Provoke"]);
    }

    #[test]
    fn test_tabbed_view_has_no_headers() {
        let actions = vec![action(1, 3, "Heavy Swing"), action(3, 2, "Cure")];
        let view = PanelView { window_param: 0, compact_view: false };
        let rows = build_rows(&actions, view, true);
        assert_eq!(labels(&rows), vec!["Heavy Swing", "Cure"]);
    }

    #[test]
    fn test_headers_disabled_by_config() {
        let actions = vec![action(1, 3, "Heavy Swing")];
        let view = PanelView { window_param: ROLE_ACTION_PARAM, compact_view: true };
        let rows = build_rows(&actions, view, false);
        assert_eq!(labels(&rows), vec!["Heavy Swing"]);
    }

    #[test]
    fn test_names_are_trimmed() {
        let actions = vec![action(1, 3, "  Heavy Swing ")];
        let rows = build_rows(&actions, PanelView::default(), true);
        assert_eq!(labels(&rows), vec!["Heavy Swing"]);
    }

    #[test]
    fn test_unknown_category_gets_no_header_in_compact_view() {
        let actions = vec![action(1, 9, "Sprint")];
        let view = PanelView { window_param: 0, compact_view: true };
        let rows = build_rows(&actions, view, true);
        assert_eq!(labels(&rows), vec!["Sprint"]);
    }

    // ─────────────────────────────────────────────────────────────────
    // Draw pass
    // ─────────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingUi {
        ops: Vec<String>,
        cursor_y: f32,
    }

    impl UiDraw for RecordingUi {
        fn text(&mut self, text: &str) {
            self.ops.push(format!("text:{text}"));
        }
        fn image(&mut self, texture: TextureHandle, size: Size) {
            self.ops
                .push(format!("image:{}:{}x{}", texture.0, size.width, size.height));
        }
        fn same_line(&mut self) {
            self.ops.push("same_line".to_string());
        }
        fn cursor_y(&self) -> f32 {
            self.cursor_y
        }
        fn set_cursor_y(&mut self, y: f32) {
            self.cursor_y = y;
        }
        fn text_size(&self, text: &str) -> Size {
            Size { width: text.len() as f32 * 7.0, height: 14.0 }
        }
        fn frame_padding_y(&self) -> f32 {
            4.0
        }
        fn global_scale(&self) -> f32 {
            1.0
        }
        fn window_width(&self) -> f32 {
            220.0
        }
        fn viewport_size(&self) -> Size {
            Size { width: 1920.0, height: 1080.0 }
        }
    }

    struct StubIcons;

    impl IconSource for StubIcons {
        fn icon(&self, icon_id: u32) -> Icon {
            Icon {
                texture: TextureHandle(icon_id as u64),
                size: Size { width: 64.0, height: 64.0 },
            }
        }
    }

    #[test]
    fn test_draw_emits_icon_then_label_per_action() {
        let panel = ActionPanel::new(PanelConfig::default());
        let actions = vec![action(1, 3, "Heavy Swing"), action(2, 3, "Maim")];
        let mut ui = RecordingUi::default();

        panel.draw(&mut ui, &StubIcons, &actions, PanelView::default());

        // Icons come out at half their native size under the default
        // config.
        assert_eq!(
            ui.ops,
            vec![
                "image:1001:32x32",
                "same_line",
                "text:Heavy Swing",
                "image:1002:32x32",
                "same_line",
                "text:Maim",
            ]
        );
    }

    #[test]
    fn test_draw_anchors_beside_the_native_window() {
        let mut panel = ActionPanel::new(PanelConfig::default());
        panel.set_addon_metrics(AddonMetrics { x: 300.0, y: 150.0, width: 500.0, height: 600.0 });
        let actions = vec![action(1, 3, "Heavy Swing")];
        let mut ui = RecordingUi::default();

        let pos = panel.draw(&mut ui, &StubIcons, &actions, PanelView::default());
        assert_eq!(pos, Point { x: 800.0, y: 150.0 });
    }

    #[test]
    fn test_should_draw_only_with_missing_actions() {
        let panel = ActionPanel::new(PanelConfig::default());
        assert!(!panel.should_draw(&[]));
        assert!(panel.should_draw(&[action(1, 3, "Heavy Swing")]));
    }
}
