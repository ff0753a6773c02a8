//! Demo binary driving the panel against a fabricated host.
//!
//! Run with: cargo run -p slotwatch-overlay
//!
//! There is no game client here: a scripted host hands out action
//! lists, a hotbar, and a display-order buffer, and the panel renders
//! to the terminal. Useful for eyeballing grouping and anchoring
//! changes without loading into the client.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slotwatch_core::config;
use slotwatch_core::events::{HostSignal, SignalHandler};
use slotwatch_core::host::{
    ActionData, ActionMenuQuery, ActionMenuSnapshot, ActionResolver, AddonMetrics, Hotbar,
    HotbarQuery, HotbarSlot, PlayerQuery, PlayerSnapshot,
};
use slotwatch_core::session::PanelSession;
use slotwatch_core::ui_values::UiValue;
use slotwatch_overlay::{
    ActionPanel, Icon, IconSource, PanelView, Size, TextureHandle, UiDraw,
};
use slotwatch_types::{ActionId, ActionSourceKind, HotbarKind};
use tracing_subscriber::filter::EnvFilter;

// ─────────────────────────────────────────────────────────────────────────────
// Scripted Host
// ─────────────────────────────────────────────────────────────────────────────

struct DemoState {
    player_level: u32,
    roster: Vec<ActionData>,
    display_order: Vec<ActionId>,
    slotted: Vec<ActionId>,
    adjustments: HashMap<ActionId, ActionId>,
}

/// Shared-handle host: the demo script mutates the state between ticks
/// the way the game mutates its own memory under a real session.
#[derive(Clone)]
struct DemoHost {
    state: Rc<RefCell<DemoState>>,
}

impl DemoHost {
    /// Value buffer in the window's layout: 16 header values, then one
    /// 8-value block per visible entry.
    fn value_buffer(order: &[ActionId]) -> Vec<UiValue> {
        let mut values = vec![UiValue::Null; 16];
        for &action_id in order {
            values.push(UiValue::UInt(action_id));
            values.extend([UiValue::Null, UiValue::Null, UiValue::Null]);
            values.push(UiValue::UInt(0));
            values.extend([UiValue::Null, UiValue::Null, UiValue::Null]);
        }
        values
    }
}

impl PlayerQuery for DemoHost {
    fn player(&self) -> Option<PlayerSnapshot> {
        Some(PlayerSnapshot {
            class_job_id: 24,
            level: self.state.borrow().player_level,
        })
    }
}

impl ActionMenuQuery for DemoHost {
    fn action_menu(&self) -> Option<ActionMenuSnapshot> {
        let state = self.state.borrow();
        Some(ActionMenuSnapshot {
            shown: true,
            tab_selector: 0,
            compact_view: true,
            window_param: 0,
            metrics: AddonMetrics { x: 400.0, y: 180.0, width: 560.0, height: 420.0 },
            values: Self::value_buffer(&state.display_order),
        })
    }

    fn actions_for(&self, source: ActionSourceKind) -> Option<Vec<ActionData>> {
        match source {
            ActionSourceKind::ClassJob => Some(self.state.borrow().roster.clone()),
            _ => Some(Vec::new()),
        }
    }

    fn show_action_window(&self) {
        tracing::info!("[DEMO] host asked to open its Actions window");
    }
}

impl HotbarQuery for DemoHost {
    fn active_hotbar_kind(&self) -> Option<HotbarKind> {
        Some(HotbarKind::Standard)
    }

    fn hotbars(&self, kind: HotbarKind) -> Option<Vec<Hotbar>> {
        match kind {
            HotbarKind::Standard => {
                let slots = self
                    .state
                    .borrow()
                    .slotted
                    .iter()
                    .map(|&id| HotbarSlot::action(id))
                    .collect();
                Some(vec![Hotbar { slots }])
            }
            HotbarKind::Cross => Some(Vec::new()),
        }
    }
}

impl ActionResolver for DemoHost {
    fn resolve_adjusted(&self, action_id: ActionId) -> Option<ActionId> {
        let state = self.state.borrow();
        Some(state.adjustments.get(&action_id).copied().unwrap_or(action_id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminal Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Line-oriented stand-in for the host's immediate-mode binding.
#[derive(Default)]
struct TerminalUi {
    pending_icon: String,
    cursor_y: f32,
}

impl UiDraw for TerminalUi {
    fn text(&mut self, text: &str) {
        if self.pending_icon.is_empty() {
            println!("{text}");
        } else {
            println!("{} {text}", self.pending_icon);
            self.pending_icon.clear();
        }
    }

    fn image(&mut self, texture: TextureHandle, _size: Size) {
        self.pending_icon = format!("  [{:>5}]", texture.0);
    }

    fn same_line(&mut self) {}

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

struct DemoIcons;

impl IconSource for DemoIcons {
    fn icon(&self, icon_id: u32) -> Icon {
        Icon {
            texture: TextureHandle(icon_id as u64),
            size: Size { width: 64.0, height: 64.0 },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Script
// ─────────────────────────────────────────────────────────────────────────────

fn spell(id: ActionId, level: u32, icon_id: u32, name: &str) -> ActionData {
    ActionData {
        action_id: id,
        category_id: 2,
        required_level: level,
        slotable: true,
        icon_id,
        name: name.to_string(),
    }
}

fn ability(id: ActionId, level: u32, icon_id: u32, name: &str) -> ActionData {
    ActionData { category_id: 4, ..spell(id, level, icon_id, name) }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn render_frame(session: &PanelSession<DemoHost>, host: &DemoHost, panel: &mut ActionPanel) {
    let missing = session.missing_actions();
    if !panel.should_draw(missing) {
        println!("(panel hidden: nothing missing)");
        return;
    }

    panel.set_addon_metrics(session.addon_metrics());
    let view = host
        .action_menu()
        .map(|menu| PanelView::from_menu(&menu))
        .unwrap_or_default();

    let mut ui = TerminalUi::default();
    let position = panel.draw(&mut ui, &DemoIcons, missing, view);
    println!("(window anchored at {}, {})", position.x, position.y);
}

fn main() {
    init_logging();

    let state = Rc::new(RefCell::new(DemoState {
        player_level: 30,
        roster: vec![
            spell(119, 1, 403, "Stone"),
            spell(127, 18, 404, "Stone II"),
            spell(120, 2, 405, "Cure"),
            spell(121, 4, 406, "Aero"),
            spell(156, 45, 407, "Fluid Aura"),
            ability(7562, 14, 865, "Lucid Dreaming"),
        ],
        display_order: vec![119, 127, 120, 121, 7562, 156],
        slotted: vec![120],
        adjustments: HashMap::from([(119, 127)]),
    }));
    let host = DemoHost { state: Rc::clone(&state) };

    let mut session = PanelSession::new(host.clone(), config::load_or_default());
    let mut panel = ActionPanel::new(session.config().clone());

    // The user command just forwards to the host.
    session.open_native_window();

    println!("── Actions window opens (level 30, Cure slotted) ──");
    session.handle_signal(&HostSignal::ActionWindowOpened);
    session.handle_signal(&HostSignal::FrameTick);
    render_frame(&session, &host, &mut panel);

    println!();
    println!("── Player slots Stone II ──");
    state.borrow_mut().slotted.push(127);
    session.handle_signal(&HostSignal::FrameTick);
    render_frame(&session, &host, &mut panel);

    println!();
    println!("── Player hits level 50, Fluid Aura unlocks ──");
    state.borrow_mut().player_level = 50;
    session.handle_signal(&HostSignal::LevelChanged { class_job_id: 24, level: 50 });
    session.handle_signal(&HostSignal::FrameTick);
    render_frame(&session, &host, &mut panel);

    println!();
    println!("── Actions window closes ──");
    session.handle_signal(&HostSignal::ActionWindowClosing);
    render_frame(&session, &host, &mut panel);
}
