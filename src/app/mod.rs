//! Application state and logic for the TUI shell.
//!
//! This module contains the core [`App`] struct and related pieces:
//! - [`AppMessage`] - messages for async communication
//! - handler methods - keyboard/mouse/resize event handling
//! - navigation methods - section switching and drawer control

mod handlers;
mod messages;
mod monitor;
mod navigation;

pub use messages::AppMessage;
pub use monitor::spawn_health_monitor;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::config::Config;
use crate::domain::{ConnectivityState, DrawerState, NavVisibility, ViewportState};
use crate::health::HealthClient;
use crate::theme::ThemeStore;

/// Top-level application state: the responsive shell.
pub struct App {
    /// Current viewport dimensions and classification
    pub viewport: ViewportState,
    /// Mobile drawer state machine
    pub drawer: DrawerState,
    /// Bottom-navigation auto-hide state
    pub nav_visibility: NavVisibility,
    /// Backend connectivity state
    pub connectivity: ConnectivityState,
    /// Theme mode store
    pub theme: ThemeStore,

    /// Index of the active section in the navigation registry
    pub active_section: usize,
    /// Highlighted entry while the drawer is open
    pub drawer_selection: usize,
    /// Content scroll offset of the active section (lines)
    pub scroll_y: usize,
    /// Maximum scroll offset, recalculated during render
    pub max_scroll: usize,

    /// Set when the user asked to exit
    pub should_quit: bool,
    /// Set when the next loop iteration should redraw
    pub needs_redraw: bool,
    /// Animation tick counter
    pub tick_count: u64,

    /// Runtime configuration
    pub config: Config,
    /// Health probe client shared with spawned probes
    pub health: Arc<HealthClient<ReqwestHttpClient>>,
    /// Sender side of the async message channel
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the application state from configuration and a theme store.
    pub fn new(config: Config, theme: ThemeStore) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let health = Arc::new(HealthClient::new(
            config.api_base_url.clone(),
            ReqwestHttpClient::new(),
            config.probe_timeout,
        ));

        Self {
            viewport: ViewportState::default(),
            drawer: DrawerState::Closed,
            nav_visibility: NavVisibility::new(),
            connectivity: ConnectivityState::new(),
            theme,
            active_section: 0,
            drawer_selection: 0,
            scroll_y: 0,
            max_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            config,
            health,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Current terminal width in columns.
    pub fn terminal_width(&self) -> u16 {
        self.viewport.width
    }

    /// Current terminal height in rows.
    pub fn terminal_height(&self) -> u16 {
        self.viewport.height
    }

    /// Update viewport dimensions from a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height);
        // Desktop has no drawer overlay; drop it when the viewport widens
        if !self.viewport.is_compact_shell() {
            self.drawer = DrawerState::Closed;
        }
        self.mark_dirty();
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
