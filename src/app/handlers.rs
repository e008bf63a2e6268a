//! Event handling methods for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::domain::DrawerEvent;

use super::{App, AppMessage};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            _ => {}
        }

        if self.drawer.is_open() {
            self.handle_drawer_key(key);
        } else {
            self.handle_shell_key(key);
        }
    }

    /// Keys while the drawer overlay is open.
    fn handle_drawer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_drawer(DrawerEvent::BackdropPressed),
            KeyCode::Char('m') => self.open_drawer(), // toggle shut
            KeyCode::Up | KeyCode::Char('k') => self.drawer_select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.drawer_select_next(),
            KeyCode::Enter => self.activate_drawer_selection(),
            _ => {}
        }
    }

    /// Keys in the regular shell.
    fn handle_shell_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('m') => {
                if self.viewport.is_compact_shell() {
                    self.open_drawer();
                }
            }
            KeyCode::Tab | KeyCode::Right => self.next_section(),
            KeyCode::BackTab | KeyCode::Left => self.previous_section(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.navigate_to(index);
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.mark_dirty();
            }
            KeyCode::Char('r') => self.refresh_health(),
            KeyCode::Char('d') => {
                self.connectivity.dismiss();
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle a mouse event (scroll wheel only).
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down(3),
            MouseEventKind::ScrollUp => self.scroll_up(3),
            _ => {}
        }
    }

    /// Handle a message from an async operation.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HealthChecked {
                outcome,
                report,
                checked_at,
            } => {
                self.connectivity.apply_probe(outcome, checked_at);
                if let Some(report) = report {
                    tracing::debug!(
                        server = %report.services.server,
                        mongodb = %report.services.mongodb,
                        "health probe resolved"
                    );
                }
                self.mark_dirty();
            }
        }
    }
}
