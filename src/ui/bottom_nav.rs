//! Bottom navigation bar for the compact shell.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::navigation::NAV_ITEMS;
use crate::ui::theme::Palette;

/// Render the bottom navigation bar, one evenly sized cell per section.
pub fn render_bottom_nav(f: &mut Frame, area: Rect, active_section: usize, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints: Vec<Constraint> = NAV_ITEMS
        .iter()
        .map(|_| Constraint::Ratio(1, NAV_ITEMS.len() as u32))
        .collect();
    let cells = Layout::horizontal(constraints).split(inner);

    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let active = i == active_section;
        let glyph = if active { item.active_icon } else { item.icon };
        let style = if active {
            Style::default().fg(item.color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };

        let cell = Paragraph::new(vec![
            Line::from(Span::styled(glyph.to_string(), style)).centered(),
            Line::from(Span::styled(item.label.to_string(), style)).centered(),
        ]);
        f.render_widget(cell, cells[i]);
    }
}
