//! Top header rendering.
//!
//! Desktop gets a full-width title bar; the compact shell gets the same
//! bar with a hamburger hint on the left.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::navigation::NAV_ITEMS;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Render the header bar.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    active_section: usize,
    healthy: bool,
    ctx: LayoutContext,
    palette: &Palette,
) {
    let section_label = NAV_ITEMS
        .get(active_section)
        .map(|item| item.label)
        .unwrap_or_default();

    let status = if healthy {
        Span::styled("●", Style::default().fg(palette.accent))
    } else {
        Span::styled("○", Style::default().fg(palette.dim))
    };

    let mut spans = Vec::new();
    if ctx.device_class().is_compact_shell() {
        spans.push(Span::styled("≡ ", Style::default().fg(palette.dim)));
    }
    spans.push(Span::styled(
        "SQL-Flow",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", section_label),
        Style::default().fg(palette.dim),
    ));
    spans.push(Span::raw("  "));
    spans.push(status);

    let line = Line::from(spans);
    if ctx.is_short() {
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(palette.surface)),
            area,
        );
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(vec![Line::raw(""), line]), inner);
}
