//! Sidebar rendering: persistent on desktop, slide-in drawer on the
//! compact shell.
//!
//! Both renderers walk the same navigation registry, so the route set and
//! ordering can never diverge between variants.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::navigation::NAV_ITEMS;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Render the persistent desktop sidebar.
pub fn render_sidebar(
    f: &mut Frame,
    area: Rect,
    active_section: usize,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = nav_lines(active_section, active_section, false, palette);
    f.render_widget(Paragraph::new(lines), inner);
}

/// Render the slide-in drawer over the compact shell.
///
/// The area right of the drawer stays visible as a dimmed backdrop strip.
pub fn render_drawer(
    f: &mut Frame,
    area: Rect,
    active_section: usize,
    selection: usize,
    ctx: LayoutContext,
    palette: &Palette,
) {
    let drawer_area = Rect {
        x: area.x,
        y: area.y,
        width: ctx.drawer_width().min(area.width),
        height: area.height,
    };

    f.render_widget(Clear, drawer_area);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(drawer_area);
    f.render_widget(block, drawer_area);

    let mut lines = vec![
        Line::from(Span::styled(
            " Navigate",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(nav_lines(active_section, selection, true, palette));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " Enter select · Esc close",
        Style::default().fg(palette.dim),
    )));
    f.render_widget(Paragraph::new(lines), inner);
}

/// One line per registry entry, highlighting the active section and, when
/// `show_cursor` is set, the keyboard selection.
fn nav_lines(
    active_section: usize,
    selection: usize,
    show_cursor: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let active = i == active_section;
            let glyph = if active { item.active_icon } else { item.icon };
            let cursor = if show_cursor && i == selection {
                "▸"
            } else {
                " "
            };

            let label_style = if active {
                Style::default().fg(item.color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.dim)
            };

            Line::from(vec![
                Span::styled(cursor.to_string(), Style::default().fg(palette.accent)),
                Span::styled(format!("{} ", glyph), label_style),
                Span::styled(item.label.to_string(), label_style),
            ])
        })
        .collect()
}
