//! Section content panes.
//!
//! The shell owns navigation and chrome; these panes render a summary view
//! for each registered section. Lesson delivery, grading and progress
//! CRUD live on the backend and are not reimplemented here.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::navigation::NAV_ITEMS;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Lesson track shown on the lessons pane.
const LESSON_TOPICS: [&str; 12] = [
    "SELECT basics",
    "Filtering with WHERE",
    "Sorting with ORDER BY",
    "LIMIT and OFFSET",
    "Aggregate functions",
    "GROUP BY and HAVING",
    "INNER JOIN",
    "LEFT and RIGHT JOIN",
    "Subqueries",
    "Set operations",
    "Window functions",
    "Indexes and query plans",
];

/// Render the active section's content and return the total line count so
/// the caller can clamp the scroll offset.
pub fn render_content(
    f: &mut Frame,
    area: Rect,
    active_section: usize,
    scroll_y: usize,
    ctx: LayoutContext,
    palette: &Palette,
) -> usize {
    let item = &NAV_ITEMS[active_section.min(NAV_ITEMS.len() - 1)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {} {} ", item.active_icon, item.label),
            Style::default().fg(item.color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = section_lines(item.id, ctx, palette);
    let total = lines.len();
    f.render_widget(
        Paragraph::new(lines).scroll((scroll_y as u16, 0)),
        inner,
    );
    total
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(palette.dim)))
}

fn section_lines(id: &str, ctx: LayoutContext, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];
    match id {
        "dashboard" => {
            lines.push(heading("Welcome back!", palette));
            lines.push(Line::raw(""));
            lines.push(body("Pick up where you left off, or jump into practice.", palette));
            lines.push(Line::raw(""));
            lines.push(heading("Today", palette));
            lines.push(body("· Continue: GROUP BY and HAVING", palette));
            lines.push(body("· Daily challenge: 1 exercise waiting", palette));
            lines.push(Line::raw(""));
            lines.push(body("Tab switches sections · t toggles the theme", palette));
        }
        "lessons" => {
            lines.push(heading("Lesson track", palette));
            lines.push(Line::raw(""));
            // Lay the track out in as many columns as the breakpoint allows
            let columns = ctx.grid_columns() as usize;
            let cell_width = ctx.max_title_length().min(28);
            for (row_index, row) in LESSON_TOPICS.chunks(columns).enumerate() {
                let mut spans = Vec::new();
                for (col_index, topic) in row.iter().enumerate() {
                    let number = row_index * columns + col_index + 1;
                    spans.push(Span::styled(
                        format!("{:>3}. ", number),
                        Style::default().fg(palette.dim),
                    ));
                    spans.push(Span::styled(
                        format!("{:<width$}", topic, width = cell_width),
                        Style::default().fg(palette.text),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::raw(""));
            lines.push(body("Lessons are fetched from the backend when opened.", palette));
        }
        "practice" => {
            lines.push(heading("Practice", palette));
            lines.push(Line::raw(""));
            lines.push(body("Write queries against sample schemas and get instant", palette));
            lines.push(body("feedback from the execution service.", palette));
            lines.push(Line::raw(""));
            lines.push(body("· Guided exercises follow each lesson", palette));
            lines.push(body("· Challenge mode mixes topics at random", palette));
        }
        "achievements" => {
            lines.push(heading("Awards", palette));
            lines.push(Line::raw(""));
            lines.push(body("Badges and XP milestones earned from lessons and", palette));
            lines.push(body("practice streaks. Progress syncs when the backend", palette));
            lines.push(body("is reachable.", palette));
        }
        "interview" => {
            lines.push(heading("Interview preparation", palette));
            lines.push(Line::raw(""));
            lines.push(body("Curated SQL interview questions, from quick syntax", palette));
            lines.push(body("checks to multi-step query design.", palette));
        }
        _ => {
            lines.push(body("Nothing here yet.", palette));
        }
    }

    // Wide layouts get breathing room at the bottom
    for _ in 0..ctx.spacing() {
        lines.push(Line::raw(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::LIGHT_PALETTE;

    #[test]
    fn test_every_section_has_content() {
        let ctx = LayoutContext::default();
        for item in &NAV_ITEMS {
            let lines = section_lines(item.id, ctx, &LIGHT_PALETTE);
            assert!(lines.len() > 2, "section {} renders empty", item.id);
        }
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let ctx = LayoutContext::default();
        let lines = section_lines("bogus", ctx, &LIGHT_PALETTE);
        assert!(!lines.is_empty());
    }
}
