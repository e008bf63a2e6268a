//! Connectivity banner rendering.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::{Banner, BannerSeverity};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Render the severity-tagged connectivity notice.
pub fn render_banner(
    f: &mut Frame,
    area: Rect,
    banner: &Banner,
    last_checked: Option<chrono::DateTime<chrono::Utc>>,
    ctx: LayoutContext,
    palette: &Palette,
) {
    let accent = match banner.severity {
        BannerSeverity::Error => palette.error,
        BannerSeverity::Warning => palette.warning,
        BannerSeverity::Info => palette.info,
    };
    let glyph = match banner.severity {
        BannerSeverity::Error => "✗",
        BannerSeverity::Warning => "⚠",
        BannerSeverity::Info => "…",
    };

    let mut title_spans = vec![
        Span::styled(
            format!(" {} {} ", glyph, banner.message),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· d to dismiss ", Style::default().fg(palette.dim)),
    ];
    if let Some(checked) = last_checked {
        title_spans.push(Span::styled(
            format!("· checked {} ", checked.format("%H:%M:%S")),
            Style::default().fg(palette.dim),
        ));
    }

    if ctx.is_short() {
        // Single-row notice without borders
        f.render_widget(Paragraph::new(Line::from(title_spans)), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                format!(" {}", banner.description),
                Style::default().fg(palette.dim),
            )),
        ]),
        inner,
    );
}
