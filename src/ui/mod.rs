//! UI rendering for the SQL-Flow shell.
//!
//! Implements both layout variants over one navigation registry:
//! - Desktop: persistent sidebar + top header
//! - Mobile/tablet: hamburger header + slide-in drawer + bottom navigation
//!
//! All sizing decisions go through [`layout::LayoutContext`] so every
//! render function consults the same breakpoint table.

mod banner;
mod bottom_nav;
mod header;
pub mod layout;
mod pages;
mod sidebar;
pub mod theme;

pub use layout::{breakpoints, DeviceClass, LayoutContext, Orientation};
pub use theme::{Palette, DARK_PALETTE, LIGHT_PALETTE};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the shell.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // The frame is authoritative; resize events normally keep the viewport
    // in sync, but the first frame precedes any event
    if area.width != app.viewport.width || area.height != app.viewport.height {
        app.viewport.resize(area.width, area.height);
    }

    let palette = *app.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let ctx = app.viewport.layout();
    if app.viewport.is_compact_shell() {
        render_compact_shell(f, app, ctx, area, &palette);
    } else {
        render_desktop_shell(f, app, ctx, area, &palette);
    }
}

/// Desktop variant: header on top, persistent sidebar on the left.
fn render_desktop_shell(
    f: &mut Frame,
    app: &mut App,
    ctx: LayoutContext,
    area: Rect,
    palette: &Palette,
) {
    let banner = app.connectivity.banner();
    let mut constraints = vec![Constraint::Length(ctx.header_height())];
    if banner.is_some() {
        constraints.push(Constraint::Length(ctx.banner_height()));
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    header::render_header(
        f,
        rows[0],
        app.active_section,
        app.connectivity.is_healthy(),
        ctx,
        palette,
    );

    let mut next_row = 1;
    if let Some(banner) = &banner {
        banner::render_banner(
            f,
            rows[next_row],
            banner,
            app.connectivity.last_checked,
            ctx,
            palette,
        );
        next_row += 1;
    }

    let body = rows[next_row];
    let columns =
        Layout::horizontal([Constraint::Length(ctx.sidebar_width()), Constraint::Min(0)])
            .split(body);

    sidebar::render_sidebar(f, columns[0], app.active_section, palette);
    render_scrolled_content(f, app, columns[1], ctx, palette);
}

/// Compact variant: hamburger header, bottom navigation, drawer overlay.
fn render_compact_shell(
    f: &mut Frame,
    app: &mut App,
    ctx: LayoutContext,
    area: Rect,
    palette: &Palette,
) {
    let banner = app.connectivity.banner();
    let show_bottom_nav = app.nav_visibility.is_visible();

    let mut constraints = vec![Constraint::Length(ctx.header_height())];
    if banner.is_some() {
        constraints.push(Constraint::Length(ctx.banner_height()));
    }
    constraints.push(Constraint::Min(0));
    if show_bottom_nav {
        constraints.push(Constraint::Length(ctx.bottom_nav_height()));
    }
    let rows = Layout::vertical(constraints).split(area);

    header::render_header(
        f,
        rows[0],
        app.active_section,
        app.connectivity.is_healthy(),
        ctx,
        palette,
    );

    let mut next_row = 1;
    if let Some(banner) = &banner {
        banner::render_banner(
            f,
            rows[next_row],
            banner,
            app.connectivity.last_checked,
            ctx,
            palette,
        );
        next_row += 1;
    }

    render_scrolled_content(f, app, rows[next_row], ctx, palette);

    if show_bottom_nav {
        bottom_nav::render_bottom_nav(f, rows[next_row + 1], app.active_section, palette);
    }

    if app.drawer.is_open() {
        sidebar::render_drawer(
            f,
            area,
            app.active_section,
            app.drawer_selection,
            ctx,
            palette,
        );
    }
}

/// Render the active page and reconcile the scroll limits with what was
/// actually laid out.
fn render_scrolled_content(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    ctx: LayoutContext,
    palette: &Palette,
) {
    let visible = area.height.saturating_sub(2) as usize; // block borders
    let total = pages::render_content(f, area, app.active_section, app.scroll_y, ctx, palette);
    app.max_scroll = total.saturating_sub(visible.max(1));
    if app.scroll_y > app.max_scroll {
        app.scroll_y = app.max_scroll;
    }
}
