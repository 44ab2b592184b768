use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Status};
use crate::menu::MenuController;
use super::theme::*;

/// Split the screen into the menu control and a status line.
pub fn split(area: Rect) -> (Rect, Rect) {
    let main_layout = Layout::vertical([
        Constraint::Min(0),    // Menu control
        Constraint::Length(1), // Status line
    ])
    .split(area);
    (main_layout[0], main_layout[1])
}

pub fn render(frame: &mut Frame, app: &App) {
    let (_, status_area) = split(frame.area());
    let menu_area = app.menu_area();

    render_menu(frame, menu_area, app);
    render_status(frame, status_area, app);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let menu = &app.menu;
    let theme = MenuTheme::from_style(menu.style());

    let (Some(layout), Some(scroller)) = (menu.layout_info(), menu.scroller()) else {
        let hint = Paragraph::new(Line::styled(
            "  menu needs at least 2 items",
            Style::new().fg(TEXT_DIM),
        ));
        frame.render_widget(hint, area);
        return;
    };

    if !menu.is_panel_visible() {
        let hint = Paragraph::new(Line::styled(
            "drag up/down to pick, left/right to adjust",
            Style::new().fg(TEXT_DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let px_per_row = app.metrics.px_per_row;
    let width = ((layout.item_width as f32 / app.metrics.px_per_col).round() as u16)
        .clamp(1, area.width.max(1));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let center_row = area.y as i32 + (layout.overlay_top as f32 / px_per_row).floor() as i32;

    let panel_top = center_row + (scroller.slot_offset(0) / px_per_row).round() as i32;
    let panel_rows = (layout.panel_height as f32 / px_per_row).ceil() as i32;
    if let Some(panel) = clip_row(area, x, width, panel_top, panel_rows.max(1)) {
        frame.render_widget(Block::new().style(Style::new().bg(theme.panel_background)), panel);
    }

    let centered = scroller.centered_index();
    for (i, label) in menu.items().iter().enumerate() {
        if i == centered {
            continue;
        }
        let row = center_row + (scroller.slot_offset(i) / px_per_row).round() as i32;
        if let Some(slot) = clip_row(area, x, width, row, 1) {
            render_label(frame, slot, label, Style::new().fg(theme.text).bg(theme.item_background));
        }
    }

    if let Some(slot) = clip_row(area, x, width, center_row, 1) {
        let label = centered_label(menu);
        render_label(
            frame,
            slot,
            label,
            Style::new().fg(TEXT_WHITE).bg(theme.selected_background).bold(),
        );
    }
}

fn centered_label(menu: &MenuController) -> &str {
    menu.centered_label().unwrap_or("")
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    let max_len = area.width as usize;
    let display = if label.chars().count() > max_len {
        let kept: String = label.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        label.to_string()
    };
    let paragraph = Paragraph::new(Line::from(display))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(paragraph, area);
}

/// Rows `top..top + rows` at column `x`, clipped to `area`.
fn clip_row(area: Rect, x: u16, width: u16, top: i32, rows: i32) -> Option<Rect> {
    let area_top = area.y as i32;
    let area_bottom = area_top + area.height as i32;
    let start = top.max(area_top);
    let end = (top + rows).min(area_bottom);
    if start >= end {
        return None;
    }
    Some(Rect::new(x, start as u16, width, (end - start) as u16))
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let current = app
        .menu
        .items()
        .get(app.menu.selected_index())
        .cloned()
        .unwrap_or_default();

    let mut spans = vec![
        Span::styled(" current: ", Style::new().fg(TEXT_DIM)),
        Span::styled(current, Style::new().fg(LOGO_GOLD).bold()),
        Span::raw("  "),
    ];

    match &app.status {
        Status::Idle => {}
        Status::Selected { label } => {
            spans.push(Span::styled("selected ", Style::new().fg(TEXT_DIM)));
            spans.push(Span::styled(label.clone(), Style::new().fg(TEXT_WHITE)));
        }
        Status::Progressed { label, delta } => {
            spans.push(Span::styled(format!("{} ", label), Style::new().fg(TEXT_WHITE)));
            spans.push(Span::styled(format!("{:+}", delta), Style::new().fg(LOGO_LIGHT_BLUE)));
        }
    }

    spans.push(Span::styled("   q quit  ↑/↓ step", Style::new().fg(TEXT_DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
