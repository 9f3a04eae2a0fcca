//! Rendering. Pure functions of `App`; no state lives here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Row, Table};

use super::app::{App, Screen};
use super::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header, body, search, status, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(if app.screen == Screen::Entries { 3 } else { 0 }),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(breadcrumb(app)), header);

    match app.screen {
        Screen::Sites => draw_sites(frame, app, body),
        Screen::Wlans => draw_wlans(frame, app, body),
        Screen::Entries => {
            draw_entries(frame, app, body);
            draw_search(frame, app, search);
        }
    }

    let status_line = Span::styled(app.status.text.as_str(), theme::status(app.status.kind));
    frame.render_widget(Paragraph::new(status_line), status);
    frame.render_widget(Paragraph::new(key_hints(app)), hints);
}

fn breadcrumb(app: &App) -> Line<'_> {
    let mut spans = vec![Span::styled(" macfilter", theme::panel_title())];
    if let Some(site) = app.site.as_ref().filter(|_| app.screen != Screen::Sites) {
        spans.push(Span::styled(" / ", theme::muted()));
        spans.push(Span::raw(site.display_name.as_str()));
    }
    if let Some(report) = app.report.as_ref().filter(|_| app.screen == Screen::Entries) {
        spans.push(Span::styled(" / ", theme::muted()));
        spans.push(Span::raw(report.wlan.as_str()));
    }
    Line::from(spans)
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    Block::bordered()
        .title(Span::styled(format!(" {title} "), theme::panel_title()))
        .border_style(theme::panel_border(focused))
}

fn draw_sites(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .sites
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(s.display_name.as_str(), theme::row()),
                Span::styled(format!("  ({})", s.code), theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel("Sites", true))
        .highlight_style(theme::row_selected())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut app.site_state);
}

fn draw_wlans(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .wlans
        .iter()
        .map(|w| {
            let filter = if w.mac_filter_enabled {
                format!("  {} · {} entries", w.mac_filter_policy, w.mac_filter_list.len())
            } else {
                format!("  filter off · {} entries", w.mac_filter_list.len())
            };
            ListItem::new(Line::from(vec![
                Span::styled(w.name.as_str(), theme::row()),
                Span::styled(filter, theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel("WLANs", true))
        .highlight_style(theme::row_selected())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut app.wlan_state);
}

fn draw_entries(frame: &mut Frame, app: &mut App, area: Rect) {
    let total = app.report.as_ref().map_or(0, |r| r.entries.len());
    let title = format!("MAC filter ({}/{total})", app.visible.len());

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|e| {
            let style = if e.label.is_known() {
                theme::row()
            } else {
                theme::row_unknown()
            };
            Row::new(vec![e.mac.to_string(), e.name().to_owned()]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(19), Constraint::Min(10)])
        .header(Row::new(vec!["MAC", "Name"]).style(theme::column_header()))
        .block(panel(&title, !app.searching))
        .row_highlight_style(theme::row_selected())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    // Inner width, minus borders.
    let width = area.width.saturating_sub(2) as usize;
    let scroll = app.search.visual_scroll(width);
    let input = Paragraph::new(app.search.value())
        .style(theme::row())
        .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
        .block(panel("Search", app.searching));
    frame.render_widget(input, area);

    if app.searching {
        let offset = app.search.visual_cursor().saturating_sub(scroll);
        let x = area.x + 1 + u16::try_from(offset).unwrap_or(0);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn key_hints(app: &App) -> Line<'static> {
    let pairs: &[(&str, &str)] = match (app.screen, app.searching) {
        (Screen::Entries, true) => &[("type", "filter"), ("enter/esc", "done"), ("↑↓", "move")],
        (Screen::Entries, false) => &[("/", "search"), ("↑↓", "move"), ("esc", "back"), ("q", "quit")],
        (Screen::Wlans, _) => &[("enter", "open"), ("↑↓", "move"), ("esc", "back"), ("q", "quit")],
        (Screen::Sites, _) => &[("enter", "open"), ("↑↓", "move"), ("q", "quit")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (k, label) in pairs {
        spans.push(Span::styled(*k, theme::hint_key()));
        spans.push(Span::styled(format!(" {label}  "), theme::muted()));
    }
    Line::from(spans)
}
