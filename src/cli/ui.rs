use super::app::{App, Focus};
use celebdesk::{Profile, ProfileField, ViewState, editor::is_editable};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Search bar
                Constraint::Min(1),    // List + details
                Constraint::Length(1), // Status line
            ]
            .as_ref(),
        )
        .split(f.area());

    let search_style = if app.focus == Focus::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    app.search.set_style(search_style);
    f.render_widget(&app.search, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(chunks[1]);

    draw_list(f, app, body[0]);
    draw_details(f, app, body[1]);
    draw_status(f, app, chunks[2]);

    if app.session.pending_delete().is_some() {
        draw_delete_dialog(f);
    }
    if let Some(message) = app.session.blocking_notice() {
        draw_blocking_notice(f, message);
    }
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .roster()
        .filtered()
        .iter()
        .map(|profile| {
            let marker = match app.session.view_state(profile.id) {
                ViewState::Collapsed => "+",
                ViewState::Viewing | ViewState::Editing => "−",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    profile.full_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Celebrities ({}/{}) ",
        app.session.roster().filtered().len(),
        app.session.roster().len()
    );

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.selected));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let expanded = app
        .session
        .expanded()
        .and_then(|id| app.session.roster().get(id));

    let Some(profile) = expanded else {
        let hint = Paragraph::new("Select a celebrity and press Enter to expand.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    match app.session.view_state(profile.id) {
        ViewState::Editing => draw_edit_form(f, app, area, block),
        _ => draw_profile_view(f, app, profile, area, block),
    }
}

fn draw_profile_view(f: &mut Frame, app: &App, profile: &Profile, area: Rect, block: Block) {
    let today = app.session.today();
    let label = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            profile.full_name(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.picture.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Age: ", label),
            Span::raw(format!("{} Years", profile.age_on(today))),
        ]),
        Line::from(vec![
            Span::styled("Gender: ", label),
            Span::raw(profile.gender.label()),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label),
            Span::raw(profile.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Country: ", label),
            Span::raw(profile.country.clone()),
        ]),
        Line::from(vec![
            Span::styled("Description: ", label),
            Span::raw(profile.description.clone()),
        ]),
        Line::from(""),
    ];

    let edit_style = if is_editable(profile, today) {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled("[e] Edit", edit_style),
        Span::raw("   "),
        Span::styled("[d] Delete", Style::default().fg(Color::Red)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_edit_form(f: &mut Frame, app: &App, area: Rect, block: Block) {
    let Some(buffer) = app.session.edit_buffer() else {
        return;
    };
    let today = app.session.today();

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Field overview
                Constraint::Length(3), // Active field input
                Constraint::Length(1), // Hints
            ]
            .as_ref(),
        )
        .split(inner);

    let lines: Vec<Line> = ProfileField::ALL
        .iter()
        .map(|field| {
            let value = buffer.value(*field, today);
            let active = *field == app.active_field;
            let marker = if active { "> " } else { "  " };
            let value_span = if value.is_empty() && *field == ProfileField::Gender {
                Span::styled(field.placeholder(), Style::default().fg(Color::Red))
            } else if value.is_empty() {
                Span::styled("(empty)", Style::default().fg(Color::Red))
            } else {
                Span::raw(value)
            };
            let label_style = if active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label()), label_style),
                value_span,
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), rows[0]);

    f.render_widget(&app.field_input, rows[1]);

    let save_style = if buffer.is_dirty() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut hints = vec![
        Span::styled("Ctrl+S save", save_style),
        Span::raw("  "),
        Span::styled("Esc cancel", Style::default().fg(Color::Red)),
        Span::raw("  Tab next field"),
    ];
    if app.active_field == ProfileField::Gender {
        hints.push(Span::raw("  ←/→ choose"));
    }
    f.render_widget(Paragraph::new(Line::from(hints)), rows[2]);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.session.transient_notice() {
        Some(notice) => Line::from(Span::styled(
            format!("! {}", notice.message()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "↑/↓ select  Enter expand  e edit  d delete  / search  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_delete_dialog(f: &mut Frame) {
    let area = centered_rect(50, 7, f.area());
    f.render_widget(Clear, area); // Clear underlying text

    let text = vec![
        Line::from("Are you sure you want to delete this celebrity?"),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(Color::Red)),
            Span::raw("   [n] Cancel"),
        ]),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Delete Celebrity "));
    f.render_widget(dialog, area);
}

fn draw_blocking_notice(f: &mut Frame, message: &str) {
    let area = centered_rect(40, 5, f.area());
    f.render_widget(Clear, area);

    let text = vec![Line::from(message.to_string()), Line::from(""), Line::from("[Enter] OK")];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Notice "));
    f.render_widget(dialog, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = u16::try_from(u32::from(r.width) * u32::from(percent_x) / 100).unwrap_or(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}
