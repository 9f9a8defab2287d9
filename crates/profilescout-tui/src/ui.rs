// UI rendering logic
use crate::{App, InputMode};
use profilescout_core::{format_count, Account, Column, ListState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(6), // Profile card
            Constraint::Min(5),    // Repository table
            Constraint::Length(1), // Pager
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, chunks[0]);
    render_profile(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_pager(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(Color::Yellow),
        InputMode::Browsing | InputMode::GotoPage => Style::default(),
    };

    let title = if app.is_loading() {
        "GitHub username (loading...)"
    } else {
        "GitHub username (ESC to browse, / to search)"
    };

    let input = Paragraph::new(app.search_input.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(input_style),
        );

    frame.render_widget(input, area);

    // Show cursor when in search mode
    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position((
            area.x + app.search_input.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Profile");

    let lines = match (app.account(), &app.resolving) {
        (_, Some(handle)) => vec![Line::from(Span::styled(
            format!("Looking up {}...", handle),
            Style::default().fg(Color::Yellow),
        ))],
        (Some(account), None) => profile_lines(account),
        (None, None) => vec![Line::from(Span::styled(
            "Type a GitHub username and press ENTER",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let profile = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(profile, area);
}

fn profile_lines(account: &Account) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            account.display_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("@{}", account.login), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            account.profile_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if let Some(bio) = &account.bio {
        lines.push(Line::from(bio.clone()));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format_count(account.public_repo_count),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Repositories   "),
        Span::styled(
            format_count(account.following_count),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Following   "),
        Span::styled(
            format_count(account.follower_count),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Followers"),
    ]));

    if let Some(created_at) = account.created_at {
        lines.push(Line::from(Span::styled(
            format!("Joined {}", created_at.format("%B %Y")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn table_title(app: &App) -> String {
    let Some(account) = app.account() else {
        return "Repositories".to_string();
    };

    let loaded = format!(
        "Repositories ({} of {})",
        app.list.len(),
        format_count(account.public_repo_count)
    );

    match app.list.state() {
        ListState::Idle => loaded,
        ListState::Fetching => format!("{} loading...", loaded),
        ListState::HasData => format!("{} m: load more", loaded),
        ListState::Exhausted => loaded,
        ListState::Failed(_) => format!("{} r: retry", loaded),
    }
}

/// Repository name with its primary language dimmed behind it
fn name_line(name: &str, language: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::raw(name.to_string())];
    if let Some(language) = language {
        spans.push(Span::styled(
            format!(" {}", language),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(Column::ALL.iter().map(|&column| {
        let label = match app.list.sort_indicator(column) {
            Some(direction) => format!("{} {}", column.header(), direction.arrow()),
            None => column.header().to_string(),
        };
        Cell::from(label)
    }))
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .list
        .visible_rows()
        .into_iter()
        .map(|repo| {
            Row::new(vec![
                Cell::from(name_line(&repo.name, repo.language.as_deref())),
                Cell::from(repo.description.clone().unwrap_or_default()),
                Cell::from(Line::from(format_count(repo.star_count)).right_aligned()),
                Cell::from(Span::styled("Visit", Style::default().fg(Color::Cyan))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(table_title(app)))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.list.is_empty() {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.list.pagination();
    let enabled = |on: bool| {
        if on {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![
        Span::styled("< h Previous", enabled(summary.can_previous_page)),
        Span::raw(" | "),
        Span::styled(
            format!("Page {} of {}", summary.index + 1, summary.page_count),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            "Next l >",
            enabled(summary.can_next_page || app.list.can_request_more()),
        ),
        Span::raw(format!(" | Show {} (p)", summary.size)),
    ];

    if app.input_mode == InputMode::GotoPage {
        spans.push(Span::styled(
            format!(" | Go to page: {}", app.goto_input),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::raw(" | :goto"));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(banner) = &app.banner {
        Span::styled(banner.message.as_str(), Style::default().fg(Color::Red))
    } else {
        match app.input_mode {
            InputMode::Searching => Span::styled(
                "SEARCH MODE | ENTER: look up | ESC: browse",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::GotoPage => Span::styled(
                "GO TO PAGE | digits | ENTER: jump | ESC: cancel",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Browsing => Span::raw(
                "j/k: row | h/l: page | g/G: first/last | n/s: sort | p: page size | ENTER: open repo | o: profile | /: search | q: quit",
            ),
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_line_shows_language() {
        let line = name_line("linguist", Some("Ruby"));
        assert_eq!(line.to_string(), "linguist Ruby");
        assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));

        assert_eq!(name_line("dotfiles", None).to_string(), "dotfiles");
    }
}
