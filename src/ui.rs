// src/ui.rs

use crate::app::{ActiveField, App, AppMode};
use crate::highlight::{self, HighlightSpan};
use crate::types::{commit_author::CommitAuthor, commit_record::CommitRecord};
use tui::{
    Frame,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use tui_input::Input;

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(f.size());

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(main_chunks[1]);

    draw_form_panel(f, app, main_chunks[0]);
    draw_search_bar(f, app, right_chunks[0]);
    draw_contributors_panel(f, app, right_chunks[1]);
    draw_help(f, app, right_chunks[2]);

    if let AppMode::Loading(msg) = &app.mode {
        draw_loading_popup(f, msg);
    }
}

fn draw_form_panel<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let form_active = matches!(app.mode, AppMode::RepoInput);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    draw_text_field(
        f,
        &app.owner_input,
        "Owner",
        form_active && matches!(app.active_field, ActiveField::Owner),
        chunks[0],
    );
    draw_text_field(
        f,
        &app.repo_input,
        "Repository",
        form_active && matches!(app.active_field, ActiveField::Repo),
        chunks[1],
    );

    let hint = Paragraph::new(
        "Enter an owner and repository,\nthen press <Enter> to view its\nmost recent contributors.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hint, chunks[2]);
}

fn draw_text_field<B: Backend>(
    f: &mut Frame<B>,
    input: &Input,
    title: &str,
    is_active: bool,
    area: Rect,
) {
    let border_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(input.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );
    f.render_widget(widget, area);
}

fn draw_search_bar<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let is_active = matches!(app.mode, AppMode::Search);
    let border_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(app.search_input.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style),
    );
    f.render_widget(widget, area);
}

fn draw_contributors_panel<B: Backend>(f: &mut Frame<B>, app: &mut App, area: Rect) {
    if let Some(message) = &app.error {
        draw_error_panel(f, message, area);
        return;
    }
    if app.loaded.is_none() {
        draw_placeholder_panel(f, area);
        return;
    }

    let is_active = matches!(app.mode, AppMode::Normal);
    let border_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let query = app.search_input.value();
    let items: Vec<ListItem> = app
        .commits
        .iter()
        .map(|c| contributor_item(c, query))
        .collect();

    let title = match &app.loaded {
        Some((owner, repo)) => format!("Recent contributors for {owner}/{repo}"),
        None => "Contributors".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn contributor_item(commit: &CommitRecord, query: &str) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            short_sha(&commit.id).to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" "),
    ];
    spans.extend(author_spans(&commit.author, query));
    ListItem::new(Spans::from(spans))
}

fn short_sha(id: &str) -> &str {
    &id[..7.min(id.len())]
}

fn author_spans(author: &CommitAuthor, query: &str) -> Vec<Span<'static>> {
    highlight::highlight(author, query)
        .into_iter()
        .map(render_span)
        .collect()
}

fn render_span(span: HighlightSpan) -> Span<'static> {
    if span.emphasized {
        Span::styled(
            span.text,
            Style::default().bg(Color::Yellow).fg(Color::Black),
        )
    } else {
        Span::raw(span.text)
    }
}

fn draw_error_panel<B: Backend>(f: &mut Frame<B>, message: &str, area: Rect) {
    let text = Text::from(vec![
        Spans::from(Span::styled(
            "Something went wrong...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(""),
        Spans::from(message.to_string()),
    ]);
    let panel = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(panel, area);
}

fn draw_placeholder_panel<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let text = Text::from(vec![
        Spans::from(Span::styled(
            "No repository selected",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from(""),
        Spans::from("Use the form on the left to view the most recent"),
        Spans::from("contributors of a github repository..."),
    ]);
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn draw_help<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::RepoInput => {
            Text::from("<Tab>: Switch field | <Enter>: Fetch | <Esc>: Back to list")
        }
        AppMode::Normal => Text::from("↓↑: Navigate | /: Search | e: Edit repo | q: Quit"),
        AppMode::Search => Text::from("Type to highlight matches | <Enter>/<Esc>: Done"),
        AppMode::Loading(_) => Text::from("<Esc>: Cancel"),
    };
    let help =
        Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(r.height.saturating_sub(height) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_loading_popup<B: Backend>(f: &mut Frame<B>, msg: &str) {
    let area = centered_rect(50, 3, f.size());
    let text = Paragraph::new(msg).block(
        Block::default()
            .title("Loading... (Press Esc to cancel)")
            .borders(Borders::ALL),
    );
    f.render_widget(Clear, area);
    f.render_widget(text, area);
}
