//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a three-row split: a one-line header, the body, and a
//!   one-line status bar.
//! * The body depends on the fetch state: a hint, a spinner, the article
//!   cards, or the error text.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::source::Article;
use crate::store::FetchState;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(app, frame, header_area);

    match body_message(app) {
        Some(line) => draw_message(frame, body_area, line),
        None => draw_article_list(app, frame, body_area),
    }

    draw_status_bar(app, frame, status_area);
}

/// The single line shown instead of the article list, if any.
fn body_message(app: &App) -> Option<Line<'static>> {
    match &app.state {
        FetchState::Idle => Some(Line::from("Press r to fetch the latest headlines")),
        FetchState::Loading => {
            let glyph = SPINNER[app.tick % SPINNER.len()];
            Some(Line::styled(
                format!("{glyph} Loading…"),
                Style::default().fg(Color::Yellow),
            ))
        }
        FetchState::Error(message) => Some(Line::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red),
        )),
        FetchState::Success(_) => None,
    }
}

fn draw_header(app: &App, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Top headlines · {} ", app.country),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(header, area);
}

fn draw_message(frame: &mut Frame, area: Rect, line: Line<'static>) {
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Publish time, followed by the source name when known.
fn byline(article: &Article) -> String {
    match article.source_name() {
        Some(name) => format!("{} · {name}", article.published_label()),
        None => article.published_label(),
    }
}

/// One card: author, timestamp, title and the link label.
fn article_card(article: &Article) -> ListItem<'static> {
    let mut lines = vec![
        Line::styled(
            article.author.clone().unwrap_or_default(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(byline(article), Style::default().fg(Color::DarkGray)),
        Line::raw(article.title.clone().unwrap_or_default()),
    ];
    if article.link().is_some() {
        lines.push(Line::styled(
            "Link",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    lines.push(Line::raw(""));
    ListItem::new(Text::from(lines))
}

/// Render the scrollable article cards.
fn draw_article_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let cards: Vec<ListItem> = app.articles().iter().map(article_card).collect();

    let list = List::new(cards)
        .block(Block::default().title(" News ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} articles", app.articles().len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  r: fetch  ↑/↓: scroll  Enter: open link  q: quit"),
    ]));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::source::NewsResult;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        buf.content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn success() -> FetchState {
        FetchState::Success(NewsResult {
            status: "ok".into(),
            total_results: 2,
            articles: vec![
                serde_json::from_str(
                    r#"{
                        "source": { "id": null, "name": "Index.hu" },
                        "author": "Author One",
                        "title": "Parliament votes",
                        "url": "https://x",
                        "publishedAt": "2024-03-05T09:15:00Z"
                    }"#,
                )
                .unwrap(),
                Article {
                    title: Some("No link here".into()),
                    url: Some("not a url".into()),
                    ..Default::default()
                },
            ],
        })
    }

    #[test]
    fn idle_shows_hint() {
        let mut app = App::new("hu");
        let text = render(&mut app);
        assert!(text.contains("Press r to fetch"));
        assert!(text.contains("Top headlines · HU"));
    }

    #[test]
    fn loading_shows_spinner_text() {
        let mut app = App::new("hu");
        app.apply(FetchState::Loading);
        assert!(render(&mut app).contains("Loading"));
    }

    #[test]
    fn error_shows_message() {
        let mut app = App::new("hu");
        app.apply(FetchState::Error("HTTP 401: Unauthorized".into()));
        assert!(render(&mut app).contains("Error: HTTP 401: Unauthorized"));
    }

    #[test]
    fn success_renders_cards() {
        let mut app = App::new("hu");
        app.apply(success());
        let text = render(&mut app);

        assert!(text.contains("Author One"));
        assert!(text.contains("2024-03-05 09:15 · Index.hu"));
        assert!(text.contains("Parliament votes"));
        assert!(text.contains("Link"));
        assert!(text.contains("No link here"));
        assert!(text.contains("2 articles"));
    }

    #[test]
    fn invalid_url_has_no_link_label() {
        let mut app = App::new("hu");
        app.apply(FetchState::Success(NewsResult {
            status: "ok".into(),
            total_results: 1,
            articles: vec![Article {
                title: Some("Only title".into()),
                url: Some("not a url".into()),
                ..Default::default()
            }],
        }));
        assert!(!render(&mut app).contains("Link"));
    }

    #[test]
    fn draw_does_not_panic_on_tiny_terminal() {
        let mut app = App::new("hu");
        app.apply(success());
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();
    }
}
