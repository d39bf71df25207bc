use super::centered_rect;
use super::formatters::format_date;
use crate::app::{category_for, provider_for, App};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_article_detail(frame: &mut Frame, app: &App) {
    let Some(article) = app.selected_article() else {
        return;
    };

    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Article ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let provider = provider_for(&article.title);
    let category = category_for(&article.title);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", article.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {} | {}", article.source, format_date(article.published_at)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(provider.label(), Style::default().fg(Color::Yellow)),
            Span::styled(" / ", Style::default().fg(Color::DarkGray)),
            Span::styled(category.label(), Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
    ];

    lines.push(Line::from(format!(
        "  {}",
        article
            .description
            .as_deref()
            .unwrap_or("No description available")
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", article.url),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        inner_area,
    );
}

fn help_content() -> Vec<Line<'static>> {
    let section = |label: &'static str| {
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let key = |binding: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:12}", binding), Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    vec![
        Line::from(""),
        section("  Navigation"),
        key("↑/k ↓/j", "Move selection"),
        key("Enter", "Article detail"),
        key("o", "Open article in browser"),
        Line::from(""),
        section("  Filters"),
        key("/", "Search title and description"),
        key("Esc", "Clear search"),
        key("0", "All categories"),
        key("1-4", "Toggle category"),
        key("p", "Cycle provider filter"),
        Line::from(""),
        section("  Other"),
        key("r", "Refresh now"),
        key("?", "This help"),
        key("q", "Quit"),
    ]
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
