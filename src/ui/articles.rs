use super::formatters::*;
use crate::api::Article;
use crate::app::{category_for, provider_for, App, Provider};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

struct ColumnDef {
    name: &'static str,
    width: u16,
    priority: u8,
}

const ARTICLE_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "Time",
        width: 9,
        priority: 1,
    },
    ColumnDef {
        name: "Source",
        width: 18,
        priority: 2,
    },
    ColumnDef {
        name: "Provider",
        width: 13,
        priority: 3,
    },
    ColumnDef {
        name: "Category",
        width: 16,
        priority: 3,
    },
    ColumnDef {
        name: "Headline",
        width: 40,
        priority: 1,
    },
];

/// Index of the Headline column; it absorbs any leftover width.
const STRETCH_COLUMN: usize = 4;

/// Drop low-priority columns until the rest fit the available width.
fn visible_columns(columns: &[ColumnDef], available_width: u16) -> Vec<usize> {
    let max_priority = columns.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = Vec::new();
    for priority_cutoff in 1..=max_priority {
        let candidate: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= priority_cutoff)
            .map(|(i, _)| i)
            .collect();
        let total_width: u16 = candidate.iter().map(|&i| columns[i].width).sum();
        if total_width <= available_width {
            visible = candidate;
        } else {
            break;
        }
    }
    if visible.is_empty() {
        visible = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority == 1)
            .map(|(i, _)| i)
            .collect();
    }
    visible
}

fn column_constraints(
    columns: &[ColumnDef],
    vis: &[usize],
    available_width: u16,
) -> Vec<Constraint> {
    let total_vis_width: u16 = vis.iter().map(|&i| columns[i].width).sum();
    let extra = available_width.saturating_sub(total_vis_width);

    if extra > 0 {
        vis.iter()
            .map(|&i| {
                if i == STRETCH_COLUMN {
                    Constraint::Min(columns[i].width)
                } else {
                    Constraint::Length(columns[i].width)
                }
            })
            .collect()
    } else {
        vis.iter()
            .map(|&i| Constraint::Length(columns[i].width))
            .collect()
    }
}

fn header_row(columns: &[ColumnDef], vis: &[usize]) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&i| {
            Cell::from(columns[i].name)
                .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        })
        .collect();
    Row::new(cells).height(1)
}

fn provider_color(provider: Provider) -> Color {
    match provider {
        Provider::Aws => Color::Yellow,
        Provider::Azure => Color::Cyan,
        Provider::GoogleCloud => Color::Blue,
        Provider::Other => Color::DarkGray,
    }
}

fn article_row(i: usize, article: &Article, vis: &[usize], selected: usize) -> Row<'static> {
    let is_selected = i == selected;
    let text_style = if is_selected {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };
    let bold_text = if is_selected {
        text_style.add_modifier(Modifier::BOLD)
    } else {
        text_style
    };

    let provider = provider_for(&article.title);
    let category = category_for(&article.title);

    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| match col {
            0 => Cell::from(format_relative_time(article.published_at)).style(text_style),
            1 => Cell::from(truncate_str(&article.source, 16)).style(text_style),
            2 => Cell::from(provider.label()).style(text_style.fg(provider_color(provider))),
            3 => Cell::from(category.label()).style(text_style),
            4 => Cell::from(article.title.clone()).style(bold_text),
            _ => Cell::from(""),
        })
        .collect();

    let row_style = if is_selected {
        Style::default().bg(Color::Rgb(40, 60, 100))
    } else {
        Style::default()
    };
    Row::new(cells).style(row_style)
}

pub fn draw_articles(frame: &mut Frame, area: Rect, app: &App) {
    let available_width = area.width.saturating_sub(2);
    let vis = visible_columns(ARTICLE_COLUMNS, available_width);

    let filtered = app.get_filtered_articles();

    let title = if app.loading {
        " Articles [Loading...] ".to_string()
    } else {
        format!(" Articles ({} of {}) ", filtered.len(), app.articles.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if filtered.is_empty() && !app.loading {
        let empty = Paragraph::new("No news found matching your criteria")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, article)| article_row(i, article, &vis, app.selected_index))
        .collect();

    let constraints = column_constraints(ARTICLE_COLUMNS, &vis, available_width);
    let table = Table::new(rows, constraints)
        .header(header_row(ARTICLE_COLUMNS, &vis))
        .block(block);

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
