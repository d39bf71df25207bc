use anyhow::Result;
use clap::Parser;
use cloud_radar::api::NewsClient;
use cloud_radar::app::{App, Category, InputMode};
use cloud_radar::config::Config;
use cloud_radar::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Parser)]
#[command(name = "cloud-radar")]
#[command(about = "Terminal dashboard for cloud and DevOps news", long_about = None)]
struct Cli {
    /// Refresh interval in minutes
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve config and API key before touching the terminal so a missing
    // key prints a plain error.
    let mut config = Config::load()?;
    if let Some(mins) = cli.interval {
        config.refresh_interval_mins = mins;
    }
    let api_key = config.resolve_api_key()?;
    let mut app = App::new(config, NewsClient::new(api_key));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let refresh_interval = Duration::from_secs(app.config.refresh_interval_mins * 60);

    // Initial fetch, then the recurring timer takes over.
    app.refresh_articles().await;
    let mut last_refresh = Instant::now();

    loop {
        if last_refresh.elapsed() >= refresh_interval {
            app.refresh_articles().await;
            last_refresh = Instant::now();
        }

        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input with timeout to keep the refresh timer ticking
        let timeout = Duration::from_millis(100);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('?') => app.show_help(),
                        KeyCode::Char('/') => app.start_search(),
                        KeyCode::Char('r') => {
                            if !app.loading {
                                app.refresh_articles().await;
                                last_refresh = Instant::now();
                            }
                        }
                        KeyCode::Char('p') => app.cycle_provider(),
                        KeyCode::Char('o') => app.open_selected_article(),
                        KeyCode::Char('0') => app.select_all_categories(),
                        KeyCode::Char(c @ '1'..='4') => {
                            let idx = c as usize - '1' as usize;
                            app.toggle_category(Category::ALL[idx]);
                        }
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Enter => app.open_detail(),
                        KeyCode::Esc => app.clear_search(),
                        _ => {}
                    },
                    InputMode::Search => match key.code {
                        KeyCode::Enter => app.confirm_search(),
                        KeyCode::Esc => app.cancel_search(),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        _ => {}
                    },
                    InputMode::ArticleDetail => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.close_detail(),
                        KeyCode::Char('o') => app.open_selected_article(),
                        _ => {}
                    },
                    InputMode::Help => match key.code {
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                        _ => {}
                    },
                }
            }
        }
    }
}
