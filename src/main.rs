// src/main.rs

mod app;
mod error;
mod github;
mod highlight;
pub mod types;
mod ui;

use crate::app::App;
use crate::ui::draw;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error running app: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: tui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Handle both terminal input and fetch outcomes arriving from
        // spawned tasks.
        tokio::select! {
            result = tokio::task::spawn_blocking(event::read) => {
                if let Ok(Ok(Event::Key(key))) = result {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key_event(key);
                    }
                }
            }
            Some(outcome) = app.fetch_receiver.recv() => {
                app.apply_fetch_outcome(outcome);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
