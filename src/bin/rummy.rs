use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use rummy_rs::table::{Table, TableConfig};
use rummy_rs::tui::{app::AppState, controller};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Deal a single round and print it; used when stdout is not a terminal.
fn print_round(config: &TableConfig) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut table = Table::from_config(config).map_err(io::Error::other)?;
    table.start_round().map_err(io::Error::other)?;

    println!("rummy-rs {} | round {}", rummy_rs::VERSION, table.round());
    for p in table.players() {
        let ids: Vec<String> = p.hand().iter().map(|c| c.id()).collect();
        println!("{} ({}): {}", p.name(), p.id(), ids.join(" "));
    }
    println!("draw pile: {} cards", table.draw_pile().len());
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        return print_round(&TableConfig::default());
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
