use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use neondash::build_info;
use neondash::constants::TICK_INTERVAL_MS;
use neondash::game::logic;
use neondash::game::types::GameSession;
use neondash::input::{map_key, GameInput};
use neondash::levels::LevelCatalog;
use neondash::ui;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "neondash {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Neondash - Terminal Reflex Game\n");
                println!("Usage: neondash\n");
                println!("Controls:");
                println!("  Left/Right  Select a level");
                println!("  Space       Start / jump / back to menu");
                println!("  d           Dash");
                println!("  q           Quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'neondash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut catalog = LevelCatalog::builtin();
    let mut session = GameSession::new();
    let frame_budget = Duration::from_millis(TICK_INTERVAL_MS);

    // Main loop: input, one fixed tick, render, sleep out the frame budget
    'game: loop {
        let frame_start = Instant::now();

        // Drain pending input without blocking
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    Some(GameInput::Quit) => break 'game,
                    Some(input) => logic::process_input(&mut session, &catalog, input),
                    None => {}
                }
            }
        }

        logic::tick(&mut session, &mut catalog);

        terminal.draw(|frame| ui::draw(frame, &session, &catalog))?;

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
