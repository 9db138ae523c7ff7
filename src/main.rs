//! Binary entry point: decode the glyphs, load the built-in characters and drive
//! the Ratatui loop until the user quits.
use std::process;

use character_picker::{run_app, App, Roster, SymbolTable};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Only warnings and errors reach the terminal; anything chattier would draw
/// over the alternate screen.
const LOG_LEVEL: LevelFilter = LevelFilter::Warn;

fn main() {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    // A logger may already be installed; the app runs fine without one.
    let _ = TermLogger::init(
        LOG_LEVEL,
        log_config,
        TerminalMode::Stdout,
        ColorChoice::Auto,
    );

    let symbols = SymbolTable::build();
    let roster = Roster::builtin(&symbols);
    let mut app = App::new(roster, symbols);

    if let Err(err) = run_app(&mut app) {
        println!("Uh-Oh: {:#}", err);
        process::exit(1);
    }
}
