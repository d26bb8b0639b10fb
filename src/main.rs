use std::io::stdout;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use space_timer::config::{CliConfig, Mode, Settings};
use space_timer::error::{Result, TimerError};
use space_timer::frontend::terminal::TerminalDisplay;
use space_timer::frontend::tui_ratatui::TuiRatatuiDisplay;
use space_timer::logging;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    logging::init_logger(config.verbose, config.ui);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TimerError::Interrupted) => {
            println!("\n🛑 Mission aborted by user.");
            ExitCode::from(TimerError::Interrupted.exit_code())
        }
        Err(err) => {
            debug!(%err, "space timer failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(config: CliConfig) -> Result<()> {
    let settings = Settings::default();

    let countdown = match config.mode()? {
        Mode::Interactive => {
            let mut tui = TuiRatatuiDisplay::new(settings)?;
            return tui.timer_loop();
        }
        Mode::Countdown(countdown) => countdown,
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let mut terminal = TerminalDisplay::new(countdown, config.label, stdout())
        .with_tick(settings.cli_tick)
        .with_bar_width(settings.bar_width)
        .with_interrupt(interrupted);
    terminal.countdown_loop()
}
