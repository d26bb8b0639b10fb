use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::backend::{format_time, Countdown, FrameCycle, ORBITAL_FRAMES, STAR_FRAMES};
use crate::error::{Result, TimerError};

/// Single-line countdown redrawn in place with `\r`.
pub struct TerminalDisplay<W: Write> {
    countdown: Countdown,
    label: String,
    out: W,
    orbit: FrameCycle,
    stars: FrameCycle,
    tick: Duration,
    bar_width: usize,
    interrupted: Arc<AtomicBool>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(countdown: Countdown, label: impl Into<String>, out: W) -> Self {
        Self {
            countdown,
            label: label.into(),
            out,
            orbit: FrameCycle::new(ORBITAL_FRAMES),
            stars: FrameCycle::new(STAR_FRAMES),
            tick: Duration::from_millis(200),
            bar_width: 24,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Flag polled once per tick; setting it aborts the run.
    pub fn with_interrupt(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = interrupted;
        self
    }

    pub fn display(&mut self) -> Result<()> {
        let orbit = self.orbit.next().unwrap_or(" ");
        let star = self.stars.next().unwrap_or(" ");
        let line = render_line(
            orbit,
            star,
            self.countdown.remaining_secs(),
            self.countdown.progress(),
            self.bar_width,
        );

        write!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn countdown_loop(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "🚀 {} countdown started: {}",
            self.label,
            format_time(self.countdown.total_secs())
        )?;
        info!(label = %self.label, total = self.countdown.total_secs(), "countdown started");

        self.countdown.start(Instant::now())?;

        loop {
            self.countdown.tick(Instant::now());
            self.display()?;

            if self.countdown.is_complete() {
                break;
            }
            if self.interrupted.load(Ordering::SeqCst) {
                debug!(remaining = self.countdown.remaining_secs(), "interrupted");
                return Err(TimerError::Interrupted);
            }

            std::thread::sleep(self.tick);
        }

        writeln!(self.out, "\n✨ Liftoff! Timer complete. 🌌")?;
        info!(label = %self.label, "countdown complete");
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

pub fn render_line(
    orbit: &str,
    star: &str,
    remaining: u64,
    progress: f64,
    bar_width: usize,
) -> String {
    format!(
        "\r{orbit} {star} T-{} [{}] {:3}%",
        format_time(remaining),
        progress_bar(progress, bar_width),
        (progress * 100.0) as u32
    )
}

pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
