mod panel;
mod stars;

pub use panel::{ControlPanel, Flow, Focus};
pub use stars::{Star, StarField};

use std::{
    io::{self, stdout, Stdout},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, TimerError};

const BACKGROUND: Color = Color::Rgb(0x09, 0x0B, 0x1A);
const SKY: Color = Color::Rgb(0x11, 0x14, 0x2A);
const FOREGROUND: Color = Color::Rgb(0xDD, 0xE8, 0xFF);
const INPUT: Color = Color::Rgb(0x1C, 0x21, 0x40);
const ACCENT: Color = Color::Rgb(0x2D, 0x62, 0xFF);
const MUTED: Color = Color::Rgb(0x3A, 0x40, 0x62);

pub struct TuiRatatuiDisplay {
    panel: ControlPanel,
    stars: StarField,
    settings: Settings,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    flow: Flow,
}

impl TuiRatatuiDisplay {
    pub fn new(settings: Settings) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            panel: ControlPanel::new(),
            stars: StarField::new(settings.star_count),
            settings,
            terminal,
            flow: Flow::Continue,
        })
    }

    pub fn display(&mut self) -> io::Result<()> {
        let panel = &self.panel;
        let stars = &self.stars;
        self.terminal.draw(|frame| draw(frame, panel, stars))?;
        Ok(())
    }

    /// Runs until Esc (`Ok`) or Ctrl-C (`Err(Interrupted)`), restoring the
    /// terminal either way. Both restore steps run before any error is
    /// reported; the first failure wins.
    pub fn timer_loop(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let _ = stdout().execute(EnterAlternateScreen)?;

        let result = self.event_loop();
        restore_terminal(result, disable_raw_mode, || {
            stdout().execute(LeaveAlternateScreen).map(|_| ())
        })?;
        match self.flow {
            Flow::Abort => Err(TimerError::Interrupted),
            _ => Ok(()),
        }
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let mut next_tick = Instant::now();
        let mut next_twinkle = Instant::now();

        while self.flow == Flow::Continue {
            let now = Instant::now();
            if now >= next_tick {
                self.panel.tick(now);
                next_tick = now + self.settings.ui_tick;
            }
            if now >= next_twinkle {
                self.stars.twinkle();
                next_twinkle = now + self.settings.twinkle_tick;
            }

            self.display()?;

            let timeout = next_tick
                .min(next_twinkle)
                .saturating_duration_since(Instant::now());
            self.handle_events(timeout)?;
        }

        debug!(flow = ?self.flow, "leaving timer ui");
        Ok(())
    }

    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.flow = self.panel.handle_key(key, Instant::now());
                }
            }
        }

        Ok(())
    }
}

fn restore_terminal(
    result: io::Result<()>,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
    leave_alternate_screen: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = leave_raw_mode();
    let screen = leave_alternate_screen();
    result.and(raw).and(screen)
}

fn draw(frame: &mut Frame, panel: &ControlPanel, stars: &StarField) {
    let area = frame.size();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let sky = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .style(Style::default().bg(SKY));
    let sky_inner = sky.inner(chunks[0]);
    frame.render_widget(sky, chunks[0]);
    frame.render_widget(
        Paragraph::new(stars.lines(sky_inner.width, sky_inner.height)),
        sky_inner,
    );

    let title = Paragraph::new("🌌 Space Timer")
        .alignment(Alignment::Center)
        .style(Style::default().fg(FOREGROUND))
        .bold();
    frame.render_widget(title, chunks[1]);

    let time = Paragraph::new(panel.time_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(FOREGROUND))
        .bold()
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(time, chunks[2]);

    render_input(
        frame,
        chunks[3],
        "Duration (seconds or mm:ss)",
        panel.duration_input(),
        panel.focus() == Focus::Duration,
    );
    render_input(
        frame,
        chunks[4],
        "Label",
        panel.label_input(),
        panel.focus() == Focus::Label,
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(ACCENT).bg(INPUT))
        .percent(panel.percent().min(100));
    frame.render_widget(gauge, chunks[5]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(chunks[6]);
    let labels = [
        (Focus::Start, "Start", ACCENT),
        (Focus::Pause, "Pause", MUTED),
        (Focus::Reset, "Reset", MUTED),
    ];
    for (i, (focus, label, color)) in labels.into_iter().enumerate() {
        let mut button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(color))
            .block(Block::default().borders(Borders::ALL));
        if panel.focus() == focus {
            button = button.yellow().bold();
        }
        frame.render_widget(button, buttons[i]);
    }

    let status = Paragraph::new(panel.status()).style(Style::default().fg(FOREGROUND));
    frame.render_widget(status, chunks[7]);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(FOREGROUND).bg(INPUT));
    if focused {
        block = block.border_style(Style::default().fg(ACCENT));
    }

    let cursor = if focused { "▏" } else { "" };
    let line = Line::from(vec![Span::raw(value.to_string()), Span::raw(cursor)]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
