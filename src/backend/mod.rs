mod duration;
mod format;
mod frames;
mod timer;

pub use duration::parse_duration;
pub use format::format_time;
pub use frames::{FrameCycle, ORBITAL_FRAMES, STAR_FRAMES};
pub use timer::{Countdown, TimerState};
