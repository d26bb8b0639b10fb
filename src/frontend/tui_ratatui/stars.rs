use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const MIN_SHADE: u8 = 110;
const SEED_SHADE: (u8, u8) = (130, 255);
const TWINKLE_STEP: i16 = 20;
const GLYPHS: &[&str] = &["·", "✦", "⋆"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub glyph: &'static str,
    pub brightness: u8,
}

impl Star {
    pub fn color(&self) -> Color {
        let shade = self.brightness.max(MIN_SHADE);
        Color::Rgb(shade, shade, 255)
    }
}

/// Twinkling backdrop for the timer panel.
pub struct StarField {
    stars: Vec<Star>,
    rng: XorShift,
}

impl StarField {
    pub fn new(count: usize) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::with_seed(count, seed)
    }

    pub fn with_seed(count: usize, seed: u64) -> Self {
        let mut rng = XorShift::new(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.next_unit(),
                y: rng.next_unit(),
                glyph: GLYPHS[rng.next_below(GLYPHS.len() as u64) as usize],
                brightness: rng.next_in(SEED_SHADE.0 as i16, SEED_SHADE.1 as i16) as u8,
            })
            .collect();

        Self { stars, rng }
    }

    #[cfg(test)]
    fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn twinkle(&mut self) {
        for star in self.stars.iter_mut() {
            let delta = self.rng.next_in(-TWINKLE_STEP, TWINKLE_STEP);
            let shade = (star.brightness as i16 + delta).clamp(MIN_SHADE as i16, 255);
            star.brightness = shade as u8;
        }
    }

    /// Rasterizes the field into `height` lines of `width` cells.
    pub fn lines(&self, width: u16, height: u16) -> Vec<Line<'static>> {
        let (width, height) = (width as usize, height as usize);
        let mut grid: Vec<Vec<Option<&Star>>> = vec![vec![None; width]; height];

        if width > 0 && height > 0 {
            for star in &self.stars {
                let col = ((star.x * width as f32) as usize).min(width - 1);
                let row = ((star.y * height as f32) as usize).min(height - 1);
                grid[row][col] = Some(star);
            }
        }

        grid.into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some(star) => Span::styled(star.glyph, Style::default().fg(star.color())),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn next_in(&mut self, low: i16, high: i16) -> i16 {
        let span = (high - low + 1) as u64;
        low + self.next_below(span) as i16
    }

    fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod star_field {
        use super::*;

        #[test]
        fn should_seed_requested_number_of_stars() {
            let field = StarField::with_seed(65, 42);

            assert_eq!(field.stars().len(), 65);
            for star in field.stars() {
                assert!((0.0..1.0).contains(&star.x));
                assert!((0.0..1.0).contains(&star.y));
                assert!(star.brightness >= 130);
            }
        }

        #[test]
        fn should_keep_brightness_in_range_while_twinkling() {
            let mut field = StarField::with_seed(65, 7);

            for _ in 0..500 {
                field.twinkle();
                assert!(field.stars().iter().all(|s| s.brightness >= MIN_SHADE));
            }
        }

        #[test]
        fn should_rasterize_to_requested_size() {
            let field = StarField::with_seed(10, 3);

            let lines = field.lines(20, 4);

            assert_eq!(lines.len(), 4);
            assert!(lines.iter().all(|line| line.spans.len() == 20));
        }

        #[test]
        fn should_handle_empty_area() {
            let field = StarField::with_seed(10, 3);

            assert!(field.lines(0, 0).is_empty());
        }
    }

    mod star {
        use super::*;

        #[test]
        fn should_tint_towards_blue() {
            let star = Star {
                x: 0.0,
                y: 0.0,
                glyph: "·",
                brightness: 200,
            };

            assert_eq!(star.color(), Color::Rgb(200, 200, 255));
        }
    }
}
