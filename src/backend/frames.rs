pub const ORBITAL_FRAMES: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
pub const STAR_FRAMES: &[&str] = &["✦", "✧", "⋆", "·"];

/// Endless walk over a fixed frame sequence, one step per tick.
#[derive(Clone, Debug)]
pub struct FrameCycle {
    frames: &'static [&'static str],
    index: usize,
}

impl FrameCycle {
    pub fn new(frames: &'static [&'static str]) -> Self {
        Self { frames, index: 0 }
    }
}

impl Iterator for FrameCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frames.is_empty() {
            return None;
        }

        let frame = self.frames[self.index];
        self.index = (self.index + 1) % self.frames.len();
        Some(frame)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod next {
        use super::*;

        #[test]
        fn should_start_at_first_frame() {
            let mut orbit = FrameCycle::new(ORBITAL_FRAMES);

            assert_eq!(orbit.next(), Some("🌑"));
            assert_eq!(orbit.next(), Some("🌒"));
        }

        #[test]
        fn should_wrap_after_last_frame() {
            let stars: Vec<&str> = FrameCycle::new(STAR_FRAMES).take(6).collect();

            assert_eq!(stars, vec!["✦", "✧", "⋆", "·", "✦", "✧"]);
        }

        #[test]
        fn should_end_on_empty_sequence() {
            let mut empty = FrameCycle::new(&[]);

            assert_eq!(empty.next(), None);
        }
    }
}
