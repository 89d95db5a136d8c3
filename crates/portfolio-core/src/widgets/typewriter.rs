//! Typewriter text effect as a tick-driven state machine.
//!
//! Each [`Typewriter::tick`] performs one visible step (add or remove one
//! character) and returns how long to wait before the next step. The caller
//! owns the timer.

use std::time::Duration;

/// Timing and looping options
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypewriterOptions {
    /// Delay between typed characters
    pub delay: Duration,
    /// Delay between deleted characters
    pub delete_speed: Duration,
    /// Hold time once a phrase is fully typed
    pub pause_for: Duration,
    /// Restart from the first phrase after the last one
    pub looping: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(75),
            delete_speed: Duration::from_millis(50),
            pause_for: Duration::from_millis(1500),
            looping: true,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Cycles through phrases one character at a time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    options: TypewriterOptions,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, options: TypewriterOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        let phase = if phrases.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            phrases,
            options,
            phrase: 0,
            shown: 0,
            phase,
        }
    }

    pub fn options(&self) -> &TypewriterOptions {
        &self.options
    }

    /// Index of the phrase currently being typed or deleted
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Currently visible text
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Advance one step; `None` once the effect has finished.
    pub fn tick(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Done => None,
            Phase::Typing => {
                let len = self.current_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    return Some(self.options.delay);
                }

                let is_last = self.phrase + 1 == self.phrases.len();
                if is_last && !self.options.looping {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Deleting;
                Some(self.options.pause_for)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    return Some(self.options.delete_speed);
                }

                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                Some(self.options.delay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn types_then_pauses_then_deletes() {
        let mut tw = Typewriter::new(["ab", "c"], TypewriterOptions::default());
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), Some(ms(75)));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Some(ms(1500)));
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        assert_eq!(tw.tick(), Some(ms(50)));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Some(ms(75)));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn loops_back_to_first_phrase() {
        let mut tw = Typewriter::new(["x", "y"], TypewriterOptions::default());
        // x typed, x deleted, y typed, y deleted
        for _ in 0..4 {
            assert!(tw.tick().is_some());
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn stops_on_last_phrase_without_loop() {
        let options = TypewriterOptions {
            looping: false,
            ..TypewriterOptions::default()
        };
        let mut tw = Typewriter::new(["hi"], options);
        assert!(tw.tick().is_some());
        assert_eq!(tw.tick(), None);
        assert!(tw.is_done());
        assert_eq!(tw.text(), "hi");
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let mut tw = Typewriter::new(["héllo 👋"], TypewriterOptions::default());
        for _ in 0..2 {
            tw.tick();
        }
        assert_eq!(tw.text(), "hé");
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.text(), "héllo 👋");
    }

    #[test]
    fn no_phrases_is_done() {
        let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterOptions::default());
        assert!(tw.is_done());
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), None);
    }
}
