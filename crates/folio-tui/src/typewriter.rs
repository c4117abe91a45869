//! Phrase-cycling typewriter advanced by the frame loop

use std::time::Duration;

use folio_core::TypewriterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `chars` characters of phrase `index` are shown
    Typing { index: usize, chars: usize },
    /// Phrase `index` is complete and held on screen
    Pausing { index: usize },
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    char_delay: Duration,
    pause: Duration,
    phase: Phase,
    /// Time accumulated toward the next step
    elapsed: Duration,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, char_delay: Duration, pause: Duration) -> Self {
        let phase = if phrases.is_empty() {
            Phase::Stopped
        } else {
            Phase::Typing { index: 0, chars: 0 }
        };
        Self {
            phrases,
            // A zero delay would spin forever inside advance()
            char_delay: char_delay.max(Duration::from_millis(1)),
            pause: pause.max(Duration::from_millis(1)),
            phase,
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(
            config.phrases.clone(),
            Duration::from_millis(config.char_delay_ms),
            Duration::from_millis(config.pause_ms),
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn phrase_len(&self, index: usize) -> usize {
        self.phrases.get(index).map(|p| p.chars().count()).unwrap_or(0)
    }

    /// Delay before the step out of the current phase
    fn current_delay(&self) -> Duration {
        match self.phase {
            Phase::Pausing { .. } => self.pause,
            _ => self.char_delay,
        }
    }

    /// Perform one transition
    pub fn step(&mut self) {
        self.phase = match self.phase {
            Phase::Typing { index, chars } if chars < self.phrase_len(index) => Phase::Typing {
                index,
                chars: chars + 1,
            },
            Phase::Typing { index, .. } => Phase::Pausing { index },
            Phase::Pausing { index } => Phase::Typing {
                index: (index + 1) % self.phrases.len(),
                chars: 0,
            },
            Phase::Stopped => Phase::Stopped,
        };
    }

    /// Advance by `dt`, stepping once per elapsed interval
    pub fn advance(&mut self, dt: Duration) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.elapsed += dt;
        loop {
            let delay = self.current_delay();
            if self.elapsed < delay {
                break;
            }
            self.elapsed -= delay;
            self.step();
        }
    }

    /// Text currently on screen
    pub fn text(&self) -> &str {
        let (index, chars) = match self.phase {
            Phase::Typing { index, chars } => (index, chars),
            Phase::Pausing { index } => (index, self.phrase_len(index)),
            Phase::Stopped => return "",
        };
        let Some(phrase) = self.phrases.get(index) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> Typewriter {
        Typewriter::new(
            vec!["A".into(), "BC".into()],
            Duration::from_millis(100),
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn test_cycles_phrases_forever() {
        let mut tw = ab();
        let mut shown = vec![tw.text().to_string()];
        for _ in 0..14 {
            tw.step();
            shown.push(tw.text().to_string());
        }
        // "" A (pause) "" B BC (pause) "" A ...
        assert_eq!(
            shown,
            vec!["", "A", "A", "", "B", "BC", "BC", "", "A", "A", "", "B", "BC", "BC", ""]
        );
    }

    #[test]
    fn test_phase_sequence() {
        let mut tw = ab();
        tw.step();
        assert_eq!(tw.phase(), Phase::Typing { index: 0, chars: 1 });
        tw.step();
        assert_eq!(tw.phase(), Phase::Pausing { index: 0 });
        tw.step();
        assert_eq!(tw.phase(), Phase::Typing { index: 1, chars: 0 });
    }

    #[test]
    fn test_advance_uses_char_delay_and_pause() {
        let mut tw = ab();
        tw.advance(Duration::from_millis(99));
        assert_eq!(tw.text(), "");
        tw.advance(Duration::from_millis(1));
        assert_eq!(tw.text(), "A");

        // Completing the phrase takes one more char tick, then the dwell
        tw.advance(Duration::from_millis(100));
        assert_eq!(tw.phase(), Phase::Pausing { index: 0 });
        tw.advance(Duration::from_millis(1999));
        assert_eq!(tw.phase(), Phase::Pausing { index: 0 });
        tw.advance(Duration::from_millis(1));
        assert_eq!(tw.phase(), Phase::Typing { index: 1, chars: 0 });
    }

    #[test]
    fn test_large_dt_catches_up() {
        let mut tw = ab();
        tw.advance(Duration::from_millis(2300));
        assert_eq!(tw.text(), "B");
    }

    #[test]
    fn test_stop_cancels() {
        let mut tw = ab();
        tw.advance(Duration::from_millis(100));
        tw.stop();
        tw.advance(Duration::from_secs(10));
        assert_eq!(tw.phase(), Phase::Stopped);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_empty_phrases_never_run() {
        let tw = Typewriter::new(Vec::new(), Duration::from_millis(100), Duration::from_millis(100));
        assert!(!tw.is_running());
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = Typewriter::new(
            vec!["ÉTÉ".into()],
            Duration::from_millis(10),
            Duration::from_millis(10),
        );
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "ÉT");
    }

    #[test]
    fn test_default_config_phrases() {
        let tw = Typewriter::from_config(&TypewriterConfig::default());
        assert!(tw.is_running());
        assert_eq!(tw.text(), "");
    }
}
