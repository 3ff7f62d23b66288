use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::core::game_logic::GameEvent;

/// Line-oriented terminal: prompts on `output`, answers from `input`.
///
/// Generic over the streams so whole sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    pacing: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pacing: Duration) -> Self {
        Self {
            input,
            output,
            pacing,
        }
    }

    /// Shows `question` and reads one line without its line terminator.
    /// Other whitespace is kept. Returns None once input is closed.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints every event that has text and sleeps at pacing points.
    pub fn show(&mut self, events: &[GameEvent]) -> io::Result<()> {
        for event in events {
            if event.is_pause() {
                self.pause()?;
            } else if let Some(message) = event.message() {
                self.say(&message)?;
            }
        }
        Ok(())
    }

    pub fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::logic::CombatEvent;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_prompt_strips_only_line_terminator() {
        let mut console = console("  Rin  \nWarrior\r\n");
        assert_eq!(console.prompt("Name? ").unwrap(), Some("  Rin  ".to_string()));
        assert_eq!(console.prompt("Class? ").unwrap(), Some("Warrior".to_string()));
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Name? Class? ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut console = console("");
        assert_eq!(console.prompt("Name? ").unwrap(), None);
    }

    #[test]
    fn test_show_skips_silent_events() {
        let mut console = console("");
        console
            .show(&[
                GameEvent::Combat(CombatEvent::PlayerAttack {
                    enemy_name: "Goblin".to_string(),
                    damage: 11,
                }),
                GameEvent::Combat(CombatEvent::Pause),
                GameEvent::Moved { position: (0, 1) },
                GameEvent::MoveRejected,
            ])
            .unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(
            out,
            "You attack the Goblin for 11 damage!\nInvalid move! Try again.\n"
        );
    }
}
