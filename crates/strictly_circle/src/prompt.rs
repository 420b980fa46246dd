//! Player count prompt, asked before the game core exists.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_segments::PlayerCount;
use tracing::{debug, instrument, warn};

/// Asks for the number of players until a positive integer is entered.
///
/// # Errors
///
/// Fails on I/O errors or when the input ends before a valid answer.
#[instrument(skip_all)]
pub fn prompt_player_count(mut input: impl BufRead, mut output: impl Write) -> Result<PlayerCount> {
    let mut line = String::new();
    loop {
        write!(output, "Enter the number of players: ").context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read player count")?;
        if read == 0 {
            bail!("Input closed before a player count was entered");
        }

        let answer = line.trim();
        match answer.parse::<i64>() {
            Ok(requested) => match PlayerCount::new(requested) {
                Ok(count) => {
                    debug!(players = count.get(), "Player count accepted");
                    return Ok(count);
                }
                Err(e) => {
                    warn!(requested, "Rejected player count");
                    writeln!(output, "{}", e.message).context("Failed to write prompt")?;
                }
            },
            Err(_) => {
                writeln!(output, "Please enter a whole number.").context("Failed to write prompt")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_first_valid_answer() {
        let mut out = Vec::new();
        let count = prompt_player_count(Cursor::new("3\n"), &mut out).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_reprompts_on_bad_answers() {
        let mut out = Vec::new();
        let count = prompt_player_count(Cursor::new("many\n0\n-2\n 2 \n"), &mut out).unwrap();
        assert_eq!(count.get(), 2);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter the number of players:").count(), 4);
        assert!(text.contains("whole number"));
        assert!(text.contains("positive integer"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut out = Vec::new();
        assert!(prompt_player_count(Cursor::new("abc\n"), &mut out).is_err());
    }
}
