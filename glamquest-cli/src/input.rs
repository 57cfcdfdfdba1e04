//! Validated integer input with indefinite re-prompting.

use std::io::{self, BufRead, Write};

use glamquest_game::{Character, StatKind};

/// Re-prompting reader over any buffered line source.
///
/// Invalid answers never abort: non-numeric and out-of-range input
/// re-prompt until something usable arrives. Only a closed stream
/// surfaces as an error.
pub struct InputReader<R> {
    source: R,
}

impl<R: BufRead> InputReader<R> {
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.source.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a number from `valid` arrives.
    pub fn read_choice(&mut self, prompt: &str, valid: &[u32]) -> io::Result<u32> {
        loop {
            print!("{prompt}");
            io::stdout().flush()?;
            let Some(line) = self.next_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed",
                ));
            };
            match line.parse::<u32>() {
                Ok(choice) if valid.contains(&choice) => return Ok(choice),
                Ok(_) => println!("Please enter a valid choice: {valid:?}"),
                Err(_) => println!("Not quite right! Please enter a number."),
            }
        }
    }

    /// Prompt until any non-negative number arrives.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            print!("{prompt}");
            io::stdout().flush()?;
            let Some(line) = self.next_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed",
                ));
            };
            match line.parse::<u32>() {
                Ok(amount) => return Ok(amount),
                Err(_) => println!("Not quite right! Please enter a number."),
            }
        }
    }

    /// One-based pick over the party, returning the zero-based index.
    pub fn select_party_member(&mut self, party: &[Character]) -> io::Result<usize> {
        println!("Choose a party member:");
        for (idx, member) in party.iter().enumerate() {
            println!("{}. {}", idx + 1, member.name());
        }
        let valid: Vec<u32> = (1..=party.len() as u32).collect();
        let choice = self.read_choice("Enter the number of the chosen party member: ", &valid)?;
        Ok(choice as usize - 1)
    }

    /// One-based pick over a member's selectable stats, in display order.
    pub fn select_stat(&mut self, character: &Character) -> io::Result<StatKind> {
        println!("Choose a stat for {}:", character.name());
        let entries = character.stat_entries();
        for (idx, entry) in entries.iter().enumerate() {
            println!("{}. {} ({})", idx + 1, entry.name(), entry.value);
        }
        let valid: Vec<u32> = (1..=entries.len() as u32).collect();
        let choice = self.read_choice("Enter the number of the stat to use: ", &valid)?;
        Ok(entries[choice as usize - 1].kind)
    }
}
