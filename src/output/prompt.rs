//! Yes/no confirmation.

use console::{style, Term};

/// Answer to a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// The prompt could not be answered (closed input, interrupted).
    Cancelled,
}

/// Asks the user whether a destructive step may proceed.
pub trait Confirm {
    fn confirm(&self, message: &str) -> Confirmation;
}

/// Always gives the same answer. Backs `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub Confirmation);

impl Confirm for FixedConfirm {
    fn confirm(&self, message: &str) -> Confirmation {
        tracing::debug!("{} -> {:?}", message, self.0);
        self.0
    }
}

/// Reads a y/N answer from the terminal.
#[derive(Debug, Clone)]
pub struct TerminalConfirm {
    term: Term,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self { term: Term::stderr() }
    }
}

impl Default for TerminalConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> Confirmation {
        if let Err(e) = self
            .term
            .write_str(&format!("{} {} [y/N] ", style("?").cyan().bold(), message))
        {
            tracing::debug!("Prompt write failed: {}", e);
            return Confirmation::Cancelled;
        }

        match self.term.read_line() {
            Ok(answer) => parse_answer(&answer),
            Err(e) => {
                tracing::debug!("Prompt read failed: {}", e);
                Confirmation::Cancelled
            }
        }
    }
}

fn parse_answer(answer: &str) -> Confirmation {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Yes,
        _ => Confirmation::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Confirmation::Yes);
        assert_eq!(parse_answer(" YES "), Confirmation::Yes);
        assert_eq!(parse_answer(""), Confirmation::No);
        assert_eq!(parse_answer("nope"), Confirmation::No);
    }

    #[test]
    fn test_fixed_confirm() {
        assert_eq!(FixedConfirm(Confirmation::Yes).confirm("go?"), Confirmation::Yes);
    }
}
