use std::io::{self, BufRead, Write};

use crate::error::GameError;

/// What the game needs from whoever sits at the table.
pub trait Table {
    /// Blocks until one of `options` is picked, or `default` accepted.
    fn ask_choice(
        &mut self,
        message: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, GameError>;

    fn notify(&mut self, message: &str);
}

/// Asks through `table` and refuses answers outside `options`.
pub fn ask<T: Table + ?Sized>(
    table: &mut T,
    message: &str,
    options: &[&str],
    default: Option<&str>,
) -> Result<String, GameError> {
    let choice = table.ask_choice(message, options, default)?;
    if options.contains(&choice.as_str()) {
        Ok(choice)
    } else {
        Err(GameError::InvalidChoice {
            choice,
            options: options.iter().map(|o| o.to_string()).collect(),
        })
    }
}

/// Line-oriented table over any reader and writer.
pub struct TerminalTable<R, W> {
    input: R,
    output: W,
}

impl TerminalTable<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        TerminalTable::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalTable<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalTable { input, output }
    }

    fn read_answer(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }

    /// Free-form answer, used for the player's name.
    pub fn ask_text(&mut self, message: &str) -> Result<String, GameError> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;
        self.read_answer()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Table for TerminalTable<R, W> {
    fn ask_choice(
        &mut self,
        message: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, GameError> {
        loop {
            write!(self.output, "{message} [{}]", options.join("/"))?;
            if let Some(default) = default {
                write!(self.output, " ({default})")?;
            }
            write!(self.output, ": ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match default {
                Some(default) if answer.is_empty() => return Ok(default.to_string()),
                _ => {}
            }
            let answer = answer.to_lowercase();
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Please select one of the available options")?;
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table(input: &str) -> TerminalTable<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalTable::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reprompts_until_valid() {
        let mut t = table("maybe\n  STICK \n");
        let answer = t.ask_choice("Hit or stick?", &["hit", "stick"], None).unwrap();
        assert_eq!(answer, "stick");
        let printed = String::from_utf8(t.into_output()).unwrap();
        assert_eq!(printed.matches("Hit or stick? [hit/stick]: ").count(), 2);
        assert!(printed.contains("Please select one of the available options"));
    }

    #[test]
    fn blank_answer_takes_default() {
        let mut t = table("\n");
        let answer = t.ask_choice("Ready?", &["yes", "no"], Some("yes")).unwrap();
        assert_eq!(answer, "yes");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut t = table("");
        let err = t.ask_choice("Ready?", &["yes", "no"], None).unwrap_err();
        assert!(matches!(err, GameError::Input(_)));
    }

    #[test]
    fn notify_writes_a_line() {
        let mut t = table("");
        t.notify("hello");
        assert_eq!(t.into_output(), b"hello\n");
    }

    struct Fixed(&'static str);

    impl Table for Fixed {
        fn ask_choice(&mut self, _: &str, _: &[&str], _: Option<&str>) -> Result<String, GameError> {
            Ok(self.0.to_string())
        }

        fn notify(&mut self, _: &str) {}
    }

    #[test]
    fn ask_rejects_out_of_set_answers() {
        assert_eq!(ask(&mut Fixed("no"), "Ready?", &["yes", "no"], None).unwrap(), "no");
        let err = ask(&mut Fixed("later"), "Ready?", &["yes", "no"], None).unwrap_err();
        assert!(matches!(err, GameError::InvalidChoice { ref choice, .. } if choice == "later"));
    }
}
