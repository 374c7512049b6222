//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

use crate::error::{ContikerError, Result};

/// Ask `question` until the answer is recognisable.
///
/// Any prefix of "yes" or "no" is accepted, case-insensitively. An empty
/// answer means no.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "{} [y/N]: ", question)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(ContikerError::Prompt(
                "no answer received before end of input".to_string(),
            ));
        }

        let answer = answer.trim().to_lowercase();
        if answer.is_empty() || "no".starts_with(&answer) {
            return Ok(false);
        }
        if "yes".starts_with(&answer) {
            return Ok(true);
        }

        writeln!(output, "Invalid answer. Only y/n is accepted.")?;
    }
}

/// [`confirm`] on the terminal
pub fn confirm_stdin(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm(question, &mut input, &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (Result<bool>, String) {
        let mut output = Vec::new();
        let result = confirm("Reset?", &mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_variants() {
        for answer in ["y\n", "Y\n", "yes\n", "YES\n", "ye\n"] {
            assert!(ask(answer).0.unwrap(), "{answer:?}");
        }
    }

    #[test]
    fn test_no_variants() {
        for answer in ["n\n", "No\n", "\n"] {
            assert!(!ask(answer).0.unwrap(), "{answer:?}");
        }
    }

    #[test]
    fn test_reasks_on_garbage() {
        let (result, output) = ask("maybe\ny\n");
        assert!(result.unwrap());
        assert_eq!(output.matches("Reset? [y/N]: ").count(), 2);
        assert!(output.contains("Invalid answer"));
    }

    #[test]
    fn test_eof_is_error() {
        assert!(matches!(ask("").0, Err(ContikerError::Prompt(_))));
    }
}
