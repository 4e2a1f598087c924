//! Blocking prompt loops with local error recovery.
//!
//! Each loop writes a prompt, reads one line, and either returns the
//! validated value or reports what was wrong and asks again. There is no
//! retry limit: a loop ends only with a valid answer or a dead stream.
//! The reader and writer are held explicitly, so the same loops drive a
//! real terminal and a scripted test buffer alike.

use std::io::{self, BufRead, Write};

use crate::error::{PromptError, PromptResult};
use crate::output;
use crate::screen;
use crate::style::Tint;

const NUMBER_MESSAGE: &str = "Error! Enter a valid number.";

/// How prompt loops present recoverable input errors.
#[derive(Debug, Clone)]
pub struct PromptStyle {
    /// Tint applied to error messages.
    pub error_tint: Tint,
    /// Clear the screen before showing an error message.
    pub clear_on_error: bool,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            error_tint: Tint::Red,
            clear_on_error: true,
        }
    }
}

impl PromptStyle {
    /// Set the error tint.
    pub fn with_error_tint(mut self, tint: Tint) -> Self {
        self.error_tint = tint;
        self
    }

    /// Enable or disable clearing the screen before error messages.
    pub fn with_clear_on_error(mut self, clear: bool) -> Self {
        self.clear_on_error = clear;
        self
    }
}

/// Validation rules for [`Prompter::read_name`].
#[derive(Debug, Clone)]
pub struct NameRules {
    /// Accept alphabetic characters only.
    pub letters_only: bool,
    /// Minimum length in characters, counted after normalization.
    pub min_len: usize,
    /// Maximum length in characters.
    pub max_len: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            letters_only: true,
            min_len: 3,
            max_len: 15,
        }
    }
}

impl NameRules {
    /// Enable or disable the letters-only restriction.
    pub fn with_letters_only(mut self, letters_only: bool) -> Self {
        self.letters_only = letters_only;
        self
    }

    /// Set the accepted length range in characters.
    pub fn with_length(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }
}

/// Trim surrounding whitespace and standardize casing: first character
/// uppercased, the rest lowercased.
pub fn normalize_name(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Blocking prompt loops over an explicit reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    style: PromptStyle,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// A prompter wired to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader/writer pair with default styling.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            style: PromptStyle::default(),
        }
    }

    /// Replace the error presentation style.
    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write the prompt, flush, and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn show_error(&mut self, message: &str) -> PromptResult<()> {
        if self.style.clear_on_error {
            screen::clear_to(&mut self.writer)?;
        }
        writeln!(self.writer, "{}", self.style.error_tint.apply(message))?;
        Ok(())
    }

    /// Ask for an integer until one inside the optional bounds arrives.
    ///
    /// Unparseable text and out-of-range values are reported and asked
    /// again; only stream failure ends the loop early.
    pub fn read_int(
        &mut self,
        prompt: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> PromptResult<i64> {
        loop {
            let raw = self.ask(prompt)?;
            match raw.parse::<i64>() {
                Ok(value) if outside(value, min, max) => {
                    self.show_error(&range_message(min, max))?;
                }
                Ok(value) => return Ok(value),
                Err(_) => self.show_error(NUMBER_MESSAGE)?,
            }
        }
    }

    /// Ask for a decimal number until one inside the optional bounds
    /// arrives. Same recovery behavior as [`Prompter::read_int`].
    pub fn read_float(
        &mut self,
        prompt: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> PromptResult<f64> {
        loop {
            let raw = self.ask(prompt)?;
            match raw.parse::<f64>() {
                Ok(value) if outside(value, min, max) => {
                    self.show_error(&range_message(min, max))?;
                }
                Ok(value) => return Ok(value),
                Err(_) => self.show_error(NUMBER_MESSAGE)?,
            }
        }
    }

    /// Ask for a name until it satisfies the rules.
    ///
    /// Input is trimmed and case-standardized first, so the rules always
    /// judge the exact value the caller will receive.
    pub fn read_name(&mut self, prompt: &str, rules: &NameRules) -> PromptResult<String> {
        loop {
            let name = normalize_name(&self.ask(prompt)?);
            if !(rules.min_len..=rules.max_len).contains(&name.chars().count()) {
                self.show_error(&format!(
                    "Name must be between {} and {} characters.",
                    rules.min_len, rules.max_len
                ))?;
            } else if rules.letters_only
                && (name.is_empty() || !name.chars().all(char::is_alphabetic))
            {
                self.show_error("Please use only letters for the name.")?;
            } else {
                return Ok(name);
            }
        }
    }

    /// Ask a yes/no question, accepting `y`, `yes`, `n`, `no` in any case.
    ///
    /// The ` (Y/N): ` suffix is appended to the question automatically.
    pub fn confirm(&mut self, question: &str) -> PromptResult<bool> {
        loop {
            let answer = self.ask(&format!("{question} (Y/N): "))?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.show_error("Invalid response! Please type Y or N.")?,
            }
        }
    }

    /// Print an enumerated menu and ask for a selection by number.
    ///
    /// Returns `Ok(None)` for an empty list without prompting at all. The
    /// menu is printed once; out-of-range choices only repeat the prompt.
    pub fn choose<'a, T: std::fmt::Display>(
        &mut self,
        items: &'a [T],
        prompt: &str,
    ) -> PromptResult<Option<&'a T>> {
        if items.is_empty() {
            return Ok(None);
        }
        output::menu(&mut self.writer, items)?;
        loop {
            let choice = self.read_int(prompt, None, None)?;
            if choice >= 1 && (choice as usize) <= items.len() {
                return Ok(items.get(choice as usize - 1));
            }
            self.show_error(&format!(
                "Error! Choose a number between 1 and {}.",
                items.len()
            ))?;
        }
    }

    /// Announce "Press ENTER to continue" and wait for the next line.
    pub fn pause(&mut self) -> PromptResult<()> {
        write!(self.writer, "\nPress ENTER to continue")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(())
    }
}

fn outside<T: PartialOrd + Copy>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_some_and(|lo| value < lo) || max.is_some_and(|hi| value > hi)
}

fn range_message<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("Error! Enter a number between {lo} and {hi}."),
        (Some(lo), None) => format!("Error! Enter a number of at least {lo}."),
        (None, Some(hi)) => format!("Error! Enter a number of at most {hi}."),
        (None, None) => NUMBER_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_style(
            PromptStyle::default()
                .with_error_tint(Tint::Plain)
                .with_clear_on_error(false),
        )
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = prompter.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn read_int_retries_until_valid() {
        let mut p = scripted("abc\n0\n5\n");
        let value = p.read_int("Pick: ", Some(1), Some(10)).unwrap();
        assert_eq!(value, 5);
        let out = written(p);
        assert_eq!(out.matches("Pick: ").count(), 3);
        assert!(out.contains("Error! Enter a valid number."));
        assert!(out.contains("Error! Enter a number between 1 and 10."));
    }

    #[test]
    fn read_int_without_bounds_accepts_anything_parseable() {
        let mut p = scripted("-7\n");
        assert_eq!(p.read_int("n: ", None, None).unwrap(), -7);
    }

    #[test]
    fn read_int_reports_one_sided_bounds() {
        let mut p = scripted("0\n3\n");
        assert_eq!(p.read_int("n: ", Some(1), None).unwrap(), 3);
        assert!(written(p).contains("Error! Enter a number of at least 1."));
    }

    #[test]
    fn read_int_fails_once_input_closes() {
        let mut p = scripted("abc\n");
        let result = p.read_int("n: ", None, None);
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    #[test]
    fn read_float_retries_and_accepts_decimals() {
        let mut p = scripted("x\n99\n1.5\n");
        let value = p.read_float("f: ", Some(0.0), Some(2.0)).unwrap();
        assert!((value - 1.5).abs() < f64::EPSILON);
        let out = written(p);
        assert!(out.contains("Error! Enter a valid number."));
        assert!(out.contains("Error! Enter a number between 0 and 2."));
    }

    #[test]
    fn read_name_trims_and_standardizes_casing() {
        let mut p = scripted("  rUBY  \n");
        assert_eq!(p.read_name("Name: ", &NameRules::default()).unwrap(), "Ruby");
    }

    #[test]
    fn read_name_rejects_names_still_short_after_trimming() {
        let mut p = scripted(" al \nCora\n");
        assert_eq!(p.read_name("Name: ", &NameRules::default()).unwrap(), "Cora");
        assert!(written(p).contains("Name must be between 3 and 15 characters."));
    }

    #[test]
    fn read_name_rejects_digits_when_letters_only() {
        let mut p = scripted("R2D2\nArtoo\n");
        assert_eq!(
            p.read_name("Name: ", &NameRules::default()).unwrap(),
            "Artoo"
        );
        assert!(written(p).contains("Please use only letters for the name."));
    }

    #[test]
    fn read_name_allows_digits_when_rules_relax() {
        let mut p = scripted("R2D2\n");
        let rules = NameRules::default().with_letters_only(false);
        assert_eq!(p.read_name("Name: ", &rules).unwrap(), "R2d2");
    }

    #[test]
    fn confirm_accepts_word_and_letter_forms() {
        let mut p = scripted("YES\n");
        assert!(p.confirm("Proceed?").unwrap());
        let mut p = scripted("n\n");
        assert!(!p.confirm("Proceed?").unwrap());
    }

    #[test]
    fn confirm_retries_on_anything_else() {
        let mut p = scripted("maybe\ny\n");
        assert!(p.confirm("Proceed?").unwrap());
        let out = written(p);
        assert!(out.contains("Proceed? (Y/N): "));
        assert!(out.contains("Invalid response! Please type Y or N."));
    }

    #[test]
    fn choose_from_empty_list_is_none() {
        let mut p = scripted("");
        let items: [&str; 0] = [];
        assert!(p.choose(&items, "Choose: ").unwrap().is_none());
    }

    #[test]
    fn choose_prints_menu_and_returns_selection() {
        let mut p = scripted("2\n");
        let items = ["apple", "banana", "cherry"];
        let choice = p.choose(&items, "Choose: ").unwrap();
        assert_eq!(choice, Some(&"banana"));
        let out = written(p);
        assert!(out.contains("1. apple\n2. banana\n3. cherry\n"));
    }

    #[test]
    fn choose_rejects_out_of_range_and_garbage() {
        let mut p = scripted("9\nzzz\n1\n");
        let items = ["apple", "banana", "cherry"];
        assert_eq!(p.choose(&items, "Choose: ").unwrap(), Some(&"apple"));
        let out = written(p);
        assert!(out.contains("Error! Choose a number between 1 and 3."));
        assert!(out.contains("Error! Enter a valid number."));
    }

    #[test]
    fn pause_waits_for_a_line() {
        let mut p = scripted("\n");
        p.pause().unwrap();
        assert!(written(p).contains("Press ENTER to continue"));
    }

    #[test]
    fn pause_fails_on_closed_input() {
        let mut p = scripted("");
        assert!(matches!(p.pause(), Err(PromptError::Closed)));
    }

    #[test]
    fn clear_on_error_queues_control_sequences() {
        let mut p = Prompter::new(Cursor::new(b"x\n4\n".to_vec()), Vec::new()).with_style(
            PromptStyle::default().with_error_tint(Tint::Plain),
        );
        assert_eq!(p.read_int("n: ", None, None).unwrap(), 4);
        assert!(written(p).contains('\u{1b}'));
    }

    #[test]
    fn normalize_name_handles_casing_and_space() {
        assert_eq!(normalize_name("  hello  "), "Hello");
        assert_eq!(normalize_name("hELLO wORLD"), "Hello world");
        assert_eq!(normalize_name("x"), "X");
        assert_eq!(normalize_name(""), "");
    }
}
