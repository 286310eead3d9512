//! Interactive expense entry
//!
//! Reads one validated expense from a line-oriented input. Invalid answers are
//! reported and asked again without limit; only the end of input stops a
//! prompt early.

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money, MoneyParseError};

/// Line-based prompter over any input/output pair
///
/// `Prompter::stdio()` is used by the binary; tests drive it with a
/// `Cursor` and a `Vec<u8>`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink, for callers that print between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a complete expense: name, amount and category
    pub fn collect_expense(&mut self) -> TrackerResult<Expense> {
        writeln!(self.output, "Getting User Expense...")?;

        let name = self.read_name()?;
        let amount = self.read_amount()?;
        let category = self.read_category()?;

        Expense::new(name, amount, category)
            .map_err(|e| TrackerError::Validation(e.to_string()))
    }

    /// Ask whether to record another expense
    ///
    /// Only "y" (any case, surrounding whitespace ignored) means yes. End of
    /// input counts as no.
    pub fn confirm_another(&mut self) -> TrackerResult<bool> {
        match self.prompt("Would you like to add another expense? (y/n): ", "an answer") {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("y")),
            Err(e) if e.is_input_closed() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn read_name(&mut self) -> TrackerResult<String> {
        loop {
            let name = self.prompt("Enter expense name: ", "an expense name")?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "Expense name cannot be empty. Please try again!")?;
        }
    }

    fn read_amount(&mut self) -> TrackerResult<Money> {
        loop {
            let raw = self.prompt("Enter expense amount: ", "an expense amount")?;
            match Money::parse_amount(&raw) {
                Ok(amount) => return Ok(amount),
                Err(MoneyParseError::NotPositive(_)) => {
                    writeln!(self.output, "Amount must be greater than zero. Please try again!")?;
                }
                Err(MoneyParseError::InvalidFormat(_)) => {
                    writeln!(
                        self.output,
                        "Invalid amount. Enter a number with up to two decimal places, \
                         e.g. 12 or 12.34 (no sign or currency symbol)."
                    )?;
                }
                Err(MoneyParseError::TooLarge(_)) => {
                    writeln!(self.output, "Amount is too large. Please try again!")?;
                }
            }
        }
    }

    fn read_category(&mut self) -> TrackerResult<Category> {
        let categories = Category::all();

        loop {
            writeln!(self.output, "Select a category: ")?;
            for (i, category) in categories.iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, category)?;
            }

            let prompt = format!("Enter a category number [1 - {}]: ", categories.len());
            let raw = self.prompt(&prompt, "a category number")?;

            let Ok(number) = raw.parse::<i64>() else {
                writeln!(self.output, "Please enter a number. Please try again!")?;
                continue;
            };

            match usize::try_from(number).ok().and_then(Category::from_menu_number) {
                Some(category) => return Ok(category),
                None => writeln!(self.output, "Invalid category. Please try again!")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, prompt: &str, waiting_for: &'static str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(TrackerError::InputClosed(waiting_for));
        }

        Ok(line.trim().to_string())
    }
}
