use std::io::{self, BufRead, Write};

use crate::application::{AppError, SuiteService};
use crate::domain::{EntryKind, format_cents, parse_cents};
use crate::game::{GuessOutcome, GuessingGame, SECRET_RANGE};
use crate::storage::Store;

use super::render::{write_notes, write_summary};

/// Whether the menu loop keeps going after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive menu session over any line-based input and text output.
///
/// End of input anywhere is treated as "save and exit".
pub struct Session<R, W> {
    service: SuiteService,
    input: R,
    output: W,
    new_game: fn() -> GuessingGame,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: SuiteService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            new_game: GuessingGame::new,
        }
    }

    /// Load the store and start a session, telling the user when saved data
    /// had to be discarded.
    pub fn open(store: Store, input: R, mut output: W) -> io::Result<Self> {
        let (service, recovered_from) = SuiteService::open(store);
        if let Some(err) = recovered_from {
            writeln!(output, "⚠️  Could not load saved data ({err}).")?;
            writeln!(
                output,
                "   Starting with an empty ledger and no notes. Saving will overwrite {}.",
                service.store().path().display()
            )?;
        }
        Ok(Self::new(service, input, output))
    }

    /// Replace how new guessing games are created.
    pub fn with_game_factory(mut self, new_game: fn() -> GuessingGame) -> Self {
        self.new_game = new_game;
        self
    }

    /// Run the main menu until the user exits, then save.
    /// Returns the service so callers can inspect the final state.
    pub fn run(mut self) -> io::Result<SuiteService> {
        while self.main_menu()? == Flow::Continue {}

        match self.service.save() {
            Ok(()) => writeln!(
                self.output,
                "💾 Data saved to {}",
                self.service.store().path().display()
            )?,
            Err(err) => writeln!(self.output, "❌ Failed to save data: {err}")?,
        }
        writeln!(self.output, "👋 Goodbye!")?;
        self.output.flush()?;
        Ok(self.service)
    }

    fn main_menu(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "===== 🗂️  Productivity Suite =====")?;
        writeln!(self.output, "1. 🎮 Number guessing game")?;
        writeln!(self.output, "2. 💰 Budget tracker")?;
        writeln!(self.output, "3. 📝 Notes")?;
        writeln!(self.output, "4. 💾 Save and exit")?;

        let Some(choice) = self.prompt("Choose an option: ")? else {
            return Ok(Flow::Exit);
        };
        match choice.trim() {
            "1" => self.play_game(),
            "2" => self.budget_menu(),
            "3" => self.notes_menu(),
            "4" => Ok(Flow::Exit),
            _ => {
                writeln!(self.output, "❌ Invalid choice, please pick 1-4.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn budget_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- 💰 Budget Tracker ---")?;
            writeln!(self.output, "a. Add income")?;
            writeln!(self.output, "b. Add expense")?;
            writeln!(self.output, "c. View summary")?;
            writeln!(self.output, "d. Back")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Flow::Exit);
            };
            let flow = match choice.trim().to_lowercase().as_str() {
                "a" => self.add_entry(EntryKind::Income)?,
                "b" => self.add_entry(EntryKind::Expense)?,
                "c" => {
                    let report = self.service.ledger_report();
                    write_summary(&mut self.output, &report)?;
                    Flow::Continue
                }
                "d" => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "❌ Invalid choice, please pick a-d.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn add_entry(&mut self, kind: EntryKind) -> io::Result<Flow> {
        let label_prompt = match kind {
            EntryKind::Income => "Income source: ",
            EntryKind::Expense => "Expense category: ",
        };
        let Some(label) = self.prompt(label_prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Flow::Exit);
        };

        let result = parse_cents(&amount)
            .map_err(AppError::from)
            .and_then(|cents| self.service.record(kind, &label, cents));
        match result {
            Ok(update) => {
                let icon = match update.kind {
                    EntryKind::Income => "💵",
                    EntryKind::Expense => "🧾",
                };
                writeln!(
                    self.output,
                    "{icon} Added {} {} to {} (total: {})",
                    format_cents(update.added),
                    update.kind,
                    update.label,
                    format_cents(update.running_total)
                )?;
            }
            Err(err) => writeln!(self.output, "❌ {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn notes_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- 📝 Notes ---")?;
            writeln!(self.output, "a. Add note")?;
            writeln!(self.output, "b. View notes")?;
            writeln!(self.output, "c. Back")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Flow::Exit);
            };
            match choice.trim().to_lowercase().as_str() {
                "a" => {
                    let Some(content) = self.prompt("Note: ")? else {
                        return Ok(Flow::Exit);
                    };
                    match self.service.add_note(&content) {
                        Ok(note) => writeln!(
                            self.output,
                            "✅ Note added at {}",
                            note.formatted_timestamp()
                        )?,
                        Err(err) => writeln!(self.output, "❌ {err}")?,
                    }
                }
                "b" => write_notes(&mut self.output, self.service.notes())?,
                "c" => return Ok(Flow::Continue),
                _ => writeln!(self.output, "❌ Invalid choice, please pick a-c.")?,
            }
        }
    }

    fn play_game(&mut self) -> io::Result<Flow> {
        let mut game = (self.new_game)();
        writeln!(
            self.output,
            "🔢 Guess the number between {} and {}. You have {} lives.",
            SECRET_RANGE.start(),
            SECRET_RANGE.end(),
            game.lives_left()
        )?;

        while !game.is_finished() {
            let prompt = format!("Attempt {}: enter your number: ", game.next_attempt());
            let Some(raw) = self.prompt(&prompt)? else {
                return Ok(Flow::Exit);
            };
            let Ok(value) = raw.trim().parse::<i64>() else {
                writeln!(self.output, "❌ Invalid input! Please enter a valid integer.")?;
                continue;
            };
            let outcome = u32::try_from(value)
                .map(|guess| game.guess(guess))
                .unwrap_or(GuessOutcome::OutOfRange);

            match outcome {
                GuessOutcome::OutOfRange => writeln!(
                    self.output,
                    "❌ Please enter a number between {} and {}.",
                    SECRET_RANGE.start(),
                    SECRET_RANGE.end()
                )?,
                GuessOutcome::TooHigh { lives_left } => {
                    writeln!(self.output, "📈 Too high! ({lives_left} lives left)")?
                }
                GuessOutcome::TooLow { lives_left } => {
                    writeln!(self.output, "📉 Too low! ({lives_left} lives left)")?
                }
                GuessOutcome::Won { attempts } => {
                    writeln!(self.output, "🏆 You win! Found it in {attempts} attempt(s).")?
                }
                GuessOutcome::Lost { secret } => {
                    writeln!(self.output, "☹️  You lose! The number was {secret}.")?
                }
                GuessOutcome::Finished => break,
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `text`, read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
