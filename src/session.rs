//! Interactive prompt loop.
//!
//! Asks for every field, retries invalid class and stat answers, then
//! hands the collected strings to [`build_from_prompts`].

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use error::handle_error;
use hero::{Character, Class, StatCode};
use save::{CharacterStore, ensure_json_extension};

use crate::config::{Arguments, Mode};
use crate::prompts::{ItemDraft, StatInput, build_from_prompts, normalize_class_label, parse_stat_input};

pub struct Session<R, W> {
    input: R,
    output: W,
    store: CharacterStore,
    default_file: PathBuf,
    mode: Option<Mode>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: CharacterStore, arguments: &Arguments) -> Self {
        Self {
            input,
            output,
            store,
            default_file: arguments.file.clone(),
            mode: arguments.mode,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mode = match self.mode {
            Some(mode) => mode,
            None => self.prompt_mode()?,
        };
        match mode {
            Mode::Build => self.build_mode(),
            Mode::Load => self.load_mode(),
        }
    }

    fn prompt_mode(&mut self) -> Result<Mode> {
        loop {
            let answer =
                self.ask("Do you want to [load] existing characters or [build] new ones? ")?;
            match answer.to_lowercase().as_str() {
                "load" => return Ok(Mode::Load),
                "build" => return Ok(Mode::Build),
                _ => writeln!(self.output, "Invalid choice. Type 'load' or 'build'.")?,
            }
        }
    }

    fn build_mode(&mut self) -> Result<()> {
        let mut characters = Vec::new();
        loop {
            let character = self.build_character()?;
            writeln!(self.output, "Created {}", character)?;
            characters.push(character);

            if !self.confirm("Create another character? (y/n): ")? {
                break;
            }
        }

        let prompt = format!("Save to file (default: {}): ", self.default_file.display());
        let answer = self.ask(&prompt)?;
        let file = if answer.is_empty() {
            self.default_file.clone()
        } else {
            PathBuf::from(answer)
        };
        let file = ensure_json_extension(file);

        match self.store.save(&characters, &file) {
            Ok(report) => {
                for skipped in &report.skipped {
                    writeln!(self.output, "Skipped: {}", handle_error(skipped))?;
                }
                writeln!(
                    self.output,
                    "\nSaved {} character(s) to {}",
                    report.saved,
                    file.display()
                )?;
            }
            Err(e) => writeln!(self.output, "Error writing to {}: {}", file.display(), handle_error(&e))?,
        }
        Ok(())
    }

    fn build_character(&mut self) -> Result<Character> {
        let name = self.ask("Character name: ")?;

        let labels: Vec<&str> = Class::labels().collect();
        let class_prompt = format!("Character class (Valid classes: {}): ", labels.join(", "));
        let class = loop {
            let label = normalize_class_label(&self.ask(&class_prompt)?);
            if Class::from_label(&label).is_ok() {
                break label;
            }
            writeln!(self.output, "Invalid class choice! Please select from the listed classes.")?;
        };

        let mut stats = Vec::new();
        for code in StatCode::all() {
            let prompt = format!("{} (enter to skip): ", code);
            loop {
                let raw = self.ask(&prompt)?;
                match parse_stat_input(&raw) {
                    StatInput::Skip => break,
                    StatInput::Value(_) => {
                        stats.push((code.code(), raw));
                        break;
                    }
                    StatInput::Invalid => writeln!(
                        self.output,
                        "Invalid input! Please enter a positive whole number."
                    )?,
                }
            }
        }

        let mut drafts = Vec::new();
        while self.confirm("Add item? (y/n): ")? {
            let item_name = self.ask("Item name: ")?;
            let description = self.ask("Description: ")?;
            let value = loop {
                let raw = self.ask("Value: ")?;
                if raw.parse::<i64>().is_ok() {
                    break raw;
                }
                writeln!(self.output, "Invalid input! Please enter a whole number.")?;
            };
            drafts.push(ItemDraft::new(item_name, description, value));
        }

        build_from_prompts(&name, &class, stats, &drafts).context("building character")
    }

    fn load_mode(&mut self) -> Result<()> {
        let available = self.store.list_rosters().unwrap_or_default();
        if !available.is_empty() {
            let names: Vec<String> = available.iter().map(|p| p.display().to_string()).collect();
            writeln!(self.output, "Available rosters: {}", names.join(", "))?;
        }

        let answer = self.ask("Enter file to load characters from (e.g. hero.json): ")?;
        if answer.is_empty() {
            writeln!(self.output, "No file name provided.")?;
            return Ok(());
        }
        let file = ensure_json_extension(answer);

        let characters = match self.store.load(&file) {
            Ok(characters) => characters,
            Err(e) => {
                writeln!(self.output, "Error: {}", handle_error(&e))?;
                return Ok(());
            }
        };

        writeln!(self.output, "\nLoaded {} character(s):\n", characters.len())?;
        for (i, character) in characters.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, character)?;
            writeln!(self.output, "   {}", character.special_ability())?;
        }
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Print `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", prompt.trim());
        }
        Ok(line.trim().to_string())
    }
}
