//! User input and interaction handling.
//! The core only talks to the `Prompter` trait; the dialoguer-backed
//! implementation lives here so everything else stays testable without
//! a terminal.

use crate::error::{Error, Result};
use dialoguer::{Confirm, FuzzySelect, Input};

/// Interface through which interactive producers and selection prompts
/// gather input.
pub trait Prompter {
    /// Asks for a line of text, with an optional prefilled default.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter built on dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::Prompt(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        FuzzySelect::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
