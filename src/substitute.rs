//! Case-preserving token substitution.
//! Replaces every occurrence of every replacement token in a string,
//! adjusting the case of the inserted value to mirror the case pattern
//! of the matched occurrence.

use crate::error::{Error, Result};
use crate::resolver::Replacement;
use regex::RegexBuilder;

/// Compiled substitution engine for one resolved replacement list.
///
/// All tokens are combined into a single case-insensitive pattern of
/// literal-escaped alternatives, ordered longest token first so that a
/// token which is a prefix of another can never shadow it. Substitution
/// is a single left-to-right scan; text consumed by a match is never
/// re-matched, so replacement values containing other tokens stay intact.
pub struct Substituter {
    pattern: Option<regex::Regex>,
    entries: Vec<Replacement>,
}

impl Substituter {
    /// Compiles a substituter from a resolved replacement list.
    ///
    /// # Errors
    /// * `Error::Config` if the combined token pattern fails to compile
    pub fn new(replacements: &[Replacement]) -> Result<Self> {
        let mut entries: Vec<Replacement> =
            replacements.iter().filter(|r| !r.token.is_empty()).cloned().collect();
        // Stable sort keeps declaration order between equal-length tokens.
        entries.sort_by(|a, b| b.token.len().cmp(&a.token.len()));

        if entries.is_empty() {
            return Ok(Self { pattern: None, entries });
        }

        let alternation = entries
            .iter()
            .map(|r| regex::escape(&r.token))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Config(format!("token pattern: {}", e)))?;

        Ok(Self { pattern: Some(pattern), entries })
    }

    /// Replaces every token occurrence in `text`, fixing the case of each
    /// inserted value to match the occurrence. Input without any token
    /// occurrence is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &regex::Captures| {
                let matched = &caps[0];
                match self.entry_for(matched) {
                    Some(replacement) => {
                        fix_case(matched, &replacement.token, &replacement.value)
                    }
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }

    /// True when `text` contains at least one token occurrence.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    fn entry_for(&self, matched: &str) -> Option<&Replacement> {
        let matched = matched.to_lowercase();
        self.entries.iter().find(|r| r.token.to_lowercase() == matched)
    }
}

/// Adjusts the case of `value` to mirror the case pattern of the matched
/// occurrence of `token`:
///
/// * the occurrence equals the declared token exactly: value inserted verbatim
/// * every letter of the occurrence is upper-case: value upper-cased
/// * first letter upper-case, remaining letters lower-case: value capitalized
/// * anything else: value inserted verbatim
fn fix_case(matched: &str, token: &str, value: &str) -> String {
    if matched == token {
        return value.to_string();
    }
    let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return value.to_string();
    }
    if letters.iter().all(|c| !c.is_lowercase()) {
        return value.to_uppercase();
    }
    if letters[0].is_uppercase() && letters[1..].iter().all(|c| !c.is_uppercase()) {
        return capitalize(value);
    }
    value.to_string()
}

/// Upper-cases the first letter of `value`, leaving the rest untouched.
fn capitalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut done = false;
    for ch in value.chars() {
        if !done && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            done = true;
        } else {
            out.push(ch);
        }
    }
    out
}
