//! Replacement resolution.
//! Turns the declarative replacement list of a project type into the
//! concrete ordered token/value list a single instantiation works with.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use std::fmt;
use std::sync::Arc;

/// A callable replacement producer. Invoked exactly once per instantiation;
/// its result must be a JSON string.
pub type ValueFn = Arc<dyn Fn() -> serde_json::Value + Send + Sync>;

/// How the value for a token is obtained at resolution time.
#[derive(Clone)]
pub enum Producer {
    /// A fixed string, used unchanged
    Literal(String),
    /// A late-bound reference, looked up against the configuration's
    /// variable table (falling back to the process environment) at
    /// resolution time rather than declaration time
    ConfigRef(String),
    /// A callable invoked once per instantiation
    Pure(ValueFn),
    /// A value gathered from the user through the injected prompter
    Interactive { prompt: String, default: Option<String> },
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Producer::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Producer::ConfigRef(name) => f.debug_tuple("ConfigRef").field(name).finish(),
            Producer::Pure(_) => f.write_str("Pure(..)"),
            Producer::Interactive { prompt, default } => f
                .debug_struct("Interactive")
                .field("prompt", prompt)
                .field("default", default)
                .finish(),
        }
    }
}

/// One declared (token, producer) pair of a project type.
#[derive(Debug, Clone)]
pub struct ReplacementSpec {
    pub token: String,
    pub producer: Producer,
}

impl ReplacementSpec {
    pub fn new<S: Into<String>>(token: S, producer: Producer) -> Self {
        Self { token: token.into(), producer }
    }
}

/// One resolved (token, value) pair. Order within the resolved list is
/// significant: earlier entries win when tokens collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub token: String,
    pub value: String,
}

impl Replacement {
    pub fn new<S: Into<String>>(token: S, value: S) -> Self {
        Self { token: token.into(), value: value.into() }
    }
}

/// Resolves every producer of `specs` exactly once, in declaration order.
/// Side effects of interactive producers happen in that same order.
///
/// # Errors
/// * `Error::Config` if a late-bound reference names an undefined variable
/// * `Error::TypeMismatch` if a producer yields a non-string value
pub fn resolve(
    specs: &[ReplacementSpec],
    config: &Config,
    prompt: &dyn Prompter,
) -> Result<Vec<Replacement>> {
    specs
        .iter()
        .map(|spec| {
            let value = resolve_producer(spec, config, prompt)?;
            Ok(Replacement { token: spec.token.clone(), value })
        })
        .collect()
}

fn resolve_producer(
    spec: &ReplacementSpec,
    config: &Config,
    prompt: &dyn Prompter,
) -> Result<String> {
    match &spec.producer {
        Producer::Literal(value) => Ok(value.clone()),
        Producer::ConfigRef(name) => {
            let value = config.lookup_var(name).ok_or_else(|| {
                Error::Config(format!("late-bound variable '{}' is not defined", name))
            })?;
            expect_string(&spec.token, value)
        }
        Producer::Pure(producer) => expect_string(&spec.token, producer()),
        Producer::Interactive { prompt: question, default } => {
            prompt.input(question, default.as_deref())
        }
    }
}

fn expect_string(token: &str, value: serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        other => Err(Error::TypeMismatch {
            token: token.to_string(),
            value: other.to_string(),
        }),
    }
}
