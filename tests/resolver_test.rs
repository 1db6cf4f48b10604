use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stencil::config::Config;
use stencil::error::{Error, Result};
use stencil::prompt::Prompter;
use stencil::resolver::{resolve, Producer, Replacement, ReplacementSpec};

/// Prompter that replays canned answers and records the prompts it saw.
struct ScriptedPrompter {
    answers: RefCell<Vec<String>>,
    log: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
        self.log.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().remove(0))
    }

    fn select(&self, _prompt: &str, _items: &[String]) -> Result<usize> {
        Ok(0)
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

#[test]
fn test_literal_resolution_is_idempotent() {
    let config = Config::default();
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![
        ReplacementSpec::new("__A__", Producer::Literal("one".to_string())),
        ReplacementSpec::new("__B__", Producer::Literal("two".to_string())),
    ];

    let first = resolve(&specs, &config, &prompt).unwrap();
    let second = resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0], Replacement::new("__A__", "one"));
    assert_eq!(first[1], Replacement::new("__B__", "two"));
}

#[test]
fn test_config_ref_is_late_bound() {
    let mut config = Config::default();
    config.vars.insert("ORG".to_string(), serde_json::json!("Initrode"));
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![ReplacementSpec::new("__ORG__", Producer::ConfigRef("ORG".to_string()))];

    let before = resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(before[0].value, "Initrode");

    config.vars.insert("ORG".to_string(), serde_json::json!("Initech"));
    let after = resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(after[0].value, "Initech");
}

#[test]
fn test_config_ref_falls_back_to_environment() {
    std::env::set_var("STENCIL_RESOLVER_TEST_VAR", "from-env");
    let config = Config::default();
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![ReplacementSpec::new(
        "__X__",
        Producer::ConfigRef("STENCIL_RESOLVER_TEST_VAR".to_string()),
    )];

    let resolved = resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(resolved[0].value, "from-env");
}

#[test]
fn test_undefined_config_ref_fails() {
    let config = Config::default();
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![ReplacementSpec::new(
        "__X__",
        Producer::ConfigRef("STENCIL_RESOLVER_TEST_MISSING".to_string()),
    )];

    match resolve(&specs, &config, &prompt) {
        Err(Error::Config(_)) => (),
        other => panic!("expected Config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_string_value_is_a_type_mismatch() {
    let mut config = Config::default();
    config.vars.insert("COUNT".to_string(), serde_json::json!(42));
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![ReplacementSpec::new("__N__", Producer::ConfigRef("COUNT".to_string()))];

    match resolve(&specs, &config, &prompt) {
        Err(Error::TypeMismatch { token, value }) => {
            assert_eq!(token, "__N__");
            assert_eq!(value, "42");
        }
        other => panic!("expected TypeMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_pure_producer_is_invoked_once_per_resolution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config = Config::default();
    let prompt = ScriptedPrompter::new(&[]);
    let specs = vec![ReplacementSpec::new(
        "__N__",
        Producer::Pure(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            serde_json::json!("value")
        })),
    )];

    resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_interactive_producers_fire_in_specification_order() {
    let config = Config::default();
    let prompt = ScriptedPrompter::new(&["first answer", "second answer"]);
    let specs = vec![
        ReplacementSpec::new(
            "__A__",
            Producer::Interactive { prompt: "Question A".to_string(), default: None },
        ),
        ReplacementSpec::new(
            "__B__",
            Producer::Interactive {
                prompt: "Question B".to_string(),
                default: Some("fallback".to_string()),
            },
        ),
    ];

    let resolved = resolve(&specs, &config, &prompt).unwrap();
    assert_eq!(resolved[0].value, "first answer");
    assert_eq!(resolved[1].value, "second answer");
    assert_eq!(*prompt.log.borrow(), vec!["Question A", "Question B"]);
}
