//! Failure messages assembled from the caller chain, formatted values and labels

use std::fmt::Debug;
use std::thread;

use owo_colors::OwoColorize;

use crate::caller::caller_infos;
use crate::config::Config;
use crate::error::Result;
use crate::format::{LabeledText, check_equal_args, format_labeled_texts, format_unequal_values};

/// A failed assertion, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub test_name: String,
    pub message: String,
    pub user_message: Option<String>,
    pub callers: Vec<String>,
}

impl Failure {
    pub fn new(test_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            message: message.into(),
            user_message: None,
            callers: Vec::new(),
        }
    }

    /// Failure for the current test thread, with its caller chain
    #[inline(never)]
    pub fn capture(message: impl Into<String>, config: &Config) -> Self {
        Self::new(current_test_name(), message).with_callers(caller_infos(config))
    }

    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.user_message = (!message.is_empty()).then_some(message);
        self
    }

    pub fn with_callers(mut self, callers: Vec<String>) -> Self {
        self.callers = callers;
        self
    }

    /// The labeled entries in display order
    pub fn labeled_texts(&self, config: &Config) -> Vec<LabeledText> {
        let test_name = if config.enable_color {
            self.test_name.magenta().to_string()
        } else {
            self.test_name.clone()
        };

        let mut texts = vec![
            LabeledText::new("Test Name", test_name),
            LabeledText::new("Error Pos", self.callers.join("\n")),
            LabeledText::new("Error Msg", self.message.as_str()),
        ];
        if let Some(ref user_message) = self.user_message {
            texts.push(LabeledText::new("User Msg", user_message.as_str()));
        }
        texts
    }

    pub fn render(&self, config: &Config) -> String {
        format_labeled_texts(&self.labeled_texts(config), config.enable_color)
    }
}

/// `Not equal` message body for an expected/actual pair
pub fn not_equal_message<E, A>(expected: Option<&E>, actual: Option<&A>, config: &Config) -> String
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    let (expected, actual) = format_unequal_values(expected, actual, config.max_value_len);
    format!("Not equal, \n expect: {}\n actual: {}", expected, actual)
}

/// Failure for an expected/actual pair that compared unequal
///
/// Fails if either argument is a callable.
#[inline(never)]
pub fn not_equal_failure<E, A>(
    expected: Option<&E>,
    actual: Option<&A>,
    config: &Config,
) -> Result<Failure>
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    check_equal_args(expected, actual)?;
    Ok(Failure::capture(
        not_equal_message(expected, actual, config),
        config,
    ))
}

/// libtest names each test thread after its test
fn current_test_name() -> String {
    thread::current()
        .name()
        .unwrap_or("<unknown>")
        .to_string()
}
