use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::LabeledText;
use crate::report::not_equal_message;

#[derive(Parser, Debug)]
#[command(name = "assertkit")]
#[command(author, version, about = "Render aligned assertion failure messages")]
#[command(
    long_about = "Renders LABEL=MESSAGE pairs as an aligned failure block, the way \
    assertkit prints failed assertions. A literal \\n in a message starts a new line."
)]
pub struct Args {
    /// Entries to render, as LABEL=MESSAGE
    #[arg(value_name = "LABEL=MESSAGE")]
    pub entries: Vec<String>,

    /// Expected value for a "Not equal" message (requires --actual)
    #[arg(short, long)]
    pub expected: Option<String>,

    /// Actual value for a "Not equal" message (requires --expected)
    #[arg(short, long)]
    pub actual: Option<String>,

    /// Disable colored labels
    #[arg(long)]
    pub no_color: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() && self.expected.is_none() && self.actual.is_none() {
            return Err(Error::MissingInput(
                "Must provide at least one LABEL=MESSAGE or --expected/--actual",
            ));
        }

        if self.expected.is_some() != self.actual.is_some() {
            return Err(Error::MissingInput(
                "--expected and --actual must be used together",
            ));
        }

        for entry in &self.entries {
            parse_entry(entry)?;
        }

        Ok(())
    }

    /// Environment defaults, overridden by flags
    pub fn config(&self) -> Config {
        let config = Config::from_env();
        if self.no_color {
            config.with_color(false)
        } else {
            config
        }
    }

    /// Entries in command-line order, then the comparison if any
    pub fn labeled_texts(&self, config: &Config) -> Result<Vec<LabeledText>> {
        let mut texts = self
            .entries
            .iter()
            .map(String::as_str)
            .map(parse_entry)
            .collect::<Result<Vec<_>>>()?;

        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            texts.push(LabeledText::new(
                "Error Msg",
                not_equal_message(Some(expected.as_str()), Some(actual.as_str()), config),
            ));
        }

        Ok(texts)
    }
}

fn parse_entry(entry: &str) -> Result<LabeledText> {
    match entry.split_once('=') {
        Some((label, message)) if !label.trim().is_empty() => Ok(LabeledText::new(
            label.trim(),
            message.replace("\\n", "\n"),
        )),
        _ => Err(Error::InvalidEntry(entry.to_string())),
    }
}
