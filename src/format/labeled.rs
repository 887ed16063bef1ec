//! Aligned `label:  message` blocks

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::numeric::max_of;

/// Leading indent before every label
const INDENT: &str = "  ";
/// Separator between the label column and the message
const SEPARATOR: &str = ":  ";

/// One labeled piece of diagnostic output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledText {
    pub label: String,
    pub message: String,
}

impl LabeledText {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }

    fn label_width(&self) -> usize {
        self.label.chars().count()
    }
}

/// Format labeled texts as an aligned block
///
/// Labels are padded to the widest label. Continuation lines of a
/// multi-line message are indented to start under the first line.
/// Entries keep their input order and there is no trailing newline.
pub fn format_labeled_texts(texts: &[LabeledText], enable_color: bool) -> String {
    let label_width = texts
        .iter()
        .map(LabeledText::label_width)
        .fold(0, max_of);

    let mut output = String::new();
    for (i, text) in texts.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        output.push_str(INDENT);
        if enable_color {
            output.push_str(&format!("{}", text.label.green()));
        } else {
            output.push_str(&text.label);
        }
        output.push_str(&" ".repeat(label_width - text.label_width()));
        output.push_str(SEPARATOR);

        write_message(&mut output, &text.message, label_width);
    }

    output
}

fn write_message(output: &mut String, message: &str, label_width: usize) {
    let indent = " ".repeat(INDENT.len() + label_width + SEPARATOR.len());

    for (i, line) in message.lines().enumerate() {
        if i != 0 {
            output.push('\n');
            output.push_str(&indent);
        }
        output.push_str(line);
    }
}
