//! Aligned `Label: text` failure reports.

use std::fmt;

use itertools::Itertools;

/// Width the labels are padded to, not counting the colon.
const LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Error,
    Message,
    Expected,
    Actual,
    Diff,
    Value,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Error => "Error",
            Label::Message => "Message",
            Label::Expected => "Expected",
            Label::Actual => "Actual",
            Label::Diff => "Diff",
            Label::Value => "Value",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of labeled fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    fields: Vec<(Label, String)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: Label, text: impl Into<String>) -> &mut Self {
        self.fields.push((label, text.into()));
        self
    }

    pub fn fields(&self) -> &[(Label, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, label: Label) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, text)| text.as_str())
    }
}

/// Indent every line after the first so it lines up under the first one.
fn hang(text: &str) -> String {
    let indent = " ".repeat(LABEL_WIDTH + 2);
    text.split('\n')
        .enumerate()
        .map(|(i, line)| if i == 0 { line.to_string() } else { format!("{indent}{line}") })
        .join("\n")
}

/// Each field starts on a new line, so a non-empty report begins with `\n`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, text) in &self.fields {
            let pad = LABEL_WIDTH.saturating_sub(label.as_str().len());
            write!(f, "\n{label}:{:pad$} {}", "", hang(text))?;
        }
        Ok(())
    }
}
