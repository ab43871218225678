//! Line diffs between two values of structured kind.

use std::fmt::Debug;

use itertools::Itertools;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::color::{Color, Colorizer};
use crate::kind::{Kind, Shape};

/// Diff `actual` (removed side) against `expected` (added side).
///
/// Returns `None` unless both shapes are structured and at least one line
/// differs. Strings are compared by their contents, mappings as pretty JSON
/// with sorted keys, everything else by its pretty `Debug` form.
pub(crate) fn render<T: Debug + Serialize + ?Sized>(
    colors: &Colorizer,
    actual: &T,
    actual_shape: &Shape,
    expected: &T,
    expected_shape: &Shape,
) -> Option<String> {
    if !actual_shape.kind().is_structured() || !expected_shape.kind().is_structured() {
        return None;
    }
    match (actual_shape, expected_shape) {
        (Shape::Text(old), Shape::Text(new)) => lines(colors, old, new),
        (Shape::Other(Kind::Mapping), Shape::Other(Kind::Mapping)) => {
            match (sorted_json(actual), sorted_json(expected)) {
                (Some(old), Some(new)) => lines(colors, &old, &new),
                _ => lines(colors, &format!("{actual:#?}"), &format!("{expected:#?}")),
            }
        }
        _ => lines(colors, &format!("{actual:#?}"), &format!("{expected:#?}")),
    }
}

/// Pretty JSON of a mapping. Object keys come out sorted, so hash-ordered
/// maps line up entry by entry.
fn sorted_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_value(value)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .map_err(|err| debug!(%err, "mapping has no JSON form, diffing Debug output"))
        .ok()
}

/// Line diff of two texts, with removed lines red and added lines green.
pub fn lines(colors: &Colorizer, old: &str, new: &str) -> Option<String> {
    let diff = TextDiff::from_lines(old, new);
    let mut changed = false;
    let out = diff
        .iter_all_changes()
        .map(|change| {
            let line = change.value();
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            match change.tag() {
                ChangeTag::Delete => {
                    changed = true;
                    colors.paint(Color::Red, &format!("- {line}")).into_owned()
                }
                ChangeTag::Insert => {
                    changed = true;
                    colors.paint(Color::Green, &format!("+ {line}")).into_owned()
                }
                ChangeTag::Equal => format!("  {line}"),
            }
        })
        .join("\n");
    // the first line sits right after the label, so it drops its context prefix
    changed.then(|| match out.strip_prefix("  ") {
        Some(rest) => rest.to_string(),
        None => out,
    })
}
