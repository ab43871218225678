//! Equality assertions with aligned, colored failure reports and structural
//! diffs.
//!
//! ```
//! use deep_assert::{assert_equal, Recorder};
//!
//! let mut rec = Recorder::new();
//! assert_equal!(&mut rec, vec![1, 2], vec![1, 3], "checking {}", "lists");
//! assert!(rec.failed());
//! assert!(rec.logs().contains("checking lists"));
//! ```

pub mod errors;
pub mod color;
pub mod kind;
pub mod diff;
pub mod report;
pub mod message;
pub mod reporter;
mod assert;

pub use assert::{equal, must_equal, must_not_equal, not_equal, Asserter};
pub use color::{Color, Colorizer};
pub use kind::{kind_of, Kind};
pub use message::Message;
pub use report::{Label, Report};
pub use reporter::{Recorder, Reporter, TestReporter};

/// Assert two values are equal, reporting through `$reporter`.
///
/// Evaluates to `true` on success. A single message argument is used
/// verbatim (or through its `Display` impl); a literal followed by more
/// arguments is a `format!` style template.
#[macro_export]
macro_rules! assert_equal {
    ($reporter:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::equal($reporter, &$actual, &$expected, $crate::Message::Empty)
    };
    ($reporter:expr, $actual:expr, $expected:expr, $msg:expr $(,)?) => {
        $crate::equal($reporter, &$actual, &$expected, $crate::Message::display(&$msg))
    };
    ($reporter:expr, $actual:expr, $expected:expr, $($arg:tt)+) => {
        $crate::equal(
            $reporter,
            &$actual,
            &$expected,
            $crate::Message::Format(::std::format_args!($($arg)+)),
        )
    };
}

/// Assert two values differ, reporting through `$reporter`.
#[macro_export]
macro_rules! assert_not_equal {
    ($reporter:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::not_equal($reporter, &$actual, &$expected, $crate::Message::Empty)
    };
    ($reporter:expr, $actual:expr, $expected:expr, $msg:expr $(,)?) => {
        $crate::not_equal($reporter, &$actual, &$expected, $crate::Message::display(&$msg))
    };
    ($reporter:expr, $actual:expr, $expected:expr, $($arg:tt)+) => {
        $crate::not_equal(
            $reporter,
            &$actual,
            &$expected,
            $crate::Message::Format(::std::format_args!($($arg)+)),
        )
    };
}

/// [`assert_equal!`] that halts the test on failure.
#[macro_export]
macro_rules! must_equal {
    ($reporter:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::must_equal($reporter, &$actual, &$expected)
    };
}

/// [`assert_not_equal!`] that halts the test on failure.
#[macro_export]
macro_rules! must_not_equal {
    ($reporter:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::must_not_equal($reporter, &$actual, &$expected)
    };
}
