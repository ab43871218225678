use std::fmt::Debug;

use serde::Serialize;
use tracing::debug;

use crate::color::{Color, Colorizer};
use crate::diff;
use crate::kind::Shape;
use crate::message::Message;
use crate::report::{Label, Report};
use crate::reporter::Reporter;

/// Runs assertions and renders their failures with a fixed color mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Asserter {
    colors: Colorizer,
}

impl Asserter {
    pub fn new(colors: Colorizer) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> Colorizer {
        self.colors
    }

    /// Check that `actual == expected`, reporting a failure otherwise.
    pub fn equal<R, T>(&self, reporter: &mut R, actual: &T, expected: &T, message: Message<'_>) -> bool
    where
        R: Reporter + ?Sized,
        T: PartialEq + Debug + Serialize + ?Sized,
    {
        if actual == expected {
            return true;
        }
        let mut report = Report::new();
        report.push(Label::Error, self.colors.paint(Color::Red, "Not equal"));
        self.push_message(&mut report, message);
        report.push(
            Label::Expected,
            self.colors.paint(Color::Green, &format!("{expected:?}")),
        );
        report.push(Label::Actual, self.colors.paint(Color::Red, &format!("{actual:?}")));

        let actual_shape = Shape::of(actual);
        let expected_shape = Shape::of(expected);
        debug!(
            actual = ?actual_shape.kind(),
            expected = ?expected_shape.kind(),
            "values not equal"
        );
        if let Some(diff) = diff::render(&self.colors, actual, &actual_shape, expected, &expected_shape) {
            report.push(Label::Diff, diff);
        }

        reporter.log(&report.to_string());
        reporter.fail();
        false
    }

    /// Check that `actual != expected`, reporting a failure otherwise.
    pub fn not_equal<R, T>(
        &self,
        reporter: &mut R,
        actual: &T,
        expected: &T,
        message: Message<'_>,
    ) -> bool
    where
        R: Reporter + ?Sized,
        T: PartialEq + Debug + Serialize + ?Sized,
    {
        if actual != expected {
            return true;
        }
        let mut report = Report::new();
        report.push(Label::Error, "Values should not be equal");
        self.push_message(&mut report, message);
        report.push(Label::Value, self.colors.paint(Color::Red, &format!("{expected:?}")));
        debug!(kind = ?Shape::of(expected).kind(), "values unexpectedly equal");

        reporter.log(&report.to_string());
        reporter.fail();
        false
    }

    /// Like [`Asserter::equal`], but halts the test on failure.
    pub fn must_equal<R, T>(&self, reporter: &mut R, actual: &T, expected: &T)
    where
        R: Reporter + ?Sized,
        T: PartialEq + Debug + Serialize + ?Sized,
    {
        if !self.equal(reporter, actual, expected, Message::Empty) {
            reporter.fail_now();
        }
    }

    /// Like [`Asserter::not_equal`], but halts the test on failure.
    pub fn must_not_equal<R, T>(&self, reporter: &mut R, actual: &T, expected: &T)
    where
        R: Reporter + ?Sized,
        T: PartialEq + Debug + Serialize + ?Sized,
    {
        if !self.not_equal(reporter, actual, expected, Message::Empty) {
            reporter.fail_now();
        }
    }

    fn push_message(&self, report: &mut Report, message: Message<'_>) {
        if let Some(text) = message.render() {
            report.push(Label::Message, self.colors.paint(Color::Yellow, &text));
        }
    }
}

/// [`Asserter::equal`] with the detected color mode.
pub fn equal<R, T>(reporter: &mut R, actual: &T, expected: &T, message: Message<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + Serialize + ?Sized,
{
    Asserter::default().equal(reporter, actual, expected, message)
}

/// [`Asserter::not_equal`] with the detected color mode.
pub fn not_equal<R, T>(reporter: &mut R, actual: &T, expected: &T, message: Message<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + Serialize + ?Sized,
{
    Asserter::default().not_equal(reporter, actual, expected, message)
}

pub fn must_equal<R, T>(reporter: &mut R, actual: &T, expected: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + Serialize + ?Sized,
{
    Asserter::default().must_equal(reporter, actual, expected)
}

pub fn must_not_equal<R, T>(reporter: &mut R, actual: &T, expected: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + Serialize + ?Sized,
{
    Asserter::default().must_not_equal(reporter, actual, expected)
}
