use deep_assert::{Asserter, Colorizer, Message, Recorder};
use pretty_assertions::assert_eq;

#[test]
fn colored_equal_report() {
    let mut rec = Recorder::new();
    Asserter::new(Colorizer::new(true)).equal(&mut rec, &1, &2, Message::from("note"));
    assert!(rec.logs().contains("\x1b[31m"), "expected red in {:?}", rec.logs());
    assert_eq!(
        rec.logs(),
        concat!(
            "\nError:    \x1b[31mNot equal\x1b[0m",
            "\nMessage:  \x1b[33mnote\x1b[0m",
            "\nExpected: \x1b[32m2\x1b[0m",
            "\nActual:   \x1b[31m1\x1b[0m",
        )
    );
}

#[test]
fn colored_diff_lines() {
    let mut rec = Recorder::new();
    Asserter::new(Colorizer::new(true)).equal(&mut rec, "old", "new", Message::Empty);
    assert!(rec
        .logs()
        .ends_with("\nDiff:     \x1b[31m- old\x1b[0m\n          \x1b[32m+ new\x1b[0m"));
}

#[test]
fn colored_not_equal_report() {
    let mut rec = Recorder::new();
    Asserter::new(Colorizer::new(true)).not_equal(&mut rec, &5, &5, Message::Empty);
    assert_eq!(
        rec.logs(),
        "\nError:    Values should not be equal\nValue:    \x1b[31m5\x1b[0m"
    );
}

#[test]
fn disabled_colors_emit_no_escapes() {
    let asserter = Asserter::new(Colorizer::disabled());
    let mut rec = Recorder::new();
    asserter.equal(&mut rec, &vec!["a", "b"], &vec!["a", "c"], Message::from("note"));
    asserter.not_equal(&mut rec, &5, &5, Message::Empty);
    assert_eq!(rec.failures(), 2);
    assert!(!rec.logs().contains('\x1b'), "{:?}", rec.logs());
}
