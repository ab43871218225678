use deep_assert as da;
use da::{Asserter, Colorizer, Message, Recorder};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Debug;

#[derive(Debug, PartialEq, Serialize)]
struct Person {
    name: String,
}

fn person(name: &str) -> Person {
    Person { name: name.to_string() }
}

fn check<T>(actual: &T, expected: &T) -> Recorder
where
    T: PartialEq + Debug + Serialize + ?Sized,
{
    let mut rec = Recorder::new();
    Asserter::new(Colorizer::disabled()).not_equal(&mut rec, actual, expected, Message::Empty);
    rec
}

fn assert_passes<T>(actual: &T, expected: &T)
where
    T: PartialEq + Debug + Serialize + ?Sized,
{
    let rec = check(actual, expected);
    assert!(!rec.failed(), "unexpected failure:{}", rec.logs());
    assert_eq!(rec.logs(), "");
}

fn assert_value<T>(actual: &T, expected: &T, value: &str)
where
    T: PartialEq + Debug + Serialize + ?Sized,
{
    let rec = check(actual, expected);
    assert_eq!(rec.failures(), 1);
    assert_eq!(
        rec.logs(),
        format!("\nError:    Values should not be equal\nValue:    {value}")
    );
}

#[test]
fn different_values_pass() {
    assert_passes(&1, &2);
    assert_passes(&1.1, &2.2);
    assert_passes(&true, &false);
    assert_passes("test", "test1");
    assert_passes(b"test".as_slice(), b"test1".as_slice());
    assert_passes(&vec![1, 2, 3], &vec![4, 5, 6]);
    assert_passes(&BTreeMap::from([("one", 1)]), &BTreeMap::from([("two", 2)]));
    assert_passes(&person("John"), &person("Doe"));
    assert_passes(&Box::new(person("John")), &Box::new(person("Doe")));
    assert_passes(&None, &Some(1));
    assert_passes(&None::<Vec<String>>, &Some(Vec::new()));
    assert_passes(&json!(null), &json!([]));
}

#[test]
fn equal_values_fail() {
    assert_value(&1, &1, "1");
    assert_value(&person("John"), &person("John"), "Person { name: \"John\" }");
    assert_value(&Box::new(person("John")), &Box::new(person("John")), "Person { name: \"John\" }");
    assert_value(&vec![1, 2, 3], &vec![1, 2, 3], "[1, 2, 3]");
    assert_value(&BTreeMap::from([("one", 1)]), &BTreeMap::from([("one", 1)]), "{\"one\": 1}");
    assert_value(&None::<i32>, &None, "None");
    assert_value(&None::<BTreeMap<String, i32>>, &None, "None");
    assert_value(&Some(BTreeMap::<String, i32>::new()), &Some(BTreeMap::new()), "Some({})");
    assert_value(&Vec::<String>::new(), &Vec::new(), "[]");
}

#[test]
fn equal_structured_values_never_diff() {
    let rec = check("same\ntext", "same\ntext");
    assert_eq!(rec.logs().matches("Value:").count(), 1);
    assert!(!rec.logs().contains("Diff:"));
}

#[test]
fn message_comes_before_value() {
    let mut rec = Recorder::new();
    Asserter::new(Colorizer::disabled()).not_equal(&mut rec, &5, &5, Message::from("custom"));
    assert_eq!(
        rec.logs(),
        "\nError:    Values should not be equal\nMessage:  custom\nValue:    5"
    );
}

#[test]
fn macro_form() {
    let mut rec = Recorder::new();
    assert!(da::assert_not_equal!(&mut rec, 1, 2));
    assert!(!da::assert_not_equal!(&mut rec, 5, 5, "round {}", 2));
    assert_eq!(rec.failures(), 1);
    assert!(rec.logs().contains("Values should not be equal"));
    assert!(rec.logs().contains("round 2"));
}

#[test]
fn macro_form_with_runtime_message() {
    let mut rec = Recorder::new();
    let msg = format!("{{id}} = {}", 7);
    assert!(!da::assert_not_equal!(&mut rec, 7, 7, msg));
    assert!(rec.logs().contains("{id} = 7"));
}
