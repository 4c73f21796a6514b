//! Tests for marked field reads

use annotated::prelude::*;
use annotated::{Denied, FieldAccessFailure, MemberRef, Visibility};

#[derive(Annotated)]
struct Settings {
    #[mark_field]
    limit: i32,
    name: String,
    #[mark_field]
    pub label: String,
    #[mark_field]
    pub(crate) ratio: f64,
}

fn settings() -> Settings {
    Settings {
        limit: 3,
        name: String::from("unlisted"),
        label: String::from("primary"),
        ratio: 0.5,
    }
}

#[derive(Annotated)]
struct Pair(i32, #[mark_field] i64);

#[derive(Annotated)]
#[mark]
struct NoFields {
    value: i32,
}

struct Sealed;

impl AccessPolicy for Sealed {
    fn may_invoke(&self, _member: &MemberRef) -> Result<(), Denied> {
        Ok(())
    }

    fn may_read(&self, member: &MemberRef) -> Result<(), Denied> {
        match member.name {
            "label" => Err(Denied::new("sealed by policy")),
            _ => Ok(()),
        }
    }
}

#[test]
fn test_reads_marked_fields_in_order() {
    let subject = settings();
    let readings = AnnotationRunner::new().read_marked_fields(&subject).unwrap();

    assert_eq!(readings.names().collect::<Vec<_>>(), ["limit", "label", "ratio"]);
    assert_eq!(readings.get("limit").and_then(|v| v.downcast_ref::<i32>()), Some(&3));
    assert_eq!(
        readings.get("label").and_then(|v| v.downcast_ref::<String>()).map(String::as_str),
        Some("primary")
    );
    assert_eq!(readings.get("ratio").and_then(|v| v.downcast_ref::<f64>()), Some(&0.5));
    assert!(readings.get("name").is_none());
}

#[test]
fn test_values_are_the_fields_themselves() {
    let subject = settings();
    {
        let readings = AnnotationRunner::new().read_marked_fields(&subject).unwrap();
        let limit = readings.get("limit").unwrap();
        assert!(std::ptr::eq(
            limit.downcast_ref::<i32>().unwrap(),
            &subject.limit
        ));
    }
    // Reading leaves every field as it was
    assert_eq!(subject.limit, 3);
    assert_eq!(subject.label, "primary");
    assert_eq!(subject.name, "unlisted");
}

#[test]
fn test_caller_side_arithmetic() {
    let subject = settings();
    let readings = AnnotationRunner::new().read_marked_fields(&subject).unwrap();
    let shown: Vec<i32> = readings
        .iter()
        .filter_map(|(_, value)| value.downcast_ref::<i32>())
        .map(|value| value + 3)
        .collect();
    assert_eq!(shown, [6]);
}

#[test]
fn test_visibility_is_recorded_but_not_enforced_for_reads() {
    let visibility: Vec<_> = Settings::FIELDS.iter().map(|f| f.visibility()).collect();
    assert_eq!(
        visibility,
        [Visibility::Restricted, Visibility::Public, Visibility::Restricted]
    );
}

#[test]
fn test_tuple_fields() {
    let pair = Pair(1, 7);
    let readings = AnnotationRunner::new().read_marked_fields(&pair).unwrap();
    assert_eq!(readings.len(), 1);
    assert!(readings.get("0").is_none());
    assert_eq!(pair.0, 1);
    assert_eq!(readings.get("1").and_then(|v| v.downcast_ref::<i64>()), Some(&7));
}

#[test]
fn test_no_marked_fields() {
    let subject = NoFields { value: 1 };
    let readings = AnnotationRunner::new().read_marked_fields(&subject).unwrap();
    assert!(readings.is_empty());
    assert_eq!(subject.value, 1);
}

#[test]
fn test_denied_read() {
    let subject = settings();
    let err: FieldAccessFailure = AnnotationRunner::with_policy(Sealed)
        .read_marked_fields(&subject)
        .unwrap_err();
    assert_eq!(err.field, "label");
    assert_eq!(err.reason.reason(), "sealed by policy");
    assert_eq!(err.to_string(), "cannot read `Settings.label`: sealed by policy");
}

#[test]
fn test_debug_output() {
    let subject = settings();
    let readings = AnnotationRunner::new().read_marked_fields(&subject).unwrap();
    let rendered: Vec<String> = readings.iter().map(|(name, value)| format!("{name}={value:?}")).collect();
    assert_eq!(rendered, ["limit=3", "label=\"primary\"", "ratio=0.5"]);
}
