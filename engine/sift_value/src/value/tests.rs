#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

fn point(x: i64, y: i64) -> Value {
    Value::record(vec![
        (Name::new("x"), Value::Int(x)),
        (Name::new("y"), Value::Int(y)),
    ])
}

// Factories and introspection

#[test]
fn factories_round_trip() {
    assert_eq!(Value::int(42).as_int(), Some(42));
    assert_eq!(Value::string("hello").as_str(), Some("hello"));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));

    let list = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(list.items().map(<[Value]>::len), Some(2));
}

#[test]
fn tuples_are_list_like() {
    let tuple = Value::tuple(vec![Value::Int(1), Value::Bool(true)]);
    assert_eq!(tuple.items().map(<[Value]>::len), Some(2));
    assert_eq!(tuple.kind(), ValueKind::Tuple);
}

#[test]
fn scalars_are_not_list_like() {
    assert!(Value::Int(1).items().is_none());
    assert!(Value::string("x").items().is_none());
    assert!(Value::Unit.items().is_none());
}

#[test]
fn kind_tags() {
    assert_eq!(Value::Int(1).kind(), ValueKind::Int);
    assert_eq!(Value::Float(1.0).kind(), ValueKind::Float);
    assert_eq!(Value::Unit.kind(), ValueKind::Unit);
    assert_eq!(point(0, 0).kind(), ValueKind::Record);
    assert_eq!(ValueKind::Str.name(), "str");
}

// Records

#[test]
fn record_field_access() {
    let p = point(3, 4);
    let record = p.as_record().unwrap();
    assert_eq!(record.get(&Name::new("x")), Some(&Value::Int(3)));
    assert_eq!(record.get(&Name::new("y")), Some(&Value::Int(4)));
    assert_eq!(record.get(&Name::new("z")), None);
    assert!(record.has_field(&Name::new("x")));
    assert!(!record.has_field(&Name::new("z")));
}

#[test]
fn record_iteration_preserves_declared_order() {
    let p = point(1, 2);
    let record = p.as_record().unwrap();
    let names: Vec<&str> = record.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn record_equality_ignores_field_order() {
    let a = Value::record(vec![
        (Name::new("x"), Value::Int(1)),
        (Name::new("y"), Value::Int(2)),
    ]);
    let b = Value::record(vec![
        (Name::new("y"), Value::Int(2)),
        (Name::new("x"), Value::Int(1)),
    ]);
    assert!(a.equals(&b));
}

#[test]
fn record_duplicate_name_keeps_one_slot_with_last_value() {
    let v = Value::record(vec![
        (Name::new("x"), Value::Int(1)),
        (Name::new("x"), Value::Int(2)),
    ]);
    let record = v.as_record().unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.get(&Name::new("x")), Some(&Value::Int(2)));
}

// Equality

#[test]
fn deep_equality() {
    let a = Value::list(vec![Value::Int(1), Value::string("two"), point(3, 4)]);
    let b = Value::list(vec![Value::Int(1), Value::string("two"), point(3, 4)]);
    assert!(a.equals(&b));
    assert_eq!(a, b);

    let c = Value::list(vec![Value::Int(1), Value::string("two"), point(3, 5)]);
    assert!(!a.equals(&c));
}

#[test]
fn equality_distinguishes_kinds() {
    assert!(!Value::Int(1).equals(&Value::Float(1.0)));
    assert!(!Value::list(vec![]).equals(&Value::tuple(vec![])));
    assert!(!Value::Unit.equals(&Value::Int(0)));
}

#[test]
fn nan_never_equals_itself() {
    let nan = Value::Float(f64::NAN);
    assert!(!nan.equals(&nan.clone()));
}

// Display

#[test]
fn display_forms() {
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::Unit.to_string(), "()");
    assert_eq!(
        Value::list(vec![Value::Int(1), Value::Int(2)]).to_string(),
        "[1, 2]"
    );
    assert_eq!(
        Value::tuple(vec![Value::Int(1), Value::Bool(false)]).to_string(),
        "(1, false)"
    );
    assert_eq!(point(1, 2).to_string(), "{x: 1, y: 2}");
}

#[test]
fn clone_shares_heap_allocations() {
    let list = Value::list(vec![Value::Int(1)]);
    let copy = list.clone();
    let (Value::List(a), Value::List(b)) = (&list, &copy) else {
        panic!("expected lists");
    };
    assert!(std::ptr::eq(&**a, &**b));
}
