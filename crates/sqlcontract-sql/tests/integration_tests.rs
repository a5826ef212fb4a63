//! End-to-end tests for fully-typed SQL parsing

use pretty_assertions::assert_eq;
use sqlcontract_core::{Action, ActionKind, ErrorCode, Output, TypeRef};
use sqlcontract_sql::{parse, ParseError};

#[test]
fn simple_select() {
    let parsed = parse("SELECT id::int4 AS id_1, name::text AS name_2 FROM users");

    assert_eq!(parsed.errors, None);
    assert_eq!(
        parsed.actions,
        vec![Action::Select {
            outputs: vec![
                Output::new(1, "id_1", TypeRef::new("int4")),
                Output::new(2, "name_2", TypeRef::new("text")),
            ],
        }]
    );
}

#[test]
fn simple_insert() {
    let parsed = parse(
        "INSERT INTO users (name) VALUES ('a') RETURNING id::int4 AS id_1, created_at::timestamptz AS created_at_2",
    );

    assert_eq!(parsed.errors, None);
    assert_eq!(parsed.actions.len(), 1);
    assert_eq!(parsed.actions[0].kind(), ActionKind::Insert);
    assert_eq!(parsed.actions[0].outputs().len(), 2);
}

#[test]
fn simple_update() {
    let parsed = parse("UPDATE users SET name = 'b' WHERE id = 1 RETURNING id::int4 AS id_1");

    assert_eq!(parsed.errors, None);
    assert_eq!(parsed.actions[0].kind(), ActionKind::Update);
}

#[test]
fn simple_delete() {
    let parsed = parse("DELETE FROM users WHERE id = 1 RETURNING id::int4 AS id_1");

    assert_eq!(parsed.errors, None);
    assert_eq!(parsed.actions[0].kind(), ActionKind::Delete);
}

#[test]
fn insert_without_returning_yields_empty_outputs() {
    let parsed = parse("INSERT INTO users (name) VALUES ('a')");

    assert_eq!(parsed.errors, None);
    assert_eq!(
        parsed.actions,
        vec![Action::Insert { outputs: vec![] }]
    );
}

#[test]
fn qualified_cast() {
    let parsed = parse("SELECT '1'::pg_catalog.int4 AS id_1");

    assert_eq!(parsed.errors, None);
    assert_eq!(
        parsed.actions[0].outputs(),
        &[Output::new(1, "id_1", TypeRef::qualified("pg_catalog", "int4"))]
    );
}

#[test]
fn double_cast_takes_outer_type() {
    let parsed = parse("SELECT (id::int4)::text AS id_1 FROM users");

    assert_eq!(parsed.errors, None);
    assert_eq!(parsed.actions[0].outputs()[0].ty, TypeRef::new("text"));
}

#[test]
fn outputs_preserve_source_order() {
    let parsed = parse("SELECT b::text AS b_9, a::text AS a_3, c::text AS c_5 FROM t");

    let numbers: Vec<i64> = parsed.actions[0]
        .outputs()
        .iter()
        .map(|output| output.number)
        .collect();
    assert_eq!(numbers, vec![9, 3, 5]);
}

#[test]
fn duplicate_number_suffix() {
    let parsed = parse("SELECT id::text AS id_1, name::uuid AS name_1 FROM foo");

    assert!(parsed.actions.is_empty());
    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::DuplicateNumberSuffix));

    let rendered = errors.to_string();
    assert!(rendered.contains("duplicate number suffix"), "{rendered}");
    assert!(rendered.contains("1 is already used by: id_1"), "{rendered}");
}

#[test]
fn no_alias_used() {
    let parsed = parse("SELECT id FROM foo");

    assert!(parsed.actions.is_empty());
    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::NoAliasUsed));
    assert!(errors.to_string().contains("no alias"));
}

#[test]
fn column_without_cast() {
    let parsed = parse("SELECT id AS id_1 FROM foo");

    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::ColumnWithoutCast));
    assert!(errors.to_string().contains("no type cast"));
}

#[test]
fn not_named_with_number_suffix() {
    let parsed = parse("SELECT id AS id1 FROM foo");

    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::NotNamedWithNumberSuffix));
    assert!(errors.to_string().contains("not named with a number suffix"));
}

#[test]
fn invalid_number_suffix() {
    let parsed = parse("SELECT id AS id_0 FROM foo");

    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::InvalidNumberSuffix));
    assert!(errors.to_string().contains("invalid number suffix"));
}

#[test]
fn non_integer_suffix_is_unnumbered() {
    let parsed = parse("SELECT id AS id_b FROM foo");

    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::NotNamedWithNumberSuffix));
}

#[test]
fn unsupported_statement_after_valid_one() {
    let parsed = parse("SELECT id::text AS id_1 FROM foo; CREATE TABLE bar (id int)");

    // The first statement's success is unaffected by the second's failure.
    assert_eq!(parsed.actions.len(), 1);
    assert_eq!(parsed.actions[0].kind(), ActionKind::Select);

    let errors = parsed.errors.unwrap();
    assert_eq!(errors.causes().len(), 1);
    assert!(errors.contains(ErrorCode::UnsupportedStatement));

    let ParseError::Unsupported { location } = &errors.causes()[0] else {
        panic!("expected unsupported cause, got: {:?}", errors.causes()[0]);
    };
    assert!(location.is_some());
    assert!(errors.to_string().contains("only support"));
}

#[test]
fn statements_fail_independently() {
    let parsed = parse(
        "SELECT id FROM a; \
         SELECT id::text AS id_1 FROM b; \
         SELECT id AS id_0 FROM c",
    );

    assert_eq!(parsed.actions.len(), 1);
    let errors = parsed.errors.unwrap();
    assert_eq!(errors.causes().len(), 2);
    assert!(errors.contains(ErrorCode::NoAliasUsed));
    assert!(errors.contains(ErrorCode::InvalidNumberSuffix));
}

#[test]
fn syntax_error_is_fatal() {
    let parsed = parse("SELECT id::text AS id_1 FROM foo; NOT EVEN SQL");

    // No partial actions on a grammar failure.
    assert!(parsed.actions.is_empty());
    let errors = parsed.errors.unwrap();
    assert!(errors.contains(ErrorCode::SyntaxError));
    assert!(errors.to_string().contains("failed to parse"));
}

#[test]
fn statement_errors_carry_locations() {
    let parsed = parse("SELECT id FROM foo");

    let errors = parsed.errors.unwrap();
    let ParseError::Statement(statement) = &errors.causes()[0] else {
        panic!("expected statement cause");
    };
    assert!(statement.location.is_some());
    assert!(statement.targets[0].location.is_some());
}

#[test]
fn idempotence() {
    let sql = "SELECT id::text AS id_1 FROM foo; SELECT nope FROM bar; CREATE INDEX i ON t (c)";

    let first = parse(sql);
    let second = parse(sql);

    assert_eq!(first, second);
}

#[test]
fn actions_serialize_for_downstream_generator() -> anyhow::Result<()> {
    let parsed = parse(
        "SELECT id::int4 AS id_1, email::text AS email_2 FROM users; \
         DELETE FROM users RETURNING id::pg_catalog.int8 AS id_1",
    );
    assert_eq!(parsed.errors, None);

    let json = serde_json::to_value(&parsed.actions)?;
    assert_eq!(
        json,
        serde_json::json!([
            {
                "kind": "select",
                "outputs": [
                    {"number": 1, "name": "id_1", "type": {"schema": null, "name": "int4"}},
                    {"number": 2, "name": "email_2", "type": {"schema": null, "name": "text"}},
                ],
            },
            {
                "kind": "delete",
                "outputs": [
                    {"number": 1, "name": "id_1", "type": {"schema": "pg_catalog", "name": "int8"}},
                ],
            },
        ])
    );

    Ok(())
}
