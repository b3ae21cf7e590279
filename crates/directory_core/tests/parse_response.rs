use directory_core::{parse_response, Cell, MalformedResponseError, Row, Table};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    directory_logging::initialize_for_tests();
}

fn sample_table() -> Table {
    Table {
        rows: vec![
            Row::from_iter([
                Some(Cell::from("Food Bank")),
                Some(Cell::from("foodbank.org")),
                None,
                Some(Cell {
                    value: json!(94110),
                    formatted: Some("94110".to_string()),
                }),
            ]),
            Row::from_iter([Some(Cell::from("Shelter {East}")), Some(Cell::default())]),
            Row::default(),
        ],
    }
}

fn wrap(table: &Table) -> String {
    let body = json!({
        "version": "0.6",
        "reqId": "0",
        "status": "ok",
        "table": table,
    });
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({body});")
}

#[test]
fn wrapped_payload_round_trips() {
    init_logging();
    let table = sample_table();
    let parsed = parse_response(&wrap(&table)).expect("wrapped payload parses");
    assert_eq!(parsed, table);
}

#[test]
fn wrapper_without_semicolon_and_with_trailing_whitespace() {
    init_logging();
    let table = sample_table();
    let text = wrap(&table);
    let text = format!("{}  \n", text.trim_end_matches(';'));
    assert_eq!(parse_response(&text).unwrap(), table);
}

#[test]
fn bare_json_object_is_accepted() {
    init_logging();
    let text = r#"{"table":{"rows":[{"c":[{"v":"Clinic"}]}]}}"#;
    let table = parse_response(text).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].cell_text(0), "Clinic");
}

#[test]
fn unknown_wrapper_falls_back_to_brace_scan() {
    init_logging();
    let text = r#"callback_42({"table":{"rows":[]}}); // trailing"#;
    assert_eq!(parse_response(text).unwrap(), Table::default());
}

#[test]
fn broken_wrapped_payload_still_tries_brace_scan() {
    init_logging();
    // Captured group includes junk after the object; the brace scan trims it.
    let text = r#"google.visualization.Query.setResponse({"table":{"rows":[]}} junk);"#;
    assert_eq!(parse_response(text).unwrap(), Table::default());
}

#[test]
fn plain_text_is_malformed() {
    init_logging();
    assert_eq!(parse_response("not json"), Err(MalformedResponseError::NoJson));
    assert_eq!(parse_response(""), Err(MalformedResponseError::NoJson));
}

#[test]
fn invalid_json_between_braces_is_malformed() {
    init_logging();
    let err = parse_response("{ this is not json }").unwrap_err();
    assert!(matches!(err, MalformedResponseError::InvalidJson(_)));
}

#[test]
fn shape_mismatches_are_reported() {
    init_logging();
    assert_eq!(
        parse_response(r#"{"rows": []}"#),
        Err(MalformedResponseError::MissingTable)
    );
    assert_eq!(
        parse_response(r#"{"table": {"cols": []}}"#),
        Err(MalformedResponseError::MissingRows)
    );
    assert_eq!(
        parse_response(r#"{"table": {"rows": {}}}"#),
        Err(MalformedResponseError::MissingRows)
    );
}

#[test]
fn source_error_status_is_surfaced() {
    init_logging();
    let text = r#"google.visualization.Query.setResponse({"status":"error","errors":[{"reason":"access_denied","message":"Access denied"}]});"#;
    assert_eq!(
        parse_response(text),
        Err(MalformedResponseError::SourceError("Access denied".to_string()))
    );
}

#[test]
fn cells_render_as_text() {
    init_logging();
    let text = r#"{"table":{"rows":[{"c":[{"v":12345.0},{"v":true},null,{"v":null},{"v":" padded "}]}]}}"#;
    let row = &parse_response(text).unwrap().rows[0];
    assert_eq!(row.cell_text(0), "12345");
    assert_eq!(row.cell_text(1), "true");
    assert_eq!(row.cell_text(2), "");
    assert_eq!(row.cell_text(3), "");
    assert_eq!(row.cell_text(4), " padded ");
    assert_eq!(row.cell_text(99), "");
}
