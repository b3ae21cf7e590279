use directory_core::{
    build_catalog, Cell, ColumnSchema, DirectoryOptions, Field, LoadError, MalformedResponseError,
    Program, RecordMapper, Row, Table,
};
use pretty_assertions::assert_eq;

fn row(values: &[&str]) -> Row {
    values.iter().map(|v| Some(Cell::from(*v))).collect()
}

#[test]
fn full_row_maps_every_column_and_trims() {
    let mapper = RecordMapper::new(ColumnSchema::default(), true);
    let program = mapper.map_row(&row(&[
        " Food Bank ",
        "foodbank.org",
        "1 Main St ",
        "help@foodbank.org",
        "555-0100",
        " CA",
        "Oakland",
        "94607",
    ]));

    assert_eq!(
        program,
        Program {
            name: "Food Bank".to_string(),
            website: "foodbank.org".to_string(),
            address_line: "1 Main St".to_string(),
            city: "Oakland".to_string(),
            state: "CA".to_string(),
            zip: "94607".to_string(),
            email: "help@foodbank.org".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St, Oakland, CA, 94607".to_string(),
        }
    );
}

#[test]
fn short_rows_get_blank_trailing_columns() {
    let mapper = RecordMapper::new(ColumnSchema::default(), false);
    for len in 0..8 {
        let values: Vec<&str> = ["N", "W", "A", "E", "P", "S", "C", "Z"][..len].to_vec();
        let program = mapper.map_row(&row(&values));
        assert_eq!(program.zip, "", "row of {len} cells");
        if len < 1 {
            assert_eq!(program.name, "");
        }
        if len < 6 {
            assert_eq!(program.state, "");
            assert_eq!(program.city, "");
        }
    }
}

#[test]
fn null_and_missing_cells_read_as_empty() {
    let mapper = RecordMapper::new(ColumnSchema::default(), false);
    let sparse: Row = [Some(Cell::from("Clinic")), None, Some(Cell::default())]
        .into_iter()
        .collect();
    let program = mapper.map_row(&sparse);
    assert_eq!(program.name, "Clinic");
    assert_eq!(program.website, "");
    assert_eq!(program.address_line, "");
    assert_eq!(program.address, "");
}

#[test]
fn blank_names_follow_policy() {
    let table = Table {
        rows: vec![row(&["Kept"]), row(&["   ", "site.org"]), row(&[])],
    };

    let dropping = RecordMapper::new(ColumnSchema::default(), true);
    let names: Vec<_> = dropping.map_table(&table).into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Kept"]);

    let keeping = RecordMapper::new(ColumnSchema::default(), false);
    let kept = keeping.map_table(&table);
    assert_eq!(kept.len(), 3);
    assert_eq!(kept[1].website, "site.org");
}

#[test]
fn custom_schema_reads_by_position_and_skips_columns() {
    let schema = ColumnSchema::new(vec![Field::Skip, Field::State, Field::Name, Field::City]);
    let mapper = RecordMapper::new(schema, true);
    let program = mapper.map_row(&row(&["id-7", "NY", "Legal Aid", "Albany"]));
    assert_eq!(program.name, "Legal Aid");
    assert_eq!(program.state, "NY");
    assert_eq!(program.city, "Albany");
    assert_eq!(program.address, "Albany, NY");
    assert_eq!(program.website, "");
}

#[test]
fn build_catalog_reports_empty_and_malformed_distinctly() {
    let options = DirectoryOptions::default();
    let blank_only = r#"{"table":{"rows":[{"c":[{"v":""}]}]}}"#;
    assert_eq!(build_catalog(blank_only, &options), Err(LoadError::EmptyCatalog));
    assert_eq!(
        build_catalog("not json", &options),
        Err(LoadError::MalformedResponse(MalformedResponseError::NoJson))
    );

    let keep_blank = DirectoryOptions {
        drop_blank_name: false,
        ..DirectoryOptions::default()
    };
    assert_eq!(build_catalog(blank_only, &keep_blank).unwrap().len(), 1);
}
