use serde::{Deserialize, Serialize};

use crate::{Row, Table};

/// Separator between the non-empty parts of a display address.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// A program field a source column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Website,
    AddressLine,
    Email,
    Phone,
    State,
    City,
    Zip,
    /// Column present in the sheet but not used.
    Skip,
}

/// Column order of the source sheet, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSchema {
    columns: Vec<Field>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<Field>) -> Self {
        Self { columns }
    }

    /// Position of the first column feeding `field`.
    pub fn position(&self, field: Field) -> Option<usize> {
        if field == Field::Skip {
            return None;
        }
        self.columns.iter().position(|column| *column == field)
    }
}

impl Default for ColumnSchema {
    /// Name | Website | Address | Email | Phone | State | City | Zip
    fn default() -> Self {
        Self::new(vec![
            Field::Name,
            Field::Website,
            Field::AddressLine,
            Field::Email,
            Field::Phone,
            Field::State,
            Field::City,
            Field::Zip,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub name: String,
    pub website: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub email: String,
    pub phone: String,
    /// Non-empty parts of `[address_line, city, state, zip]` joined for display.
    pub address: String,
}

impl Program {
    /// Website as an absolute URL, `https://` assumed when no scheme is given.
    pub fn website_url(&self) -> Option<String> {
        if self.website.is_empty() {
            return None;
        }
        let lower = self.website.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Some(self.website.clone())
        } else {
            Some(format!("https://{}", self.website))
        }
    }
}

/// Builds the display address from its parts, skipping blanks.
pub fn display_address(address_line: &str, city: &str, state: &str, zip: &str) -> String {
    [address_line, city, state, zip]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR)
}

/// Turns table rows into [`Program`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMapper {
    schema: ColumnSchema,
    drop_blank_name: bool,
}

impl RecordMapper {
    pub fn new(schema: ColumnSchema, drop_blank_name: bool) -> Self {
        Self {
            schema,
            drop_blank_name,
        }
    }

    /// Maps one row. Never fails: short rows read as blank trailing columns.
    pub fn map_row(&self, row: &Row) -> Program {
        let read = |field: Field| {
            self.schema
                .position(field)
                .map(|index| row.cell_text(index).trim().to_string())
                .unwrap_or_default()
        };

        let address_line = read(Field::AddressLine);
        let city = read(Field::City);
        let state = read(Field::State);
        let zip = read(Field::Zip);
        let address = display_address(&address_line, &city, &state, &zip);

        Program {
            name: read(Field::Name),
            website: read(Field::Website),
            email: read(Field::Email),
            phone: read(Field::Phone),
            address_line,
            city,
            state,
            zip,
            address,
        }
    }

    pub fn includes(&self, program: &Program) -> bool {
        !(self.drop_blank_name && program.name.is_empty())
    }

    /// Maps every row in source order, applying the blank-name policy.
    pub fn map_table(&self, table: &Table) -> Vec<Program> {
        table
            .rows
            .iter()
            .map(|row| self.map_row(row))
            .filter(|program| self.includes(program))
            .collect()
    }
}
