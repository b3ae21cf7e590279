use directory_logging::{directory_info, directory_warn};

use crate::{parse_response, DirectoryOptions, LoadError, Program};

/// Parses a response body and maps it into a catalog.
///
/// Zero surviving records is reported as [`LoadError::EmptyCatalog`] so the
/// caller can tell "no data" apart from a broken response.
pub fn build_catalog(body: &str, options: &DirectoryOptions) -> Result<Vec<Program>, LoadError> {
    let table = parse_response(body).inspect_err(|err| {
        directory_warn!("response rejected: {err}");
    })?;
    let mapper = options.mapper();
    let catalog = mapper.map_table(&table);

    directory_info!(
        "rows fetched: {} kept: {} dropped: {}",
        table.rows.len(),
        catalog.len(),
        table.rows.len() - catalog.len()
    );

    if catalog.is_empty() {
        return Err(LoadError::EmptyCatalog);
    }
    Ok(catalog)
}
