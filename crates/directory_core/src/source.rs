use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{form_urlencoded, Url};

const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("invalid source url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("source url must use http or https: {0}")]
    UnsupportedScheme(String),
    #[error("spreadsheet id is empty")]
    EmptySheetId,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Any URL answering with a gviz-shaped body.
    Url(String),
    /// A public Google Sheet, optionally narrowed to one tab by `gid`.
    Sheet {
        sheet_id: String,
        #[serde(default)]
        gid: Option<String>,
    },
}

impl Source {
    pub fn resolve(&self) -> Result<Url, SourceError> {
        match self {
            Source::Url(raw) => {
                let url = Url::parse(raw.trim()).map_err(|err| SourceError::InvalidUrl {
                    url: raw.clone(),
                    message: err.to_string(),
                })?;
                match url.scheme() {
                    "http" | "https" => Ok(url),
                    _ => Err(SourceError::UnsupportedScheme(raw.clone())),
                }
            }
            Source::Sheet { sheet_id, gid } => gviz_url(sheet_id, gid.as_deref()),
        }
    }
}

/// JSON export endpoint of a sheet: `.../d/{id}/gviz/tq?tqx=out:json[&gid=..]`.
pub fn gviz_url(sheet_id: &str, gid: Option<&str>) -> Result<Url, SourceError> {
    let sheet_id = sheet_id.trim();
    if sheet_id.is_empty() {
        return Err(SourceError::EmptySheetId);
    }
    let invalid = |message: String| SourceError::InvalidUrl {
        url: SHEETS_BASE.to_string(),
        message,
    };

    let mut url = Url::parse(SHEETS_BASE).map_err(|err| invalid(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("base cannot hold path segments".to_string()))?
        .push(sheet_id)
        .push("gviz")
        .push("tq");

    let mut query = String::from("tqx=out:json");
    if let Some(gid) = gid.map(str::trim).filter(|g| !g.is_empty()) {
        query.push_str("&gid=");
        query.extend(form_urlencoded::byte_serialize(gid.as_bytes()));
    }
    url.set_query(Some(&query));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_url_without_gid() {
        let url = gviz_url("abc123", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out:json"
        );
    }

    #[test]
    fn sheet_url_with_gid_and_blank_gid() {
        let url = gviz_url("abc123", Some("42")).unwrap();
        assert!(url.as_str().ends_with("tq?tqx=out:json&gid=42"));
        let blank = gviz_url("abc123", Some("  ")).unwrap();
        assert!(blank.as_str().ends_with("tqx=out:json"));
    }

    #[test]
    fn rejects_empty_id_and_non_http_urls() {
        assert_eq!(gviz_url(" ", None), Err(SourceError::EmptySheetId));
        assert!(matches!(
            Source::Url("ftp://example.com/data".to_string()).resolve(),
            Err(SourceError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Source::Url("not a url".to_string()).resolve(),
            Err(SourceError::InvalidUrl { .. })
        ));
    }
}
