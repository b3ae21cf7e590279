use directory_core::{build_catalog, DirectoryOptions, LoadError, Program};
use directory_logging::{directory_info, directory_warn};

use crate::decode::decode_body;
use crate::fetch::{Fetcher, NullProgressSink, ProgressSink};
use crate::RequestId;

/// Fetches `url`, parses the body and maps it into a catalog.
///
/// Every failure comes back as a [`LoadError`]; nothing escapes as a panic
/// or a transport-specific error.
pub async fn load_catalog(
    fetcher: &dyn Fetcher,
    url: &str,
    options: &DirectoryOptions,
) -> Result<Vec<Program>, LoadError> {
    load_with_progress(fetcher, 0, url, options, &NullProgressSink).await
}

pub(crate) async fn load_with_progress(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    url: &str,
    options: &DirectoryOptions,
    sink: &dyn ProgressSink,
) -> Result<Vec<Program>, LoadError> {
    directory_info!("loading catalog request_id={request_id} url_len={}", url.len());

    let fetched = tokio::time::timeout(options.timeout(), fetcher.fetch(request_id, url, sink))
        .await
        .map_err(|_| LoadError::Timeout {
            timeout_ms: options.timeout_ms,
        })?
        .map_err(|err| {
            directory_warn!("fetch failed request_id={request_id}: {err}");
            err.into_load_error(options.timeout_ms)
        })?;

    let body = decode_body(&fetched.bytes, fetched.metadata.content_type.as_deref())?;
    build_catalog(&body, options)
}
