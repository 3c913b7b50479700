//! HTTP retrieval and decoding of the option list.

use super::error::FetchError;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Record {
    name: RecordName,
}

#[derive(Debug, Deserialize)]
struct RecordName {
    common: String,
}

/// Decodes a JSON array of `{ "name": { "common": .. } }` records into the
/// common names, in response order.
///
/// Extra fields on a record are ignored; a record without `name.common`
/// fails the whole payload.
///
/// ```rust
/// use bubbletea_dropdown::options::parse_common_names;
///
/// let body = br#"[{"name":{"common":"Canada","official":"Canada"}},{"name":{"common":"France"}}]"#;
/// assert_eq!(parse_common_names(body).unwrap(), vec!["Canada", "France"]);
/// ```
pub fn parse_common_names(body: &[u8]) -> Result<Vec<String>, FetchError> {
    let records: Vec<Record> = serde_json::from_slice(body)?;
    Ok(records.into_iter().map(|r| r.name.common).collect())
}

/// Performs the GET and decodes the body.
pub(crate) async fn fetch_common_names(
    client: &reqwest::Client,
    url: &str,
    timeout: Option<Duration>,
) -> Result<Vec<String>, FetchError> {
    let mut request = client.get(url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    parse_common_names(&body)
}
