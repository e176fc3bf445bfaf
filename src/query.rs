//! Query string encoding for tourism API requests.
//!
//! The service key is injected here, next to the record's own pairs, and is
//! never stored on a parameter record.

use crate::models::QueryParams;
use crate::Result;
use url::Url;

/// Query key the API expects the credential under.
pub const SERVICE_KEY_PARAM: &str = "ServiceKey";

/// Form-encode `params` plus the service key, sorted by key.
pub fn encode_query(params: &QueryParams, service_key: &str) -> String {
    let mut pairs = params.query_pairs();
    pairs.push((SERVICE_KEY_PARAM, service_key.to_string()));
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Full request URL for `params` below `base_url`.
pub fn build_url(base_url: &str, params: &QueryParams, service_key: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        params.endpoint().path()
    ))?;
    url.set_query(Some(&encode_query(params, service_key)));
    Ok(url)
}
