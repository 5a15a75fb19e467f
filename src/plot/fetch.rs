// src/plot/fetch.rs

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::error::{PlotError, PlotResult};

/// GET `url` once and return the body. Anything but `200 OK` is an error.
pub async fn fetch_page(client: &Client, url: &Url) -> PlotResult<String> {
    let http_err = |source: reqwest::Error| PlotError::Http {
        url: url.to_string(),
        source,
    };

    debug!(%url, "fetching page");
    let resp = client.get(url.clone()).send().await.map_err(http_err)?;
    let status = resp.status();
    info!(%url, status = status.as_u16(), "fetched page");

    if status != StatusCode::OK {
        return Err(PlotError::Status {
            url: url.to_string(),
            status,
        });
    }
    resp.text().await.map_err(http_err)
}
