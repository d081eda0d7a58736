// src/core/net.rs
// Blocking HTTP GET; one request per run.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    logd!("GET {url}: {} bytes", body.len());
    Ok(body)
}
