//! HTTP sheet-bridge backend.
//!
//! Talks to a small REST bridge in front of the hospital spreadsheet:
//! `GET {base}/{worksheet}` returns the full row set as a JSON array (404 for
//! a sheet that does not exist yet), `PUT {base}/{worksheet}` replaces the
//! sheet contents. Credentials are a bearer token.

use crate::error::{LadderError, Result};
use crate::record::ProgressRecord;
use crate::store::SheetStore;
use std::time::Duration;

pub struct HttpSheetStore {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpSheetStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LadderError::StoreUnavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, worksheet: &str) -> String {
        format!("{}/{}", self.base_url, worksheet)
    }

    fn authorize(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

impl SheetStore for HttpSheetStore {
    fn read(&self, worksheet: &str) -> Result<Vec<ProgressRecord>> {
        let response = self
            .authorize(self.client.get(self.url(worksheet)))
            .send()
            .map_err(|e| LadderError::StoreUnavailable(e.to_string()))?;

        // A sheet that was never written yet is a normal empty state.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(LadderError::StoreUnavailable(format!(
                "read {worksheet}: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|e| LadderError::StoreUnavailable(format!("read {worksheet}: {e}")))
    }

    fn write(&self, worksheet: &str, rows: &[ProgressRecord]) -> Result<()> {
        let response = self
            .authorize(self.client.put(self.url(worksheet)))
            .json(rows)
            .send()
            .map_err(|e| LadderError::StoreUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LadderError::StoreUnavailable(format!(
                "write {worksheet}: HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }
}
