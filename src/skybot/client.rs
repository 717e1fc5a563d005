//! SkyBoT cone-search request

use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use super::params::ConeSearch;
use crate::client::{build_client, check_status, map_send_error};
use crate::errors::SsoError;

/// Sends one cone-search POST and returns the raw text answer
#[derive(Debug)]
pub struct SkybotClient {
    client: Client,
    url: Url,
    timeout: f64,
}

impl SkybotClient {
    pub fn new(url: &str, timeout: f64) -> Result<Self, SsoError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: Url::parse(url)?,
            timeout,
        })
    }

    /// Endpoint with the search parameters in the query string
    pub fn request_url(&self, params: &ConeSearch) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(params.to_query());
        url
    }

    pub fn cone_search(&self, params: &ConeSearch) -> Result<String, SsoError> {
        let url = self.request_url(params);
        info!(
            url = %self.url,
            epoch = %params.epoch,
            ra = params.ra.degrees(),
            dec = params.dec.degrees(),
            radius = params.radius,
            "Sending cone search"
        );

        let response = self
            .client
            .post(url)
            .send()
            .map_err(|e| map_send_error(e, self.timeout))?;
        let response = check_status(response)?;

        let text = response.text().map_err(|e| map_send_error(e, self.timeout))?;
        debug!(bytes = text.len(), lines = text.lines().count(), "Received cone-search answer");

        Ok(text)
    }
}
