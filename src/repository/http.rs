//! Blocking REST implementation of the repository traits.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::domain::booking::{BookingFormState, JobRecord};
use crate::domain::types::{EndpointPath, JobId};
use crate::dto::api::{FilterRequest, FilterResponse};
use crate::models::config::ClientConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingListQuery, BookingListReader, BookingWriter, JobReader, Row};

/// Repository backed by the freight REST API.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
    booking_endpoint: EndpointPath,
}

impl HttpRepository {
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let booking_endpoint = EndpointPath::new(config.booking_endpoint.as_str())?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            booking_endpoint,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn job_url(&self, id: JobId) -> String {
        self.url(&format!(
            "{}/{id}",
            self.booking_endpoint.trim_end_matches('/')
        ))
    }
}

/// Turns non-success statuses into [`RepositoryError::Rejected`].
fn check_status(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().unwrap_or_default();
    Err(RepositoryError::Rejected {
        status: status.as_u16(),
        message,
    })
}

impl BookingListReader for HttpRepository {
    fn list_rows(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Row>)> {
        let mut request = self
            .client
            .post(self.url(query.endpoint.as_str()))
            .json(&FilterRequest::from(&query));

        if let Some(pagination) = query.pagination {
            request = request.query(&[
                ("index", pagination.offset()),
                ("limit", pagination.per_page.get()),
            ]);
        }

        let response = check_status(request.send()?)?;
        let body = response.bytes()?;
        let page = FilterResponse::from_slice(&body)?;

        log::info!(
            "Fetched {} of {} rows from {}",
            page.rows.len(),
            page.total,
            query.endpoint
        );

        Ok((page.total, page.rows))
    }
}

impl JobReader for HttpRepository {
    fn get_job(&self, id: JobId) -> RepositoryResult<Option<JobRecord>> {
        let response = self.client.get(self.job_url(id)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let job = check_status(response)?.json::<JobRecord>()?;
        Ok(Some(job))
    }
}

impl BookingWriter for HttpRepository {
    fn create_booking(&self, booking: &BookingFormState) -> RepositoryResult<JobRecord> {
        let response = self
            .client
            .post(self.url(self.booking_endpoint.as_str()))
            .json(booking)
            .send()?;

        Ok(check_status(response)?.json::<JobRecord>()?)
    }

    fn update_booking(&self, id: JobId, booking: &BookingFormState) -> RepositoryResult<JobRecord> {
        let response = self.client.put(self.job_url(id)).json(booking).send()?;

        match check_status(response) {
            Err(RepositoryError::Rejected { status: 404, .. }) => Err(RepositoryError::NotFound),
            other => Ok(other?.json::<JobRecord>()?),
        }
    }
}
