//! In-memory repository shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;

use freight_desk::domain::booking::{BookingFormState, JobRecord};
use freight_desk::domain::types::JobId;
use freight_desk::repository::errors::{RepositoryError, RepositoryResult};
use freight_desk::repository::{BookingListQuery, BookingListReader, BookingWriter, JobReader, Row};
use serde_json::{Value, json};

/// Serves list rows by field equality and stores saved bookings.
#[derive(Default)]
pub struct InMemoryRepo {
    pub rows: Vec<Row>,
    pub jobs: RefCell<Vec<JobRecord>>,
    pub queries: RefCell<Vec<BookingListQuery>>,
}

impl InMemoryRepo {
    /// `count` ocean export rows alternating between customers `C1` and `C2`.
    pub fn with_rows(count: usize) -> Self {
        let rows = (1..=count)
            .map(|i| {
                json!({
                    "job_no": format!("OE-{i}"),
                    "customer_code": if i % 2 == 0 { "C2" } else { "C1" },
                    "load_type": "FCL",
                })
            })
            .collect();
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn last_query(&self) -> Option<BookingListQuery> {
        self.queries.borrow().last().cloned()
    }
}

impl BookingListReader for InMemoryRepo {
    fn list_rows(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Row>)> {
        self.queries.borrow_mut().push(query.clone());

        let matching: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| match &query.filters {
                Some(filters) => filters
                    .iter()
                    .all(|(field, value)| row.get(field) == Some(&Value::from(value.as_str()))),
                None => true,
            })
            .collect();

        let page = match query.pagination {
            Some(pagination) => matching
                .iter()
                .skip(pagination.offset())
                .take(pagination.per_page.get())
                .map(|row| (*row).clone())
                .collect(),
            None => matching.iter().map(|row| (*row).clone()).collect(),
        };
        Ok((matching.len(), page))
    }
}

impl JobReader for InMemoryRepo {
    fn get_job(&self, id: JobId) -> RepositoryResult<Option<JobRecord>> {
        Ok(self.jobs.borrow().iter().find(|job| job.id == id).cloned())
    }
}

impl BookingWriter for InMemoryRepo {
    fn create_booking(&self, booking: &BookingFormState) -> RepositoryResult<JobRecord> {
        let mut jobs = self.jobs.borrow_mut();
        let id = JobId::new(jobs.len() as i64 + 1)?;
        let job = JobRecord {
            id,
            job_no: format!("OE-{id}"),
            booking: booking.clone(),
        };
        jobs.push(job.clone());
        Ok(job)
    }

    fn update_booking(&self, id: JobId, booking: &BookingFormState) -> RepositoryResult<JobRecord> {
        let mut jobs = self.jobs.borrow_mut();
        let job = jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or(RepositoryError::NotFound)?;
        job.booking = booking.clone();
        Ok(job.clone())
    }
}
