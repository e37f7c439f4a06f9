//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{BookingFormState, JobRecord};
use crate::domain::types::JobId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingListQuery, BookingListReader, BookingWriter, JobReader, Row};

mock! {
    pub Repository {}

    impl BookingListReader for Repository {
        fn list_rows(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Row>)>;
    }

    impl JobReader for Repository {
        fn get_job(&self, id: JobId) -> RepositoryResult<Option<JobRecord>>;
    }

    impl BookingWriter for Repository {
        fn create_booking(&self, booking: &BookingFormState) -> RepositoryResult<JobRecord>;
        fn update_booking(
            &self,
            id: JobId,
            booking: &BookingFormState,
        ) -> RepositoryResult<JobRecord>;
    }
}
