//! Opening and submitting booking wizards.

use crate::domain::types::JobId;
use crate::dto::navigation::NavigationState;
use crate::repository::{BookingWriter, JobReader};
use crate::services::stepper::{BookingWizard, WizardError, WizardMode};
use crate::services::{ServiceError, ServiceResult};

const EDIT_SUFFIX: &str = "/edit";

/// Extracts the job id from an edit route such as `/ocean/export/bookings/42/edit`.
fn job_id_from_edit_path(path: &str) -> ServiceResult<JobId> {
    let prefix = path.trim_end_matches('/').trim_end_matches(EDIT_SUFFIX);
    let segment = prefix.rsplit('/').next().unwrap_or_default();
    Ok(segment.parse::<JobId>()?)
}

/// Builds the wizard for a route and the state it was navigated to with.
///
/// Edit mode wins when the state carries a job or the route ends in
/// `/edit`; in the latter case without a job the record is loaded by the id
/// in the path. Otherwise a new booking is started, prefilled from the
/// state's booking data when present.
pub fn open_wizard<R>(
    repo: &R,
    path: &str,
    state: Option<&NavigationState>,
) -> ServiceResult<BookingWizard>
where
    R: JobReader + ?Sized,
{
    if let Some(NavigationState::Job { job }) = state {
        return Ok(BookingWizard::edit(job.as_ref().clone()));
    }

    if path.trim_end_matches('/').ends_with(EDIT_SUFFIX) {
        let job_id = job_id_from_edit_path(path)?;
        let job = repo
            .get_job(job_id)
            .map_err(|err| {
                log::error!("Failed to load job {job_id}: {err}");
                err
            })?
            .ok_or(ServiceError::NotFound)?;
        return Ok(BookingWizard::edit(job));
    }

    let source = match state {
        Some(NavigationState::BookingData { booking_data }) => Some(booking_data),
        _ => None,
    };
    Ok(BookingWizard::create(source))
}

/// Completes the wizard: validates, then creates or updates the booking.
///
/// The payload is sent exactly as entered; free text is never rewritten.
/// On success the caller navigates back to the list with the returned
/// state, which makes the list refetch. On failure the wizard is untouched
/// so the user can retry.
pub fn submit_booking<R>(repo: &R, wizard: &BookingWizard) -> Result<NavigationState, WizardError>
where
    R: BookingWriter + ?Sized,
{
    wizard.complete(|mode, payload| {
        let saved = match mode {
            WizardMode::Create => repo.create_booking(&payload),
            WizardMode::Edit(id) => repo.update_booking(id, &payload),
        }
        .map_err(|err| {
            log::error!("Failed to save booking: {err}");
            ServiceError::from(err)
        })?;

        log::info!("Saved booking job {} ({})", saved.id, saved.job_no);
        Ok(NavigationState::refresh())
    })
}
