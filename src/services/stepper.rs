//! Multi-step wizard state for the booking screens.

use thiserror::Error;

use crate::domain::booking::{BookingFormState, JobRecord};
use crate::domain::source::BookingSource;
use crate::domain::types::JobId;
use crate::forms::FormError;
use crate::forms::booking::{BOOKING_STEP_COUNT, BookingSteps};
use crate::services::ServiceError;
use crate::services::booking_mapper::map_booking;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepperError {
    #[error("step {step} is outside 0..{count}")]
    OutOfRange { step: usize, count: usize },

    #[error("step {0} has not been visited yet")]
    NotVisited(usize),
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("the wizard can only be completed from its last step (currently on step {0})")]
    NotOnFinalStep(usize),

    #[error(transparent)]
    Navigation(#[from] StepperError),

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("submission failed: {0}")]
    Submit(#[from] ServiceError),
}

/// Current step of an `N`-step wizard plus the furthest step reached.
///
/// `next`/`back` are bounded at the ends. `goto` may jump to any step that
/// has been visited; no step gates navigation on the validity of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stepper {
    step: usize,
    furthest: usize,
    count: usize,
}

impl Stepper {
    pub fn new(count: usize) -> Self {
        Self {
            step: 0,
            furthest: 0,
            count: count.max(1),
        }
    }

    /// A stepper on the first step with every step already reachable.
    pub fn fully_visited(count: usize) -> Self {
        let mut stepper = Self::new(count);
        stepper.furthest = stepper.count - 1;
        stepper
    }

    pub fn current(&self) -> usize {
        self.step
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == self.count
    }

    pub fn is_visited(&self, step: usize) -> bool {
        step <= self.furthest
    }

    pub fn next(&mut self) -> usize {
        self.step = (self.step + 1).min(self.count - 1);
        self.furthest = self.furthest.max(self.step);
        self.step
    }

    pub fn back(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    /// Jumps straight to `step`, as a click on the step indicator does.
    pub fn goto(&mut self, step: usize) -> Result<usize, StepperError> {
        if step >= self.count {
            return Err(StepperError::OutOfRange {
                step,
                count: self.count,
            });
        }
        if !self.is_visited(step) {
            return Err(StepperError::NotVisited(step));
        }
        self.step = step;
        Ok(step)
    }
}

/// Whether the wizard creates a new booking or edits a persisted job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit(JobId),
}

/// Booking wizard: navigation plus the values of every step.
#[derive(Clone, Debug)]
pub struct BookingWizard {
    mode: WizardMode,
    stepper: Stepper,
    steps: BookingSteps,
}

impl BookingWizard {
    /// Starts a new booking, prefilled from `source` when there is one.
    pub fn create(source: Option<&BookingSource>) -> Self {
        let initial = map_booking(source).unwrap_or_default();
        Self {
            mode: WizardMode::Create,
            stepper: Stepper::new(BOOKING_STEP_COUNT),
            steps: BookingSteps::from(initial),
        }
    }

    /// Opens a persisted job; every step is reachable straight away.
    pub fn edit(job: JobRecord) -> Self {
        Self {
            mode: WizardMode::Edit(job.id),
            stepper: Stepper::fully_visited(BOOKING_STEP_COUNT),
            steps: BookingSteps::from(job.booking),
        }
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, WizardMode::Edit(_))
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn current_step(&self) -> usize {
        self.stepper.current()
    }

    pub fn steps(&self) -> &BookingSteps {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut BookingSteps {
        &mut self.steps
    }

    pub fn next(&mut self) -> usize {
        self.stepper.next()
    }

    pub fn back(&mut self) -> usize {
        self.stepper.back()
    }

    pub fn goto(&mut self, step: usize) -> Result<usize, WizardError> {
        Ok(self.stepper.goto(step)?)
    }

    /// Merges every step into the payload the wizard would submit.
    pub fn payload(&self) -> BookingFormState {
        self.steps.merge()
    }

    /// Validates all steps and hands the merged payload to `on_complete`.
    ///
    /// Only allowed on the last step. Nothing is called when validation
    /// fails, and the wizard keeps its values whatever the outcome so the
    /// user can correct and retry.
    pub fn complete<T, F>(&self, on_complete: F) -> Result<T, WizardError>
    where
        F: FnOnce(WizardMode, BookingFormState) -> Result<T, ServiceError>,
    {
        if !self.stepper.is_last() {
            return Err(WizardError::NotOnFinalStep(self.stepper.current()));
        }

        self.steps.validate_all()?;

        Ok(on_complete(self.mode, self.steps.merge())?)
    }
}
