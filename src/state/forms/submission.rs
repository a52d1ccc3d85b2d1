//! Contact form submission lifecycle
//!
//! `ContactController` owns the form and drives it through
//! `Idle -> Submitting -> Success -> Idle`, or `Idle -> Failed` when a
//! submit finds invalid fields. Sending is simulated: the "request" is a
//! timer that always completes.
//!
//! Timers and haptic feedback are reached only through the
//! [`Scheduler`] and [`Haptics`] ports. Every pending timer's handle is
//! kept in a slot; scheduling into a slot cancels what it held, and a firing
//! whose handle no longer matches its slot is dropped as stale.

use super::field::FieldName;
use super::form_state::{ContactForm, Form};
use crate::config::FolioConfig;
use crate::host::{HapticPattern, Haptics, Scheduler, TimerHandle, TimerQueue};
use std::time::{Duration, Instant};
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will respond within 24 hours.";

/// Stage of the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    /// A submit found invalid fields
    Failed,
}

/// Form-level error raised when a submit finds invalid fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please correct the errors above and try again.")]
    InvalidFields { count: usize, first: FieldName },
}

/// What a submit trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight
    Ignored,
    Rejected { first_invalid: FieldName },
    Accepted,
}

/// Timer events the form schedules on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    Revalidate(FieldName),
    CompleteSubmission,
    FadeStatus,
    ClearStatus,
    FocusField(FieldName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Error,
}

/// Form-level status banner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
    /// Set while a success banner fades out before removal
    pub fading: bool,
}

impl FormStatus {
    fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            fading: false,
        }
    }

    fn error(err: &FormError) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.to_string(),
            fading: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::None
    }
}

/// Delays used by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// Simulated send time
    pub submit_latency: Duration,
    /// How long a success banner stays up, fade included
    pub status_display: Duration,
    /// Fade-out at the end of the display window
    pub status_fade: Duration,
    /// Quiet period after a keystroke before an errored field is re-checked
    pub revalidate_debounce: Duration,
    /// Delay before focusing the first invalid field
    pub focus_delay: Duration,
}

impl FormTimings {
    pub fn from_config(config: &FolioConfig) -> Self {
        let ms = |value: Option<u64>, default: u64| Duration::from_millis(value.unwrap_or(default));
        Self {
            submit_latency: ms(config.submit_latency_ms, 1000),
            status_display: ms(config.status_display_ms, 5000),
            status_fade: ms(config.status_fade_ms, 300),
            revalidate_debounce: ms(config.revalidate_debounce_ms, 300),
            focus_delay: ms(config.focus_delay_ms, 100),
        }
    }
}

impl Default for FormTimings {
    fn default() -> Self {
        Self::from_config(&FolioConfig::default())
    }
}

/// Handles of the timers the controller may have pending
#[derive(Debug, Default)]
struct PendingTimers {
    revalidate: [Option<TimerHandle>; 4],
    completion: Option<TimerHandle>,
    fade: Option<TimerHandle>,
    clear: Option<TimerHandle>,
    focus: Option<TimerHandle>,
}

impl PendingTimers {
    fn slot(&mut self, event: FormTimer) -> &mut Option<TimerHandle> {
        match event {
            FormTimer::Revalidate(field) => &mut self.revalidate[field.index()],
            FormTimer::CompleteSubmission => &mut self.completion,
            FormTimer::FadeStatus => &mut self.fade,
            FormTimer::ClearStatus => &mut self.clear,
            FormTimer::FocusField(_) => &mut self.focus,
        }
    }
}

fn reschedule<S: Scheduler>(
    scheduler: &mut S,
    slot: &mut Option<TimerHandle>,
    delay: Duration,
    event: FormTimer,
) {
    cancel(scheduler, slot);
    *slot = Some(scheduler.schedule(delay, event));
}

fn cancel<S: Scheduler>(scheduler: &mut S, slot: &mut Option<TimerHandle>) {
    if let Some(handle) = slot.take() {
        scheduler.cancel(handle);
    }
}

/// Drives the contact form's validation and submission
pub struct ContactController<S, H> {
    form: ContactForm,
    phase: SubmissionPhase,
    status: FormStatus,
    focus_request: Option<FieldName>,
    timers: PendingTimers,
    timings: FormTimings,
    scheduler: S,
    haptics: H,
}

impl<S: Scheduler, H: Haptics> ContactController<S, H> {
    pub fn new(timings: FormTimings, scheduler: S, haptics: H) -> Self {
        Self {
            form: ContactForm::new(),
            phase: SubmissionPhase::Idle,
            status: FormStatus::default(),
            focus_request: None,
            timers: PendingTimers::default(),
            timings,
            scheduler,
            haptics,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// True while a submission is in flight; the submit control is disabled
    pub fn is_busy(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Take the field the form asked to bring into view, if any
    pub fn take_focus_request(&mut self) -> Option<FieldName> {
        self.focus_request.take()
    }

    /// Move keyboard focus, blurring the field being left
    #[cfg(test)]
    pub fn focus(&mut self, index: usize) {
        let leaving = self.form.active_field_name();
        self.form.set_active_field(index);
        self.blur_left(leaving);
    }

    pub fn focus_next(&mut self) {
        let leaving = self.form.active_field_name();
        self.form.next_field();
        self.blur_left(leaving);
    }

    pub fn focus_prev(&mut self) {
        let leaving = self.form.active_field_name();
        self.form.prev_field();
        self.blur_left(leaving);
    }

    fn blur_left(&mut self, leaving: Option<FieldName>) {
        if let Some(name) = leaving {
            if self.form.active_field_name() != Some(name) {
                self.blur_field(name);
            }
        }
    }

    /// Focus leaves the form entirely
    pub fn leave(&mut self) {
        if let Some(name) = self.form.active_field_name() {
            self.blur_field(name);
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            if c == '\n' && !field.is_multiline {
                return;
            }
            field.push_char(c);
            let name = field.name;
            self.after_edit(name);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
            let name = field.name;
            self.after_edit(name);
        }
    }

    /// Append pasted text to the focused field. Line breaks become spaces
    /// outside the message field.
    pub fn paste(&mut self, text: &str) {
        let Some(name) = self.form.active_field_name() else {
            return;
        };
        let field = self.form.field(name);
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut value = field.as_text().to_string();
        if field.is_multiline {
            value.push_str(&text);
        } else {
            value.push_str(&text.replace('\n', " "));
        }
        self.edit_field(name, value);
    }

    /// Replace a field's value, as a text-edit event
    pub fn edit_field(&mut self, name: FieldName, value: String) {
        self.form.field_mut(name).set_text(value);
        self.after_edit(name);
    }

    /// Validate a field immediately, as when it loses focus
    pub fn blur_field(&mut self, name: FieldName) {
        cancel(&mut self.scheduler, self.timers.slot(FormTimer::Revalidate(name)));
        self.validate_with_feedback(name);
    }

    /// Handle a submit trigger
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_busy() {
            tracing::debug!("Submit ignored while a submission is in flight");
            return SubmitOutcome::Ignored;
        }

        self.cancel_status_timers();
        cancel(&mut self.scheduler, &mut self.timers.focus);
        for field in FieldName::ALL {
            cancel(&mut self.scheduler, self.timers.slot(FormTimer::Revalidate(field)));
        }
        self.status = FormStatus::default();

        let invalid = self.form.validate_required();
        if let Some(&first) = invalid.first() {
            let err = FormError::InvalidFields {
                count: invalid.len(),
                first,
            };
            let FormError::InvalidFields { count, first: name } = &err;
            tracing::warn!("Submit rejected: {count} invalid field(s), first {name}");
            self.phase = SubmissionPhase::Failed;
            self.status = FormStatus::error(&err);
            reschedule(
                &mut self.scheduler,
                &mut self.timers.focus,
                self.timings.focus_delay,
                FormTimer::FocusField(first),
            );
            self.feedback(HapticPattern::SubmitError);
            return SubmitOutcome::Rejected {
                first_invalid: first,
            };
        }

        tracing::info!("Submitting contact form");
        self.phase = SubmissionPhase::Submitting;
        reschedule(
            &mut self.scheduler,
            &mut self.timers.completion,
            self.timings.submit_latency,
            FormTimer::CompleteSubmission,
        );
        SubmitOutcome::Accepted
    }

    /// Deliver a timer firing from the scheduler
    pub fn handle_timer(&mut self, handle: TimerHandle, event: FormTimer) {
        let slot = self.timers.slot(event);
        if *slot != Some(handle) {
            tracing::debug!("Dropping stale timer {event:?} ({handle:?})");
            return;
        }
        *slot = None;

        match event {
            FormTimer::Revalidate(name) => {
                if !self.form.field(name).is_valid() {
                    self.validate_with_feedback(name);
                }
            }
            FormTimer::CompleteSubmission => self.complete_submission(),
            FormTimer::FadeStatus => {
                self.status.fading = true;
                reschedule(
                    &mut self.scheduler,
                    &mut self.timers.clear,
                    self.timings.status_fade,
                    FormTimer::ClearStatus,
                );
            }
            FormTimer::ClearStatus => {
                self.status = FormStatus::default();
                if self.phase == SubmissionPhase::Success {
                    tracing::debug!("Success banner expired");
                    self.phase = SubmissionPhase::Idle;
                }
            }
            FormTimer::FocusField(name) => {
                self.form.set_active_field(name.index());
                self.focus_request = Some(name);
            }
        }
    }

    fn complete_submission(&mut self) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        tracing::info!("Contact form sent");
        self.phase = SubmissionPhase::Success;
        self.status = FormStatus::success();
        self.form.reset();
        self.feedback(HapticPattern::Success);

        let fade_at = self
            .timings
            .status_display
            .saturating_sub(self.timings.status_fade);
        reschedule(
            &mut self.scheduler,
            &mut self.timers.fade,
            fade_at,
            FormTimer::FadeStatus,
        );
    }

    fn after_edit(&mut self, name: FieldName) {
        if matches!(
            self.phase,
            SubmissionPhase::Success | SubmissionPhase::Failed
        ) {
            tracing::debug!("Edit after {:?}, back to idle", self.phase);
            self.cancel_status_timers();
            self.status = FormStatus::default();
            self.phase = SubmissionPhase::Idle;
        }
        reschedule(
            &mut self.scheduler,
            self.timers.slot(FormTimer::Revalidate(name)),
            self.timings.revalidate_debounce,
            FormTimer::Revalidate(name),
        );
    }

    fn cancel_status_timers(&mut self) {
        cancel(&mut self.scheduler, &mut self.timers.fade);
        cancel(&mut self.scheduler, &mut self.timers.clear);
    }

    fn validate_with_feedback(&mut self, name: FieldName) {
        if !self.form.field_mut(name).validate() {
            self.feedback(HapticPattern::FieldError);
        }
    }

    fn feedback(&self, pattern: HapticPattern) {
        if self.haptics.is_supported() {
            self.haptics.pulse(pattern);
        }
    }
}

impl<H: Haptics> ContactController<TimerQueue, H> {
    /// Fire every timer due by `now`, in deadline order.
    /// Returns how many fired.
    pub fn run_due_timers(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((handle, event)) = self.scheduler.pop_due(now) {
            self.handle_timer(handle, event);
            fired += 1;
        }
        fired
    }
}
