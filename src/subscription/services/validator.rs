//! Live validation of the derived group name.
//!
//! Each invocation recomputes the full group name from the parent group,
//! the organisation and the simple name, writes it back into the group
//! field, checks it lies in the project namespace, then asks the group
//! directory whether it already exists. The synchronous verdict only covers
//! the namespace check; the existence result arrives later and updates the
//! field feedback directly.
//!
//! Overlapping invocations are ordered by [`ValidationTicket`]: a remote
//! result is applied only while its ticket is the latest issued, so the
//! field always ends up reflecting the most recently started invocation.
//! Surfaces may call back into the validator from [`FormSurface`] writes
//! made while a pass reports; such calls are deferred, never blocked. The
//! feedback applied when a remote check completes must not call back.

use crate::subscription::{
    domain::{FeedbackIcon, FieldId, GroupName, GroupNameComponents, RuleViolation},
    ports::{FormHost, FormSurface, GroupDirectory},
};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, instrument, warn};

/// Monotonic sequence number of one validation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationTicket(u64);

impl ValidationTicket {
    /// Returns the raw sequence number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ValidationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terminal state of one remote existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExistenceOutcome {
    /// The group is free; the field was marked valid.
    Absent,
    /// The group already exists; the field was marked in error.
    Exists,
    /// The directory could not answer; the field shows a retry marker.
    Inconclusive,
    /// A newer invocation started meanwhile; the result was discarded.
    Stale,
}

/// Result of one synchronous validation pass.
#[derive(Debug)]
pub struct ValidationRun {
    full_name: GroupName,
    ticket: ValidationTicket,
    accepted: bool,
    check: Option<JoinHandle<ExistenceOutcome>>,
}

impl ValidationRun {
    /// Returns the verdict reported to the form framework: `true` once the
    /// namespace check passed, whatever the remote check later decides.
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the computed full group name.
    #[must_use]
    pub const fn full_name(&self) -> &GroupName {
        &self.full_name
    }

    /// Returns the ticket issued to this invocation.
    #[must_use]
    pub const fn ticket(&self) -> ValidationTicket {
        self.ticket
    }

    /// Waits for the remote check, if one was issued.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError`] when the check task panicked or was cancelled.
    pub async fn settled(self) -> Result<Option<ExistenceOutcome>, JoinError> {
        match self.check {
            Some(check) => check.await.map(Some),
            None => Ok(None),
        }
    }
}

/// Pass currently reporting on some thread.
#[derive(Debug, Clone)]
struct ActivePass {
    thread: ThreadId,
    ticket: ValidationTicket,
    full_name: GroupName,
}

/// Clears the active pass when reporting ends, even on unwind.
struct ActivePassGuard<'a>(&'a Mutex<Option<ActivePass>>);

impl Drop for ActivePassGuard<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Validator of the group name in creation mode.
pub struct GroupNameValidator<H, D, S>
where
    H: FormHost + 'static,
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    host: Arc<H>,
    directory: Arc<D>,
    surface: Arc<S>,
    runtime: Handle,
    latest: Arc<Mutex<u64>>,
    active: Mutex<Option<ActivePass>>,
    rerun: AtomicBool,
}

impl<H, D, S> GroupNameValidator<H, D, S>
where
    H: FormHost + 'static,
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    /// Creates a validator spawning remote checks on `runtime`.
    #[must_use]
    pub fn new(host: Arc<H>, directory: Arc<D>, surface: Arc<S>, runtime: Handle) -> Self {
        Self {
            host,
            directory,
            surface,
            runtime,
            latest: Arc::new(Mutex::new(0)),
            active: Mutex::new(None),
            rerun: AtomicBool::new(false),
        }
    }

    /// Runs one validation pass and returns the framework's verdict.
    pub fn validate(&self) -> bool {
        self.run().accepted()
    }

    /// Runs one validation pass.
    ///
    /// The namespace check is synchronous; when it passes, the existence
    /// check is spawned and its handle returned in the [`ValidationRun`].
    ///
    /// A call made from the surface while a pass is reporting on the same
    /// thread (a change handler fired by [`FormSurface::set_value`], say)
    /// does not block. It returns the namespace verdict of the current
    /// values without touching the field, and the reporting pass runs again
    /// once it completes if those values now derive another name.
    pub fn run(&self) -> ValidationRun {
        if let Some(active) = self.active_on_current_thread() {
            return self.defer(&active);
        }
        loop {
            let run = self.report();
            if !self.rerun.swap(false, Ordering::AcqRel) {
                return run;
            }
            debug!(ticket = %run.ticket, "revalidating after a re-entrant call");
        }
    }

    fn components(&self) -> GroupNameComponents {
        GroupNameComponents::new(
            self.surface.value(&FieldId::PARENT_GROUP),
            self.surface.value(&FieldId::ORGANISATION),
            self.surface.value(&FieldId::GROUP_SIMPLE_NAME),
        )
    }

    fn active_on_current_thread(&self) -> Option<ActivePass> {
        let current = thread::current().id();
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|pass| pass.thread == current)
            .cloned()
    }

    fn defer(&self, active: &ActivePass) -> ValidationRun {
        let full_name = self.components().full_name();
        let accepted = self.host.project_key().admits(&full_name);
        if full_name != active.full_name {
            self.rerun.store(true, Ordering::Release);
        }
        debug!(ticket = %active.ticket, full_name = %full_name, "re-entrant validation deferred");
        ValidationRun {
            full_name,
            ticket: active.ticket,
            accepted,
            check: None,
        }
    }

    fn report(&self) -> ValidationRun {
        let group = FieldId::GROUP;
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *latest += 1;
        let ticket = ValidationTicket(*latest);

        let full_name = self.components().full_name();
        debug!(%ticket, full_name = %full_name, "derived group name");
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(ActivePass {
            thread: thread::current().id(),
            ticket,
            full_name: full_name.clone(),
        });
        let _active = ActivePassGuard(&self.active);

        self.surface.reset(&group);
        self.surface.set_value(&group, full_name.as_str());
        self.surface.prepare_feedback(&group);

        let key = self.host.project_key();
        if !key.admits(&full_name) {
            debug!(%ticket, project = %key, "group name outside the project namespace");
            self.surface.add_error(&group, RuleViolation::starts_with(&key));
            return ValidationRun {
                full_name,
                ticket,
                accepted: false,
                check: None,
            };
        }

        self.surface.add_message(&group, None, FeedbackIcon::Pending);
        let check = self.runtime.spawn(check_existence(
            Arc::clone(&self.directory),
            Arc::clone(&self.surface),
            Arc::clone(&self.latest),
            ticket,
            full_name.clone(),
        ));
        drop(latest);

        ValidationRun {
            full_name,
            ticket,
            accepted: true,
            check: Some(check),
        }
    }
}

impl<H, D, S> fmt::Debug for GroupNameValidator<H, D, S>
where
    H: FormHost + 'static,
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupNameValidator").finish_non_exhaustive()
    }
}

#[instrument(skip_all, fields(ticket = %ticket, full_name = %full_name))]
async fn check_existence<D, S>(
    directory: Arc<D>,
    surface: Arc<S>,
    latest: Arc<Mutex<u64>>,
    ticket: ValidationTicket,
    full_name: GroupName,
) -> ExistenceOutcome
where
    D: GroupDirectory + 'static,
    S: FormSurface + 'static,
{
    let answer = directory.exists(&full_name).await;

    let current = latest.lock().unwrap_or_else(PoisonError::into_inner);
    if *current != ticket.0 {
        debug!(latest = *current, "discarding stale existence result");
        return ExistenceOutcome::Stale;
    }

    let group = FieldId::GROUP;
    match answer {
        Ok(true) => {
            surface.add_error(&group, RuleViolation::already_exist(&full_name));
            ExistenceOutcome::Exists
        }
        Ok(false) => {
            surface.add_success(&group, true);
            ExistenceOutcome::Absent
        }
        Err(err) => {
            warn!(error = %err, "group existence check failed");
            surface.add_message(&group, Some(err.to_string()), FeedbackIcon::Retry);
            ExistenceOutcome::Inconclusive
        }
    }
}
