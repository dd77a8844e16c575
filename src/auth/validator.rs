//! Authentication validator
//!
//! Decides whether a submitted credential pair is accepted. The decision is
//! released only after a fixed artificial delay, and the loading signal is
//! raised on the sink before `validate` returns.

use log::{info, warn};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::credentials::{CredentialStore, Credentials};
use super::results::ValidationResult;
use crate::error::AuthError;

/// Receives the progress and outcome of a login attempt.
pub trait ResultSink: Send + Sync {
    fn present_loading(&self, is_loading: bool);
    fn present_result(&self, result: ValidationResult);
}

/// A login attempt that resolves once its delay has elapsed.
///
/// Await it on the task that owns the observable state: the sink's
/// `present_result` runs wherever this future is polled.
pub type PendingValidation = Pin<Box<dyn Future<Output = ValidationResult> + Send + 'static>>;

/// Business logic entry point for login attempts.
pub trait Validator {
    fn validate(&self, credentials: Credentials) -> Result<PendingValidation, AuthError>;
}

/// Compares submitted credentials against a [`CredentialStore`].
pub struct CredentialValidator<S> {
    store: CredentialStore,
    sink: Arc<S>,
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

impl<S: ResultSink + 'static> CredentialValidator<S> {
    pub fn new(store: CredentialStore, sink: Arc<S>, delay: Duration) -> Self {
        Self {
            store,
            sink,
            delay,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The synchronous accept/reject decision, without delay or side effects.
    pub fn check(&self, credentials: &Credentials) -> ValidationResult {
        if self.store.matches(credentials) {
            ValidationResult::succeeded()
        } else {
            ValidationResult::failed()
        }
    }

    /// Returns whether an attempt is waiting for its result.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl<S: ResultSink + 'static> Validator for CredentialValidator<S> {
    fn validate(&self, credentials: Credentials) -> Result<PendingValidation, AuthError> {
        let guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!(
                "Rejected login attempt for {}: previous attempt still pending",
                credentials.username
            );
            AuthError::AttemptInProgress
        })?;

        info!("Login attempt for user {}", credentials.username);
        self.sink.present_loading(true);

        let result = self.check(&credentials);
        drop(credentials);

        let sink = Arc::clone(&self.sink);
        let delay = self.delay;

        Ok(Box::pin(async move {
            tokio::time::sleep(delay).await;

            if result.success {
                info!("Authentication succeeded");
            } else {
                info!("Authentication failed");
            }

            // Released before presenting so a consumer may resubmit from its reaction.
            drop(guard);
            sink.present_result(result.clone());
            result
        }))
    }
}

/// Holds the in-flight flag for the lifetime of one attempt.
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
