//! One-shot profile load state.
//!
//! The page starts in [`LoadState::Loading`] and moves to
//! [`LoadState::Ready`] at most once. Failures never change the state: they
//! are handed back to the caller, which logs them, and the page stays on
//! the loading indicator for the rest of the session.

use std::sync::Arc;

use thiserror::Error;

use crate::types::Profile;

/// Why the profile document could not be loaded.
#[derive(Debug, Error)]
pub enum ProfileLoadFailure {
    #[error("no browser window available to fetch the profile")]
    NoWindow,

    #[error("request for {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("invalid profile document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a profile document.
///
/// No defaults are filled in: a missing required field is a
/// [`ProfileLoadFailure::Parse`] naming the field.
pub fn parse_profile(body: &str) -> Result<Profile, ProfileLoadFailure> {
    Ok(serde_json::from_str(body)?)
}

/// Whether the profile has arrived yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<Profile>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Apply the outcome of a load attempt.
    ///
    /// Once `Ready`, every later outcome is ignored. A failure leaves the
    /// state untouched and is returned for logging.
    pub fn settle(
        &mut self,
        outcome: Result<Profile, ProfileLoadFailure>,
    ) -> Result<(), ProfileLoadFailure> {
        if !self.is_loading() {
            return Ok(());
        }
        *self = LoadState::Ready(Arc::new(outcome?));
        Ok(())
    }
}
