//! One-shot fetch of the profile document.

use js_sys::Error as JsError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_view::load::{LoadState, ProfileLoadFailure, parse_profile};
use portfolio_view::types::Profile;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::diagnostics::{self, Level};

/// GET `url` and parse the body as a profile.
pub async fn fetch_profile(url: &str) -> Result<Profile, ProfileLoadFailure> {
    let window = web_sys::window().ok_or(ProfileLoadFailure::NoWindow)?;

    let network = |err: JsValue| ProfileLoadFailure::Network {
        url: url.to_string(),
        reason: describe(&err),
    };
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(ProfileLoadFailure::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = |reason: String| ProfileLoadFailure::Body {
        url: url.to_string(),
        reason,
    };
    let text = response.text().map_err(|e| body(describe(&e)))?;
    let text = JsFuture::from(text).await.map_err(|e| body(describe(&e)))?;
    let text = text
        .as_string()
        .ok_or_else(|| body("response body is not a string".into()))?;

    parse_profile(&text)
}

/// How a load attempt ended.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The profile was parsed and the page moved to `Ready`.
    Stored,
    /// The profile arrived after the page's reactive owner was disposed.
    Abandoned,
    Failed(ProfileLoadFailure),
}

impl LoadOutcome {
    /// Console level and text reported for this outcome.
    pub fn diagnostic(&self, url: &str) -> (Level, String) {
        match self {
            LoadOutcome::Stored => (Level::Info, format!("profile loaded from {url}")),
            LoadOutcome::Abandoned => (
                Level::Info,
                format!("page closed before the profile from {url} arrived"),
            ),
            LoadOutcome::Failed(err) => (Level::Error, format!("Error loading data: {err}")),
        }
    }
}

/// Fetch `url` and settle `state` with the result.
///
/// A failure leaves `state` on `Loading`.
pub async fn load_profile(url: &str, state: RwSignal<LoadState>) -> LoadOutcome {
    match fetch_profile(url).await {
        Ok(profile) => match state.try_update(|s| s.settle(Ok(profile))) {
            Some(Ok(())) => LoadOutcome::Stored,
            Some(Err(err)) => LoadOutcome::Failed(err),
            None => LoadOutcome::Abandoned,
        },
        Err(err) => LoadOutcome::Failed(err),
    }
}

/// Start the single load of `url` into `state`.
///
/// No retry: a failure is logged once and the page keeps showing the
/// loading screen.
pub fn spawn_profile_load(url: String, state: RwSignal<LoadState>) {
    spawn_local(async move {
        let (level, message) = load_profile(&url, state).await.diagnostic(&url);
        diagnostics::emit(level, "load", &message);
    });
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<JsError>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
