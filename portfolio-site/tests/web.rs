//! Browser tests, run with `wasm-pack test --headless --firefox portfolio-site`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use portfolio_site::loader::{LoadOutcome, fetch_profile, load_profile, spawn_profile_load};
use portfolio_site::navigator::DomViewport;
use portfolio_site::scroll::track_scroll;
use portfolio_view::load::{LoadState, ProfileLoadFailure};
use portfolio_view::nav::{NavState, Section, Viewport, navigate};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const MISSING: &str = "/missing/portfolio-data.json";

fn add_section(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

fn data_url(json: &str) -> String {
    format!(
        "data:application/json,{}",
        String::from(js_sys::encode_uri_component(json))
    )
}

fn scroll_window_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn missing_anchor_is_reported() {
    assert!(!DomViewport.scroll_to_anchor("no-such-section"));
}

#[wasm_bindgen_test]
fn navigating_to_existing_anchor_updates_state() {
    add_section(Section::Contact.anchor());

    let mut state = NavState {
        menu_open: true,
        ..Default::default()
    };
    assert!(navigate(&mut state, &DomViewport, Section::Contact));
    assert_eq!(state.active, Section::Contact);
    assert!(!state.menu_open);
}

#[wasm_bindgen_test]
async fn missing_document_is_a_status_failure() {
    let err = fetch_profile(MISSING).await.unwrap_err();
    assert!(matches!(err, ProfileLoadFailure::Status { status: 404, .. }));
}

#[wasm_bindgen_test]
async fn failed_load_keeps_the_page_loading() {
    let state = RwSignal::new(LoadState::default());

    let outcome = load_profile(MISSING, state).await;

    assert!(matches!(
        outcome,
        LoadOutcome::Failed(ProfileLoadFailure::Status { status: 404, .. })
    ));
    assert!(state.get_untracked().is_loading());
}

#[wasm_bindgen_test]
async fn spawned_load_of_missing_document_stays_loading() {
    let _ = leptos::task::Executor::init_wasm_bindgen();
    let state = RwSignal::new(LoadState::default());

    spawn_profile_load(MISSING.into(), state);
    // One more round trip to the same path lets the spawned request settle.
    let _ = fetch_profile(MISSING).await;

    assert!(state.get_untracked().is_loading());
}

#[wasm_bindgen_test]
async fn loaded_profile_is_stored() {
    let state = RwSignal::new(LoadState::default());
    let url = data_url(include_str!("../public/portfolio-data.json"));

    let outcome = load_profile(&url, state).await;

    assert!(matches!(outcome, LoadOutcome::Stored));
    assert!(!state.get_untracked().is_loading());
}

#[wasm_bindgen_test]
async fn profile_arriving_after_disposal_is_abandoned() {
    let state = RwSignal::new(LoadState::default());
    state.dispose();
    let url = data_url(include_str!("../public/portfolio-data.json"));

    let outcome = load_profile(&url, state).await;

    assert!(matches!(outcome, LoadOutcome::Abandoned));
}

#[wasm_bindgen_test]
fn scroll_events_update_nav_until_cleanup() {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.set_attribute("style", "height: 5000px").unwrap();
    scroll_window_to(0.0);

    let nav = RwSignal::new(NavState::default());
    let owner = Owner::new();
    owner.with(|| track_scroll(nav));
    assert!(!nav.get_untracked().scrolled);

    scroll_window_to(100.0);
    assert!(nav.get_untracked().scrolled);

    owner.cleanup();
    scroll_window_to(0.0);
    assert!(nav.get_untracked().scrolled);

    body.remove_attribute("style").unwrap();
}
