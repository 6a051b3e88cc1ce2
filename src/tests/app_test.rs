//! Unit tests for application state and navigation
//!
//! Tests cover:
//! - Loading state management
//! - Cohort selector catalog
//! - View and section catalogs
//! - Back/forward history

use super::super::app::{Cohort, LoadState};
use super::super::navigation::{NavSection, View, ViewHistory};

// ============================================================================
// LOAD STATE TESTS
// ============================================================================

#[test]
fn test_load_state_not_loaded() {
    let state: LoadState<String> = LoadState::NotLoaded;
    assert!(!state.is_loading());
    assert!(!state.is_loaded());
    assert!(state.as_ref().is_none());
}

#[test]
fn test_load_state_loading() {
    let state: LoadState<String> = LoadState::Loading;
    assert!(state.is_loading());
    assert!(!state.is_loaded());
}

#[test]
fn test_load_state_loaded() {
    let state: LoadState<String> = LoadState::Loaded("data".to_string());
    assert!(!state.is_loading());
    assert!(state.is_loaded());
    assert_eq!(state.as_ref().map(String::as_str), Some("data"));
}

#[test]
fn test_load_state_error() {
    let state: LoadState<String> = LoadState::Error("backend unreachable".to_string());
    assert!(!state.is_loading());
    assert!(!state.is_loaded());
}

#[test]
fn test_load_state_default() {
    let state: LoadState<Vec<u8>> = Default::default();
    assert!(matches!(state, LoadState::NotLoaded));
}

// ============================================================================
// COHORT TESTS
// ============================================================================

#[test]
fn test_cohort_labels() {
    assert_eq!(Cohort::Y2024.label(), "2024");
    assert_eq!(Cohort::Y2021.label(), "2021");
}

#[test]
fn test_cohort_default_is_latest() {
    assert_eq!(Cohort::default(), Cohort::Y2024);
}

#[test]
fn test_cohort_catalog_is_complete() {
    assert_eq!(Cohort::all().len(), 4);
    assert_eq!(Cohort::all()[0], Cohort::Y2024);
}

// ============================================================================
// VIEW CATALOG TESTS
// ============================================================================

#[test]
fn test_default_view_is_landing() {
    assert_eq!(View::default(), View::Landing);
}

#[test]
fn test_view_labels() {
    assert_eq!(View::Overview.label(), "Overview");
    assert_eq!(View::Destinations.label(), "Destinations");
    assert_eq!(View::SearchTrends.label(), "Search Trends");
}

#[test]
fn test_primary_views_have_shortcuts() {
    assert_eq!(View::Overview.shortcut(), Some('1'));
    assert_eq!(View::Settings.shortcut(), Some('0'));
    assert_eq!(View::Landing.shortcut(), None);
}

#[test]
fn test_sections_cover_every_dashboard_view() {
    let mut section_views: Vec<View> = NavSection::all()
        .iter()
        .flat_map(|s| s.views().iter().copied())
        .collect();
    section_views.sort_by_key(|v| v.label());
    section_views.dedup();

    // Every view except the landing page is reachable from the sidebar
    let dashboard_views = View::all().iter().filter(|v| **v != View::Landing).count();
    assert_eq!(section_views.len(), dashboard_views);
}

// ============================================================================
// VIEW HISTORY TESTS
// ============================================================================

#[test]
fn test_history_starts_empty() {
    let history = ViewHistory::new();
    assert!(!history.can_go_back());
    assert!(!history.can_go_forward());
    assert!(history.current().is_none());
}

#[test]
fn test_history_push_and_back() {
    let mut history = ViewHistory::new();
    history.push(View::Landing, "polimi".to_string());
    history.push(View::Overview, "polimi".to_string());
    history.push(View::Destinations, "polimi".to_string());

    assert!(history.can_go_back());
    let (view, slug) = history.go_back().unwrap();
    assert_eq!(view, View::Overview);
    assert_eq!(slug, "polimi");
}

#[test]
fn test_history_forward_after_back() {
    let mut history = ViewHistory::new();
    history.push(View::Overview, "polimi".to_string());
    history.push(View::Rankings, "polimi".to_string());

    history.go_back().unwrap();
    assert!(history.can_go_forward());
    let (view, _) = history.go_forward().unwrap();
    assert_eq!(view, View::Rankings);
}

#[test]
fn test_history_push_clears_forward_entries() {
    let mut history = ViewHistory::new();
    history.push(View::Overview, "polimi".to_string());
    history.push(View::Rankings, "polimi".to_string());
    history.go_back().unwrap();

    history.push(View::Salaries, "polimi".to_string());
    assert!(!history.can_go_forward());
    assert_eq!(history.current().unwrap().0, View::Salaries);
}

#[test]
fn test_history_tracks_university_switches() {
    let mut history = ViewHistory::new();
    history.push(View::Overview, "polimi".to_string());
    history.push(View::Overview, "unibo".to_string());

    let (view, slug) = history.go_back().unwrap();
    assert_eq!(view, View::Overview);
    assert_eq!(slug, "polimi");
}

#[test]
fn test_history_is_bounded() {
    let mut history = ViewHistory::new();
    for i in 0..200 {
        let slug = if i % 2 == 0 { "polimi" } else { "unibo" };
        history.push(View::Overview, slug.to_string());
    }

    // Walk back as far as allowed; a bounded history terminates
    let mut steps = 0;
    while history.go_back().is_some() {
        steps += 1;
        assert!(steps < 200);
    }
    assert!(steps <= 50);
}
