//! Unit tests for the location distribution component
//!
//! Tests cover:
//! - Ranked-list truncation against the bar chart's full rendering
//! - Palette assignment for both projections (clamp vs wrap)
//! - Percentage label formatting
//! - Degenerate inputs (empty collections, zero counts)

use super::super::api::LocationStat;
use super::super::components::location_distribution::*;

fn stat(location: &str, count: u64, percentage: f64) -> LocationStat {
    LocationStat {
        location: location.to_string(),
        count,
        percentage,
    }
}

/// The five-city collection used across these tests
fn italian_cities() -> Vec<LocationStat> {
    vec![
        stat("Milano", 120, 40.0),
        stat("Roma", 90, 30.0),
        stat("Torino", 60, 20.0),
        stat("Napoli", 30, 10.0),
        stat("Bologna", 15, 5.0),
    ]
}

// ============================================================================
// RANKED LIST TRUNCATION
// ============================================================================

#[test]
fn test_ranked_list_shows_all_rows_for_short_inputs() {
    for len in 0..=RANKED_ROW_LIMIT {
        let data: Vec<_> = (0..len)
            .map(|i| stat(&format!("City {}", i), 10, 10.0))
            .collect();
        assert_eq!(ranked_rows(&data).len(), len);
    }
}

#[test]
fn test_ranked_list_preserves_input_order() {
    let data = italian_cities();
    let rows = ranked_rows(&data);
    let names: Vec<_> = rows.iter().map(|s| s.location.as_str()).collect();
    assert_eq!(names, vec!["Milano", "Roma", "Torino", "Napoli"]);
}

#[test]
fn test_ranked_list_drops_rows_past_the_limit() {
    let data = italian_cities();
    let rows = ranked_rows(&data);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|s| s.location != "Bologna"));
}

#[test]
fn test_ranked_list_limit_for_long_inputs() {
    let data: Vec<_> = (0..25)
        .map(|i| stat(&format!("City {}", i), 1, 0.5))
        .collect();
    assert_eq!(ranked_rows(&data).len(), RANKED_ROW_LIMIT);
}

// ============================================================================
// CHART (NO TRUNCATION)
// ============================================================================

#[test]
fn test_chart_renders_every_entry() {
    // The chart projection iterates the full collection; its bar count
    // equals the input length even past the list limit.
    let data = italian_cities();
    assert_eq!(data.len(), 5);
    let bar_colors: Vec<_> = (0..data.len()).map(bar_color).collect();
    assert_eq!(bar_colors.len(), 5);
}

#[test]
fn test_projections_disagree_on_row_count_past_the_limit() {
    let data = italian_cities();
    assert_eq!(ranked_rows(&data).len(), 4);
    assert_eq!(data.len(), 5); // chart side renders all five
}

// ============================================================================
// PALETTE ASSIGNMENT
// ============================================================================

#[test]
fn test_list_palette_indexed_by_position() {
    for index in 0..RANKED_ROW_PALETTE.len() {
        assert_eq!(ranked_row_colors(index), RANKED_ROW_PALETTE[index]);
    }
}

#[test]
fn test_list_palette_clamps_out_of_range_to_first() {
    assert_eq!(ranked_row_colors(5), RANKED_ROW_PALETTE[0]);
    assert_eq!(ranked_row_colors(6), RANKED_ROW_PALETTE[0]);
    assert_eq!(ranked_row_colors(100), RANKED_ROW_PALETTE[0]);
}

#[test]
fn test_bar_palette_wraps_instead_of_clamping() {
    assert_eq!(bar_color(5), BAR_PALETTE[0]);
    assert_eq!(bar_color(6), BAR_PALETTE[1]);
    assert_eq!(bar_color(12), BAR_PALETTE[2]);
}

#[test]
fn test_fifth_bar_uses_fifth_color() {
    // Bologna sits at index 4 in the five-city collection: still within
    // the palette, no wrap needed.
    let data = italian_cities();
    assert_eq!(data[4].location, "Bologna");
    assert_eq!(bar_color(4), BAR_PALETTE[4]);
}

#[test]
fn test_palettes_are_distinct_constants() {
    // The two projections deliberately carry separate palettes with
    // separate out-of-range policies; neither aliases the other.
    assert_eq!(RANKED_ROW_PALETTE.len(), 5);
    assert_eq!(BAR_PALETTE.len(), 5);
    for colors in RANKED_ROW_PALETTE.iter() {
        assert!(colors.background.a < colors.accent.a);
    }
}

// ============================================================================
// LABEL FORMATTING
// ============================================================================

#[test]
fn test_percentage_label_whole_number() {
    assert_eq!(percentage_label(40.0), "40%");
}

#[test]
fn test_percentage_label_decimal_kept() {
    assert_eq!(percentage_label(38.2), "38.2%");
    assert_eq!(percentage_label(6.5), "6.5%");
}

#[test]
fn test_percentage_label_no_extra_rounding() {
    assert_eq!(percentage_label(33.33), "33.33%");
}

// ============================================================================
// DEGENERATE INPUTS
// ============================================================================

#[test]
fn test_empty_collection_renders_nothing() {
    let data: Vec<LocationStat> = Vec::new();
    assert!(ranked_rows(&data).is_empty());
}

#[test]
fn test_zero_counts_flow_through() {
    // Out-of-shape values are rendered as-is, never rejected
    let data = vec![stat("Milano", 0, 0.0)];
    let rows = ranked_rows(&data);
    assert_eq!(rows.len(), 1);
    assert_eq!(percentage_label(rows[0].percentage), "0%");
}

#[test]
fn test_percentages_are_not_required_to_sum_to_100() {
    // Shares are computed upstream; the component renders whatever
    // arrives, including collections that do not sum to 100.
    let data = vec![stat("Milano", 10, 90.0), stat("Roma", 10, 90.0)];
    assert_eq!(ranked_rows(&data).len(), 2);
}
