//! Performance benchmark tests for the CareerLab GUI
//!
//! These tests measure performance characteristics:
//! - Large location-collection handling
//! - Payload deserialization speed
//! - Projection helper throughput

use super::super::api::{LocationStat, LocationStatsResponse};
use super::super::components::location_distribution::{bar_color, ranked_rows};
use std::time::Instant;

// ============================================================================
// LARGE COLLECTION TESTS
// ============================================================================

#[test]
fn bench_ranked_rows_over_large_collection() {
    let num_locations = 10_000;

    let data: Vec<LocationStat> = (0..num_locations)
        .map(|i| LocationStat {
            location: format!("City {}", i),
            count: (num_locations - i) as u64,
            percentage: 100.0 / num_locations as f64,
        })
        .collect();

    let start = Instant::now();
    for _ in 0..1_000 {
        let rows = ranked_rows(&data);
        assert_eq!(rows.len(), 4);
    }
    let duration = start.elapsed();

    // Truncation is a slice view; a thousand passes should be instant
    assert!(
        duration.as_millis() < 50,
        "ranked_rows took too long: {:?}",
        duration
    );
}

#[test]
fn bench_bar_color_assignment() {
    let start = Instant::now();

    let mut checksum = 0usize;
    for index in 0..1_000_000 {
        let color = bar_color(index);
        if color.a > 0.0 {
            checksum += 1;
        }
    }
    let duration = start.elapsed();

    assert_eq!(checksum, 1_000_000);
    assert!(
        duration.as_millis() < 100,
        "bar_color took too long: {:?}",
        duration
    );
}

// ============================================================================
// DESERIALIZATION THROUGHPUT
// ============================================================================

#[test]
fn bench_location_payload_deserialization() {
    let num_locations = 5_000;

    let rows: Vec<String> = (0..num_locations)
        .map(|i| {
            format!(
                r#"{{"location": "City {}", "count": {}, "percentage": {:.2}}}"#,
                i,
                i * 3,
                100.0 / num_locations as f64
            )
        })
        .collect();
    let payload = format!(
        r#"{{"university": "polimi", "cohort": "2024", "total_profiles": {}, "locations": [{}]}}"#,
        num_locations * 3,
        rows.join(",")
    );

    let start = Instant::now();
    let response: LocationStatsResponse = serde_json::from_str(&payload).unwrap();
    let duration = start.elapsed();

    assert_eq!(response.locations.len(), num_locations);
    assert!(
        duration.as_millis() < 200,
        "deserialization took too long: {:?}",
        duration
    );
}
