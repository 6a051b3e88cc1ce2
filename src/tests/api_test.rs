//! Unit tests for the API client data types
//!
//! Tests cover:
//! - Deserialization of analytics payloads
//! - Tolerance for missing fields (zero defaults, never an error)
//! - Client construction

use super::super::api::*;
use serde_json::json;

// ============================================================================
// CLIENT CONSTRUCTION
// ============================================================================

#[test]
fn test_client_default_url() {
    let _client = CareerLabClient::new();
    let _custom = CareerLabClient::with_url("https://careerlab.example.com".to_string());
}

// ============================================================================
// LOCATION STATS PAYLOADS
// ============================================================================

#[test]
fn test_location_stats_deserialization() {
    let payload = json!({
        "university": "polimi",
        "cohort": "2024",
        "total_profiles": 315,
        "locations": [
            {"location": "Milano", "count": 120, "percentage": 40.0},
            {"location": "Roma", "count": 90, "percentage": 30.0}
        ]
    });

    let response: LocationStatsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.university, "polimi");
    assert_eq!(response.locations.len(), 2);
    assert_eq!(response.locations[0].location, "Milano");
    assert_eq!(response.locations[0].count, 120);
    assert_eq!(response.locations[1].percentage, 30.0);
}

#[test]
fn test_location_stat_missing_fields_default_to_zero() {
    // Upstream rows occasionally arrive without counts; they must parse
    // and render as zeros rather than failing the whole payload.
    let payload = json!({"location": "Milano"});
    let stat: LocationStat = serde_json::from_value(payload).unwrap();
    assert_eq!(stat.count, 0);
    assert_eq!(stat.percentage, 0.0);
}

#[test]
fn test_location_stats_missing_collection_defaults_empty() {
    let payload = json!({"university": "polimi", "cohort": "2024"});
    let response: LocationStatsResponse = serde_json::from_value(payload).unwrap();
    assert!(response.locations.is_empty());
    assert_eq!(response.total_profiles, 0);
}

#[test]
fn test_location_stat_preserves_decimal_precision() {
    let payload = json!({"location": "Bologna", "count": 15, "percentage": 5.25});
    let stat: LocationStat = serde_json::from_value(payload).unwrap();
    assert_eq!(stat.percentage, 5.25);
}

// ============================================================================
// OTHER ANALYTICS PAYLOADS
// ============================================================================

#[test]
fn test_salary_trends_deserialization() {
    let payload = json!({
        "university": "polimi",
        "currency": "EUR",
        "years": [
            {"year": 2023, "median": 30400.0, "p25": 25300.0, "p75": 36700.0, "sample_size": 3020},
            {"year": 2024, "median": 31500.0, "p25": 26100.0, "p75": 38200.0, "sample_size": 3245}
        ],
        "areas": [
            {"area": "Engineering", "median": 34200.0, "delta_pct": 4.8}
        ]
    });

    let response: SalaryTrendsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.years.len(), 2);
    assert_eq!(response.years[1].year, 2024);
    assert_eq!(response.areas[0].area, "Engineering");
}

#[test]
fn test_salary_trends_default_currency() {
    let payload = json!({"university": "polimi"});
    let response: SalaryTrendsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.currency, "EUR");
}

#[test]
fn test_benchmark_deserialization() {
    let payload = json!({
        "university": "polimi",
        "metrics": [
            {"metric": "Employment rate", "university_value": 86.4,
             "national_value": 74.6, "peer_value": 81.2, "unit": "%"}
        ]
    });

    let response: BenchmarkResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.metrics.len(), 1);
    assert_eq!(response.metrics[0].unit, "%");
}

#[test]
fn test_rankings_deserialization() {
    let payload = json!({
        "year": 2024,
        "entries": [
            {"position": 1, "university": "Politecnico di Milano", "score": 94.2, "movement": 0},
            {"position": 2, "university": "Università di Bologna", "score": 91.8, "movement": 1}
        ]
    });

    let response: RankingsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.year, 2024);
    assert_eq!(response.entries[1].movement, 1);
}

#[test]
fn test_engagement_deserialization() {
    let payload = json!({
        "university": "polimi",
        "profile_views": 18420,
        "recruiter_contacts": 2310,
        "event_attendance": 1480,
        "profile_completion_pct": 78.0,
        "weekly_activity": [
            {"week": "W1", "profile_views": 3820, "recruiter_contacts": 410}
        ]
    });

    let response: EngagementResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.profile_views, 18_420);
    assert_eq!(response.weekly_activity.len(), 1);
}

#[test]
fn test_search_trends_negative_growth_parses() {
    let payload = json!({
        "university": "polimi",
        "queries": [
            {"query": "ux designer", "volume": 1410, "growth_pct": -2.3}
        ]
    });

    let response: SearchTrendsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.queries[0].growth_pct, -2.3);
}

#[test]
fn test_health_response_deserialization() {
    let payload = json!({"healthy": true, "status": "ok"});
    let response: HealthResponse = serde_json::from_value(payload).unwrap();
    assert!(response.healthy);
    assert_eq!(response.status, "ok");
}
