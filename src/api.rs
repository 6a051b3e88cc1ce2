//! API client for communicating with the CareerLab analytics backend
//!
//! Provides async methods for fetching precomputed career-outcome
//! analytics per university tenant: destinations, salaries, search
//! trends, benchmarking, rankings, and engagement. The client is a pure
//! consumer - aggregates are never recomputed or validated here.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// API client for the CareerLab backend
pub struct CareerLabClient {
    base_url: String,
    client: reqwest::Client,
}

impl CareerLabClient {
    /// Create a new client with default localhost URL
    pub fn new() -> Self {
        Self::with_url("http://localhost:8000".to_string())
    }

    /// Create a new client with custom base URL
    pub fn with_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// List the universities visible to this installation
    pub async fn get_universities(&self) -> Result<Vec<UniversitySummary>, ApiError> {
        let url = format!("{}/api/universities", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get headline KPIs for a university and cohort span
    pub async fn get_overview(
        &self,
        university: &str,
        cohort: &str,
    ) -> Result<OverviewResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/overview?cohort={}",
            self.base_url, university, cohort
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get graduate location distribution for a university and cohort span
    pub async fn get_location_stats(
        &self,
        university: &str,
        cohort: &str,
    ) -> Result<LocationStatsResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/locations?cohort={}",
            self.base_url, university, cohort
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get employment sector breakdown
    pub async fn get_sector_breakdown(
        &self,
        university: &str,
        cohort: &str,
    ) -> Result<SectorBreakdownResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/sectors?cohort={}",
            self.base_url, university, cohort
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get salary trends across graduation cohorts
    pub async fn get_salary_trends(
        &self,
        university: &str,
    ) -> Result<SalaryTrendsResponse, ApiError> {
        let url = format!("{}/api/universities/{}/salaries", self.base_url, university);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get employer search trends for a university's graduates
    pub async fn get_search_trends(
        &self,
        university: &str,
    ) -> Result<SearchTrendsResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/search-trends",
            self.base_url, university
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get benchmark comparison against national and peer averages
    pub async fn get_benchmark(&self, university: &str) -> Result<BenchmarkResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/benchmark",
            self.base_url, university
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get the ranking table for a given year
    pub async fn get_rankings(&self, year: Option<u16>) -> Result<RankingsResponse, ApiError> {
        let mut url = format!("{}/api/rankings", self.base_url);
        if let Some(y) = year {
            url = format!("{}?year={}", url, y);
        }
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get student engagement metrics
    pub async fn get_engagement(&self, university: &str) -> Result<EngagementResponse, ApiError> {
        let url = format!(
            "{}/api/universities/{}/engagement",
            self.base_url, university
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for CareerLabClient {
    fn default() -> Self {
        Self::new()
    }
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Parse(String),
    Server(String),
}

// Response types

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniversitySummary {
    pub slug: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewResponse {
    #[serde(default)]
    pub tracked_graduates: u64,
    #[serde(default)]
    pub employment_rate_pct: f64,
    #[serde(default)]
    pub median_salary: f64,
    #[serde(default)]
    pub months_to_first_job: f64,
}

/// One row of location-aggregated profile counts with a precomputed
/// percentage share. The share is computed upstream over the full
/// (untruncated) collection and is rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationStat {
    pub location: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationStatsResponse {
    pub university: String,
    pub cohort: String,
    #[serde(default)]
    pub total_profiles: u64,
    #[serde(default)]
    pub locations: Vec<LocationStat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectorShare {
    pub sector: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectorBreakdownResponse {
    pub university: String,
    #[serde(default)]
    pub sectors: Vec<SectorShare>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryYear {
    pub year: u16,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub p25: f64,
    #[serde(default)]
    pub p75: f64,
    #[serde(default)]
    pub sample_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryByArea {
    pub area: String,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub delta_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryTrendsResponse {
    pub university: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub years: Vec<SalaryYear>,
    #[serde(default)]
    pub areas: Vec<SalaryByArea>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQueryStat {
    pub query: String,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub growth_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingSkill {
    pub skill: String,
    #[serde(default)]
    pub growth_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrendsResponse {
    pub university: String,
    #[serde(default)]
    pub queries: Vec<SearchQueryStat>,
    #[serde(default)]
    pub skills: Vec<TrendingSkill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkMetric {
    pub metric: String,
    #[serde(default)]
    pub university_value: f64,
    #[serde(default)]
    pub national_value: f64,
    #[serde(default)]
    pub peer_value: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkResponse {
    pub university: String,
    #[serde(default)]
    pub metrics: Vec<BenchmarkMetric>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingEntry {
    pub position: u32,
    pub university: String,
    #[serde(default)]
    pub score: f64,
    /// Positions gained (positive) or lost (negative) since last year
    #[serde(default)]
    pub movement: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingsResponse {
    pub year: u16,
    #[serde(default)]
    pub entries: Vec<RankingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyActivity {
    pub week: String,
    #[serde(default)]
    pub profile_views: u64,
    #[serde(default)]
    pub recruiter_contacts: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngagementResponse {
    pub university: String,
    #[serde(default)]
    pub profile_views: u64,
    #[serde(default)]
    pub recruiter_contacts: u64,
    #[serde(default)]
    pub event_attendance: u64,
    #[serde(default)]
    pub profile_completion_pct: f64,
    #[serde(default)]
    pub weekly_activity: Vec<WeeklyActivity>,
}
