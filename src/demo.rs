//! Demo fallback data
//!
//! Used whenever the CareerLab backend is unreachable so the dashboard
//! stays explorable offline. Figures are representative, not real.

use crate::api::*;

pub fn universities() -> Vec<UniversitySummary> {
    vec![
        UniversitySummary {
            slug: "polimi".to_string(),
            name: "Politecnico di Milano".to_string(),
            city: "Milano".to_string(),
        },
        UniversitySummary {
            slug: "sapienza".to_string(),
            name: "Sapienza Università di Roma".to_string(),
            city: "Roma".to_string(),
        },
        UniversitySummary {
            slug: "unibo".to_string(),
            name: "Università di Bologna".to_string(),
            city: "Bologna".to_string(),
        },
        UniversitySummary {
            slug: "polito".to_string(),
            name: "Politecnico di Torino".to_string(),
            city: "Torino".to_string(),
        },
    ]
}

pub fn overview() -> OverviewResponse {
    OverviewResponse {
        tracked_graduates: 3_245,
        employment_rate_pct: 86.4,
        median_salary: 31_500.0,
        months_to_first_job: 4.2,
    }
}

pub fn location_stats(university: &str, cohort: &str) -> LocationStatsResponse {
    LocationStatsResponse {
        university: university.to_string(),
        cohort: cohort.to_string(),
        total_profiles: 3_245,
        locations: vec![
            LocationStat {
                location: "Milano".to_string(),
                count: 1_240,
                percentage: 38.2,
            },
            LocationStat {
                location: "Roma".to_string(),
                count: 860,
                percentage: 26.5,
            },
            LocationStat {
                location: "Torino".to_string(),
                count: 450,
                percentage: 13.9,
            },
            LocationStat {
                location: "Bologna".to_string(),
                count: 380,
                percentage: 11.7,
            },
            LocationStat {
                location: "London".to_string(),
                count: 210,
                percentage: 6.5,
            },
            LocationStat {
                location: "Remote".to_string(),
                count: 105,
                percentage: 3.2,
            },
        ],
    }
}

pub fn sector_breakdown(university: &str) -> SectorBreakdownResponse {
    SectorBreakdownResponse {
        university: university.to_string(),
        sectors: vec![
            SectorShare {
                sector: "Information Technology".to_string(),
                count: 1_020,
                percentage: 31.4,
            },
            SectorShare {
                sector: "Consulting".to_string(),
                count: 640,
                percentage: 19.7,
            },
            SectorShare {
                sector: "Manufacturing".to_string(),
                count: 520,
                percentage: 16.0,
            },
            SectorShare {
                sector: "Finance & Insurance".to_string(),
                count: 430,
                percentage: 13.3,
            },
            SectorShare {
                sector: "Public Sector".to_string(),
                count: 330,
                percentage: 10.2,
            },
            SectorShare {
                sector: "Other".to_string(),
                count: 305,
                percentage: 9.4,
            },
        ],
    }
}

pub fn salary_trends(university: &str) -> SalaryTrendsResponse {
    SalaryTrendsResponse {
        university: university.to_string(),
        currency: "EUR".to_string(),
        years: vec![
            SalaryYear {
                year: 2021,
                median: 27_800.0,
                p25: 23_500.0,
                p75: 33_200.0,
                sample_size: 2_610,
            },
            SalaryYear {
                year: 2022,
                median: 29_100.0,
                p25: 24_400.0,
                p75: 34_900.0,
                sample_size: 2_840,
            },
            SalaryYear {
                year: 2023,
                median: 30_400.0,
                p25: 25_300.0,
                p75: 36_700.0,
                sample_size: 3_020,
            },
            SalaryYear {
                year: 2024,
                median: 31_500.0,
                p25: 26_100.0,
                p75: 38_200.0,
                sample_size: 3_245,
            },
        ],
        areas: vec![
            SalaryByArea {
                area: "Engineering".to_string(),
                median: 34_200.0,
                delta_pct: 4.8,
            },
            SalaryByArea {
                area: "Economics & Management".to_string(),
                median: 32_600.0,
                delta_pct: 3.9,
            },
            SalaryByArea {
                area: "Sciences".to_string(),
                median: 29_800.0,
                delta_pct: 2.4,
            },
            SalaryByArea {
                area: "Design".to_string(),
                median: 27_300.0,
                delta_pct: 1.1,
            },
            SalaryByArea {
                area: "Humanities".to_string(),
                median: 24_900.0,
                delta_pct: -0.6,
            },
        ],
    }
}

pub fn search_trends(university: &str) -> SearchTrendsResponse {
    SearchTrendsResponse {
        university: university.to_string(),
        queries: vec![
            SearchQueryStat {
                query: "software engineer".to_string(),
                volume: 4_820,
                growth_pct: 18.4,
            },
            SearchQueryStat {
                query: "data analyst".to_string(),
                volume: 3_160,
                growth_pct: 24.1,
            },
            SearchQueryStat {
                query: "mechanical engineer".to_string(),
                volume: 2_440,
                growth_pct: 3.2,
            },
            SearchQueryStat {
                query: "product manager".to_string(),
                volume: 1_980,
                growth_pct: 12.7,
            },
            SearchQueryStat {
                query: "ux designer".to_string(),
                volume: 1_410,
                growth_pct: -2.3,
            },
            SearchQueryStat {
                query: "business consultant".to_string(),
                volume: 1_150,
                growth_pct: 6.9,
            },
        ],
        skills: vec![
            TrendingSkill {
                skill: "Python".to_string(),
                growth_pct: 22.0,
            },
            TrendingSkill {
                skill: "SQL".to_string(),
                growth_pct: 15.3,
            },
            TrendingSkill {
                skill: "Project Management".to_string(),
                growth_pct: 9.8,
            },
            TrendingSkill {
                skill: "CAD".to_string(),
                growth_pct: 4.5,
            },
        ],
    }
}

pub fn benchmark(university: &str) -> BenchmarkResponse {
    BenchmarkResponse {
        university: university.to_string(),
        metrics: vec![
            BenchmarkMetric {
                metric: "Employment rate".to_string(),
                university_value: 86.4,
                national_value: 74.6,
                peer_value: 81.2,
                unit: "%".to_string(),
            },
            BenchmarkMetric {
                metric: "Median salary".to_string(),
                university_value: 31_500.0,
                national_value: 26_800.0,
                peer_value: 29_400.0,
                unit: "EUR".to_string(),
            },
            BenchmarkMetric {
                metric: "International placement".to_string(),
                university_value: 12.8,
                national_value: 6.1,
                peer_value: 9.5,
                unit: "%".to_string(),
            },
            BenchmarkMetric {
                metric: "Profile completion".to_string(),
                university_value: 78.0,
                national_value: 64.0,
                peer_value: 71.0,
                unit: "%".to_string(),
            },
        ],
    }
}

pub fn rankings() -> RankingsResponse {
    RankingsResponse {
        year: 2024,
        entries: vec![
            RankingEntry {
                position: 1,
                university: "Politecnico di Milano".to_string(),
                score: 94.2,
                movement: 0,
            },
            RankingEntry {
                position: 2,
                university: "Università di Bologna".to_string(),
                score: 91.8,
                movement: 1,
            },
            RankingEntry {
                position: 3,
                university: "Sapienza Università di Roma".to_string(),
                score: 90.5,
                movement: -1,
            },
            RankingEntry {
                position: 4,
                university: "Politecnico di Torino".to_string(),
                score: 89.1,
                movement: 2,
            },
            RankingEntry {
                position: 5,
                university: "Università di Padova".to_string(),
                score: 87.6,
                movement: 0,
            },
            RankingEntry {
                position: 6,
                university: "Università di Milano-Bicocca".to_string(),
                score: 85.9,
                movement: -2,
            },
        ],
    }
}

pub fn engagement(university: &str) -> EngagementResponse {
    EngagementResponse {
        university: university.to_string(),
        profile_views: 18_420,
        recruiter_contacts: 2_310,
        event_attendance: 1_480,
        profile_completion_pct: 78.0,
        weekly_activity: vec![
            WeeklyActivity {
                week: "W1".to_string(),
                profile_views: 3_820,
                recruiter_contacts: 410,
            },
            WeeklyActivity {
                week: "W2".to_string(),
                profile_views: 4_150,
                recruiter_contacts: 520,
            },
            WeeklyActivity {
                week: "W3".to_string(),
                profile_views: 4_630,
                recruiter_contacts: 590,
            },
            WeeklyActivity {
                week: "W4".to_string(),
                profile_views: 5_820,
                recruiter_contacts: 790,
            },
        ],
    }
}
