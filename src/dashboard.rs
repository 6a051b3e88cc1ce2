//! Overview dashboard for the CareerLab GUI
//!
//! Provides the landing dashboard for a university tenant with:
//! - KPI metric cards (tracked graduates, employment rate, median salary,
//!   time to first job)
//! - Top destinations preview
//! - Engagement summary card
//! - Auto-refresh capability

use crate::api::{CareerLabClient, EngagementResponse, LocationStatsResponse, OverviewResponse};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, loading_indicator, metric_card, stat_item};
use crate::components::location_distribution::LocationDistributionView;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Overview dashboard view with headline KPIs and panel previews
pub struct OverviewView {
    // Data states
    overview: LoadState<OverviewResponse>,
    top_locations: LoadState<LocationStatsResponse>,
    engagement: LoadState<EngagementResponse>,

    // Configuration
    university: String,
    cohort: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,

    // Auto-refresh
    auto_refresh_enabled: bool,
    last_refresh: Option<std::time::Instant>,
    refresh_interval: Duration,
}

impl OverviewView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        university: String,
        cohort: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            overview: LoadState::NotLoaded,
            top_locations: LoadState::NotLoaded,
            engagement: LoadState::NotLoaded,
            university,
            cohort,
            api_client,
            theme,
            auto_refresh_enabled: true,
            last_refresh: None,
            refresh_interval: Duration::from_secs(300),
        };
        view.refresh(cx);
        view
    }

    /// Point the view at a different university/cohort and reload
    pub fn set_scope(&mut self, university: String, cohort: String, cx: &mut Context<Self>) {
        self.university = university;
        self.cohort = cohort;
        self.refresh(cx);
    }

    /// Refresh all dashboard data
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        self.last_refresh = Some(std::time::Instant::now());
        self.load_overview(cx);
        self.load_top_locations(cx);
        self.load_engagement(cx);
    }

    fn load_overview(&mut self, cx: &mut Context<Self>) {
        self.overview = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();
        let cohort = self.cohort.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let overview = match client.get_overview(&university, &cohort).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("overview unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(120)).await;
                    demo::overview()
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.overview = LoadState::Loaded(overview);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn load_top_locations(&mut self, cx: &mut Context<Self>) {
        self.top_locations = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();
        let cohort = self.cohort.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let stats = match client.get_location_stats(&university, &cohort).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("location stats unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(150)).await;
                    demo::location_stats(&university, &cohort)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.top_locations = LoadState::Loaded(stats);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn load_engagement(&mut self, cx: &mut Context<Self>) {
        self.engagement = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let engagement = match client.get_engagement(&university).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("engagement unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(180)).await;
                    demo::engagement(&university)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.engagement = LoadState::Loaded(engagement);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Toggle auto-refresh
    #[allow(dead_code)]
    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh_enabled = !self.auto_refresh_enabled;
    }
}

impl Render for OverviewView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(20.0))
            .gap(px(16.0))
            .child(self.render_metrics_row())
            .child(
                div()
                    .flex_grow()
                    .flex()
                    .gap(px(16.0))
                    .child(div().flex_1().child(self.render_top_destinations()))
                    .child(div().w(px(360.0)).child(self.render_engagement_summary())),
            )
    }
}

impl OverviewView {
    fn render_metrics_row(&self) -> Div {
        let theme = &self.theme;

        match &self.overview {
            LoadState::Loaded(overview) => div()
                .flex()
                .gap(px(16.0))
                .child(metric_card(
                    theme,
                    "Tracked Graduates",
                    &format_count(overview.tracked_graduates),
                    &format!("Cohort {}", self.cohort),
                    true,
                ))
                .child(metric_card(
                    theme,
                    "Employment Rate",
                    &format!("{:.1}%", overview.employment_rate_pct),
                    "12 months after graduation",
                    overview.employment_rate_pct >= 75.0,
                ))
                .child(metric_card(
                    theme,
                    "Median Salary",
                    &format_salary(overview.median_salary, "EUR"),
                    "First employment",
                    true,
                ))
                .child(metric_card(
                    theme,
                    "Time to First Job",
                    &format!("{:.1} mo", overview.months_to_first_job),
                    "Median across cohort",
                    overview.months_to_first_job <= 6.0,
                )),
            _ => div()
                .h(px(120.0))
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.text_dimmed)
                        .child("Loading key metrics..."),
                ),
        }
    }

    fn render_top_destinations(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Top Destinations",
            match &self.top_locations {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Loaded(stats) => {
                    if stats.locations.is_empty() {
                        empty_state(theme, "No destination data for this cohort")
                    } else {
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(12.0))
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(theme.text_dimmed)
                                    .child(format!(
                                        "{} profiles across {} locations",
                                        format_count(stats.total_profiles),
                                        stats.locations.len()
                                    )),
                            )
                            .child(
                                LocationDistributionView::new(&stats.locations, theme)
                                    .render_ranked_list(),
                            )
                    }
                }
                LoadState::Error(e) => crate::components::cards::error_message(theme, e),
                LoadState::NotLoaded => empty_state(theme, "No destination data"),
            },
        )
    }

    fn render_engagement_summary(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Student Engagement",
            match &self.engagement {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Loaded(engagement) => div()
                    .flex()
                    .flex_col()
                    .gap(px(20.0))
                    .child(
                        div()
                            .flex()
                            .gap(px(24.0))
                            .child(stat_item(
                                theme,
                                "Profile Views",
                                &format_count(engagement.profile_views),
                                theme.text,
                            ))
                            .child(stat_item(
                                theme,
                                "Recruiter Contacts",
                                &format_count(engagement.recruiter_contacts),
                                theme.accent,
                            )),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(px(24.0))
                            .child(stat_item(
                                theme,
                                "Event Attendance",
                                &format_count(engagement.event_attendance),
                                theme.text,
                            ))
                            .child(stat_item(
                                theme,
                                "Profile Completion",
                                &format!("{:.0}%", engagement.profile_completion_pct),
                                if engagement.profile_completion_pct >= 70.0 {
                                    theme.positive
                                } else {
                                    theme.warning
                                },
                            )),
                    ),
                LoadState::Error(e) => crate::components::cards::error_message(theme, e),
                LoadState::NotLoaded => empty_state(theme, "No engagement data"),
            },
        )
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Integer count with thousands separators
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result
}

/// Salary with currency prefix, compacted above 1M
pub fn format_salary(n: f64, currency: &str) -> String {
    let symbol = match currency {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        _ => currency,
    };
    if n.abs() >= 1_000_000.0 {
        format!("{}{:.2}M", symbol, n / 1_000_000.0)
    } else if n.abs() >= 1_000.0 {
        format!("{}{}", symbol, format_count(n as u64))
    } else {
        format!("{}{:.0}", symbol, n)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(3245), "3,245");
        assert_eq!(format_count(1_250_847), "1,250,847");
    }

    #[test]
    fn test_format_salary_eur() {
        assert_eq!(format_salary(34_500.0, "EUR"), "€34,500");
        assert_eq!(format_salary(950.0, "EUR"), "€950");
        assert_eq!(format_salary(1_200_000.0, "EUR"), "€1.20M");
    }

    #[test]
    fn test_format_salary_other_currencies() {
        assert_eq!(format_salary(42_000.0, "USD"), "$42,000");
        assert_eq!(format_salary(42_000.0, "CHF"), "CHF42,000");
    }
}
