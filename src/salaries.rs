//! Salary trends view
//!
//! Median salary progression across graduation cohorts with quartile
//! context, plus a by-degree-area breakdown.

use crate::api::{CareerLabClient, SalaryTrendsResponse, SalaryYear};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator};
use crate::components::charts::{delta_badge, share_row};
use crate::dashboard::format_salary;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Salary trends view for one university
pub struct SalariesView {
    trends: LoadState<SalaryTrendsResponse>,

    university: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl SalariesView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        university: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            trends: LoadState::NotLoaded,
            university,
            api_client,
            theme,
        };
        view.refresh(cx);
        view
    }

    pub fn set_university(&mut self, university: String, cx: &mut Context<Self>) {
        self.university = university;
        self.refresh(cx);
    }

    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        self.trends = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let trends = match client.get_salary_trends(&university).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("salary trends unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(140)).await;
                    demo::salary_trends(&university)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.trends = LoadState::Loaded(trends);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }
}

/// Year-over-year change of the median, in percent. None for the first
/// tracked year.
pub fn median_delta_pct(years: &[SalaryYear], index: usize) -> Option<f64> {
    if index == 0 || index >= years.len() {
        return None;
    }
    let prev = years[index - 1].median;
    if prev == 0.0 {
        return None;
    }
    Some((years[index].median / prev - 1.0) * 100.0)
}

impl Render for SalariesView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .gap(px(16.0))
            .p(px(20.0))
            .child(div().flex_1().child(self.render_trend_card()))
            .child(div().w(px(400.0)).child(self.render_areas_card()))
    }
}

impl SalariesView {
    fn render_trend_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Median Salary by Cohort",
            match &self.trends {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(trends) => {
                    if trends.years.is_empty() {
                        empty_state(theme, "No salary history")
                    } else {
                        let max_median = trends
                            .years
                            .iter()
                            .map(|y| y.median)
                            .fold(0.0_f64, f64::max)
                            .max(1.0);

                        div().flex().flex_col().gap(px(8.0)).children(
                            trends
                                .years
                                .iter()
                                .enumerate()
                                .map(|(index, year)| {
                                    self.render_year_row(year, index, max_median, trends)
                                })
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No salary history"),
            },
        )
    }

    fn render_year_row(
        &self,
        year: &SalaryYear,
        index: usize,
        max_median: f64,
        trends: &SalaryTrendsResponse,
    ) -> Div {
        let theme = &self.theme;
        let bar_width_px = (year.median / max_median).clamp(0.0, 1.0) as f32 * 260.0;

        div()
            .flex()
            .items_center()
            .gap(px(16.0))
            .py(px(8.0))
            .px(px(8.0))
            .rounded(px(6.0))
            .hover(|s| s.bg(theme.hover_bg))
            .child(
                div()
                    .w(px(48.0))
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(format!("{}", year.year)),
            )
            .child(
                div()
                    .flex_grow()
                    .h(px(14.0))
                    .rounded(px(7.0))
                    .bg(theme.accent_subtle)
                    .overflow_hidden()
                    .child(
                        div()
                            .h_full()
                            .w(px(bar_width_px))
                            .rounded(px(7.0))
                            .bg(theme.accent),
                    ),
            )
            .child(
                div()
                    .w(px(76.0))
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .text_align(gpui::TextAlign::Right)
                    .child(format_salary(year.median, &trends.currency)),
            )
            .child(match median_delta_pct(&trends.years, index) {
                Some(delta) => delta_badge(theme, delta),
                None => div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child("—"),
            })
            .child(
                div()
                    .w(px(130.0))
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .text_align(gpui::TextAlign::Right)
                    .child(format!(
                        "P25 {} · P75 {}",
                        format_salary(year.p25, &trends.currency),
                        format_salary(year.p75, &trends.currency)
                    )),
            )
    }

    fn render_areas_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Median by Degree Area",
            match &self.trends {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(trends) => {
                    if trends.areas.is_empty() {
                        empty_state(theme, "No degree-area data")
                    } else {
                        let max_median = trends
                            .areas
                            .iter()
                            .map(|a| a.median)
                            .fold(0.0_f64, f64::max)
                            .max(1.0);

                        div().flex().flex_col().gap(px(6.0)).children(
                            trends
                                .areas
                                .iter()
                                .map(|area| {
                                    share_row(
                                        theme,
                                        &area.area,
                                        &format_salary(area.median, &trends.currency),
                                        area.median / max_median,
                                        if area.delta_pct >= 0.0 {
                                            theme.positive
                                        } else {
                                            theme.negative
                                        },
                                    )
                                })
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No degree-area data"),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: u16, median: f64) -> SalaryYear {
        SalaryYear {
            year: y,
            median,
            p25: median * 0.8,
            p75: median * 1.2,
            sample_size: 1000,
        }
    }

    #[test]
    fn test_median_delta_first_year_is_none() {
        let years = vec![year(2023, 30_000.0), year(2024, 31_500.0)];
        assert!(median_delta_pct(&years, 0).is_none());
    }

    #[test]
    fn test_median_delta_computed_against_previous_year() {
        let years = vec![year(2023, 30_000.0), year(2024, 31_500.0)];
        let delta = median_delta_pct(&years, 1).unwrap();
        assert!((delta - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_delta_out_of_range_is_none() {
        let years = vec![year(2024, 31_500.0)];
        assert!(median_delta_pct(&years, 5).is_none());
    }

    #[test]
    fn test_median_delta_zero_previous_is_none() {
        let years = vec![year(2023, 0.0), year(2024, 31_500.0)];
        assert!(median_delta_pct(&years, 1).is_none());
    }
}
