//! Benchmarking view
//!
//! Compares the selected university against the national average and
//! its peer group, metric by metric. The metric list is rendered in the
//! order the backend returns it.

use crate::api::{BenchmarkMetric, BenchmarkResponse, CareerLabClient};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator};
use crate::components::charts::delta_badge;
use crate::dashboard::format_salary;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Benchmarking view for one university
pub struct BenchmarkingView {
    benchmark: LoadState<BenchmarkResponse>,

    university: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl BenchmarkingView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        university: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            benchmark: LoadState::NotLoaded,
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
        self.benchmark = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let benchmark = match client.get_benchmark(&university).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("benchmark unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(150)).await;
                    demo::benchmark(&university)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.benchmark = LoadState::Loaded(benchmark);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }
}

/// Percent lead (or deficit) of the university over a reference value
pub fn lead_pct(university_value: f64, reference_value: f64) -> Option<f64> {
    if reference_value == 0.0 {
        return None;
    }
    Some((university_value / reference_value - 1.0) * 100.0)
}

/// Format a metric value according to its unit
pub fn format_metric_value(value: f64, unit: &str) -> String {
    match unit {
        "%" => format!("{:.1}%", value),
        "EUR" | "USD" | "GBP" => format_salary(value, unit),
        _ => format!("{:.1}", value),
    }
}

impl Render for BenchmarkingView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(20.0))
            .child(self.render_benchmark_card())
    }
}

impl BenchmarkingView {
    fn render_benchmark_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Benchmark vs National and Peer Group",
            match &self.benchmark {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(benchmark) => {
                    if benchmark.metrics.is_empty() {
                        empty_state(theme, "No benchmark data")
                    } else {
                        div().flex().flex_col().gap(px(20.0)).children(
                            benchmark
                                .metrics
                                .iter()
                                .map(|metric| self.render_metric_block(metric))
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No benchmark data"),
            },
        )
    }

    fn render_metric_block(&self, metric: &BenchmarkMetric) -> Div {
        let theme = &self.theme;
        let max_value = metric
            .university_value
            .max(metric.national_value)
            .max(metric.peer_value)
            .max(1.0);

        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            // Metric header with lead over national
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.text)
                            .child(metric.metric.clone()),
                    )
                    .child(match lead_pct(metric.university_value, metric.national_value) {
                        Some(lead) => delta_badge(theme, lead),
                        None => div(),
                    }),
            )
            .child(self.comparison_bar(
                "This university",
                metric.university_value,
                max_value,
                &metric.unit,
                theme.accent,
            ))
            .child(self.comparison_bar(
                "Peer group",
                metric.peer_value,
                max_value,
                &metric.unit,
                theme.positive,
            ))
            .child(self.comparison_bar(
                "National average",
                metric.national_value,
                max_value,
                &metric.unit,
                theme.text_muted,
            ))
    }

    fn comparison_bar(
        &self,
        label: &str,
        value: f64,
        max_value: f64,
        unit: &str,
        color: Hsla,
    ) -> Div {
        let theme = &self.theme;
        let bar_width_px = (value / max_value).clamp(0.0, 1.0) as f32 * 320.0;

        div()
            .flex()
            .items_center()
            .gap(px(12.0))
            .child(
                div()
                    .w(px(120.0))
                    .text_size(px(11.0))
                    .text_color(theme.text_muted)
                    .child(label.to_string()),
            )
            .child(
                div()
                    .flex_grow()
                    .h(px(8.0))
                    .rounded(px(4.0))
                    .bg(theme.border_subtle)
                    .overflow_hidden()
                    .child(div().h_full().w(px(bar_width_px)).rounded(px(4.0)).bg(color)),
            )
            .child(
                div()
                    .w(px(72.0))
                    .text_size(px(12.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text)
                    .text_align(gpui::TextAlign::Right)
                    .child(format_metric_value(value, unit)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_pct_positive() {
        let lead = lead_pct(86.4, 74.6).unwrap();
        assert!(lead > 15.0 && lead < 16.0);
    }

    #[test]
    fn test_lead_pct_negative() {
        let lead = lead_pct(60.0, 75.0).unwrap();
        assert!((lead + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_lead_pct_zero_reference() {
        assert!(lead_pct(50.0, 0.0).is_none());
    }

    #[test]
    fn test_format_metric_value_units() {
        assert_eq!(format_metric_value(86.4, "%"), "86.4%");
        assert_eq!(format_metric_value(31_500.0, "EUR"), "€31,500");
        assert_eq!(format_metric_value(7.25, "index"), "7.3");
    }
}
