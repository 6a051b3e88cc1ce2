//! Career destinations view
//!
//! Shows where a cohort's graduates ended up: the location distribution
//! in its two projections (ranked list and full bar chart) alongside an
//! employment sector breakdown.

use crate::api::{CareerLabClient, LocationStatsResponse, SectorBreakdownResponse};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator};
use crate::components::charts::share_row;
use crate::components::location_distribution::{percentage_label, LocationDistributionView};
use crate::dashboard::format_count;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Career destinations view for one university/cohort scope
pub struct DestinationsView {
    locations: LoadState<LocationStatsResponse>,
    sectors: LoadState<SectorBreakdownResponse>,

    university: String,
    cohort: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl DestinationsView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        university: String,
        cohort: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            locations: LoadState::NotLoaded,
            sectors: LoadState::NotLoaded,
            university,
            cohort,
            api_client,
            theme,
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

    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        self.load_locations(cx);
        self.load_sectors(cx);
    }

    fn load_locations(&mut self, cx: &mut Context<Self>) {
        self.locations = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();
        let cohort = self.cohort.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let stats = match client.get_location_stats(&university, &cohort).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("location stats unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(120)).await;
                    demo::location_stats(&university, &cohort)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.locations = LoadState::Loaded(stats);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn load_sectors(&mut self, cx: &mut Context<Self>) {
        self.sectors = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();
        let cohort = self.cohort.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let breakdown = match client.get_sector_breakdown(&university, &cohort).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!(
                        "sector breakdown unavailable, falling back to demo data: {:?}",
                        e
                    );
                    Timer::after(Duration::from_millis(160)).await;
                    demo::sector_breakdown(&university)
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.sectors = LoadState::Loaded(breakdown);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }
}

impl Render for DestinationsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .gap(px(16.0))
            .p(px(20.0))
            .child(div().flex_1().child(self.render_locations_card()))
            .child(div().w(px(380.0)).child(self.render_sectors_card()))
    }
}

impl DestinationsView {
    fn render_locations_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Graduate Locations",
            match &self.locations {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(stats) => {
                    if stats.locations.is_empty() {
                        empty_state(theme, "No destination data for this cohort")
                    } else {
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(16.0))
                            // Scope line
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(px(8.0))
                                    .child(
                                        div()
                                            .text_size(px(12.0))
                                            .text_color(theme.text_muted)
                                            .child(format!(
                                                "{} profiles tracked",
                                                format_count(stats.total_profiles)
                                            )),
                                    )
                                    .child(
                                        div()
                                            .px(px(6.0))
                                            .py(px(2.0))
                                            .rounded(px(4.0))
                                            .bg(theme.accent_subtle)
                                            .text_size(px(10.0))
                                            .font_weight(FontWeight::SEMIBOLD)
                                            .text_color(theme.accent)
                                            .child(format!("Cohort {}", stats.cohort)),
                                    ),
                            )
                            // Ranked list + full chart
                            .child(
                                LocationDistributionView::new(&stats.locations, theme).render(),
                            )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No destination data"),
            },
        )
    }

    fn render_sectors_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Employment Sectors",
            match &self.sectors {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(breakdown) => {
                    if breakdown.sectors.is_empty() {
                        empty_state(theme, "No sector data")
                    } else {
                        div().flex().flex_col().gap(px(6.0)).children(
                            breakdown
                                .sectors
                                .iter()
                                .map(|share| {
                                    share_row(
                                        theme,
                                        &share.sector,
                                        &percentage_label(share.percentage),
                                        share.percentage / 100.0,
                                        theme.accent,
                                    )
                                })
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No sector data"),
            },
        )
    }
}
