//! Student engagement view
//!
//! Platform activity for a university's students and graduates: profile
//! views, recruiter contacts, event attendance, completion rate, and a
//! week-by-week activity strip.

use crate::api::{CareerLabClient, EngagementResponse};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator, stat_item};
use crate::components::charts::column_strip;
use crate::dashboard::format_count;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Engagement metrics view for one university
pub struct EngagementView {
    engagement: LoadState<EngagementResponse>,

    university: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl EngagementView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        university: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            engagement: LoadState::NotLoaded,
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
        self.engagement = LoadState::Loading;
        let client = self.api_client.clone();
        let university = self.university.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let engagement = match client.get_engagement(&university).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("engagement unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(170)).await;
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
}

impl Render for EngagementView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(20.0))
            .gap(px(16.0))
            .child(self.render_stats_card())
            .child(self.render_activity_card())
    }
}

impl EngagementView {
    fn render_stats_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Engagement This Term",
            match &self.engagement {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(engagement) => div()
                    .flex()
                    .gap(px(32.0))
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
                    ))
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
                LoadState::NotLoaded => empty_state(theme, "No engagement data"),
            },
        )
    }

    fn render_activity_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Weekly Activity",
            match &self.engagement {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(engagement) => {
                    if engagement.weekly_activity.is_empty() {
                        empty_state(theme, "No weekly activity recorded")
                    } else {
                        let views: Vec<(String, u64)> = engagement
                            .weekly_activity
                            .iter()
                            .map(|w| (w.week.clone(), w.profile_views))
                            .collect();
                        let contacts: Vec<(String, u64)> = engagement
                            .weekly_activity
                            .iter()
                            .map(|w| (w.week.clone(), w.recruiter_contacts))
                            .collect();

                        div()
                            .flex()
                            .gap(px(48.0))
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap(px(8.0))
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(theme.text_dimmed)
                                            .child("Profile views"),
                                    )
                                    .child(column_strip(theme, &views)),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap(px(8.0))
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(theme.text_dimmed)
                                            .child("Recruiter contacts"),
                                    )
                                    .child(column_strip(theme, &contacts)),
                            )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No weekly activity"),
            },
        )
    }
}
