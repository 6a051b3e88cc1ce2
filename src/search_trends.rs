//! Search trends view
//!
//! What employers search for when they reach this university's talent
//! pool: top queries by volume with growth badges, and trending skills.

use crate::api::{CareerLabClient, SearchTrendsResponse};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator};
use crate::components::charts::delta_badge;
use crate::dashboard::format_count;
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// Employer search trends view for one university
pub struct SearchTrendsView {
    trends: LoadState<SearchTrendsResponse>,

    university: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl SearchTrendsView {
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
            let trends = match client.get_search_trends(&university).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("search trends unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(130)).await;
                    demo::search_trends(&university)
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

impl Render for SearchTrendsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .gap(px(16.0))
            .p(px(20.0))
            .child(div().flex_1().child(self.render_queries_card()))
            .child(div().w(px(320.0)).child(self.render_skills_card()))
    }
}

impl SearchTrendsView {
    fn render_queries_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Top Employer Searches",
            match &self.trends {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(trends) => {
                    if trends.queries.is_empty() {
                        empty_state(theme, "No search activity yet")
                    } else {
                        div().flex().flex_col().children(
                            trends
                                .queries
                                .iter()
                                .enumerate()
                                .map(|(index, query)| {
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap(px(12.0))
                                        .px(px(12.0))
                                        .py(px(10.0))
                                        .border_b_1()
                                        .border_color(theme.border_subtle)
                                        .hover(|s| s.bg(theme.hover_bg))
                                        .child(
                                            div()
                                                .w(px(24.0))
                                                .text_size(px(12.0))
                                                .font_weight(FontWeight::SEMIBOLD)
                                                .text_color(theme.text_dimmed)
                                                .child(format!("{}", index + 1)),
                                        )
                                        .child(
                                            div()
                                                .flex_grow()
                                                .text_size(px(13.0))
                                                .font_weight(FontWeight::MEDIUM)
                                                .text_color(theme.text)
                                                .child(query.query.clone()),
                                        )
                                        .child(
                                            div()
                                                .text_size(px(12.0))
                                                .text_color(theme.text_muted)
                                                .child(format!(
                                                    "{} searches",
                                                    format_count(query.volume)
                                                )),
                                        )
                                        .child(delta_badge(theme, query.growth_pct))
                                })
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No search activity"),
            },
        )
    }

    fn render_skills_card(&self) -> Div {
        let theme = &self.theme;

        card(
            theme,
            "Trending Skills",
            match &self.trends {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(trends) => {
                    if trends.skills.is_empty() {
                        empty_state(theme, "No skill signals yet")
                    } else {
                        div().flex().flex_col().gap(px(8.0)).children(
                            trends
                                .skills
                                .iter()
                                .map(|skill| {
                                    div()
                                        .flex()
                                        .items_center()
                                        .justify_between()
                                        .p(px(10.0))
                                        .rounded(px(8.0))
                                        .bg(theme.card_bg_elevated)
                                        .child(
                                            div()
                                                .text_size(px(13.0))
                                                .font_weight(FontWeight::MEDIUM)
                                                .text_color(theme.text)
                                                .child(skill.skill.clone()),
                                        )
                                        .child(delta_badge(theme, skill.growth_pct))
                                })
                                .collect::<Vec<_>>(),
                        )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No skill signals"),
            },
        )
    }
}
