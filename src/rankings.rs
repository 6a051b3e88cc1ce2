//! Rankings view
//!
//! Ordered placement-ranking table with year-over-year movement. The
//! selected university's row is highlighted; order comes from the
//! backend and is never changed client-side.

use crate::api::{CareerLabClient, RankingEntry, RankingsResponse};
use crate::app::LoadState;
use crate::components::cards::{card, empty_state, error_message, loading_indicator};
use crate::demo;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;

/// National ranking table view
pub struct RankingsView {
    rankings: LoadState<RankingsResponse>,

    /// Display name of the tenant to highlight in the table
    highlighted_university: String,
    api_client: Arc<CareerLabClient>,
    theme: Theme,
}

impl RankingsView {
    pub fn new(
        api_client: Arc<CareerLabClient>,
        theme: Theme,
        highlighted_university: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            rankings: LoadState::NotLoaded,
            highlighted_university,
            api_client,
            theme,
        };
        view.refresh(cx);
        view
    }

    pub fn set_highlight(&mut self, university: String, cx: &mut Context<Self>) {
        self.highlighted_university = university;
        cx.notify();
    }

    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        self.rankings = LoadState::Loading;
        let client = self.api_client.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let rankings = match client.get_rankings(None).await {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("rankings unavailable, falling back to demo data: {:?}", e);
                    Timer::after(Duration::from_millis(110)).await;
                    demo::rankings()
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.rankings = LoadState::Loaded(rankings);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }
}

/// Label for a year-over-year movement value: arrows for changes, a dot
/// for unchanged positions.
pub fn movement_label(movement: i32) -> String {
    if movement > 0 {
        format!("▲ {}", movement)
    } else if movement < 0 {
        format!("▼ {}", movement.abs())
    } else {
        "●".to_string()
    }
}

impl Render for RankingsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(20.0))
            .child(self.render_table_card())
    }
}

impl RankingsView {
    fn render_table_card(&self) -> Div {
        let theme = &self.theme;

        let title = match &self.rankings {
            LoadState::Loaded(rankings) => format!("Placement Ranking {}", rankings.year),
            _ => "Placement Ranking".to_string(),
        };

        card(
            theme,
            &title,
            match &self.rankings {
                LoadState::Loading => loading_indicator(theme),
                LoadState::Error(e) => error_message(theme, e),
                LoadState::Loaded(rankings) => {
                    if rankings.entries.is_empty() {
                        empty_state(theme, "No ranking data for this year")
                    } else {
                        div()
                            .flex()
                            .flex_col()
                            .child(self.render_header_row())
                            .children(
                                rankings
                                    .entries
                                    .iter()
                                    .map(|entry| self.render_entry_row(entry))
                                    .collect::<Vec<_>>(),
                            )
                    }
                }
                LoadState::NotLoaded => empty_state(theme, "No ranking data"),
            },
        )
    }

    fn render_header_row(&self) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .items_center()
            .px(px(12.0))
            .py(px(8.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .child(self.header_cell("#", 48.0))
            .child(
                div()
                    .flex_1()
                    .text_size(px(10.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_dimmed)
                    .child("UNIVERSITY"),
            )
            .child(self.header_cell("SCORE", 80.0))
            .child(self.header_cell("YoY", 64.0))
    }

    fn header_cell(&self, label: &str, width: f32) -> Div {
        let theme = &self.theme;

        div()
            .w(px(width))
            .text_size(px(10.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.text_dimmed)
            .child(label.to_string())
    }

    fn render_entry_row(&self, entry: &RankingEntry) -> Div {
        let theme = &self.theme;
        let is_highlighted = entry.university == self.highlighted_university;
        let movement_color = if entry.movement > 0 {
            theme.positive
        } else if entry.movement < 0 {
            theme.negative
        } else {
            theme.text_dimmed
        };

        div()
            .flex()
            .items_center()
            .px(px(12.0))
            .py(px(10.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .hover(|s| s.bg(theme.hover_bg))
            .when(is_highlighted, |s| {
                s.bg(theme.accent_subtle)
                    .border_l_2()
                    .border_color(theme.accent)
            })
            .child(
                div()
                    .w(px(48.0))
                    .text_size(px(13.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(if is_highlighted {
                        theme.accent
                    } else {
                        theme.text
                    })
                    .child(format!("{}", entry.position)),
            )
            .child(
                div()
                    .flex_1()
                    .text_size(px(13.0))
                    .font_weight(if is_highlighted {
                        FontWeight::SEMIBOLD
                    } else {
                        FontWeight::MEDIUM
                    })
                    .text_color(theme.text)
                    .child(entry.university.clone()),
            )
            .child(
                div()
                    .w(px(80.0))
                    .text_size(px(13.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text_secondary)
                    .child(format!("{:.1}", entry.score)),
            )
            .child(
                div()
                    .w(px(64.0))
                    .text_size(px(12.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(movement_color)
                    .child(movement_label(entry.movement)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_label_up() {
        assert_eq!(movement_label(2), "▲ 2");
    }

    #[test]
    fn test_movement_label_down() {
        assert_eq!(movement_label(-3), "▼ 3");
    }

    #[test]
    fn test_movement_label_unchanged() {
        assert_eq!(movement_label(0), "●");
    }
}
