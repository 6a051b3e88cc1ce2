//! Landing page for the CareerLab GUI
//!
//! Marketing surface shown before a dashboard session starts: hero
//! header with the product pitch, a feature strip, and a footer
//! call-to-action band. The primary CTA opens the analytics overview.

use crate::app::CareerLabApp;
use crate::navigation::View;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

const TAGLINE: &str = "Career outcomes analytics for universities";
const PITCH: &str = "Follow your graduates into the job market: destinations, \
salaries, employer demand, and how your institution compares.";

/// Full landing page layout
pub fn landing_page(theme: &Theme, cx: &mut Context<CareerLabApp>) -> Div {
    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(theme.background)
        .child(
            div()
                .id("landing-scroll")
                .flex_grow()
                .overflow_y_scroll()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .child(hero(theme, cx))
                        .child(feature_strip(theme))
                        .child(footer_cta(theme, cx)),
                ),
        )
}

fn hero(theme: &Theme, cx: &mut Context<CareerLabApp>) -> Div {
    div()
        .px(px(80.0))
        .py(px(96.0))
        .flex()
        .flex_col()
        .items_center()
        .gap(px(20.0))
        .child(
            div()
                .text_size(px(44.0))
                .font_weight(FontWeight::BLACK)
                .text_color(theme.text)
                .child("CareerLab"),
        )
        .child(
            div()
                .text_size(px(18.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.accent)
                .child(TAGLINE),
        )
        .child(
            div()
                .max_w(px(560.0))
                .text_size(px(14.0))
                .text_color(theme.text_muted)
                .child(PITCH),
        )
        .child(
            div()
                .mt(px(16.0))
                .flex()
                .gap(px(12.0))
                .child(
                    div()
                        .id("cta-open-dashboard")
                        .px(px(24.0))
                        .py(px(12.0))
                        .rounded(px(8.0))
                        .bg(theme.accent)
                        .text_size(px(14.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(hsla(0.0, 0.0, 1.0, 0.97))
                        .cursor_pointer()
                        .hover(|s| s.bg(theme.accent_hover))
                        .on_click(cx.listener(|app, _event, _window, cx| {
                            app.set_active_view(View::Overview, cx);
                        }))
                        .child("Open the dashboard"),
                )
                .child(
                    div()
                        .px(px(24.0))
                        .py(px(12.0))
                        .rounded(px(8.0))
                        .border_1()
                        .border_color(theme.border_strong)
                        .text_size(px(14.0))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(theme.text_secondary)
                        .cursor_pointer()
                        .hover(|s| s.bg(theme.hover_bg))
                        .child("Request a demo"),
                ),
        )
}

fn feature_strip(theme: &Theme) -> Div {
    div()
        .px(px(80.0))
        .py(px(40.0))
        .flex()
        .gap(px(20.0))
        .child(feature_card(
            theme,
            "Destinations",
            "See where each cohort lands, city by city, with sector breakdowns.",
        ))
        .child(feature_card(
            theme,
            "Salary Trends",
            "Median and quartile salaries across graduation years and degree areas.",
        ))
        .child(feature_card(
            theme,
            "Benchmarking",
            "Your placement numbers against national averages and peer groups.",
        ))
}

fn feature_card(theme: &Theme, title: &str, description: &str) -> Div {
    div()
        .flex_1()
        .p(px(24.0))
        .rounded(px(12.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border)
        .flex()
        .flex_col()
        .gap(px(8.0))
        .child(
            div()
                .text_size(px(15.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(title.to_string()),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(theme.text_muted)
                .child(description.to_string()),
        )
}

fn footer_cta(theme: &Theme, cx: &mut Context<CareerLabApp>) -> Div {
    div()
        .mx(px(80.0))
        .my(px(48.0))
        .p(px(40.0))
        .rounded(px(16.0))
        .bg(theme.accent_subtle)
        .border_1()
        .border_color(theme.accent_muted)
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(6.0))
                .child(
                    div()
                        .text_size(px(20.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.text)
                        .child("Ready to explore your placement data?"),
                )
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_muted)
                        .child("Four demo universities are preloaded. No account needed."),
                ),
        )
        .child(
            div()
                .id("cta-footer-open")
                .px(px(20.0))
                .py(px(12.0))
                .rounded(px(8.0))
                .bg(theme.accent)
                .text_size(px(13.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(hsla(0.0, 0.0, 1.0, 0.97))
                .cursor_pointer()
                .hover(|s| s.bg(theme.accent_hover))
                .on_click(cx.listener(|app, _event, _window, cx| {
                    app.set_active_view(View::Overview, cx);
                }))
                .child("Start exploring"),
        )
}
