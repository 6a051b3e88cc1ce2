//! Card and state-display primitives shared across dashboard views
//!
//! Every analytics panel wraps its content in the same card chrome and
//! shows the same loading/error/empty treatments while data arrives.

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

/// Card with a title header and a scrollable content area
pub fn card(theme: &Theme, title: &str, content: Div) -> Div {
    div()
        .h_full()
        .rounded(px(10.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border)
        .flex()
        .flex_col()
        .overflow_hidden()
        // Header
        .child(
            div()
                .px(px(16.0))
                .py(px(12.0))
                .border_b_1()
                .border_color(theme.border_subtle)
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_size(px(14.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(theme.text)
                        .child(title.to_string()),
                ),
        )
        // Content
        .child(
            div()
                .id(SharedString::from(format!("card-scroll-{}", title)))
                .flex_grow()
                .overflow_y_scroll()
                .child(div().p(px(16.0)).child(content)),
        )
}

/// Centered "Loading..." placeholder
pub fn loading_indicator(theme: &Theme) -> Div {
    div()
        .py(px(40.0))
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(13.0))
                .text_color(theme.text_dimmed)
                .child("Loading..."),
        )
}

/// Inline error banner
pub fn error_message(theme: &Theme, msg: &str) -> Div {
    div()
        .m(px(16.0))
        .p(px(16.0))
        .rounded(px(6.0))
        .bg(theme.negative_subtle)
        .text_size(px(12.0))
        .text_color(theme.negative)
        .child(msg.to_string())
}

/// Centered placeholder for panels with nothing to show
pub fn empty_state(theme: &Theme, message: &str) -> Div {
    div()
        .py(px(40.0))
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(8.0))
        .child(
            div()
                .text_size(px(14.0))
                .text_color(theme.text_muted)
                .child(message.to_string()),
        )
}

/// Label-over-value stat, used in stat strips
pub fn stat_item(theme: &Theme, label: &str, value: &str, color: Hsla) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(4.0))
        .child(
            div()
                .text_size(px(11.0))
                .text_color(theme.text_dimmed)
                .child(label.to_string()),
        )
        .child(
            div()
                .text_size(px(20.0))
                .font_weight(FontWeight::BOLD)
                .text_color(color)
                .child(value.to_string()),
        )
}

/// KPI metric card: title, large value, subtitle badge, indicator dot
pub fn metric_card(theme: &Theme, title: &str, value: &str, subtitle: &str, positive: bool) -> Div {
    let accent = if positive {
        theme.positive
    } else {
        theme.negative
    };
    let accent_subtle = if positive {
        theme.positive_subtle
    } else {
        theme.negative_subtle
    };
    let accent_muted = if positive {
        theme.positive_muted
    } else {
        theme.negative_muted
    };

    div()
        .flex_1()
        .p(px(20.0))
        .rounded(px(12.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border)
        .cursor_pointer()
        .hover(|s| {
            s.bg(theme.card_bg_elevated)
                .border_color(theme.border_strong)
        })
        .flex()
        .flex_col()
        .gap(px(12.0))
        // Top section with title and indicator
        .child(
            div()
                .flex()
                .justify_between()
                .items_center()
                .child(
                    div()
                        .text_size(px(12.0))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(theme.text_muted)
                        .child(title.to_string()),
                )
                .child(div().size(px(8.0)).rounded_full().bg(accent)),
        )
        // Value
        .child(
            div()
                .text_size(px(32.0))
                .font_weight(FontWeight::BOLD)
                .text_color(theme.text)
                .child(value.to_string()),
        )
        // Subtitle badge
        .child(
            div().flex().child(
                div()
                    .px(px(10.0))
                    .py(px(4.0))
                    .rounded(px(6.0))
                    .bg(accent_subtle)
                    .border_1()
                    .border_color(accent_muted)
                    .text_color(accent)
                    .text_size(px(11.0))
                    .font_weight(FontWeight::MEDIUM)
                    .child(subtitle.to_string()),
            ),
        )
}
