//! Chart primitives for analytics panels
//!
//! Horizontal share rows, signed delta badges, and mini column strips
//! used by the salary, search-trend, benchmarking, and engagement views.

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

/// Horizontal proportion row: fixed-width label, bar scaled by
/// `fraction` (clamped to `[0,1]`), trailing value label.
pub fn share_row(theme: &Theme, label: &str, value_label: &str, fraction: f64, color: Hsla) -> Div {
    let bar_width_px = fraction.clamp(0.0, 1.0) as f32 * 180.0;

    div()
        .flex()
        .items_center()
        .gap(px(16.0))
        .py(px(4.0))
        .px(px(8.0))
        .cursor_pointer()
        .rounded(px(6.0))
        .hover(|s| s.bg(theme.hover_bg))
        .child(
            div()
                .w(px(130.0))
                .text_size(px(13.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text_secondary)
                .child(label.to_string()),
        )
        .child(
            div()
                .flex_grow()
                .h(px(10.0))
                .rounded(px(5.0))
                .bg(color.opacity(0.15))
                .overflow_hidden()
                .child(
                    div()
                        .h_full()
                        .w(px(bar_width_px))
                        .rounded(px(5.0))
                        .bg(color),
                ),
        )
        .child(
            div()
                .w(px(64.0))
                .text_size(px(13.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .text_align(gpui::TextAlign::Right)
                .child(value_label.to_string()),
        )
}

/// Signed percentage badge, green for gains and red for losses
pub fn delta_badge(theme: &Theme, delta_pct: f64) -> Div {
    let color = if delta_pct >= 0.0 {
        theme.positive
    } else {
        theme.negative
    };

    div()
        .px(px(6.0))
        .py(px(2.0))
        .rounded(px(4.0))
        .bg(color.opacity(0.15))
        .text_size(px(10.0))
        .font_weight(FontWeight::MEDIUM)
        .text_color(color)
        .child(format!("{:+.1}%", delta_pct))
}

/// Strip of mini columns, one per period, heights scaled to the
/// largest value in the series
pub fn column_strip(theme: &Theme, series: &[(String, u64)]) -> Div {
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    div()
        .flex()
        .items_end()
        .gap(px(8.0))
        .h(px(72.0))
        .children(
            series
                .iter()
                .map(|(label, value)| {
                    let height_px = (*value as f32 / max as f32) * 56.0;

                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap(px(4.0))
                        .child(
                            div()
                                .w(px(18.0))
                                .h(px(height_px.max(2.0)))
                                .rounded(px(3.0))
                                .bg(theme.accent),
                        )
                        .child(
                            div()
                                .text_size(px(9.0))
                                .text_color(theme.text_dimmed)
                                .child(label.clone()),
                        )
                })
                .collect::<Vec<_>>(),
        )
}
