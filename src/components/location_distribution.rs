//! Graduate location distribution component
//!
//! Renders one ordered collection of location statistics in two
//! complementary projections: a ranked list limited to the top rows and
//! a horizontal bar chart of the full collection. The component never
//! sorts, filters, or aggregates - display order equals input order,
//! and the caller owns the data.

use crate::api::LocationStat;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

/// Number of rows shown by the ranked-list projection. The bar chart is
/// never truncated, so the two projections may disagree on row count
/// for the same input.
pub const RANKED_ROW_LIMIT: usize = 4;

/// Background/accent color pair applied to one ranked-list row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowColors {
    pub background: Hsla,
    pub accent: Hsla,
}

const fn row_colors(h: f32, s: f32, l: f32) -> RowColors {
    RowColors {
        background: Hsla { h, s, l, a: 0.15 },
        accent: Hsla { h, s, l, a: 1.0 },
    }
}

/// Ordered palette for ranked-list rows, indexed by row position.
/// Positions past the end fall back to the first entry.
pub const RANKED_ROW_PALETTE: [RowColors; 5] = [
    row_colors(231.0 / 360.0, 0.88, 0.62), // indigo
    row_colors(152.0 / 360.0, 0.72, 0.48), // emerald
    row_colors(40.0 / 360.0, 0.92, 0.52),  // amber
    row_colors(350.0 / 360.0, 0.78, 0.58), // rose
    row_colors(199.0 / 360.0, 0.85, 0.55), // sky
];

/// Ordered palette for chart bars, cycled by bar position. Unlike the
/// ranked-list palette this wraps (`index % len`) rather than clamping,
/// so collections longer than the palette reuse colors.
pub const BAR_PALETTE: [Hsla; 5] = [
    Hsla { h: 231.0 / 360.0, s: 0.88, l: 0.62, a: 1.0 },
    Hsla { h: 152.0 / 360.0, s: 0.72, l: 0.48, a: 1.0 },
    Hsla { h: 40.0 / 360.0, s: 0.92, l: 0.52, a: 1.0 },
    Hsla { h: 350.0 / 360.0, s: 0.78, l: 0.58, a: 1.0 },
    Hsla { h: 199.0 / 360.0, s: 0.85, l: 0.55, a: 1.0 },
];

/// Rows visible in the ranked list: the first [`RANKED_ROW_LIMIT`]
/// entries, in input order.
pub fn ranked_rows(data: &[LocationStat]) -> &[LocationStat] {
    &data[..data.len().min(RANKED_ROW_LIMIT)]
}

/// Color pair for the ranked row at `index`, falling back to the first
/// palette entry when the index is out of range.
pub fn ranked_row_colors(index: usize) -> RowColors {
    RANKED_ROW_PALETTE
        .get(index)
        .copied()
        .unwrap_or(RANKED_ROW_PALETTE[0])
}

/// Color for the chart bar at `index`, wrapping modulo the palette.
pub fn bar_color(index: usize) -> Hsla {
    BAR_PALETTE[index % BAR_PALETTE.len()]
}

/// Percentage label: the value's shortest decimal form with a literal
/// `%` suffix. `40.0` renders as `40%`, `33.5` as `33.5%`; whatever
/// precision arrived from upstream is kept.
pub fn percentage_label(percentage: f64) -> String {
    format!("{}%", percentage)
}

/// Read-only view over one location-statistics collection. Constructed
/// fresh on each render pass; holds no state.
pub struct LocationDistributionView<'a> {
    data: &'a [LocationStat],
    theme: &'a Theme,
}

impl<'a> LocationDistributionView<'a> {
    pub fn new(data: &'a [LocationStat], theme: &'a Theme) -> Self {
        Self { data, theme }
    }

    /// Both projections stacked: ranked list first, full bar chart below.
    pub fn render(&self) -> Div {
        div()
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(self.render_ranked_list())
            .child(self.render_bar_chart())
    }

    /// Ranked-list projection: top rows only, one palette pair per row.
    pub fn render_ranked_list(&self) -> Div {
        let theme = self.theme;

        div().flex().flex_col().gap(px(8.0)).children(
            ranked_rows(self.data)
                .iter()
                .enumerate()
                .map(|(index, stat)| {
                    let colors = ranked_row_colors(index);

                    div()
                        .flex()
                        .items_center()
                        .gap(px(12.0))
                        .p(px(12.0))
                        .rounded(px(8.0))
                        .bg(colors.background)
                        // Rank badge
                        .child(
                            div()
                                .size(px(28.0))
                                .rounded(px(6.0))
                                .bg(colors.accent.opacity(0.25))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_size(px(12.0))
                                .font_weight(FontWeight::BOLD)
                                .text_color(colors.accent)
                                .child(format!("{}", index + 1)),
                        )
                        // Location and profile count
                        .child(
                            div()
                                .flex_grow()
                                .flex()
                                .flex_col()
                                .gap(px(2.0))
                                .child(
                                    div()
                                        .text_size(px(13.0))
                                        .font_weight(FontWeight::SEMIBOLD)
                                        .text_color(theme.text)
                                        .child(stat.location.clone()),
                                )
                                .child(
                                    div()
                                        .text_size(px(11.0))
                                        .text_color(theme.text_muted)
                                        .child(format!("{} profiles", stat.count)),
                                ),
                        )
                        // Share badge
                        .child(
                            div()
                                .px(px(8.0))
                                .py(px(3.0))
                                .rounded(px(4.0))
                                .bg(colors.accent.opacity(0.15))
                                .text_size(px(11.0))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(colors.accent)
                                .child(percentage_label(stat.percentage)),
                        )
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Bar-chart projection: every entry, widths proportional to share.
    pub fn render_bar_chart(&self) -> Div {
        let theme = self.theme;

        div().flex().flex_col().gap(px(10.0)).children(
            self.data
                .iter()
                .enumerate()
                .map(|(index, stat)| {
                    let color = bar_color(index);
                    // Visual width only; the label keeps the raw value
                    let bar_width_px = stat.percentage.clamp(0.0, 100.0) as f32 * 2.4;

                    div()
                        .flex()
                        .items_center()
                        .gap(px(12.0))
                        .child(
                            div()
                                .w(px(110.0))
                                .text_size(px(12.0))
                                .text_color(theme.text_secondary)
                                .child(stat.location.clone()),
                        )
                        .child(
                            div()
                                .flex_grow()
                                .h(px(10.0))
                                .rounded(px(5.0))
                                .bg(theme.border_subtle)
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
                                .w(px(52.0))
                                .text_size(px(12.0))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.text)
                                .text_align(gpui::TextAlign::Right)
                                .child(percentage_label(stat.percentage)),
                        )
                })
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(location: &str, count: u64, percentage: f64) -> LocationStat {
        LocationStat {
            location: location.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn test_ranked_rows_keeps_short_inputs_whole() {
        let data = vec![stat("Milano", 10, 50.0), stat("Roma", 10, 50.0)];
        assert_eq!(ranked_rows(&data).len(), 2);
        assert_eq!(ranked_rows(&data)[0].location, "Milano");
    }

    #[test]
    fn test_ranked_rows_truncates_long_inputs() {
        let data: Vec<_> = (0..8).map(|i| stat(&format!("City {}", i), 1, 1.0)).collect();
        let rows = ranked_rows(&data);
        assert_eq!(rows.len(), RANKED_ROW_LIMIT);
        assert_eq!(rows[3].location, "City 3");
    }

    #[test]
    fn test_ranked_rows_empty_input() {
        assert!(ranked_rows(&[]).is_empty());
    }

    #[test]
    fn test_ranked_row_colors_clamps_to_first() {
        assert_eq!(ranked_row_colors(0), RANKED_ROW_PALETTE[0]);
        assert_eq!(ranked_row_colors(4), RANKED_ROW_PALETTE[4]);
        assert_eq!(ranked_row_colors(5), RANKED_ROW_PALETTE[0]);
        assert_eq!(ranked_row_colors(17), RANKED_ROW_PALETTE[0]);
    }

    #[test]
    fn test_bar_color_wraps_modulo_palette() {
        assert_eq!(bar_color(0), BAR_PALETTE[0]);
        assert_eq!(bar_color(4), BAR_PALETTE[4]);
        assert_eq!(bar_color(5), BAR_PALETTE[0]);
        assert_eq!(bar_color(7), BAR_PALETTE[2]);
    }

    #[test]
    fn test_percentage_label_keeps_input_precision() {
        assert_eq!(percentage_label(40.0), "40%");
        assert_eq!(percentage_label(33.5), "33.5%");
        assert_eq!(percentage_label(0.0), "0%");
    }
}
