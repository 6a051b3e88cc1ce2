//! Settings module for the CareerLab GUI
//!
//! Provides settings data structures with serde-backed defaults and the
//! settings view rendering the active configuration.

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Settings Data Structures
// =============================================================================

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConnectionSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_timeout() -> u32 {
    30
}
fn default_max_retries() -> u32 {
    3
}
fn default_verify_ssl() -> bool {
    true
}

impl Default for ApiConnectionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            verify_ssl: default_verify_ssl(),
        }
    }
}

/// Data refresh interval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRefreshSettings {
    #[serde(default = "default_overview_seconds")]
    pub overview_seconds: u32,
    #[serde(default = "default_analytics_seconds")]
    pub analytics_seconds: u32,
    #[serde(default = "default_rankings_seconds")]
    pub rankings_seconds: u32,
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

fn default_overview_seconds() -> u32 {
    300
}
fn default_analytics_seconds() -> u32 {
    900
}
fn default_rankings_seconds() -> u32 {
    86400
}
fn default_auto_refresh() -> bool {
    true
}

impl Default for DataRefreshSettings {
    fn default() -> Self {
        Self {
            overview_seconds: default_overview_seconds(),
            analytics_seconds: default_analytics_seconds(),
            rankings_seconds: default_rankings_seconds(),
            auto_refresh: default_auto_refresh(),
        }
    }
}

/// Dashboard defaults applied on startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_university")]
    pub default_university: String,
    #[serde(default = "default_cohort")]
    pub default_cohort: String,
    #[serde(default = "default_theme_variant")]
    pub theme_variant: String,
}

fn default_university() -> String {
    "polimi".to_string()
}
fn default_cohort() -> String {
    "2024".to_string()
}
fn default_theme_variant() -> String {
    "dark".to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_university: default_university(),
            default_cohort: default_cohort(),
            theme_variant: default_theme_variant(),
        }
    }
}

/// Aggregate application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiConnectionSettings,
    #[serde(default)]
    pub refresh: DataRefreshSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

// =============================================================================
// Settings View
// =============================================================================

/// Read-only settings panel showing the active configuration
pub struct SettingsView {
    settings: AppSettings,
    theme: Theme,
}

impl SettingsView {
    pub fn new(settings: AppSettings, theme: Theme) -> Self {
        Self { settings, theme }
    }
}

impl Render for SettingsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(20.0))
            .gap(px(16.0))
            .child(self.render_section(
                "API Connection",
                vec![
                    ("Base URL", self.settings.api.base_url.clone()),
                    ("Timeout", format!("{}s", self.settings.api.timeout)),
                    ("Max retries", self.settings.api.max_retries.to_string()),
                    ("Verify SSL", self.settings.api.verify_ssl.to_string()),
                ],
            ))
            .child(self.render_section(
                "Data Refresh",
                vec![
                    (
                        "Overview",
                        format!("every {}s", self.settings.refresh.overview_seconds),
                    ),
                    (
                        "Analytics panels",
                        format!("every {}s", self.settings.refresh.analytics_seconds),
                    ),
                    (
                        "Rankings",
                        format!("every {}s", self.settings.refresh.rankings_seconds),
                    ),
                    (
                        "Auto-refresh",
                        self.settings.refresh.auto_refresh.to_string(),
                    ),
                ],
            ))
            .child(self.render_section(
                "Dashboard Defaults",
                vec![
                    (
                        "University",
                        self.settings.dashboard.default_university.clone(),
                    ),
                    ("Cohort", self.settings.dashboard.default_cohort.clone()),
                    ("Theme", self.settings.dashboard.theme_variant.clone()),
                ],
            ))
    }
}

impl SettingsView {
    fn render_section(&self, title: &str, rows: Vec<(&str, String)>) -> Div {
        let theme = &self.theme;

        div()
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .child(
                div()
                    .px(px(16.0))
                    .py(px(12.0))
                    .border_b_1()
                    .border_color(theme.border_subtle)
                    .text_size(px(14.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(title.to_string()),
            )
            .children(
                rows.into_iter()
                    .map(|(label, value)| {
                        div()
                            .px(px(16.0))
                            .py(px(10.0))
                            .border_b_1()
                            .border_color(theme.border_subtle)
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(theme.text_muted)
                                    .child(label.to_string()),
                            )
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(theme.text_secondary)
                                    .child(value),
                            )
                    })
                    .collect::<Vec<_>>(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8000");
        assert_eq!(settings.api.timeout, 30);
        assert_eq!(settings.refresh.overview_seconds, 300);
        assert!(settings.refresh.auto_refresh);
        assert_eq!(settings.dashboard.default_university, "polimi");
        assert_eq!(settings.dashboard.theme_variant, "dark");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"api": {"base_url": "https://careerlab.example.com"}}"#)
                .unwrap();
        assert_eq!(settings.api.base_url, "https://careerlab.example.com");
        assert_eq!(settings.api.max_retries, 3);
        assert_eq!(settings.dashboard.default_cohort, "2024");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api.base_url, settings.api.base_url);
        assert_eq!(parsed.refresh.rankings_seconds, settings.refresh.rankings_seconds);
    }
}
