//! Main application state and rendering for the CareerLab GUI

use crate::api::{CareerLabClient, UniversitySummary};
use crate::benchmarking::BenchmarkingView;
use crate::dashboard::OverviewView;
use crate::demo;
use crate::destinations::DestinationsView;
use crate::engagement::EngagementView;
use crate::landing;
use crate::navigation::{NavSection, View, ViewHistory};
use crate::rankings::RankingsView;
use crate::salaries::SalariesView;
use crate::search_trends::SearchTrendsView;
use crate::settings::{AppSettings, SettingsView};
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::sync::Arc;

/// Loading state for async data
#[derive(Debug, Clone, Default)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[allow(dead_code)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    #[allow(dead_code)]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Graduation cohorts selectable in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cohort {
    #[default]
    Y2024,
    Y2023,
    Y2022,
    Y2021,
}

impl Cohort {
    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Y2024 => "2024",
            Cohort::Y2023 => "2023",
            Cohort::Y2022 => "2022",
            Cohort::Y2021 => "2021",
        }
    }

    pub fn all() -> &'static [Cohort] {
        &[Cohort::Y2024, Cohort::Y2023, Cohort::Y2022, Cohort::Y2021]
    }
}

/// Main application state
pub struct CareerLabApp {
    /// Current active view
    active_view: View,
    /// Theme configuration
    theme: Theme,
    /// University tenants available to this installation
    universities: Vec<UniversitySummary>,
    /// Currently selected tenant
    selected_university: UniversitySummary,
    /// Selected graduation cohort
    selected_cohort: Cohort,
    /// Back/forward navigation history
    history: ViewHistory,
    /// API client for backend communication
    api_client: Arc<CareerLabClient>,
    /// API connection status
    api_connected: LoadState<bool>,

    // Child views, one entity per analytics panel
    overview: Entity<OverviewView>,
    destinations: Entity<DestinationsView>,
    salaries: Entity<SalariesView>,
    search_trends: Entity<SearchTrendsView>,
    benchmarking: Entity<BenchmarkingView>,
    rankings: Entity<RankingsView>,
    engagement: Entity<EngagementView>,
    settings_view: Entity<SettingsView>,
}

impl CareerLabApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let api_client = Arc::new(CareerLabClient::new());
        let theme = Theme::dark();

        let universities = demo::universities();
        let selected_university = universities[0].clone();
        let selected_cohort = Cohort::default();

        let slug = selected_university.slug.clone();
        let cohort_label = selected_cohort.label().to_string();

        let overview = cx.new(|cx| {
            OverviewView::new(
                api_client.clone(),
                theme.clone(),
                slug.clone(),
                cohort_label.clone(),
                cx,
            )
        });
        let destinations = cx.new(|cx| {
            DestinationsView::new(
                api_client.clone(),
                theme.clone(),
                slug.clone(),
                cohort_label.clone(),
                cx,
            )
        });
        let salaries =
            cx.new(|cx| SalariesView::new(api_client.clone(), theme.clone(), slug.clone(), cx));
        let search_trends =
            cx.new(|cx| SearchTrendsView::new(api_client.clone(), theme.clone(), slug.clone(), cx));
        let benchmarking =
            cx.new(|cx| BenchmarkingView::new(api_client.clone(), theme.clone(), slug.clone(), cx));
        let rankings = cx.new(|cx| {
            RankingsView::new(
                api_client.clone(),
                theme.clone(),
                selected_university.name.clone(),
                cx,
            )
        });
        let engagement =
            cx.new(|cx| EngagementView::new(api_client.clone(), theme.clone(), slug.clone(), cx));
        let settings_view = cx.new(|_cx| SettingsView::new(AppSettings::default(), theme.clone()));

        let mut app = Self {
            active_view: View::Landing,
            theme,
            universities,
            selected_university,
            selected_cohort,
            history: ViewHistory::new(),
            api_client,
            api_connected: LoadState::NotLoaded,
            overview,
            destinations,
            salaries,
            search_trends,
            benchmarking,
            rankings,
            engagement,
            settings_view,
        };

        app.history
            .push(View::Landing, app.selected_university.slug.clone());
        app.check_api_health(cx);
        app.load_universities(cx);

        app
    }

    /// Check API health and connection status
    pub fn check_api_health(&mut self, cx: &mut Context<Self>) {
        self.api_connected = LoadState::Loading;
        let client = self.api_client.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client.health_check().await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                        match result {
                            Ok(health) => {
                                app.api_connected = LoadState::Loaded(health.healthy);
                            }
                            Err(e) => {
                                log::warn!("backend unreachable, running in demo mode: {:?}", e);
                                app.api_connected = LoadState::Error(format!("{:?}", e));
                            }
                        }
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Load the tenant list from the API, keeping the demo list on failure
    fn load_universities(&mut self, cx: &mut Context<Self>) {
        let client = self.api_client.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client.get_universities().await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                        if let Ok(universities) = result {
                            if !universities.is_empty() {
                                app.universities = universities;
                                cx.notify();
                            }
                        }
                    });
                }
            });
        })
        .detach();
    }

    pub fn set_active_view(&mut self, view: View, cx: &mut Context<Self>) {
        if self.active_view == view {
            return;
        }
        log::debug!("switching view to {:?}", view);
        self.active_view = view;
        self.history
            .push(view, self.selected_university.slug.clone());
        cx.notify();
    }

    pub fn go_back(&mut self, cx: &mut Context<Self>) {
        if let Some((view, slug)) = self.history.go_back() {
            self.active_view = view;
            if slug != self.selected_university.slug {
                self.apply_university_slug(&slug, cx);
            }
            cx.notify();
        }
    }

    pub fn select_university(&mut self, university: UniversitySummary, cx: &mut Context<Self>) {
        if university.slug == self.selected_university.slug {
            return;
        }
        self.selected_university = university;
        self.history
            .push(self.active_view, self.selected_university.slug.clone());
        self.broadcast_scope(cx);
        cx.notify();
    }

    pub fn set_cohort(&mut self, cohort: Cohort, cx: &mut Context<Self>) {
        if cohort == self.selected_cohort {
            return;
        }
        self.selected_cohort = cohort;
        self.broadcast_scope(cx);
        cx.notify();
    }

    /// Reload every panel for the current scope
    pub fn refresh_all(&mut self, cx: &mut Context<Self>) {
        self.check_api_health(cx);
        self.overview.update(cx, |view, cx| view.refresh(cx));
        self.destinations.update(cx, |view, cx| view.refresh(cx));
        self.salaries.update(cx, |view, cx| view.refresh(cx));
        self.search_trends.update(cx, |view, cx| view.refresh(cx));
        self.benchmarking.update(cx, |view, cx| view.refresh(cx));
        self.rankings.update(cx, |view, cx| view.refresh(cx));
        self.engagement.update(cx, |view, cx| view.refresh(cx));
    }

    fn apply_university_slug(&mut self, slug: &str, cx: &mut Context<Self>) {
        if let Some(university) = self.universities.iter().find(|u| u.slug == slug).cloned() {
            self.selected_university = university;
            self.broadcast_scope(cx);
        }
    }

    /// Push the selected university/cohort into every child view
    fn broadcast_scope(&mut self, cx: &mut Context<Self>) {
        let slug = self.selected_university.slug.clone();
        let name = self.selected_university.name.clone();
        let cohort = self.selected_cohort.label().to_string();

        self.overview.update(cx, {
            let slug = slug.clone();
            let cohort = cohort.clone();
            move |view, cx| view.set_scope(slug, cohort, cx)
        });
        self.destinations.update(cx, {
            let slug = slug.clone();
            let cohort = cohort.clone();
            move |view, cx| view.set_scope(slug, cohort, cx)
        });
        self.salaries.update(cx, {
            let slug = slug.clone();
            move |view, cx| view.set_university(slug, cx)
        });
        self.search_trends.update(cx, {
            let slug = slug.clone();
            move |view, cx| view.set_university(slug, cx)
        });
        self.benchmarking.update(cx, {
            let slug = slug.clone();
            move |view, cx| view.set_university(slug, cx)
        });
        self.rankings
            .update(cx, move |view, cx| view.set_highlight(name, cx));
        self.engagement
            .update(cx, move |view, cx| view.set_university(slug, cx));
    }
}

impl Render for CareerLabApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        if self.active_view == View::Landing {
            let theme = self.theme.clone();
            return landing::landing_page(&theme, cx);
        }

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family("Inter")
            .child(self.render_sidebar(cx))
            .child(self.render_main_content(cx))
    }
}

impl CareerLabApp {
    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w(px(260.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(theme.sidebar_bg)
            .border_r_1()
            .border_color(theme.border_subtle)
            .child(self.render_logo(cx))
            .child(self.render_nav_sections(cx))
            .child(self.render_universities(cx))
            .child(self.render_sidebar_footer())
    }

    fn render_logo(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id("logo")
            .px(px(20.0))
            .py(px(24.0))
            .flex()
            .items_center()
            .gap(px(14.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .mb(px(8.0))
            .cursor_pointer()
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.set_active_view(View::Landing, cx);
            }))
            .child(
                div()
                    .size(px(40.0))
                    .bg(theme.accent)
                    .rounded(px(10.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_1()
                    .border_color(theme.accent_glow)
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(FontWeight::BLACK)
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child("C"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("CareerLab"),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(theme.text_dimmed)
                            .child("University Analytics"),
                    ),
            )
    }

    fn render_nav_sections(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut nav = div()
            .flex()
            .flex_col()
            .gap(px(2.0))
            .px(px(12.0))
            .py(px(12.0));

        for section in NavSection::all() {
            nav = nav.child(self.render_section_label(section));
            for &view in section.views() {
                nav = nav.child(self.nav_item(view, cx));
            }
        }

        nav
    }

    fn render_section_label(&self, section: &NavSection) -> Div {
        let theme = &self.theme;

        div()
            .text_size(px(10.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.text_dimmed)
            .px(px(12.0))
            .mt(px(10.0))
            .mb(px(4.0))
            .child(section.label())
    }

    fn nav_item(&self, view: View, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.active_view == view;
        let theme = &self.theme;

        let bg = if is_active {
            theme.accent_subtle
        } else {
            transparent_black()
        };
        let text_color = if is_active {
            theme.accent
        } else {
            theme.text_muted
        };
        let hover_text = if is_active {
            theme.accent
        } else {
            theme.text_secondary
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", view)))
            .relative()
            .flex()
            .items_center()
            .gap(px(10.0))
            .px(px(12.0))
            .py(px(9.0))
            .rounded(px(8.0))
            .bg(bg)
            .text_color(text_color)
            .text_size(px(13.0))
            .font_weight(if is_active {
                FontWeight::SEMIBOLD
            } else {
                FontWeight::NORMAL
            })
            .cursor_pointer()
            .hover(|s| s.bg(theme.nav_hover).text_color(hover_text))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.set_active_view(view, cx);
            }))
            // Active indicator bar on the left
            .when(is_active, |s| {
                s.child(
                    div()
                        .absolute()
                        .left(px(-12.0))
                        .top(px(8.0))
                        .bottom(px(8.0))
                        .w(px(3.0))
                        .rounded(px(2.0))
                        .bg(theme.nav_active_indicator),
                )
            })
            .child(div().flex_grow().child(view.label()))
            .when_some(view.shortcut(), |s, shortcut| {
                s.child(
                    div()
                        .text_size(px(10.0))
                        .text_color(theme.text_dimmed)
                        .child(shortcut.to_string()),
                )
            })
    }

    fn render_universities(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex_grow()
            .flex()
            .flex_col()
            .px(px(12.0))
            .py(px(16.0))
            .border_t_1()
            .border_color(theme.border_subtle)
            .mt(px(8.0))
            .child(
                div()
                    .text_size(px(10.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_dimmed)
                    .px(px(12.0))
                    .mb(px(12.0))
                    .child("UNIVERSITIES"),
            )
            .children(
                self.universities
                    .iter()
                    .map(|university| self.university_item(university, cx))
                    .collect::<Vec<_>>(),
            )
    }

    fn university_item(
        &self,
        university: &UniversitySummary,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;
        let is_selected = self.selected_university.slug == university.slug;
        let university_owned = university.clone();

        let bg = if is_selected {
            theme.accent_subtle
        } else {
            transparent_black()
        };
        let text_color = if is_selected {
            theme.text
        } else {
            theme.text_secondary
        };

        div()
            .id(SharedString::from(format!(
                "university-{}",
                university.slug
            )))
            .relative()
            .px(px(12.0))
            .py(px(10.0))
            .rounded(px(8.0))
            .bg(bg)
            .cursor_pointer()
            .hover(|s| s.bg(theme.nav_hover))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.select_university(university_owned.clone(), cx);
            }))
            .flex()
            .justify_between()
            .items_center()
            .when(is_selected, |s| {
                s.border_l_2().border_color(theme.accent).pl(px(10.0))
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(text_color)
                            .child(university.name.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(theme.text_dimmed)
                            .child(university.city.clone()),
                    ),
            )
    }

    fn render_sidebar_footer(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(14.0))
            .border_t_1()
            .border_color(theme.border_subtle)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child("Data source"),
            )
            .child(self.render_api_status_badge())
    }

    fn render_api_status_badge(&self) -> Div {
        let theme = &self.theme;

        let (status_text, bg, border, text_color): (&str, Hsla, Hsla, Hsla) =
            match &self.api_connected {
                LoadState::NotLoaded | LoadState::Loading => (
                    "Connecting...",
                    theme.accent_subtle,
                    theme.accent_muted,
                    theme.accent,
                ),
                LoadState::Loaded(true) => (
                    "Live",
                    theme.positive_subtle,
                    theme.positive_muted,
                    theme.positive,
                ),
                LoadState::Loaded(false) => (
                    "Offline",
                    theme.negative_subtle,
                    theme.negative_muted,
                    theme.negative,
                ),
                LoadState::Error(_) => (
                    "Demo Mode",
                    theme.warning_subtle,
                    theme.warning_hover,
                    theme.warning,
                ),
            };

        div()
            .px(px(8.0))
            .py(px(3.0))
            .rounded(px(4.0))
            .bg(bg)
            .border_1()
            .border_color(border)
            .text_size(px(10.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(text_color)
            .child(status_text.to_string())
    }

    fn render_main_content(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex_grow()
            .h_full()
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(self.render_content_area())
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let can_go_back = self.history.can_go_back();

        div()
            .h(px(72.0))
            .px(px(28.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(theme.border_subtle)
            .bg(theme.background)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(16.0))
                    // Back button
                    .child(
                        div()
                            .id("nav-back")
                            .size(px(28.0))
                            .rounded(px(6.0))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(14.0))
                            .text_color(if can_go_back {
                                theme.text_secondary
                            } else {
                                theme.text_dimmed
                            })
                            .cursor_pointer()
                            .hover(|s| s.bg(theme.hover_bg))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.go_back(cx);
                            }))
                            .child("←"),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(12.0))
                            .child(
                                div()
                                    .text_size(px(22.0))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.text)
                                    .child(self.active_view.label()),
                            )
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .text_color(theme.text_dimmed)
                                    .child(format!(
                                        "{} · {}",
                                        self.selected_university.name, self.selected_university.city
                                    )),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    // Cohort selector
                    .child(
                        div()
                            .flex()
                            .gap(px(4.0))
                            .p(px(4.0))
                            .rounded(px(8.0))
                            .bg(theme.card_bg)
                            .border_1()
                            .border_color(theme.border_subtle)
                            .children(
                                Cohort::all()
                                    .iter()
                                    .map(|&cohort| self.cohort_button(cohort, cx))
                                    .collect::<Vec<_>>(),
                            ),
                    )
                    // Refresh button
                    .child(
                        div()
                            .id("refresh-all")
                            .px(px(12.0))
                            .py(px(7.0))
                            .rounded(px(6.0))
                            .bg(theme.accent_subtle)
                            .border_1()
                            .border_color(theme.accent_muted)
                            .text_size(px(12.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.accent)
                            .cursor_pointer()
                            .hover(|s| s.bg(theme.accent.opacity(0.25)))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.refresh_all(cx);
                            }))
                            .child("Refresh"),
                    ),
            )
    }

    fn cohort_button(&self, cohort: Cohort, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let is_selected = self.selected_cohort == cohort;

        let bg = if is_selected {
            theme.accent_subtle
        } else {
            transparent_black()
        };
        let text_color = if is_selected {
            theme.accent
        } else {
            theme.text_muted
        };

        div()
            .id(SharedString::from(format!("cohort-{}", cohort.label())))
            .px(px(14.0))
            .py(px(6.0))
            .rounded(px(6.0))
            .bg(bg)
            .text_size(px(12.0))
            .font_weight(if is_selected {
                FontWeight::SEMIBOLD
            } else {
                FontWeight::MEDIUM
            })
            .text_color(text_color)
            .cursor_pointer()
            .hover(|s| s.bg(theme.hover_bg).text_color(theme.text_secondary))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.set_cohort(cohort, cx);
            }))
            .child(cohort.label())
    }

    fn render_content_area(&self) -> Div {
        let content: AnyView = match self.active_view {
            View::Landing | View::Overview => self.overview.clone().into(),
            View::Destinations => self.destinations.clone().into(),
            View::Salaries => self.salaries.clone().into(),
            View::SearchTrends => self.search_trends.clone().into(),
            View::Benchmarking => self.benchmarking.clone().into(),
            View::Rankings => self.rankings.clone().into(),
            View::Engagement => self.engagement.clone().into(),
            View::Settings => self.settings_view.clone().into(),
        };

        div().flex_grow().overflow_hidden().child(content)
    }
}
