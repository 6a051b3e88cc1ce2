//! Navigation system for the CareerLab GUI
//!
//! Provides the view catalog, grouped sidebar sections, and a bounded
//! back/forward history over (view, university) pairs.

use std::collections::VecDeque;

// =============================================================================
// View System
// =============================================================================

/// All available views organized by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Marketing entry point, shown before the dashboard is opened
    #[default]
    Landing,

    // Overview
    Overview,

    // Career outcomes
    Destinations,
    Salaries,

    // Market signals
    SearchTrends,
    Benchmarking,
    Rankings,

    // Students
    Engagement,

    // Settings
    Settings,
}

impl View {
    /// Get the display name for the view
    pub fn label(&self) -> &'static str {
        match self {
            View::Landing => "Welcome",
            View::Overview => "Overview",
            View::Destinations => "Destinations",
            View::Salaries => "Salary Trends",
            View::SearchTrends => "Search Trends",
            View::Benchmarking => "Benchmarking",
            View::Rankings => "Rankings",
            View::Engagement => "Engagement",
            View::Settings => "Settings",
        }
    }

    /// Get the keyboard shortcut number shown next to the nav item
    pub fn shortcut(&self) -> Option<char> {
        match self {
            View::Overview => Some('1'),
            View::Destinations => Some('2'),
            View::Salaries => Some('3'),
            View::SearchTrends => Some('4'),
            View::Benchmarking => Some('5'),
            View::Rankings => Some('6'),
            View::Engagement => Some('7'),
            View::Settings => Some('0'),
            View::Landing => None,
        }
    }

    /// Get all views for iteration
    #[allow(dead_code)]
    pub fn all() -> &'static [View] {
        &[
            View::Landing,
            View::Overview,
            View::Destinations,
            View::Salaries,
            View::SearchTrends,
            View::Benchmarking,
            View::Rankings,
            View::Engagement,
            View::Settings,
        ]
    }
}

/// Navigation section grouping related views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Overview,
    CareerOutcomes,
    MarketSignals,
    Students,
    Settings,
}

impl NavSection {
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Overview => "OVERVIEW",
            NavSection::CareerOutcomes => "CAREER OUTCOMES",
            NavSection::MarketSignals => "MARKET SIGNALS",
            NavSection::Students => "STUDENTS",
            NavSection::Settings => "SETTINGS",
        }
    }

    pub fn views(&self) -> &'static [View] {
        match self {
            NavSection::Overview => &[View::Overview],
            NavSection::CareerOutcomes => &[View::Destinations, View::Salaries],
            NavSection::MarketSignals => &[View::SearchTrends, View::Benchmarking, View::Rankings],
            NavSection::Students => &[View::Engagement],
            NavSection::Settings => &[View::Settings],
        }
    }

    /// All sections in display order
    pub fn all() -> &'static [NavSection] {
        &[
            NavSection::Overview,
            NavSection::CareerOutcomes,
            NavSection::MarketSignals,
            NavSection::Students,
            NavSection::Settings,
        ]
    }
}

// =============================================================================
// View History
// =============================================================================

/// Maintains history of visited views for back/forward navigation
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    history: VecDeque<(View, String)>, // (view, university slug)
    current_index: usize,
    max_size: usize,
}

impl ViewHistory {
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
            current_index: 0,
            max_size: 50,
        }
    }

    pub fn push(&mut self, view: View, university: String) {
        // Remove any forward history
        while self.history.len() > self.current_index + 1 {
            self.history.pop_back();
        }

        // Add new entry
        self.history.push_back((view, university));

        // Trim to max size
        while self.history.len() > self.max_size {
            self.history.pop_front();
        }

        self.current_index = self.history.len().saturating_sub(1);
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.history.len()
    }

    pub fn go_back(&mut self) -> Option<(View, String)> {
        if self.can_go_back() {
            self.current_index -= 1;
            self.history.get(self.current_index).cloned()
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<(View, String)> {
        if self.can_go_forward() {
            self.current_index += 1;
            self.history.get(self.current_index).cloned()
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&(View, String)> {
        self.history.get(self.current_index)
    }
}
