//! CareerLab GUI - GPUI-based desktop client for university career analytics
//!
//! This application provides a graphical interface for the CareerLab
//! analytics platform: graduate destinations, salary trends, employer
//! search trends, benchmarking, rankings, and student engagement.

mod api;
mod app;
mod benchmarking;
mod components;
mod dashboard;
mod demo;
mod destinations;
mod engagement;
mod landing;
mod navigation;
mod rankings;
mod salaries;
mod search_trends;
mod settings;
mod theme;

#[cfg(test)]
mod tests;

use app::CareerLabApp;
use gpui::*;

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        // Set up window options
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1400.0),
                    height: px(900.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("CareerLab - University Career Analytics".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| CareerLabApp::new(cx))
        })
        .unwrap();
    });
}
