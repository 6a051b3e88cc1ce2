//! Test modules for the CareerLab GUI
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `location_distribution_test` - ranked list / bar chart projections
//!   - `api_test` - API client data types and payload tolerance
//!   - `app_test` - Application state, navigation, and history
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `integration_test` - demo data flowing through view projections
//!
//! - **Performance Tests**: Benchmarks and stress tests
//!   - `benchmark_test` - large-collection handling
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test location_distribution_test
//!
//! # Run with output
//! cargo test -- --nocapture
//! ```

#[cfg(test)]
pub mod location_distribution_test;

#[cfg(test)]
pub mod api_test;

#[cfg(test)]
pub mod app_test;

#[cfg(test)]
pub mod integration_test;

#[cfg(test)]
pub mod benchmark_test;
