//! Core library for stockscout
//!
//! This crate implements the **Functional Core** of the stockscout application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The stockscout project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`stockscout_core`** (this crate): Pure transformation functions with zero I/O
//! - **`stockscout`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate mirrors the three stages of the search pipeline:
//!
//! - [`query`]: Query Builder — search filter to API parameter list
//! - [`normalize`]: Result Normalizer — raw API records to stable domain records
//! - [`project`]: View Projection — filter, sort, and paginate normalized records
//! - [`pagination`]: Windowed page-number sequences for navigation rendering
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use stockscout_core::normalize::{normalize, RawImage};
//! use stockscout_core::project::{project, ViewState};
//!
//! // Create fixture data (no HTTP required)
//! let raw: Vec<RawImage> = serde_json::from_str(fixture_json)?;
//!
//! // Transform using pure functions
//! let images = normalize(raw);
//! let projection = project(&images, &ViewState::default());
//!
//! // Assert on results (no mocking needed)
//! assert!(projection.page_images.len() <= 10);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod normalize;
pub mod pagination;
pub mod project;
pub mod query;
