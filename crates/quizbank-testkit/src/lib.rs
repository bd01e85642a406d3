//! # Quizbank Testkit
//!
//! Testing utilities for Quizbank.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for questions and their fields
//! - **Fixtures**: A store wrapper that remembers what was inserted
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use quizbank_testkit::generators::{question_from_params, QuestionParams};
//!
//! proptest! {
//!     #[test]
//!     fn ids_are_unique(params: QuestionParams) {
//!         let a = question_from_params(&params);
//!         let b = question_from_params(&params);
//!         prop_assert_ne!(a.id(), b.id());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use quizbank_core::Category;
//! use quizbank_testkit::fixtures::StoreFixture;
//!
//! let mut fixture = StoreFixture::with_capacity(2);
//! assert_eq!(fixture.fill(&[Category::Networks, Category::Programming]), 2);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::StoreFixture;
pub use generators::{question_from_params, questions, QuestionParams};
