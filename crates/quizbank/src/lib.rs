//! # Quizbank
//!
//! The unified API for Quizbank: a bounded question bank with deterministic
//! ordering, safe to share between threads.
//!
//! ## Overview
//!
//! - **Questions**: validated on construction, identified by a random id
//! - **Store**: a fixed number of slots, first-fit inserts, sorted reads
//! - **Ordering**: a swappable rule (category or difficulty) driving a
//!   stable insertion sort
//! - **Bank**: one store behind one lock, configured by [`BankConfig`]
//!
//! ## Usage
//!
//! ```rust
//! use quizbank::{BankConfig, Category, QuestionBank, QuestionBody};
//!
//! let bank = QuestionBank::open(BankConfig::default()).unwrap();
//!
//! let id = bank
//!     .submit(QuestionBody::new("What is a trie?", "A prefix tree").category("DataStructures"))
//!     .unwrap()
//!     .expect("bank has room");
//!
//! let found = bank.by_category(Category::DataStructures).unwrap().unwrap();
//! assert_eq!(found[0].id(), id);
//! ```
//!
//! ## Re-exports
//!
//! - `quizbank::core` - Question, QuestionId, Category, Difficulty
//! - `quizbank::store` - RecordStore, sort strategies, ordering rules

pub mod bank;
pub mod body;
pub mod error;
pub mod logging;

// Re-export component crates
pub use quizbank_core as core;
pub use quizbank_store as store;

// Re-export main types for convenience
pub use bank::{BankConfig, OrderingKind, QuestionBank};
pub use body::QuestionBody;
pub use error::{BankError, Result};
pub use logging::init_tracing;

// Re-export commonly used types
pub use quizbank_core::{Category, Difficulty, Question, QuestionId};
pub use quizbank_store::{InsertResult, QuestionStore, RecordStore};
