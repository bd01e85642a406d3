//! # Quizbank Store
//!
//! A fixed-capacity, slot-based question store with pluggable ordering.
//!
//! ## Overview
//!
//! [`RecordStore`] owns a fixed array of optional slots. Questions go into the
//! first free slot. Before any order-sensitive read the store asks its
//! [`SortStrategy`] to reorder the slots in place, so lookups and listings
//! always observe the same canonical order.
//!
//! ## Key Types
//!
//! - [`QuestionStore`] - The trait the facade is generic over
//! - [`RecordStore`] - The slot-array implementation
//! - [`SortStrategy`] / [`InsertionSort`] - Stable in-place reordering
//! - [`OrderingRule`] / [`ByCategory`] / [`ByDifficulty`] - Comparison rules
//! - [`InsertResult`] - Outcome of an insert
//!
//! ## Usage
//!
//! ```rust
//! use quizbank_core::{Category, Question};
//! use quizbank_store::{QuestionStore, RecordStore};
//!
//! let mut store = RecordStore::with_capacity(2).unwrap();
//! let q = Question::new("What is a B-tree?", "A balanced search tree")
//!     .unwrap()
//!     .with_category(Category::DataStructures);
//! let id = q.id();
//!
//! assert!(store.insert(q).is_inserted());
//! assert!(store.find_by_id(&id).unwrap().is_some());
//! assert!(store.find_by_category(Category::Networks).unwrap().is_none());
//! ```
//!
//! ## Design Notes
//!
//! - **First-fit inserts**: inserting never sorts
//! - **Sorted reads**: find and delete reorder first; export does not
//! - **Tombstone-free deletes**: a deleted slot is empty immediately
//! - **Redundant sorts skipped**: a store that has not changed since its last
//!   successful sort does not sort again

pub mod error;
pub mod ordering;
pub mod record;
pub mod slots;
pub mod sort;
pub mod traits;

pub use error::{Result, StoreError};
pub use ordering::{ByCategory, ByDifficulty, OrderingRule};
pub use record::{RecordStore, DEFAULT_CAPACITY};
pub use slots::{compact, occupied};
pub use sort::{DynSort, InsertionSort, SortStrategy};
pub use traits::{InsertResult, QuestionStore};
