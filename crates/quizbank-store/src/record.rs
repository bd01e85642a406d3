//! RecordStore: a fixed number of slots, each empty or holding one question.
//!
//! Insertion is first-fit and never sorts. Lookups, category filters and
//! deletes ask the sort strategy to reorder the slots first, so every read
//! sees the strategy's canonical order. Export shows whatever order the last
//! sort left behind.

use quizbank_core::{Category, Question, QuestionId};

use crate::error::{Result, StoreError};
use crate::ordering::ByCategory;
use crate::slots::{compact, occupied};
use crate::sort::{InsertionSort, SortStrategy};
use crate::traits::{InsertResult, QuestionStore};

/// Slot count used by [`RecordStore::default`].
pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-capacity question store.
///
/// The slot array is allocated once and never resized. Slot positions carry
/// no meaning for callers.
pub struct RecordStore<S = InsertionSort<ByCategory>> {
    slots: Box<[Option<Question>]>,
    strategy: S,
    /// Set after a successful sort, cleared by anything that may break order.
    sorted: bool,
}

impl RecordStore {
    /// Create a store that orders by category with insertion sort.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(capacity, InsertionSort::new(ByCategory))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            strategy: InsertionSort::new(ByCategory),
            sorted: true,
        }
    }
}

impl<S: SortStrategy> RecordStore<S> {
    /// Create a store with `capacity` slots ordered by `strategy`.
    pub fn new(capacity: usize, strategy: S) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: empty_slots(capacity),
            strategy,
            sorted: true,
        })
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Read-only view of the raw slots, empty ones included.
    pub fn slots(&self) -> &[Option<Question>] {
        &self.slots
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    fn position(&self, id: &QuestionId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|q| q.id() == *id))
    }

    /// Sort the slots unless nothing has changed since the last good sort.
    fn resort(&mut self) -> Result<()> {
        if self.sorted {
            return Ok(());
        }
        if let Err(e) = self.strategy.sort(&mut self.slots) {
            tracing::warn!("Sort failed, slots left unordered: {}", e);
            return Err(e.into());
        }
        self.sorted = true;
        tracing::debug!("Resorted {} slots", self.slots.len());
        Ok(())
    }
}

impl<S: SortStrategy + Send> QuestionStore for RecordStore<S> {
    fn insert(&mut self, question: Question) -> InsertResult {
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            tracing::warn!(
                "Store full ({} slots), rejected question {}",
                self.slots.len(),
                question.id()
            );
            return InsertResult::Full(question);
        };

        tracing::debug!("Inserted question {} at slot {}", question.id(), index);
        self.slots[index] = Some(question);
        self.sorted = false;
        InsertResult::Inserted
    }

    fn find_by_id(&mut self, id: &QuestionId) -> Result<Option<Question>> {
        self.resort()?;
        Ok(self
            .slots
            .iter()
            .flatten()
            .find(|q| q.id() == *id)
            .cloned())
    }

    fn find_by_category(&mut self, category: Category) -> Result<Option<Vec<Question>>> {
        self.resort()?;
        let matches: Vec<Question> = self
            .slots
            .iter()
            .flatten()
            .filter(|q| q.category() == Some(category))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Ok(None);
        }
        Ok(Some(matches))
    }

    fn export_all(&self) -> Option<Vec<Question>> {
        let all = compact(&self.slots);
        if all.is_empty() {
            return None;
        }
        Some(all)
    }

    fn delete(&mut self, id: &QuestionId) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        self.slots[index] = None;
        self.sorted = false;
        tracing::debug!("Deleted question {} from slot {}", id, index);

        self.resort()?;
        Ok(true)
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        occupied(&self.slots)
    }
}

fn empty_slots(capacity: usize) -> Box<[Option<Question>]> {
    (0..capacity).map(|_| None).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::ByDifficulty;
    use quizbank_core::{Difficulty, OrderingError};

    fn question(category: Category) -> Question {
        Question::new("a valid question", "a valid answer")
            .unwrap()
            .with_category(category)
    }

    fn default_store() -> RecordStore {
        RecordStore::default()
    }

    fn ids(questions: &[Question]) -> Vec<QuestionId> {
        questions.iter().map(Question::id).collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            RecordStore::with_capacity(0),
            Err(StoreError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_default_capacity() {
        let store = default_store();
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert!(store.is_empty());
        assert!(!store.is_full());
    }

    #[test]
    fn test_insert_and_find() {
        let mut store = default_store();
        let q = question(Category::Programming);
        let id = q.id();

        assert_eq!(store.insert(q.clone()), InsertResult::Inserted);
        assert_eq!(store.find_by_id(&id).unwrap(), Some(q));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_hands_back_question_when_full() {
        let mut store = RecordStore::with_capacity(1).unwrap();
        assert!(store.insert(question(Category::Programming)).is_inserted());
        assert!(store.is_full());

        let overflow = question(Category::Networks);
        assert_eq!(
            store.insert(overflow.clone()),
            InsertResult::Full(overflow)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_is_first_fit_without_sorting() {
        let mut store = RecordStore::with_capacity(3).unwrap();
        let networks = question(Category::Networks);
        let programming = question(Category::Programming);

        store.insert(networks.clone());
        store.insert(programming.clone());

        assert_eq!(store.slots()[0].as_ref(), Some(&networks));
        assert_eq!(store.slots()[1].as_ref(), Some(&programming));
        assert_eq!(store.slots()[2], None);
    }

    #[test]
    fn test_insert_reuses_freed_slot() {
        let mut store = RecordStore::with_capacity(2).unwrap();
        let a = question(Category::Programming);
        let b = question(Category::Networks);
        store.insert(a.clone());
        store.insert(b);

        assert!(store.delete(&a.id()).unwrap());
        assert!(store.insert(question(Category::DiscreteMath)).is_inserted());
        assert!(store.is_full());
    }

    #[test]
    fn test_find_missing_id() {
        let mut store = default_store();
        store.insert(question(Category::Programming));

        assert_eq!(store.find_by_id(&QuestionId::generate()).unwrap(), None);
    }

    #[test]
    fn test_find_by_category_in_sorted_order() {
        let mut store = RecordStore::with_capacity(2).unwrap();
        let q1 = question(Category::DataStructures);
        let q2 = question(Category::Programming);
        store.insert(q1.clone());
        store.insert(q2.clone());

        assert_eq!(
            store.find_by_category(Category::Programming).unwrap(),
            Some(vec![q2.clone()])
        );
        assert_eq!(store.find_by_category(Category::Networks).unwrap(), None);

        assert!(store.delete(&q1.id()).unwrap());
        assert_eq!(store.export_all(), Some(vec![q2]));
    }

    #[test]
    fn test_find_by_category_keeps_insertion_order_for_ties() {
        let mut store = default_store();
        let q1 = question(Category::Programming);
        let q2 = question(Category::Programming);
        store.insert(question(Category::Networks));
        store.insert(q1.clone());
        store.insert(q2.clone());

        let found = store.find_by_category(Category::Programming).unwrap().unwrap();
        assert_eq!(ids(&found), vec![q1.id(), q2.id()]);
    }

    #[test]
    fn test_export_reflects_last_sort() {
        let mut store = default_store();
        let networks = question(Category::Networks);
        let programming = question(Category::Programming);
        store.insert(networks.clone());
        store.insert(programming.clone());

        // No read has sorted yet: insertion order.
        assert_eq!(
            ids(&store.export_all().unwrap()),
            vec![networks.id(), programming.id()]
        );

        store.find_by_id(&networks.id()).unwrap();
        assert_eq!(
            ids(&store.export_all().unwrap()),
            vec![programming.id(), networks.id()]
        );
    }

    #[test]
    fn test_export_empty_store() {
        let store = default_store();
        assert_eq!(store.export_all(), None);
    }

    #[test]
    fn test_delete_absent_changes_nothing() {
        let mut store = default_store();
        let q = question(Category::Programming);
        store.insert(q.clone());
        let before = store.slots().to_vec();

        assert!(!store.delete(&QuestionId::generate()).unwrap());
        assert_eq!(store.slots(), &before[..]);
    }

    #[test]
    fn test_delete_then_find_misses() {
        let mut store = default_store();
        let q = question(Category::SoftwareArchitecture);
        let id = q.id();
        store.insert(q);

        assert!(store.delete(&id).unwrap());
        assert_eq!(store.find_by_id(&id).unwrap(), None);
        assert!(!store.delete(&id).unwrap());
    }

    #[test]
    fn test_delete_compacts_gap_behind_records() {
        let mut store = RecordStore::with_capacity(3).unwrap();
        let a = question(Category::Programming);
        let b = question(Category::DataStructures);
        let c = question(Category::Networks);
        store.insert(a.clone());
        store.insert(b.clone());
        store.insert(c.clone());

        store.delete(&b.id()).unwrap();

        assert_eq!(store.slots()[0].as_ref(), Some(&a));
        assert_eq!(store.slots()[1].as_ref(), Some(&c));
        assert_eq!(store.slots()[2], None);
    }

    #[test]
    fn test_unset_category_reported_on_read() {
        let mut store = default_store();
        let unset = Question::new("no category", "answer").unwrap();
        let unset_id = unset.id();
        store.insert(question(Category::Programming));
        store.insert(unset);

        assert_eq!(
            store.find_by_id(&unset_id),
            Err(StoreError::Ordering(OrderingError::UnsetCategory {
                id: unset_id
            }))
        );
        // Reported again, not silently cached as sorted.
        assert!(store.find_by_category(Category::Programming).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_reports_sort_failure_but_frees_slot() {
        let mut store = default_store();
        let keep = question(Category::Programming);
        let unset = Question::new("no category", "answer").unwrap();
        let gone = question(Category::Networks);
        store.insert(keep);
        store.insert(unset);
        store.insert(gone.clone());

        assert!(store.delete(&gone.id()).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lone_uncategorised_question_is_readable() {
        let mut store = default_store();
        let q = Question::new("no category", "answer").unwrap();
        store.insert(q.clone());

        assert_eq!(store.find_by_id(&q.id()).unwrap(), Some(q));
    }

    #[test]
    fn test_custom_strategy() {
        let mut store = RecordStore::new(3, InsertionSort::new(ByDifficulty)).unwrap();
        let hard = question(Category::Programming).with_difficulty(Difficulty::Hard);
        let easy = question(Category::Networks).with_difficulty(Difficulty::Easy);
        store.insert(hard.clone());
        store.insert(easy.clone());

        store.find_by_id(&hard.id()).unwrap();
        assert_eq!(ids(&store.export_all().unwrap()), vec![easy.id(), hard.id()]);
    }
}
