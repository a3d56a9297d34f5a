//! Today's journal entry: mood, reflection and habit checklist.
//!
//! [`EntryDraft`] holds the form state while the user fills in the day, either
//! starting fresh or pre-filled from an entry already saved for today.
//! [`save_entry`] validates the draft and hands it to an [`EntryStore`],
//! creating a new entry or updating the existing one.

pub mod store;

pub use store::{EntryStore, MemoryStore};

use crate::constants::{
    DEFAULT_MOOD, HEADING_EDIT_ENTRY, HEADING_NEW_ENTRY, MESSAGE_ENTRY_SAVED,
    MESSAGE_ENTRY_UPDATED, MOOD_EMOJIS, MOOD_LABELS, MOOD_MAX, MOOD_MIN,
};
use crate::dates::LocalDate;
use crate::errors::EntryError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// How the day felt, from 1 (very sad) to 5 (very happy).
///
/// # Examples
///
/// ```
/// use daybook::entry::Mood;
///
/// let mood = Mood::new(4).unwrap();
/// assert_eq!(mood.emoji(), "😊");
/// assert_eq!(mood.to_string(), "4/5 - Happy");
/// assert!(Mood::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    /// Creates a mood, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::InvalidMood` for out-of-range values.
    pub fn new(value: u8) -> Result<Self, EntryError> {
        if (MOOD_MIN..=MOOD_MAX).contains(&value) {
            Ok(Mood(value))
        } else {
            Err(EntryError::InvalidMood(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - MOOD_MIN)
    }

    pub fn emoji(self) -> &'static str {
        MOOD_EMOJIS[self.index()]
    }

    pub fn label(self) -> &'static str {
        MOOD_LABELS[self.index()]
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood(DEFAULT_MOOD)
    }
}

impl TryFrom<u8> for Mood {
    type Error = EntryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mood::new(value)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} - {}", self.0, MOOD_MAX, self.label())
    }
}

/// Habits and whether each was done today, in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitChecklist {
    habits: Vec<(String, bool)>,
}

impl HabitChecklist {
    /// Creates a checklist with every habit unchecked. Repeated names are kept once.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checklist = HabitChecklist::default();
        for name in names {
            let name = name.into();
            if !checklist.contains(&name) {
                checklist.habits.push((name, false));
            }
        }
        checklist
    }

    /// Flips a habit. A habit not on the list is added as done.
    pub fn toggle(&mut self, name: &str) {
        match self.habits.iter_mut().find(|(habit, _)| habit == name) {
            Some((_, done)) => *done = !*done,
            None => self.habits.push((name.to_string(), true)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.habits.iter().any(|(habit, _)| habit == name)
    }

    pub fn is_done(&self, name: &str) -> bool {
        self.habits.iter().any(|(habit, done)| habit == name && *done)
    }

    /// Number of habits checked off.
    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|(_, done)| *done).count()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

impl Serialize for HabitChecklist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.habits.len()))?;
        for (habit, done) in &self.habits {
            map.serialize_entry(habit, done)?;
        }
        map.end()
    }
}

/// The user-editable part of an entry, as sent to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub mood: Mood,
    pub mood_emoji: String,
    /// Reflection text, trimmed.
    pub decision: String,
    pub habits: HabitChecklist,
}

/// A new entry for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub date: LocalDate,
    #[serde(flatten)]
    pub data: EntryData,
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: LocalDate,
    #[serde(flatten)]
    pub data: EntryData,
}

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(JournalEntry),
    Updated(JournalEntry),
}

impl SaveOutcome {
    pub fn entry(&self) -> &JournalEntry {
        match self {
            SaveOutcome::Created(entry) | SaveOutcome::Updated(entry) => entry,
        }
    }

    /// Confirmation shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Created(_) => MESSAGE_ENTRY_SAVED,
            SaveOutcome::Updated(_) => MESSAGE_ENTRY_UPDATED,
        }
    }
}

/// Form state for today's entry.
///
/// # Examples
///
/// ```
/// use daybook::entry::{EntryDraft, Mood};
///
/// let mut draft = EntryDraft::new(None, &["Exercise".to_string(), "Reading".to_string()]);
/// assert!(!draft.is_editing());
/// assert!(!draft.can_save());
///
/// draft.set_mood(Mood::new(5).unwrap());
/// draft.set_decision("Went for a long walk.");
/// draft.toggle_habit("Exercise");
///
/// assert!(draft.can_save());
/// assert_eq!(draft.completed_habits(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EntryDraft {
    existing: Option<JournalEntry>,
    mood: Mood,
    decision: String,
    habits: HabitChecklist,
}

impl EntryDraft {
    /// Starts a draft, pre-filled from `existing` when today already has an entry.
    ///
    /// A fresh draft gets the default mood and `default_habits`, all unchecked.
    pub fn new(existing: Option<JournalEntry>, default_habits: &[String]) -> Self {
        match existing {
            Some(entry) => EntryDraft {
                mood: entry.data.mood,
                decision: entry.data.decision.clone(),
                habits: entry.data.habits.clone(),
                existing: Some(entry),
            },
            None => EntryDraft {
                existing: None,
                mood: Mood::default(),
                decision: String::new(),
                habits: HabitChecklist::from_names(default_habits.iter().cloned()),
            },
        }
    }

    /// Starts a draft for `today`, editing the stored entry if there is one.
    pub fn for_today<S: EntryStore + ?Sized>(
        store: &S,
        today: &LocalDate,
        default_habits: &[String],
    ) -> Self {
        let existing = store.todays_entry(today);
        debug!(
            "Opening draft for {} ({})",
            today,
            if existing.is_some() { "editing" } else { "new" }
        );
        EntryDraft::new(existing, default_habits)
    }

    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            HEADING_EDIT_ENTRY
        } else {
            HEADING_NEW_ENTRY
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn decision(&self) -> &str {
        &self.decision
    }

    pub fn set_decision(&mut self, text: impl Into<String>) {
        self.decision = text.into();
    }

    pub fn habits(&self) -> &HabitChecklist {
        &self.habits
    }

    pub fn toggle_habit(&mut self, name: &str) {
        self.habits.toggle(name);
    }

    pub fn completed_habits(&self) -> usize {
        self.habits.completed_count()
    }

    /// A draft can be saved once the reflection has some non-whitespace text.
    pub fn can_save(&self) -> bool {
        !self.decision.trim().is_empty()
    }

    fn to_data(&self) -> EntryData {
        EntryData {
            mood: self.mood,
            mood_emoji: self.mood.emoji().to_string(),
            decision: self.decision.trim().to_string(),
            habits: self.habits.clone(),
        }
    }
}

/// Saves a draft: updates today's existing entry or creates one dated `today`.
///
/// # Errors
///
/// Returns `EntryError::MissingReflection` without touching the store when the
/// reflection is blank, and `EntryError::Store` when the store rejects the write.
pub fn save_entry<S: EntryStore + ?Sized>(
    store: &mut S,
    draft: &EntryDraft,
    today: &LocalDate,
) -> Result<SaveOutcome, EntryError> {
    if !draft.can_save() {
        return Err(EntryError::MissingReflection);
    }

    let data = draft.to_data();
    let outcome = match &draft.existing {
        Some(existing) => SaveOutcome::Updated(store.update(&existing.id, data)?),
        None => SaveOutcome::Created(store.create(NewEntry { date: *today, data })?),
    };

    info!(
        "{} entry {} for {}",
        if draft.is_editing() { "Updated" } else { "Created" },
        outcome.entry().id,
        outcome.entry().date
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HABITS;
    use crate::errors::StoreError;

    fn defaults() -> Vec<String> {
        DEFAULT_HABITS.iter().map(|h| h.to_string()).collect()
    }

    fn today() -> LocalDate {
        LocalDate::parse("2024-01-15").unwrap()
    }

    /// A store that refuses every write.
    struct FailingStore;

    impl EntryStore for FailingStore {
        fn create(&mut self, entry: NewEntry) -> Result<JournalEntry, StoreError> {
            Err(StoreError::DuplicateDate(entry.date.to_string()))
        }

        fn update(&mut self, id: &str, _data: EntryData) -> Result<JournalEntry, StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }

        fn todays_entry(&self, _today: &LocalDate) -> Option<JournalEntry> {
            None
        }
    }

    #[test]
    fn test_mood_range() {
        assert_eq!(Mood::new(0), Err(EntryError::InvalidMood(0)));
        assert_eq!(Mood::new(6), Err(EntryError::InvalidMood(6)));
        for value in 1..=5 {
            assert_eq!(Mood::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_mood_emojis_and_labels() {
        assert_eq!(Mood::new(1).unwrap().emoji(), "😞");
        assert_eq!(Mood::new(1).unwrap().label(), "Very Sad");
        assert_eq!(Mood::new(5).unwrap().emoji(), "😄");
        assert_eq!(Mood::new(5).unwrap().label(), "Very Happy");
        assert_eq!(Mood::default().to_string(), "3/5 - Neutral");
    }

    #[test]
    fn test_mood_deserialize_validates() {
        let mood: Mood = serde_json::from_str("2").unwrap();
        assert_eq!(mood.label(), "Sad");
        assert!(serde_json::from_str::<Mood>("9").is_err());
    }

    #[test]
    fn test_checklist_toggle_and_count() {
        let mut habits = HabitChecklist::from_names(["Exercise", "Reading", "Exercise"]);
        assert_eq!(habits.len(), 2);
        assert_eq!(habits.completed_count(), 0);

        habits.toggle("Reading");
        assert!(habits.is_done("Reading"));
        assert_eq!(habits.completed_count(), 1);

        habits.toggle("Reading");
        assert!(!habits.is_done("Reading"));

        habits.toggle("Journaling");
        assert!(habits.contains("Journaling"));
        assert!(habits.is_done("Journaling"));
        assert_eq!(habits.len(), 3);
    }

    #[test]
    fn test_checklist_serializes_in_order() {
        let mut habits = HabitChecklist::from_names(["Reading", "Exercise"]);
        habits.toggle("Exercise");
        let json = serde_json::to_string(&habits).unwrap();
        assert_eq!(json, r#"{"Reading":false,"Exercise":true}"#);
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = EntryDraft::new(None, &defaults());
        assert!(!draft.is_editing());
        assert_eq!(draft.heading(), "Today's Reflection");
        assert_eq!(draft.mood(), Mood::default());
        assert_eq!(draft.habits().len(), 8);
        assert_eq!(draft.completed_habits(), 0);
        assert!(!draft.can_save());
    }

    #[test]
    fn test_can_save_requires_non_blank_text() {
        let mut draft = EntryDraft::new(None, &defaults());
        draft.set_decision("   \n\t ");
        assert!(!draft.can_save());
        draft.set_decision("  Decided to rest.  ");
        assert!(draft.can_save());
    }

    #[test]
    fn test_save_blank_draft_is_rejected() {
        let mut store = MemoryStore::new();
        let draft = EntryDraft::new(None, &defaults());
        let result = save_entry(&mut store, &draft, &today());
        assert_eq!(result, Err(EntryError::MissingReflection));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_creates_entry_for_today() {
        let mut store = MemoryStore::new();
        let mut draft = EntryDraft::new(None, &defaults());
        draft.set_mood(Mood::new(4).unwrap());
        draft.set_decision("  Signed up for a class.  ");
        draft.toggle_habit("Learning");

        let outcome = save_entry(&mut store, &draft, &today()).unwrap();
        assert_eq!(outcome.message(), "Your entry has been saved.");

        let entry = outcome.entry();
        assert_eq!(entry.date, today());
        assert_eq!(entry.data.mood.value(), 4);
        assert_eq!(entry.data.mood_emoji, "😊");
        assert_eq!(entry.data.decision, "Signed up for a class.");
        assert!(entry.data.habits.is_done("Learning"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_updates_existing_entry() {
        let mut store = MemoryStore::new();
        let mut first = EntryDraft::new(None, &defaults());
        first.set_decision("Morning notes");
        let created = save_entry(&mut store, &first, &today()).unwrap();

        let mut draft = EntryDraft::for_today(&store, &today(), &defaults());
        assert!(draft.is_editing());
        assert_eq!(draft.heading(), "Edit Today's Entry");
        assert_eq!(draft.decision(), "Morning notes");

        draft.set_decision("Morning notes, evening walk");
        draft.set_mood(Mood::new(5).unwrap());
        let outcome = save_entry(&mut store, &draft, &today()).unwrap();

        assert_eq!(outcome.message(), "Your entry has been updated.");
        assert_eq!(outcome.entry().id, created.entry().id);
        assert_eq!(outcome.entry().data.mood_emoji, "😄");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_failure_is_reported() {
        let mut store = FailingStore;
        let mut draft = EntryDraft::new(None, &defaults());
        draft.set_decision("Something");
        let result = save_entry(&mut store, &draft, &today());
        assert_eq!(
            result,
            Err(EntryError::Store(StoreError::DuplicateDate(
                "2024-01-15".to_string()
            )))
        );
    }

    #[test]
    fn test_entry_json_shape() {
        let mut store = MemoryStore::new();
        let mut draft = EntryDraft::new(None, &["Reading".to_string()]);
        draft.set_decision("Read two chapters");
        draft.toggle_habit("Reading");
        let outcome = save_entry(&mut store, &draft, &today()).unwrap();

        let value = serde_json::to_value(outcome.entry()).unwrap();
        assert_eq!(value["date"], "2024-01-15");
        assert_eq!(value["mood"], 3);
        assert_eq!(value["moodEmoji"], "😐");
        assert_eq!(value["decision"], "Read two chapters");
        assert_eq!(value["habits"]["Reading"], true);
        assert!(value["id"].is_string());
    }
}
