//! The generic collection editor.
//!
//! A two-state machine per collection: browsing (no record selected) and
//! editing (one record held in a scratch buffer). The scratch buffer is
//! always a copy; the stored collection does not change until `commit`.
//! Every mutating operation persists the whole collection synchronously
//! before returning, so callers always observe the saved state.

use crate::error::{EditorError, EditorResult};
use crate::notice::Notice;
use sitecms_store::{Loaded, StoreContext};
use sitecms_types::{IdAllocator, Record};

/// Admin-side CRUD and reordering over one slot-backed collection.
pub struct CollectionEditor<T: Record> {
    ctx: StoreContext,
    slot: &'static str,
    items: Vec<T>,
    draft: Option<T>,
    allocator: IdAllocator,
}

impl<T: Record> CollectionEditor<T> {
    /// Opens the editor over a slot.
    ///
    /// If the slot has never been written the seed collection is adopted
    /// and persisted immediately, so subsequent loads from any context hit
    /// the store instead of regenerating defaults. A malformed slot is a
    /// hard error; the payload is left untouched.
    pub fn open(ctx: StoreContext, slot: &'static str, seed: Vec<T>) -> EditorResult<Self> {
        let items = match ctx.load::<Vec<T>>(slot)? {
            Loaded::Value(items) => items,
            Loaded::Absent => {
                ctx.save(slot, &seed)?;
                tracing::debug!(slot, records = seed.len(), "seeded empty slot");
                seed
            }
        };
        let allocator = IdAllocator::seeded(items.iter().map(Record::id));
        Ok(Self {
            ctx,
            slot,
            items,
            draft: None,
            allocator,
        })
    }

    /// The collection in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// True while a record is being edited.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The scratch buffer, if an edit is in progress.
    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Mutable access to the scratch buffer. Changes here do not touch the
    /// collection until [`commit`](Self::commit).
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    /// Begins creating a new record: the scratch buffer becomes an empty
    /// record with a freshly allocated id.
    pub fn start_create(&mut self) -> EditorResult<&mut T> {
        if self.draft.is_some() {
            return Err(EditorError::EditInProgress);
        }
        let id = self.allocator.next();
        Ok(self.draft.insert(T::blank(id)))
    }

    /// Begins editing an existing record: the scratch buffer becomes a
    /// copy of it.
    pub fn start_edit(&mut self, id: u64) -> EditorResult<&mut T> {
        if self.draft.is_some() {
            return Err(EditorError::EditInProgress);
        }
        let record = self
            .items
            .iter()
            .find(|r| r.id() == id)
            .ok_or(EditorError::NotFound(id))?
            .clone();
        Ok(self.draft.insert(record))
    }

    /// Validates and commits the scratch buffer.
    ///
    /// If its id matches an existing record that record is replaced in
    /// place (order preserved); otherwise the draft is appended. The whole
    /// collection is persisted before returning. On a validation failure
    /// the editor stays in the editing state and nothing is written.
    pub fn commit(&mut self) -> EditorResult<Notice> {
        let draft = self.draft.as_ref().ok_or(EditorError::NoDraft)?;
        draft.validate()?;
        let draft = draft.clone();

        let mut updated = self.items.clone();
        let message = match updated.iter_mut().find(|r| r.id() == draft.id()) {
            Some(existing) => {
                *existing = draft;
                format!("The {} has been updated successfully", T::kind())
            }
            None => {
                updated.push(draft);
                format!("The new {} has been added successfully", T::kind())
            }
        };
        self.ctx.save(self.slot, &updated)?;
        self.items = updated;
        self.draft = None;
        Ok(Notice::success(message))
    }

    /// Discards the scratch buffer without persisting anything.
    pub fn cancel(&mut self) -> EditorResult<()> {
        if self.draft.take().is_none() {
            return Err(EditorError::NoDraft);
        }
        Ok(())
    }

    /// Removes a record and persists the collection. Browsing only.
    pub fn delete(&mut self, id: u64) -> EditorResult<Notice> {
        if self.draft.is_some() {
            return Err(EditorError::EditInProgress);
        }
        if !self.items.iter().any(|r| r.id() == id) {
            return Err(EditorError::NotFound(id));
        }
        let mut updated = self.items.clone();
        updated.retain(|r| r.id() != id);
        self.ctx.save(self.slot, &updated)?;
        self.items = updated;
        Ok(Notice::success(format!(
            "The {} has been removed successfully",
            T::kind()
        )))
    }

    /// Swaps the record at `index` with the one above it and persists.
    /// At index 0 this is a no-op, not an error, and returns `Ok(None)`.
    pub fn move_up(&mut self, index: usize) -> EditorResult<Option<Notice>> {
        if self.draft.is_some() {
            return Err(EditorError::EditInProgress);
        }
        if index >= self.items.len() {
            return Err(EditorError::OutOfRange(index));
        }
        if index == 0 {
            return Ok(None);
        }
        let mut updated = self.items.clone();
        updated.swap(index - 1, index);
        self.ctx.save(self.slot, &updated)?;
        self.items = updated;
        Ok(Some(Notice::success(format!(
            "The {} order has been updated",
            T::kind()
        ))))
    }

    /// Swaps the record at `index` with the one below it and persists.
    /// At the last index this is a no-op, not an error, and returns
    /// `Ok(None)`.
    pub fn move_down(&mut self, index: usize) -> EditorResult<Option<Notice>> {
        if self.draft.is_some() {
            return Err(EditorError::EditInProgress);
        }
        if index >= self.items.len() {
            return Err(EditorError::OutOfRange(index));
        }
        if index == self.items.len() - 1 {
            return Ok(None);
        }
        let mut updated = self.items.clone();
        updated.swap(index, index + 1);
        self.ctx.save(self.slot, &updated)?;
        self.items = updated;
        Ok(Some(Notice::success(format!(
            "The {} order has been updated",
            T::kind()
        ))))
    }
}
