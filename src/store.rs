use std::mem;

use tracing::debug;

use crate::domain::{
    DEFAULT_LISTING_TITLE, DEFAULT_MINUTES, DEFAULT_TASK_TITLE, Draft, Listing, PaletteColor,
    Task, minutes_to_seconds, parse_minutes,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task index out of range: {0}")]
    TaskNotFound(usize),
    #[error("listing index out of range: {0}")]
    ListingNotFound(usize),
}

/// Owns the tasks, the listings and the editor draft.
///
/// Entity `index` doubles as its position in the backing vector, so deletes
/// renumber every later entity to keep indices dense.
#[derive(Debug, Clone)]
pub struct Store {
    tasks: Vec<Task>,
    listings: Vec<Listing>,
    draft: Draft,
    default_minutes: u64,
    default_color: PaletteColor,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES, PaletteColor::default())
    }
}

impl Store {
    pub fn new(default_minutes: u64, default_color: PaletteColor) -> Self {
        Self {
            tasks: Vec::new(),
            listings: Vec::new(),
            draft: Draft::new(default_color),
            default_minutes,
            default_color,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn listing(&self, index: usize) -> Option<&Listing> {
        self.listings.get(index)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn reset_draft(&mut self) {
        self.draft = Draft::new(self.default_color);
    }

    pub fn seed_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Hands out the live draft and leaves a cleared one in its place.
    pub fn take_draft(&mut self) -> Draft {
        mem::replace(&mut self.draft, Draft::new(self.default_color))
    }

    fn draft_seconds(&self, draft: &Draft) -> u64 {
        minutes_to_seconds(parse_minutes(&draft.duration_text, self.default_minutes))
    }

    pub fn create_task(&mut self, draft: &Draft) -> usize {
        let index = self.tasks.len();
        let duration = self.draft_seconds(draft);
        self.tasks.push(Task {
            index,
            title: draft.title_or(DEFAULT_TASK_TITLE),
            color: draft.color,
            duration,
            progress: 0,
            active: false,
        });
        debug!(index, duration, "created task");
        index
    }

    pub fn update_task(&mut self, index: usize, draft: &Draft) -> Result<(), StoreError> {
        let duration = self.draft_seconds(draft);
        let task = self.task_mut(index)?;
        task.title = draft.title.clone();
        task.color = draft.color;
        task.duration = duration;
        if task.progress > duration {
            task.progress = duration;
        }
        debug!(index, duration, "updated task");
        Ok(())
    }

    pub fn delete_task(&mut self, index: usize) -> Result<Task, StoreError> {
        if index >= self.tasks.len() {
            return Err(StoreError::TaskNotFound(index));
        }

        let removed = self.tasks.remove(index);
        for task in &mut self.tasks[index..] {
            task.index -= 1;
        }
        debug!(index, remaining = self.tasks.len(), "deleted task");
        Ok(removed)
    }

    pub fn reset_task(&mut self, index: usize) -> Result<(), StoreError> {
        let task = self.task_mut(index)?;
        task.progress = 0;
        task.active = false;
        Ok(())
    }

    /// Flips `active`; a finished task stays as it is. Returns the resulting state.
    pub fn toggle_task_active(&mut self, index: usize) -> Result<bool, StoreError> {
        let task = self.task_mut(index)?;
        if !task.is_complete() {
            task.active = !task.active;
        }
        Ok(task.active)
    }

    pub fn reset_all_tasks(&mut self) {
        for task in &mut self.tasks {
            task.progress = 0;
            task.active = false;
        }
    }

    /// Advances every running, unfinished task by one second. Returns how many moved.
    pub fn tick(&mut self) -> usize {
        let mut advanced = 0;
        for task in &mut self.tasks {
            if task.active && task.progress < task.duration {
                task.progress += 1;
                advanced += 1;
            }
        }
        advanced
    }

    pub fn create_listing(&mut self, draft: &Draft) -> usize {
        let index = self.listings.len();
        self.listings.push(Listing {
            index,
            title: draft.title_or(DEFAULT_LISTING_TITLE),
            color: draft.color,
            complete: false,
        });
        debug!(index, "created listing");
        index
    }

    pub fn update_listing(&mut self, index: usize, draft: &Draft) -> Result<(), StoreError> {
        let listing = self.listing_mut(index)?;
        listing.title = draft.title.clone();
        listing.color = draft.color;
        debug!(index, "updated listing");
        Ok(())
    }

    pub fn delete_listing(&mut self, index: usize) -> Result<Listing, StoreError> {
        if index >= self.listings.len() {
            return Err(StoreError::ListingNotFound(index));
        }

        let removed = self.listings.remove(index);
        for listing in &mut self.listings[index..] {
            listing.index -= 1;
        }
        debug!(index, remaining = self.listings.len(), "deleted listing");
        Ok(removed)
    }

    pub fn toggle_listing_complete(&mut self, index: usize) -> Result<bool, StoreError> {
        let listing = self.listing_mut(index)?;
        listing.complete = !listing.complete;
        Ok(listing.complete)
    }

    pub fn reset_all_listings(&mut self) {
        for listing in &mut self.listings {
            listing.complete = false;
        }
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task, StoreError> {
        self.tasks
            .get_mut(index)
            .ok_or(StoreError::TaskNotFound(index))
    }

    fn listing_mut(&mut self, index: usize) -> Result<&mut Listing, StoreError> {
        self.listings
            .get_mut(index)
            .ok_or(StoreError::ListingNotFound(index))
    }
}
