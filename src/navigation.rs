use tracing::{debug, error, warn};

use crate::domain::{DEFAULT_LISTING_TITLE, DEFAULT_TASK_TITLE, Draft};
use crate::store::{Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tasks,
    Listings,
    About,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMode {
    NewTask,
    ConfigureTask,
    NewListing,
    ConfigureListing,
    ConfigureApp,
}

impl SettingsMode {
    pub fn parent(self) -> Screen {
        match self {
            SettingsMode::NewTask | SettingsMode::ConfigureTask | SettingsMode::ConfigureApp => {
                Screen::Tasks
            }
            SettingsMode::NewListing | SettingsMode::ConfigureListing => Screen::Listings,
        }
    }

    pub fn options(self) -> &'static [EditorOption] {
        match self {
            SettingsMode::NewTask => &[
                EditorOption::Title,
                EditorOption::Duration,
                EditorOption::Color,
            ],
            SettingsMode::ConfigureTask => &[
                EditorOption::Title,
                EditorOption::Duration,
                EditorOption::Color,
                EditorOption::DeleteTask,
                EditorOption::ResetTask,
            ],
            SettingsMode::NewListing => &[EditorOption::Title, EditorOption::Color],
            SettingsMode::ConfigureListing => &[
                EditorOption::Title,
                EditorOption::Color,
                EditorOption::DeleteListing,
            ],
            SettingsMode::ConfigureApp => &[EditorOption::Title],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsMode::NewTask => "NEW TASK",
            SettingsMode::ConfigureTask => "CHANGE TASK",
            SettingsMode::NewListing => "NEW LISTING",
            SettingsMode::ConfigureListing => "CHANGE LISTING",
            SettingsMode::ConfigureApp => "SETTINGS",
        }
    }

    pub fn title_placeholder(self) -> &'static str {
        match self {
            SettingsMode::NewTask | SettingsMode::ConfigureTask => DEFAULT_TASK_TITLE,
            _ => DEFAULT_LISTING_TITLE,
        }
    }
}

/// One slot in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarButton {
    List,
    Tasks,
    Plus,
    Reset,
    None,
}

impl BarButton {
    pub fn label(self) -> &'static str {
        match self {
            BarButton::List => "List",
            BarButton::Tasks => "Tasks",
            BarButton::Plus => "+",
            BarButton::Reset => "Reset",
            BarButton::None => "",
        }
    }
}

/// A field or action row in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOption {
    Title,
    Duration,
    Color,
    DeleteTask,
    DeleteListing,
    ResetTask,
}

impl EditorOption {
    pub fn is_action(self) -> bool {
        matches!(
            self,
            EditorOption::DeleteTask | EditorOption::DeleteListing | EditorOption::ResetTask
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            EditorOption::Title => "Title",
            EditorOption::Duration => "Duration",
            EditorOption::Color => "Color",
            EditorOption::DeleteTask => "Delete Task",
            EditorOption::DeleteListing => "Delete Listing",
            EditorOption::ResetTask => "Reset Task",
        }
    }
}

/// Tracks which screen is showing and routes button presses into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
    mode: SettingsMode,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: Screen::Tasks,
            mode: SettingsMode::NewTask,
        }
    }
}

impl Navigator {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The editor mode, only while the settings screen is showing.
    pub fn mode(&self) -> Option<SettingsMode> {
        if self.screen == Screen::Settings {
            Some(self.mode)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self.screen {
            Screen::Tasks => "TIME TASKS",
            Screen::Listings => "TO-DO LIST",
            Screen::About => "ABOUT",
            Screen::Settings => self.mode.title(),
        }
    }

    pub fn buttons(&self) -> [BarButton; 3] {
        match self.screen {
            Screen::Tasks => [BarButton::List, BarButton::Plus, BarButton::Reset],
            Screen::Listings => [BarButton::Tasks, BarButton::Plus, BarButton::Reset],
            Screen::Settings => [BarButton::None, BarButton::Plus, BarButton::None],
            Screen::About => [BarButton::Tasks, BarButton::None, BarButton::List],
        }
    }

    pub fn options(&self) -> &'static [EditorOption] {
        self.mode().map(SettingsMode::options).unwrap_or(&[])
    }

    /// Dispatches a bottom-bar press. Buttons absent from the current bar are ignored.
    pub fn press(&mut self, button: BarButton, store: &mut Store) -> Result<(), StoreError> {
        if button == BarButton::None || !self.buttons().contains(&button) {
            debug!(?button, screen = ?self.screen, "ignored button");
            return Ok(());
        }

        match (button, self.screen) {
            (BarButton::List, _) => self.switch_to(Screen::Listings),
            (BarButton::Tasks, _) => self.switch_to(Screen::Tasks),
            (BarButton::Plus, Screen::Tasks) => self.open_new_task(store),
            (BarButton::Plus, Screen::Listings) => self.open_new_listing(store),
            (BarButton::Plus, Screen::Settings) => return self.commit(store),
            (BarButton::Reset, Screen::Tasks) => store.reset_all_tasks(),
            (BarButton::Reset, Screen::Listings) => store.reset_all_listings(),
            (button, screen) => warn!(?button, ?screen, "button has no handler"),
        }
        Ok(())
    }

    /// Plain switch between the browsing screens; the draft is left alone.
    pub fn switch_to(&mut self, screen: Screen) {
        if self.screen == Screen::Settings || screen == Screen::Settings {
            warn!(from = ?self.screen, to = ?screen, "screen switch must go through the editor");
            return;
        }
        debug!(from = ?self.screen, to = ?screen, "switch screen");
        self.screen = screen;
    }

    pub fn open_new_task(&mut self, store: &mut Store) {
        self.open_editor(SettingsMode::NewTask, store, None);
    }

    pub fn open_new_listing(&mut self, store: &mut Store) {
        self.open_editor(SettingsMode::NewListing, store, None);
    }

    pub fn open_app_settings(&mut self, store: &mut Store) {
        self.open_editor(SettingsMode::ConfigureApp, store, None);
    }

    pub fn open_configure_task(
        &mut self,
        store: &mut Store,
        index: usize,
    ) -> Result<(), StoreError> {
        let draft = store
            .task(index)
            .map(Draft::from_task)
            .ok_or(StoreError::TaskNotFound(index))
            .inspect_err(|err| error!(%err, "cannot configure task"))?;
        self.open_editor(SettingsMode::ConfigureTask, store, Some(draft));
        Ok(())
    }

    pub fn open_configure_listing(
        &mut self,
        store: &mut Store,
        index: usize,
    ) -> Result<(), StoreError> {
        let draft = store
            .listing(index)
            .map(Draft::from_listing)
            .ok_or(StoreError::ListingNotFound(index))
            .inspect_err(|err| error!(%err, "cannot configure listing"))?;
        self.open_editor(SettingsMode::ConfigureListing, store, Some(draft));
        Ok(())
    }

    fn open_editor(&mut self, mode: SettingsMode, store: &mut Store, seed: Option<Draft>) {
        match seed {
            Some(draft) => store.seed_draft(draft),
            None => store.reset_draft(),
        }
        debug!(?mode, index = store.draft().index, "open editor");
        self.mode = mode;
        self.screen = Screen::Settings;
    }

    /// Writes the draft back through the store operation matching the mode.
    pub fn commit(&mut self, store: &mut Store) -> Result<(), StoreError> {
        if self.screen != Screen::Settings {
            warn!(screen = ?self.screen, "commit outside the editor");
            return Ok(());
        }

        let draft = store.take_draft();
        let result = match self.mode {
            SettingsMode::NewTask => {
                store.create_task(&draft);
                Ok(())
            }
            SettingsMode::ConfigureTask => store.update_task(draft.index, &draft),
            SettingsMode::NewListing => {
                store.create_listing(&draft);
                Ok(())
            }
            SettingsMode::ConfigureListing => store.update_listing(draft.index, &draft),
            SettingsMode::ConfigureApp => {
                warn!("nothing to commit in app settings");
                return Ok(());
            }
        };

        if let Err(err) = result {
            error!(%err, "commit failed");
            store.seed_draft(draft);
            return Err(err);
        }

        debug!(mode = ?self.mode, index = draft.index, "committed draft");
        self.screen = self.mode.parent();
        Ok(())
    }

    /// Runs one of the action rows of a configure editor.
    pub fn run_action(
        &mut self,
        option: EditorOption,
        store: &mut Store,
    ) -> Result<(), StoreError> {
        if !self.options().contains(&option) || !option.is_action() {
            warn!(?option, mode = ?self.mode(), "action not available");
            return Ok(());
        }

        let index = store.draft().index;
        match option {
            EditorOption::DeleteTask => {
                store
                    .delete_task(index)
                    .inspect_err(|err| error!(%err, "delete failed"))?;
            }
            EditorOption::DeleteListing => {
                store
                    .delete_listing(index)
                    .inspect_err(|err| error!(%err, "delete failed"))?;
            }
            EditorOption::ResetTask => store
                .reset_task(index)
                .inspect_err(|err| error!(%err, "reset failed"))?,
            EditorOption::Title | EditorOption::Duration | EditorOption::Color => {}
        }

        debug!(?option, index, "ran editor action");
        self.close_editor(store);
        Ok(())
    }

    /// Leaves the editor without touching the collections.
    pub fn cancel(&mut self, store: &mut Store) {
        if self.screen != Screen::Settings {
            return;
        }
        debug!(mode = ?self.mode, "cancel editor");
        self.close_editor(store);
    }

    fn close_editor(&mut self, store: &mut Store) {
        store.reset_draft();
        self.screen = self.mode.parent();
    }
}
