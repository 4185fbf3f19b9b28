use tracing::{debug, warn};

use crate::config::Config;
use crate::preferences::{Preferences, PreferencesPatch};
use crate::profile::{parse_subject_id, LoadOutcome, OutcomeSender, ProfileError};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::preferences::{PreferencesIntent, PreferencesReducer, PreferencesState};
use crate::ui::profile::{ProfileState, UserData};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Longest id buffer kept; a `u32` id has at most 10 digits.
pub const MAX_ID_INPUT_LEN: usize = 16;

/// Presentation state of the profile screen.
///
/// Owns both state units and the locally edited id buffer. Every mutation
/// happens on the UI task, so no locking is involved.
pub struct App {
    should_quit: bool,
    greeting: String,
    /// Id typed into the form; not committed until submit.
    id_input: String,
    input_error: Option<ProfileError>,
    user_data: UserData,
    /// Preferences unit (MVI pattern).
    preferences: PreferencesState,
    ticks: usize,
}

impl App {
    /// Builds the screen and kicks off the initial load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config, outcome_tx: OutcomeSender) -> Self {
        let options = config.profile.user_data_options();
        Self {
            should_quit: false,
            greeting: config.profile.greeting().to_string(),
            id_input: options.initial_id.to_string(),
            input_error: None,
            user_data: UserData::new(options, outcome_tx),
            preferences: PreferencesState::new(&config.preferences),
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn profile(&self) -> &ProfileState {
        self.user_data.state()
    }

    pub fn preferences(&self) -> &Preferences {
        self.preferences.preferences()
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn id_input(&self) -> &str {
        &self.id_input
    }

    /// Validation error of the last submit, cleared by the next edit.
    pub fn input_error(&self) -> Option<&ProfileError> {
        self.input_error.as_ref()
    }

    /// Appends typed or pasted text to the id buffer, up to
    /// [`MAX_ID_INPUT_LEN`] characters. The rest is dropped.
    pub fn insert_text(&mut self, text: &str) {
        let room = MAX_ID_INPUT_LEN.saturating_sub(self.id_input.chars().count());
        let text: String = text
            .chars()
            .filter(|ch| !ch.is_control())
            .take(room)
            .collect();
        if text.is_empty() {
            return;
        }
        self.id_input.push_str(&text);
        self.input_error = None;
    }

    pub fn delete_char(&mut self) {
        self.id_input.pop();
        self.input_error = None;
    }

    /// Parses the id buffer and, if valid, loads that subject.
    ///
    /// Invalid input leaves the data-fetch unit untouched.
    pub fn submit(&mut self) -> Result<u32, ProfileError> {
        match parse_subject_id(&self.id_input) {
            Ok(id) => {
                self.input_error = None;
                self.user_data.set_subject_id(id);
                Ok(id)
            }
            Err(err) => {
                warn!(input = %self.id_input, "rejected subject id");
                self.input_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn refresh(&mut self) {
        self.user_data.refresh();
    }

    pub fn update_preferences(&mut self, patch: PreferencesPatch) {
        debug!(?patch, "updating preferences");
        dispatch_mvi!(
            self,
            preferences,
            PreferencesReducer,
            PreferencesIntent::Update(patch)
        );
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.preferences().theme.toggled();
        self.update_preferences(PreferencesPatch::theme(theme));
    }

    pub fn toggle_notifications(&mut self) {
        let enabled = !self.preferences().notifications;
        self.update_preferences(PreferencesPatch::notifications(enabled));
    }

    pub fn reset_preferences(&mut self) {
        debug!("resetting preferences");
        dispatch_mvi!(self, preferences, PreferencesReducer, PreferencesIntent::Reset);
    }

    /// Hands a finished load to the data-fetch unit.
    pub fn on_load_outcome(&mut self, outcome: LoadOutcome) -> bool {
        self.user_data.apply(outcome)
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Frame of the loading spinner, advanced by ticks.
    pub fn spinner(&self) -> char {
        SPINNER[self.ticks % SPINNER.len()]
    }
}
