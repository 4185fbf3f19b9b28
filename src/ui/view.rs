//! Plain-data view model of the profile screen.
//!
//! Everything the renderer shows is decided here, so the rendering rules
//! can be tested without a terminal.

use crate::preferences::Theme;
use crate::ui::app::App;
use crate::ui::profile::ProfileState;

pub const TITLE: &str = "User Info";

/// What the result area shows, in priority order: loading, error, subject,
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Loading,
    Error {
        message: String,
    },
    Subject {
        greeting: String,
        email: String,
        role: String,
    },
    Empty,
}

impl ResultView {
    pub fn from_state(state: &ProfileState, greeting: &str) -> Self {
        if state.is_loading {
            return ResultView::Loading;
        }
        if let Some(error) = &state.error {
            return ResultView::Error {
                message: error.to_string(),
            };
        }
        match &state.subject {
            Some(subject) => ResultView::Subject {
                greeting: format!("{} {}", greeting, subject.name),
                email: format!("Email: {}", subject.email),
                role: format!("Role: {}", subject.role),
            },
            None => ResultView::Empty,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            ResultView::Loading => vec!["Loading...".to_string()],
            ResultView::Error { message } => vec![format!("Error: {}", message)],
            ResultView::Subject {
                greeting,
                email,
                role,
            } => vec![greeting.clone(), email.clone(), role.clone()],
            ResultView::Empty => vec!["No user found".to_string()],
        }
    }
}

/// A clickable action, drawn as `[key] label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub key: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub theme: Theme,
    pub container_class: &'static str,
    pub id_input: String,
    pub input_error: Option<String>,
    pub result: ResultView,
    pub buttons: Vec<Button>,
}

impl UserView {
    pub fn build(app: &App) -> Self {
        let preferences = app.preferences();
        let notifications = if preferences.notifications {
            "On"
        } else {
            "Off"
        };
        let buttons = vec![
            Button {
                key: "Enter",
                label: "Load User".to_string(),
            },
            Button {
                key: "r",
                label: "Refresh".to_string(),
            },
            Button {
                key: "t",
                label: format!("Theme: {}", capitalize(preferences.theme.as_str())),
            },
            Button {
                key: "n",
                label: format!("Notifications: {}", notifications),
            },
            Button {
                key: "x",
                label: "Reset Preferences".to_string(),
            },
        ];

        Self {
            theme: preferences.theme,
            container_class: preferences.theme.class_name(),
            id_input: app.id_input().to_string(),
            input_error: app.input_error().map(ToString::to_string),
            result: ResultView::from_state(app.profile(), app.greeting()),
            buttons,
        }
    }

    pub fn button(&self, key: &str) -> Option<&Button> {
        self.buttons.iter().find(|button| button.key == key)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
