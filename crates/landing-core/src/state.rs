//! Local view state of the landing page and the actions that change it.
//!
//! The page has exactly three things a visitor can change: the name printed
//! on the "old way" certificate, whether each of the two dialogs is open, and
//! which FAQ item is expanded. Every action has a textual form (`Display` and
//! `FromStr`) so rendered markup can carry it in a `data-action` attribute.

use crate::content::{DEFAULT_STUDENT_NAME, FAQ};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// "Photoshop Simulator": edits the old-way certificate name.
    Alter,
    /// "Transaction Verified": placeholder on-chain record.
    Verify,
}

impl Dialog {
    pub const ALL: [Dialog; 2] = [Dialog::Alter, Dialog::Verify];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialog::Alter => "alter",
            Dialog::Verify => "verify",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenDialog(Dialog),
    CloseDialog(Dialog),
    CloseDialogs,
    SetStudentName(String),
    ToggleFaq(usize),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("unknown dialog `{0}`")]
    UnknownDialog(String),
    #[error("invalid FAQ index `{0}`")]
    InvalidFaqIndex(String),
}

impl FromStr for Dialog {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alter" => Ok(Dialog::Alter),
            "verify" => Ok(Dialog::Verify),
            other => Err(ParseActionError::UnknownDialog(other.to_string())),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The name is taken verbatim, surrounding whitespace included.
        if let Some(name) = s.trim_start().strip_prefix("set-student-name:") {
            return Ok(Action::SetStudentName(name.to_string()));
        }
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };
        match (verb, arg) {
            ("open-dialog", Some(d)) => Ok(Action::OpenDialog(d.parse()?)),
            ("close-dialog", Some(d)) => Ok(Action::CloseDialog(d.parse()?)),
            ("close-dialogs", None) => Ok(Action::CloseDialogs),
            ("toggle-faq", Some(i)) => i
                .parse::<usize>()
                .map(Action::ToggleFaq)
                .map_err(|_| ParseActionError::InvalidFaqIndex(i.to_string())),
            _ => Err(ParseActionError::UnknownAction(s.to_string())),
        }
    }
}

impl Action {
    /// Keyboard shortcut handled at document level.
    pub fn for_key(key: &str) -> Option<Action> {
        match key {
            "Escape" | "Esc" => Some(Action::CloseDialogs),
            _ => None,
        }
    }
}

/// The `data-action` attribute value; parses back with `FromStr`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenDialog(d) => write!(f, "open-dialog:{}", d),
            Action::CloseDialog(d) => write!(f, "close-dialog:{}", d),
            Action::CloseDialogs => f.write_str("close-dialogs"),
            Action::SetStudentName(name) => write!(f, "set-student-name:{}", name),
            Action::ToggleFaq(i) => write!(f, "toggle-faq:{}", i),
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub student_name: String,
    pub alter_dialog_open: bool,
    pub verify_dialog_open: bool,
    pub open_faq: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            student_name: DEFAULT_STUDENT_NAME.to_string(),
            alter_dialog_open: false,
            verify_dialog_open: false,
            open_faq: None,
        }
    }
}

impl ViewState {
    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::Alter => self.alter_dialog_open,
            Dialog::Verify => self.verify_dialog_open,
        }
    }

    fn set_open(&mut self, dialog: Dialog, open: bool) -> bool {
        let flag = match dialog {
            Dialog::Alter => &mut self.alter_dialog_open,
            Dialog::Verify => &mut self.verify_dialog_open,
        };
        let changed = *flag != open;
        *flag = open;
        changed
    }

    pub fn any_dialog_open(&self) -> bool {
        self.alter_dialog_open || self.verify_dialog_open
    }

    /// Apply `action`, returning whether anything visible changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::OpenDialog(d) => self.set_open(d, true),
            Action::CloseDialog(d) => self.set_open(d, false),
            Action::CloseDialogs => {
                let a = self.set_open(Dialog::Alter, false);
                let v = self.set_open(Dialog::Verify, false);
                a || v
            }
            Action::SetStudentName(name) => {
                if self.student_name == name {
                    return false;
                }
                self.student_name = name;
                true
            }
            Action::ToggleFaq(i) => {
                if i >= FAQ.len() {
                    log::warn!("[state] ignoring toggle of FAQ item {}", i);
                    return false;
                }
                self.open_faq = if self.open_faq == Some(i) { None } else { Some(i) };
                true
            }
        }
    }
}
