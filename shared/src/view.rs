//! Page view state
//!
//! A fetch either produced data or a single page-level message.

use serde::{Deserialize, Serialize};

/// Result of loading the data behind a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState<T> {
    Ok { data: T },
    Err { message: String },
}

impl<T> ViewState<T> {
    pub fn ok(data: T) -> Self {
        ViewState::Ok { data }
    }

    pub fn err(message: impl Into<String>) -> Self {
        ViewState::Err {
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ViewState::Ok { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ok { data } => Some(data),
            ViewState::Err { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Ok { .. } => None,
            ViewState::Err { message } => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Ok { data } => ViewState::Ok { data: f(data) },
            ViewState::Err { message } => ViewState::Err { message },
        }
    }
}
