//! Detail view navigation over the filtered rating list

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigateDirection {
    Prev,
    Next,
}

impl FromStr for NavigateDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// Tracks the rating open in the detail view, if any.
///
/// Navigation always runs against the list the user currently sees, so it
/// takes that list as an argument instead of holding on to one.
#[derive(Debug, Clone, Default)]
pub struct DetailNavigator {
    selected: Option<Rating>,
}

impl DetailNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, rating: Rating) {
        self.selected = Some(rating);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Rating> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Move the selection one step through `visible`, wrapping at both ends.
    ///
    /// Nothing happens when no rating is open or `visible` is empty. When the
    /// open rating is no longer part of `visible` (a filter changed while the
    /// detail view was up) the view closes. Returns the new selection.
    ///
    /// An empty `visible` list is the one exception to closing: navigating
    /// with nothing shown is a no-op, so a filtered-out selection stays open
    /// until the list has entries again.
    pub fn navigate(&mut self, direction: NavigateDirection, visible: &[&Rating]) -> Option<&Rating> {
        let current_id = self.selected.as_ref()?.id;
        if visible.is_empty() {
            return self.selected.as_ref();
        }

        let Some(index) = visible.iter().position(|r| r.id == current_id) else {
            self.selected = None;
            return None;
        };

        let len = visible.len();
        let target = match direction {
            NavigateDirection::Next => (index + 1) % len,
            NavigateDirection::Prev => (index + len - 1) % len,
        };
        self.selected = Some(visible[target].clone());
        self.selected.as_ref()
    }
}
