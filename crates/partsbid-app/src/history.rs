// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Popped { revealed: ViewId },
    ResetToHome,
}

/// Navigation order of visited views. Never empty; the last entry is the
/// current view. Growth is unbounded for the session and duplicates are kept.
/// Not-found entries remember the identifier that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<ViewId>,
    requested: Vec<Option<String>>,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self {
            entries: vec![ViewId::Home],
            requested: vec![None],
        }
    }
}

impl HistoryStack {
    pub fn current(&self) -> ViewId {
        self.entries.last().copied().unwrap_or(ViewId::Home)
    }

    /// Identifier behind the current entry when it is a not-found fallback.
    pub fn current_request(&self) -> Option<&str> {
        self.requested.last().and_then(Option::as_deref)
    }

    pub fn entries(&self) -> &[ViewId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, view: ViewId) {
        self.entries.push(view);
        self.requested.push(None);
    }

    pub fn push_unmatched(&mut self, requested: String) {
        self.entries.push(ViewId::NotFound);
        self.requested.push(Some(requested));
    }

    pub fn back(&mut self) -> BackOutcome {
        if self.entries.len() > 1 {
            self.entries.pop();
            self.requested.pop();
            return BackOutcome::Popped {
                revealed: self.current(),
            };
        }
        self.reset_home();
        BackOutcome::ResetToHome
    }

    pub fn reset_home(&mut self) {
        self.entries.clear();
        self.entries.push(ViewId::Home);
        self.requested.clear();
        self.requested.push(None);
    }
}
