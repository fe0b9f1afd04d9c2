//! Display and transition gate for a record status.
//!
//! The selector never persists anything: selecting a value hands it to the
//! caller's callback, which owns the record and any follow-up workflow.

use serde::Serialize;

use crate::domain::status::{Status, StatusColor};

/// Label and color pair rendered for a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: StatusColor,
}

impl StatusBadge {
    pub fn of<S: Status>(status: S) -> Self {
        Self {
            label: status.label(),
            color: status.color(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusSelector<S: Status> {
    current: S,
    read_only: bool,
}

impl<S: Status> StatusSelector<S> {
    pub fn new(current: S) -> Self {
        Self {
            current,
            read_only: false,
        }
    }

    /// Renders as a static badge without transition targets.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge::of(self.current)
    }

    /// Values offered as transition targets, in option order.
    pub fn transition_targets(&self) -> &'static [S] {
        if self.read_only { &[] } else { S::OPTIONS }
    }

    /// Badges for every transition target.
    pub fn option_badges(&self) -> Vec<(S, StatusBadge)> {
        self.transition_targets()
            .iter()
            .map(|&option| (option, StatusBadge::of(option)))
            .collect()
    }

    /// Whether the "complete process" action is offered.
    pub fn can_complete(&self) -> bool {
        !self.read_only && self.current.is_completable()
    }

    /// Passes `new` to `on_change` and returns its result.
    ///
    /// Returns `None` without calling back when the selector is read-only or
    /// the value did not change.
    pub fn select<F, R>(&mut self, new: S, on_change: F) -> Option<R>
    where
        F: FnOnce(S) -> R,
    {
        if self.read_only || new == self.current {
            return None;
        }
        self.current = new;
        Some(on_change(new))
    }
}
