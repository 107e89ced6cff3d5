//! Field event types.
//!
//! The UI layer owns the event loop. It turns native notifications into
//! [`FieldEvent`]s and pushes them into
//! [`ValidationController::dispatch`](crate::controller::ValidationController::dispatch),
//! one at a time, in the order the user produced them.

use crate::field::FieldId;

// =============================================================================
// Field Event Types
// =============================================================================

/// Which notification fired on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEventKind {
    /// Field lost focus.
    Blur,
    /// Raw value edit (keystroke, paste, cut).
    Input,
    /// Value changed and committed (date picker selection).
    Change,
}

/// A field event to be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: FieldEventKind,
    pub field: FieldId,
}

impl FieldEvent {
    pub fn new(kind: FieldEventKind, field: FieldId) -> Self {
        Self { kind, field }
    }

    pub fn blur(field: FieldId) -> Self {
        Self::new(FieldEventKind::Blur, field)
    }

    pub fn input(field: FieldId) -> Self {
        Self::new(FieldEventKind::Input, field)
    }

    pub fn change(field: FieldId) -> Self {
        Self::new(FieldEventKind::Change, field)
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No handler is wired for this event on this field.
    Ignored,
    /// A handler ran and the submit flag was recomputed.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
