use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rate_copy::core::drag::DragSelect;
use crate::modules::rate_copy::core::grid::SelectionGrid;
use crate::modules::rate_copy::core::operation::CopyOperation;

/// Per-request upstream authentication, captured when room types load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub property_id: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    #[serde(rename = "roomTypeName")]
    pub room_type_name: String,
}

/// The editable batch between preview and submission. Dismissing the
/// preview only hides it; the operations stay submittable until a
/// submission cycle completes or a new preview replaces them.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBatch {
    pub id: Uuid,
    pub visible: bool,
    operations: Vec<CopyOperation>,
}

impl PendingBatch {
    fn new(operations: Vec<CopyOperation>) -> Self {
        Self {
            id: Uuid::now_v7(),
            visible: true,
            operations,
        }
    }

    pub fn operations(&self) -> &[CopyOperation] {
        &self.operations
    }

    /// Applies a user override to one operation's amount. Interactive soft
    /// validation: an amount that does not parse as a finite, non-negative
    /// decimal is ignored and the stored amount retained, as is an index
    /// that matches no operation.
    pub fn update_rate(&mut self, index: usize, raw_amount: &str) {
        let Some(operation) = self.operations.get_mut(index) else {
            tracing::debug!(index, "rate edit for unknown operation ignored");
            return;
        };
        match raw_amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => operation.set_amount(amount),
            _ => tracing::debug!(index, raw_amount, "unparsable rate edit ignored"),
        }
    }
}

/// All state of one user interaction: credentials, the room-type cache,
/// the in-flight selection grid, and the pending batch. One live session
/// per service instance; nothing is shared across sessions or persisted.
#[derive(Debug, Default)]
pub struct Session {
    pub credentials: Option<Credentials>,
    pub room_types: Vec<RoomType>,
    pub grid: Option<SelectionGrid>,
    pub drag: DragSelect,
    pub submitting: bool,
    pending: Option<PendingBatch>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the credentials and the freshly fetched room types; any
    /// previous cache for another property is replaced.
    pub fn authenticate(&mut self, credentials: Credentials, room_types: Vec<RoomType>) {
        self.credentials = Some(credentials);
        self.room_types = room_types;
    }

    /// Replaces any existing pending batch with a new one. Always a full
    /// replace, never a merge.
    pub fn create_preview(&mut self, operations: Vec<CopyOperation>) -> &PendingBatch {
        self.pending.insert(PendingBatch::new(operations))
    }

    pub fn pending(&self) -> Option<&PendingBatch> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut PendingBatch> {
        self.pending.as_mut()
    }

    /// Hides the preview surface without discarding the batch.
    pub fn dismiss_preview(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.visible = false;
        }
    }

    /// Dropped only here and on `create_preview`; a submission that never
    /// returns results must leave the batch intact for a retry.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}
