use serde::Deserialize;

use crate::modules::rate_copy::core::grid::CellRef;

/// Direct toggle of one year checkbox.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleCell {
    #[serde(flatten)]
    pub cell: CellRef,
    pub selected: bool,
}

/// Bulk selection operators over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkMode {
    All,
    None,
    Weekends,
    Weekdays,
}

/// Pointer transitions of the drag-to-select machine, decoupled from any
/// concrete pointer-event API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PointerAction {
    Down { cell: CellRef },
    Enter { cell: CellRef },
    Up,
}
