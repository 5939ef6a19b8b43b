use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::modules::rate_copy::core::calendar::is_weekend;
use crate::modules::rate_copy::core::rate::RateRecord;

/// The fixed horizon a selection grid offers per (room type, date) cell.
pub const TARGET_YEARS: [i32; 4] = [2026, 2027, 2028, 2029];

/// Identifies one year checkbox inside the grid.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRef {
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    pub date: NaiveDate,
    pub year: i32,
}

/// One (room type, date) entry: the fetched source rate plus the per-year
/// selection flags. A cell only exists where a rate was found.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub amount: f64,
    pub data: RateRecord,
    selected: BTreeMap<i32, bool>,
}

impl GridCell {
    fn new(data: RateRecord) -> Self {
        Self {
            amount: data.amount(),
            data,
            selected: TARGET_YEARS.iter().map(|year| (*year, false)).collect(),
        }
    }

    pub fn is_selected(&self, year: i32) -> bool {
        self.selected.get(&year).copied().unwrap_or(false)
    }

    /// Years with a set flag, ascending.
    pub fn selected_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.selected
            .iter()
            .filter(|(_, on)| **on)
            .map(|(year, _)| *year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomRates {
    pub room_type_id: String,
    pub dates: BTreeMap<NaiveDate, GridCell>,
}

/// The advanced-mode selection surface: room types in load order, dates
/// ascending within each, year flags per cell. Rebuilt from scratch on
/// every grid load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionGrid {
    rooms: Vec<RoomRates>,
}

impl SelectionGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fetched rate. Rooms keep their first-seen order so batch
    /// expansion stays deterministic.
    pub fn insert_rate(&mut self, room_type_id: &str, date: NaiveDate, data: RateRecord) {
        let index = match self
            .rooms
            .iter()
            .position(|room| room.room_type_id == room_type_id)
        {
            Some(index) => index,
            None => {
                self.rooms.push(RoomRates {
                    room_type_id: room_type_id.to_string(),
                    dates: BTreeMap::new(),
                });
                self.rooms.len() - 1
            }
        };
        self.rooms[index].dates.insert(date, GridCell::new(data));
    }

    pub fn rooms(&self) -> &[RoomRates] {
        &self.rooms
    }

    pub fn is_selected(&self, cell: &CellRef) -> bool {
        self.cell(cell)
            .is_some_and(|entry| entry.is_selected(cell.year))
    }

    /// Whether a checkbox exists for this reference at all.
    pub fn contains(&self, cell: &CellRef) -> bool {
        self.cell(cell)
            .is_some_and(|entry| entry.selected.contains_key(&cell.year))
    }

    /// Flips one year flag. A reference to a missing cell or an unknown
    /// year is ignored, matching the interactive surface where such
    /// checkboxes do not exist.
    pub fn set(&mut self, cell: &CellRef, value: bool) {
        if let Some(entry) = self.cell_mut(cell)
            && let Some(flag) = entry.selected.get_mut(&cell.year)
        {
            *flag = value;
        }
    }

    pub fn select_all(&mut self) {
        self.set_where(|_| true, true);
    }

    pub fn clear_all(&mut self) {
        self.set_where(|_| true, false);
    }

    pub fn select_weekends(&mut self) {
        self.set_where(is_weekend, true);
    }

    pub fn select_weekdays(&mut self) {
        self.set_where(|date| !is_weekend(date), true);
    }

    /// Number of set flags across the whole grid.
    pub fn selection_count(&self) -> usize {
        self.rooms
            .iter()
            .flat_map(|room| room.dates.values())
            .flat_map(|cell| cell.selected.values())
            .filter(|on| **on)
            .count()
    }

    /// Selected entries in expansion order: rooms in load order, dates
    /// ascending, years ascending.
    pub fn selected(&self) -> impl Iterator<Item = (&str, NaiveDate, i32, &GridCell)> + '_ {
        self.rooms.iter().flat_map(|room| {
            room.dates.iter().flat_map(move |(date, cell)| {
                cell.selected_years()
                    .map(move |year| (room.room_type_id.as_str(), *date, year, cell))
            })
        })
    }

    fn set_where(&mut self, matches: impl Fn(NaiveDate) -> bool, value: bool) {
        for room in &mut self.rooms {
            for (date, cell) in &mut room.dates {
                if matches(*date) {
                    for flag in cell.selected.values_mut() {
                        *flag = value;
                    }
                }
            }
        }
    }

    fn cell(&self, cell: &CellRef) -> Option<&GridCell> {
        self.rooms
            .iter()
            .find(|room| room.room_type_id == cell.room_type_id)
            .and_then(|room| room.dates.get(&cell.date))
    }

    fn cell_mut(&mut self, cell: &CellRef) -> Option<&mut GridCell> {
        self.rooms
            .iter_mut()
            .find(|room| room.room_type_id == cell.room_type_id)
            .and_then(|room| room.dates.get_mut(&cell.date))
    }
}
