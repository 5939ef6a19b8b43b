// Pure expansion of a selection into copy operations. Fetching happens in
// the handler; everything here is deterministic on its inputs.

use chrono::NaiveDate;

use crate::modules::rate_copy::core::align::align_to_year;
use crate::modules::rate_copy::core::grid::SelectionGrid;
use crate::modules::rate_copy::core::operation::CopyOperation;
use crate::modules::rate_copy::core::rate::RateRecord;

/// One rate the handler found for a (room type, date) pair, in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRate {
    pub room_type_id: String,
    pub date: NaiveDate,
    pub data: RateRecord,
}

/// Target years ascending, deduplicated, so identical selections expand to
/// identical operation sequences.
pub fn normalize_years(years: &[i32]) -> Vec<i32> {
    let mut years = years.to_vec();
    years.sort_unstable();
    years.dedup();
    years
}

/// Basic mode: one operation per fetched rate per target year, in fetch
/// order then year order.
pub fn expand_fetched(rates: &[FetchedRate], years: &[i32]) -> Vec<CopyOperation> {
    rates
        .iter()
        .flat_map(|rate| years.iter().map(|year| operation_for(rate, *year)))
        .collect()
}

/// Advanced mode: one operation per set grid flag, rooms in load order,
/// dates ascending, years ascending.
pub fn expand_grid(grid: &SelectionGrid) -> Vec<CopyOperation> {
    grid.selected()
        .map(|(room_type_id, date, year, cell)| {
            operation_for(
                &FetchedRate {
                    room_type_id: room_type_id.to_string(),
                    date,
                    data: cell.data.clone(),
                },
                year,
            )
        })
        .collect()
}

fn operation_for(rate: &FetchedRate, year: i32) -> CopyOperation {
    CopyOperation {
        room_type_id: rate.room_type_id.clone(),
        source_date: rate.date,
        target_date: align_to_year(rate.date, year),
        target_year: year,
        rate_amount: rate.data.amount(),
        rate_data: rate.data.clone(),
    }
}
