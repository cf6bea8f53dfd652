use chrono::NaiveDate;

use serde::{
    Serialize,
    Deserialize,
};

use crate::Country;

/// One entry of a region's `events` list
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct HolidayEvent{
    pub title: String,
    pub date: NaiveDate,
}

/// The holiday picked as "next", and who asked about it.
/// `country` is `None` when the question was about the whole UK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedHoliday{
    pub event: HolidayEvent,
    pub country: Option<Country>,
}
