use serde::Deserialize;
use serde_json::Value;

use crate::{
    Country,
    HolidayEvent,
    country::Region,
    error::HolidayError,
};

/// Pure
///
/// Pulls the events worth considering out of a fetched document. With no country the document is
/// the whole-UK one and every region's events are concatenated, each region once, in
/// `Region::ALL` order. With a country the document was already fetched scoped to its region.
///
/// # Errors
/// Returns `MissingRegion` if a region has no `events` list and `MalformedUpstreamData` if an
/// event does not have a title and a `YYYY-MM-DD` date
pub fn aggregate(data: &Value, country: Option<Country>) -> Result<Vec<HolidayEvent>, HolidayError>{
    match country{
        Some(country) => events_of(data, country.region()),
        None => {
            let mut holidays = Vec::new();
            for region in Region::ALL{
                holidays.append(&mut events_of(&data[region.key()], region)?);
            }
            Ok(holidays)
        },
    }
}

fn events_of(division: &Value, region: Region) -> Result<Vec<HolidayEvent>, HolidayError>{
    let events = division
        .get("events")
        .ok_or_else(|| HolidayError::MissingRegion(region.key().to_string()))?;

    Ok(Vec::<HolidayEvent>::deserialize(events)?)
}
