use chrono::{
    NaiveDateTime,
    NaiveTime,
};

use crate::HolidayEvent;

/// Pure
///
/// Returns the earliest holiday that starts strictly after `now`. A holiday starts at midnight, so
/// today's holiday only counts if `now` is before today began, which never happens in practice.
/// Ties on date keep their original order.
#[must_use] pub fn select_next(mut events: Vec<HolidayEvent>, now: NaiveDateTime) -> Option<HolidayEvent>{
    events.sort_by_key(|event| event.date);

    events.into_iter()
        .find(|event| event.date.and_time(NaiveTime::MIN) > now)
}
