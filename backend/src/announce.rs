use chrono::{
    Datelike,
    NaiveDateTime,
};

use crate::{
    SelectedHoliday,
    utils::{
        capitalize_words,
        escape_ssml,
        format_long_date,
    },
};

/// Stands in for the current year when speaking a date, so it is not read out redundantly
pub const MASKED_YEAR: &str = "????";

/// What gets said and what gets shown for a holiday
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement{
    /// SSML fragment, not yet wrapped in `<speak>`
    pub speech: String,
    pub card_title: String,
    pub card: String,
}

impl SelectedHoliday{
    /// Pure
    #[must_use] pub fn announce(&self, now: NaiveDateTime) -> Announcement{
        let date = self.event.date;
        let year = if date.year() == now.year(){
            MASKED_YEAR.to_string()
        }else{
            format!("{:04}", date.year())
        };
        let speech_date = format!(
            "<say-as interpret-as=\"date\">{year}{}</say-as>",
            date.format("%m%d"),
        );

        let (spoken_place, shown_place) = match self.country{
            Some(country) => (country.name().to_string(), capitalize_words(country.name())),
            None          => ("the u.k.".to_string(), "the UK".to_string()),
        };

        Announcement{
            speech: format!(
                "The next public holiday in {spoken_place} is {} on {speech_date}",
                escape_ssml(&self.event.title),
            ),
            card_title: self.event.title.clone(),
            card: format!(
                "The next public holiday in {shown_place} is {} on {}",
                self.event.title,
                format_long_date(date),
            ),
        }
    }
}
