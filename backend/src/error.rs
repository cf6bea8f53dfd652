use thiserror::Error;

/// Everything that can stop the pipeline from producing a holiday.
///
/// Only `InvalidCountry` is something the user can fix by asking again; the rest all end in the
/// same apology.
#[derive(Debug, Error)]
pub enum HolidayError{
    #[error("Not a country we have holidays for: {0}")]
    InvalidCountry(String),

    #[error("Could not reach the holiday endpoint: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("Holiday data is not valid JSON: {0}")]
    MalformedUpstreamData(#[from] serde_json::Error),

    #[error("Holiday data is larger than {limit} bytes")]
    BodyTooLarge{ limit: usize },

    #[error("Holiday data has no events for region {0}")]
    MissingRegion(String),

    #[error("No upcoming holiday in the holiday data")]
    NoUpcomingHoliday,
}
