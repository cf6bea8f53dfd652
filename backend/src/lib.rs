pub mod error;
pub use error::HolidayError;

pub mod country;
pub use country::{
    Country,
    Region,
    Resolution,
    resolve,
    permitted_countries,
};

pub mod fetch;
pub use fetch::HolidayClient;

pub mod holiday;
pub use holiday::{
    HolidayEvent,
    SelectedHoliday,
};

pub mod aggregate;
pub mod selector;

pub mod announce;
pub use announce::Announcement;

pub mod lookup;
pub use lookup::next_public_holiday;

pub mod utils;
