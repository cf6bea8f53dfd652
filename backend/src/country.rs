use std::str::FromStr;

use crate::error::HolidayError;

/// Regions the holiday dataset is keyed by. Several countries can share one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Region{
    EnglandAndWales,
    Scotland,
    NorthernIreland,
}

impl Region{
    /// Every region, in the order countries map onto them
    pub const ALL: [Region; 3] = [
        Region::EnglandAndWales,
        Region::Scotland,
        Region::NorthernIreland,
    ];

    /// Pure
    #[must_use] pub fn key(self) -> &'static str{
        match self{
            Region::EnglandAndWales => "england-and-wales",
            Region::Scotland        => "scotland",
            Region::NorthernIreland => "northern-ireland",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Country{
    England,
    Wales,
    Scotland,
    NorthernIreland,
}

impl Country{
    pub const ALL: [Country; 4] = [
        Country::England,
        Country::Wales,
        Country::Scotland,
        Country::NorthernIreland,
    ];

    /// Pure
    ///
    /// The lowercase name a user would say
    #[must_use] pub fn name(self) -> &'static str{
        match self{
            Country::England         => "england",
            Country::Wales           => "wales",
            Country::Scotland        => "scotland",
            Country::NorthernIreland => "northern ireland",
        }
    }

    /// Pure
    #[must_use] pub fn region(self) -> Region{
        match self{
            Country::England | Country::Wales => Region::EnglandAndWales,
            Country::Scotland                 => Region::Scotland,
            Country::NorthernIreland          => Region::NorthernIreland,
        }
    }
}

impl FromStr for Country{
    type Err = HolidayError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.trim().to_lowercase();
        Country::ALL.into_iter()
            .find(|country| country.name() == lowered)
            .ok_or_else(|| HolidayError::InvalidCountry(name.to_string()))
    }
}

/// What a user-supplied country slot turned out to mean
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Resolution{
    /// Nothing was said, so every region counts
    Absent,
    Valid(Country),
    /// Holds the text exactly as it was given
    Invalid(String),
    Cancel,
    Help,
}

/// Pure
///
/// Control words are checked before the country list, so "stop" never becomes an invalid country.
/// A slot holding only whitespace counts as not filled.
#[must_use] pub fn resolve(input: Option<&str>) -> Resolution{
    let Some(input) = input.filter(|s| !s.trim().is_empty()) else {
        return Resolution::Absent;
    };

    match input.trim().to_lowercase().as_str(){
        "cancel" | "stop" => Resolution::Cancel,
        "help"            => Resolution::Help,
        _ => match input.parse::<Country>(){
            Ok(country) => Resolution::Valid(country),
            Err(_)      => Resolution::Invalid(input.to_string()),
        },
    }
}

/// Pure
///
/// e.g. "ENGLAND,WALES,SCOTLAND or NORTHERN IRELAND"
#[must_use] pub fn permitted_countries() -> String{
    let names: Vec<String> = Country::ALL.iter()
        .map(|country| country.name().to_uppercase())
        .collect();

    match names.split_last(){
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(",")),
        None => String::new(),
    }
}
