use chrono::NaiveDateTime;
use tracing::{
    info,
    warn,
};

use bank_holidays::{
    HolidayClient,
    HolidayError,
    Resolution,
    next_public_holiday,
    permitted_countries,
    resolve,
    utils::escape_ssml,
};

use crate::envelope::{
    RequestBody,
    SkillRequest,
    SkillResponse,
};

pub const NEXT_HOLIDAY_INTENT: &str = "NextPublicHolidayIntent";
pub const COUNTRY_SLOT: &str = "country";

pub const HELP_MESSAGE: &str = "To get public holidays say the name of your country, e.g. Scotland.";
pub const GOODBYE_MESSAGE: &str = "Thank you for using UK Public Holidays, goodbye.";
pub const APOLOGY_MESSAGE: &str = "I'm sorry, I can't access that information right now. Please try again later.";

/// Where a request currently is on its way to a response
#[derive(Debug)]
pub enum State{
    Launch,
    NextHoliday(Option<String>),
    Help,
    Goodbye,
    Failed(HolidayError),
}

#[derive(Debug)]
pub enum Transition{
    Next(State),
    Respond(SkillResponse),
}

impl State{
    /// Pure
    ///
    /// `None` for requests that need no spoken answer
    #[must_use] pub fn initial(request: &RequestBody) -> Option<Self>{
        match request{
            RequestBody::LaunchRequest => Some(State::Launch),
            RequestBody::IntentRequest{ intent } => Some(match intent.name.as_str(){
                NEXT_HOLIDAY_INTENT => State::NextHoliday(intent.slot_value(COUNTRY_SLOT).map(str::to_string)),
                "AMAZON.HelpIntent" => State::Help,
                "AMAZON.StopIntent" | "AMAZON.CancelIntent" | "AMAZON.NoIntent" => State::Goodbye,
                unhandled => {
                    info!(intent = unhandled, "unhandled intent, offering help");
                    State::Help
                },
            }),
            RequestBody::SessionEndedRequest => None,
            RequestBody::Unknown => Some(State::Help),
        }
    }
}

/// Turns one platform request into one platform response
#[derive(Debug, Clone)]
pub struct SkillController{
    client: HolidayClient,
}

impl SkillController{
    #[must_use] pub fn new(client: HolidayClient) -> Self{
        Self{ client }
    }

    /// Impure (network)
    pub async fn handle(&self, request: &SkillRequest, now: NaiveDateTime) -> SkillResponse{
        let Some(mut state) = State::initial(&request.request) else {
            return SkillResponse::empty();
        };

        loop{
            match self.step(state, now).await{
                Transition::Next(next)      => state = next,
                Transition::Respond(answer) => return answer,
            }
        }
    }

    /// Impure (network, for `NextHoliday` only)
    pub async fn step(&self, state: State, now: NaiveDateTime) -> Transition{
        match state{
            State::Launch => Transition::Next(State::NextHoliday(None)),
            State::NextHoliday(country) => self.next_holiday(country.as_deref(), now).await,
            State::Help => Transition::Respond(SkillResponse::ask(HELP_MESSAGE, HELP_MESSAGE)),
            State::Goodbye => Transition::Respond(SkillResponse::tell(GOODBYE_MESSAGE)),
            State::Failed(error) => {
                match error{
                    HolidayError::NoUpcomingHoliday => warn!("no upcoming holiday in the data"),
                    error => warn!(%error, "holiday lookup failed"),
                }
                Transition::Respond(SkillResponse::tell(APOLOGY_MESSAGE))
            },
        }
    }

    async fn next_holiday(&self, country: Option<&str>, now: NaiveDateTime) -> Transition{
        let country = match resolve(country){
            Resolution::Cancel => return Transition::Next(State::Goodbye),
            Resolution::Help => return Transition::Next(State::Help),
            Resolution::Invalid(said) => return Transition::Respond(invalid_country(&said)),
            Resolution::Absent => None,
            Resolution::Valid(country) => Some(country),
        };

        match next_public_holiday(&self.client, country, now).await{
            Ok(holiday) => {
                let announcement = holiday.announce(now);
                Transition::Respond(SkillResponse::tell_with_card(
                    &announcement.speech,
                    &announcement.card_title,
                    &announcement.card,
                ))
            },
            Err(error) => Transition::Next(State::Failed(error)),
        }
    }
}

/// Pure
fn invalid_country(said: &str) -> SkillResponse{
    let said = escape_ssml(said);
    let permitted = permitted_countries();

    SkillResponse::ask(
        &format!("You said {said}. I can give you the next public holiday for {permitted}. Which country would you like to hear the next public holiday for?"),
        &format!("Sorry, I don't know public holidays for {said} try asking for the next public holiday in {permitted}."),
    )
}
