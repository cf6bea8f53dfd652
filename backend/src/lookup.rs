use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    Country,
    HolidayClient,
    SelectedHoliday,
    aggregate::aggregate,
    error::HolidayError,
    selector::select_next,
};

/// Impure (network)
///
/// Runs the whole pipeline for one question: fetch the relevant document, flatten it, and pick
/// the first holiday after `now`.
///
/// # Errors
/// Returns whatever the fetch or the document's shape failed with, or `NoUpcomingHoliday` if
/// every holiday in the data is already past
pub async fn next_public_holiday(
    client: &HolidayClient,
    country: Option<Country>,
    now: NaiveDateTime,
) -> Result<SelectedHoliday, HolidayError>{
    let data = client.fetch_region(country.map(Country::region)).await?;
    let holidays = aggregate(&data, country)?;
    debug!(count = holidays.len(), "aggregated holidays");

    select_next(holidays, now)
        .map(|event| SelectedHoliday{ event, country })
        .ok_or(HolidayError::NoUpcomingHoliday)
}

#[allow(clippy::zero_prefixed_literal)]
#[cfg(test)]
mod tests{
    use super::*;

    use std::net::SocketAddr;

    use axum::{
        Router,
        routing::get,
    };
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::fetch::DEFAULT_TIMEOUT;

    fn england_and_wales() -> serde_json::Value{
        json!({
            "division": "england-and-wales",
            "events": [
                {"title": "Boxing Day", "date": "2026-12-28"},
                {"title": "Christmas Day", "date": "2026-12-25"},
                {"title": "Easter Monday", "date": "2026-04-06"},
            ],
        })
    }

    async fn gov_uk() -> SocketAddr{
        let app = Router::new()
            .route("/bank-holidays.json", get(|| async{
                axum::Json(json!({
                    "england-and-wales": england_and_wales(),
                    "scotland": {"division": "scotland", "events": [
                        {"title": "St Andrew's Day", "date": "2026-11-30"},
                    ]},
                    "northern-ireland": {"division": "northern-ireland", "events": [
                        {"title": "St Patrick's Day", "date": "2026-03-17"},
                    ]},
                }))
            }))
            .route("/bank-holidays/england-and-wales.json", get(|| async{ axum::Json(england_and_wales()) }))
            .route("/bank-holidays/scotland.json", get(|| async{
                axum::Json(json!({"division": "scotland", "events": [
                    {"title": "St Andrew's Day", "date": "2026-11-30"},
                ]}))
            }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move{
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn june_first() -> NaiveDateTime{
        NaiveDate::from_ymd_opt(2026,06,01).unwrap().and_hms_opt(9,0,0).unwrap()
    }

    #[tokio::test]
    async fn test_scotland(){
        let client = HolidayClient::new(format!("http://{}/bank-holidays.json", gov_uk().await), DEFAULT_TIMEOUT).unwrap();

        let next = next_public_holiday(&client, Some(Country::Scotland), june_first()).await.unwrap();
        assert_eq!(next.event.title, "St Andrew's Day");
        assert_eq!(
            next.announce(june_first()).card,
            "The next public holiday in Scotland is St Andrew's Day on Monday, 30th November 2026",
        );
    }

    #[tokio::test]
    async fn test_england_and_wales_agree(){
        let client = HolidayClient::new(format!("http://{}/bank-holidays.json", gov_uk().await), DEFAULT_TIMEOUT).unwrap();

        let england = next_public_holiday(&client, Some(Country::England), june_first()).await.unwrap();
        let wales = next_public_holiday(&client, Some(Country::Wales), june_first()).await.unwrap();
        assert_eq!(england.event, wales.event);
        assert_eq!(england.event.title, "Christmas Day");
    }

    #[tokio::test]
    async fn test_whole_uk(){
        let client = HolidayClient::new(format!("http://{}/bank-holidays.json", gov_uk().await), DEFAULT_TIMEOUT).unwrap();

        let next = next_public_holiday(&client, None, june_first()).await.unwrap();
        assert_eq!(next.event.title, "St Andrew's Day");
        assert_eq!(next.country, None);
    }

    #[tokio::test]
    async fn test_nothing_left_this_year(){
        let client = HolidayClient::new(format!("http://{}/bank-holidays.json", gov_uk().await), DEFAULT_TIMEOUT).unwrap();
        let new_years_eve = NaiveDate::from_ymd_opt(2026,12,31).unwrap().and_hms_opt(9,0,0).unwrap();

        let result = next_public_holiday(&client, None, new_years_eve).await;
        assert!(matches!(result, Err(HolidayError::NoUpcomingHoliday)));
    }
}
