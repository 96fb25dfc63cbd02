use crate::config::{LATITUDE, LONGITUDE, METHOD};
use crate::error::FetchError;
use crate::types::PrayerTimes;
use chrono::NaiveDate;
use serde::Deserialize;

const ALADHAN_BASE_URL: &str = "http://api.aladhan.com/v1/timings";

// On errors the service puts a message string in `data`, so the status
// code is read from the envelope before the timings are deserialized.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    code: u16,
}

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: PrayerTimes,
}

pub fn parse_timings_response(body: &str) -> Result<PrayerTimes, FetchError> {
    let envelope: ResponseEnvelope = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(FetchError::BadStatus(envelope.code));
    }
    let response: TimingsResponse = serde_json::from_str(body)?;
    Ok(response.data.timings)
}

/// One request to the Aladhan API for the given day at the fixed location.
/// No caching; callers re-fetch every tick and every /today.
pub async fn fetch_prayer_times(
    client: &reqwest::Client,
    date: NaiveDate,
) -> Result<PrayerTimes, FetchError> {
    let url = format!("{}/{}", ALADHAN_BASE_URL, date.format("%d-%m-%Y"));
    let response = client
        .get(&url)
        .query(&[
            ("latitude", LATITUDE.to_string()),
            ("longitude", LONGITUDE.to_string()),
            ("method", METHOD.to_string()),
        ])
        .send()
        .await?;

    let body = response.text().await?;
    parse_timings_response(&body)
}
