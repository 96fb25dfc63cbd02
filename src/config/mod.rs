use chrono_tz::Tz;
use std::env;

// El Harrach, Algiers
pub const LATITUDE: f64 = 36.75;
pub const LONGITUDE: f64 = 3.04;
// Aladhan calculation method for Algeria
pub const METHOD: u8 = 18;
pub const TIMEZONE: Tz = chrono_tz::Africa::Algiers;

pub const SUBSCRIBERS_FILE: &str = "subscribers.json";

pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";

// The placeholder keeps startup going; Telegram rejects it at connect time.
pub fn telegram_token() -> String {
    env::var(TOKEN_ENV).unwrap_or_else(|_| "YOUR_TOKEN_HERE".to_string())
}
