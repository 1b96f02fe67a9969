//! Time endpoint: `/api/time`.
//!
//! `localTime` is the only field converted into the requested zone. The
//! decomposed date/time fields come from the server's local clock, whatever
//! zone was asked for.

use std::fmt;

use axum::{extract::RawQuery, http::Method, Json};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::api::iso_timestamp;
use crate::http::request::{ensure_get, QueryParams};
use crate::http::response::ApiError;

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// en-US style, e.g. `1/15/2024, 12:30:45 PM`.
const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub success: bool,
    pub timestamp: String,
    pub unix: i64,
    pub timezone: String,
    pub local_time: String,
    pub date: String,
    pub time: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Render `now` as wall-clock time in `timezone`.
pub fn local_time_in(now: DateTime<Utc>, timezone: &str) -> Result<String, ApiError> {
    if timezone == DEFAULT_TIMEZONE {
        return Ok(iso_timestamp(now));
    }

    let tz = Tz::from_str_insensitive(timezone).map_err(|e| {
        tracing::debug!(timezone, error = %e, "Timezone lookup failed");
        ApiError::InvalidTimezone {
            message: format!("Invalid time zone specified: {}", timezone),
        }
    })?;

    Ok(now.with_timezone(&tz).format(LOCALE_FORMAT).to_string())
}

pub fn time_report(now: DateTime<Utc>, timezone: &str) -> Result<TimeResponse, ApiError> {
    time_report_on(now, timezone, &Local)
}

/// Like [`time_report`], with the server clock running in `server_zone`.
pub fn time_report_on<Z>(
    now: DateTime<Utc>,
    timezone: &str,
    server_zone: &Z,
) -> Result<TimeResponse, ApiError>
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let local_time = local_time_in(now, timezone)?;
    let server = now.with_timezone(server_zone);

    Ok(TimeResponse {
        success: true,
        timestamp: iso_timestamp(now),
        unix: now.timestamp(),
        timezone: timezone.to_string(),
        local_time,
        date: server.format("%a %b %d %Y").to_string(),
        time: server.format("%H:%M:%S GMT%z").to_string(),
        year: server.year(),
        month: server.month(),
        day: server.day(),
        hour: server.hour(),
        minute: server.minute(),
        second: server.second(),
    })
}

pub async fn time(
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Json<TimeResponse>, ApiError> {
    ensure_get(&method)?;

    let params = QueryParams::parse(query.as_deref());
    let timezone = params.get("timezone").unwrap_or(DEFAULT_TIMEZONE);
    match time_report(Utc::now(), timezone) {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::warn!(timezone = %timezone, "Rejected invalid timezone");
            Err(e)
        }
    }
}
