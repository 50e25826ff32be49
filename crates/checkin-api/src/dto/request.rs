//! Query-string DTOs.
//!
//! Every field arrives as an optional raw string so that a malformed
//! number surfaces as a domain validation failure with a fixed message
//! instead of an extractor rejection.

use serde::Deserialize;

use checkin_core::error::AppError;
use checkin_core::result::AppResult;
use checkin_core::types::Site;
use checkin_service::LookupKey;

/// `POST /api/sign?id&site`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignParams {
    /// External participant id.
    pub id: Option<String>,
    /// Exam site (`1` or `2`).
    pub site: Option<String>,
}

impl SignParams {
    /// Parsed participant id.
    pub fn id(&self) -> AppResult<i64> {
        parse_id(self.id.as_deref())
    }

    /// Parsed site.
    pub fn site(&self) -> AppResult<Site> {
        parse_site(self.site.as_deref())
    }
}

/// `POST /api/update?id&seat&name&note`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateParams {
    /// External participant id.
    pub id: Option<String>,
    /// New seat number.
    pub seat: Option<String>,
    /// New display name; absent or empty keeps the current one.
    pub name: Option<String>,
    /// New note; absent keeps the current one.
    pub note: Option<String>,
}

impl UpdateParams {
    /// Parsed participant id.
    pub fn id(&self) -> AppResult<i64> {
        parse_id(self.id.as_deref())
    }

    /// Parsed seat number.
    pub fn seat(&self) -> AppResult<u32> {
        parse_seat(self.seat.as_deref())
    }

    /// Display name to set, if any.
    pub fn name(&self) -> Option<String> {
        self.name.clone().filter(|name| !name.trim().is_empty())
    }
}

/// `GET /api/query?id | seat&site | username`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    /// External participant id.
    pub id: Option<String>,
    /// Seat number, with `site`.
    pub seat: Option<String>,
    /// Exam site, with `seat`.
    pub site: Option<String>,
    /// Judge-system username.
    #[serde(alias = "ojUsername")]
    pub username: Option<String>,
}

impl QueryParams {
    /// The lookup selected by the supplied parameters, in the order
    /// id, seat and site, username.
    pub fn lookup_key(&self) -> AppResult<LookupKey> {
        if present(&self.id) {
            return parse_id(self.id.as_deref()).map(LookupKey::Id);
        }
        if present(&self.seat) {
            let seat_no = parse_seat(self.seat.as_deref())?;
            let site = parse_site(self.site.as_deref())?;
            return Ok(LookupKey::Seat { seat_no, site });
        }
        match &self.username {
            Some(username) if !username.is_empty() => Ok(LookupKey::Username(username.clone())),
            _ => Err(AppError::validation(
                "usage: (id) or (seat, site) or (username)",
            )),
        }
    }
}

/// `POST /api/new_qrcode?id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QrcodeParams {
    /// External participant id.
    pub id: Option<String>,
}

impl QrcodeParams {
    /// Parsed participant id.
    pub fn id(&self) -> AppResult<i64> {
        parse_id(self.id.as_deref())
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn parse_id(raw: Option<&str>) -> AppResult<i64> {
    raw.and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| AppError::validation("id is not a number"))
}

fn parse_seat(raw: Option<&str>) -> AppResult<u32> {
    raw.and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| AppError::validation("seat is not a number"))
}

fn parse_site(raw: Option<&str>) -> AppResult<Site> {
    raw.unwrap_or_default().parse()
}
