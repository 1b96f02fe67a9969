//! Mock user directory: `/api/users`.
//!
//! The directory is a fixed, read-only list. `id` wins over `role`; with
//! neither, every record is returned in declaration order.

use axum::{extract::RawQuery, http::Method, Json};
use serde::Serialize;

use crate::http::request::{ensure_get, QueryParams};
use crate::http::response::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Moderator => "moderator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
}

pub static USERS: [UserRecord; 4] = [
    UserRecord {
        id: 1,
        name: "Alice Johnson",
        email: "alice@example.com",
        role: Role::Admin,
    },
    UserRecord {
        id: 2,
        name: "Bob Singh",
        email: "bob@example.com",
        role: Role::User,
    },
    UserRecord {
        id: 3,
        name: "Charlie Mehta",
        email: "charlie@example.com",
        role: Role::User,
    },
    UserRecord {
        id: 4,
        name: "Diana Patel",
        email: "diana@example.com",
        role: Role::Moderator,
    },
];

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UsersResponse {
    One {
        success: bool,
        user: &'static UserRecord,
    },
    Many {
        success: bool,
        count: usize,
        users: Vec<&'static UserRecord>,
    },
}

impl UsersResponse {
    fn many(users: Vec<&'static UserRecord>) -> Self {
        UsersResponse::Many {
            success: true,
            count: users.len(),
            users,
        }
    }
}

/// Lenient integer parse: leading whitespace, optional sign, optional `0x`
/// prefix, then as many digits as present. `"2abc"` is 2, `"abc"` is nothing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let value = i64::from_str_radix(&s[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

pub fn find_by_id(id: i64) -> Option<&'static UserRecord> {
    USERS.iter().find(|u| i64::from(u.id) == id)
}

pub fn filter_by_role(role: &str) -> Vec<&'static UserRecord> {
    let role = role.to_lowercase();
    USERS.iter().filter(|u| u.role.as_str() == role).collect()
}

/// Resolve a users query against the directory.
pub fn lookup(id: Option<&str>, role: Option<&str>) -> Result<UsersResponse, ApiError> {
    if let Some(raw) = id {
        return parse_leading_int(raw)
            .and_then(find_by_id)
            .map(|user| UsersResponse::One {
                success: true,
                user,
            })
            .ok_or(ApiError::UserNotFound);
    }

    if let Some(role) = role {
        return Ok(UsersResponse::many(filter_by_role(role)));
    }

    Ok(UsersResponse::many(USERS.iter().collect()))
}

pub async fn users(
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Json<UsersResponse>, ApiError> {
    ensure_get(&method)?;

    let params = QueryParams::parse(query.as_deref());
    let id = params.get("id");
    let role = params.get("role");
    tracing::debug!(id = ?id, role = ?role, "User lookup");

    match lookup(id, role) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!(id = ?id, "User not found");
            Err(e)
        }
    }
}
