use std::borrow::Borrow;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

pub fn log_error<E: core::fmt::Display>(error: E) -> String {
    log::error!("{error}");
    error.to_string()
}
pub fn log_error_ccstr<E: core::fmt::Display>(error: E) -> CCStr {
    let e = error.to_string();
    log::error!("{e}");
    CCStr::from(e)
}

pub async fn async_sleep(timeout_ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(timeout_ms)).await
}

/// Human display for the RFC3339 timestamps the Scribe API returns.
///
/// Falls back to the raw string when the server sends something else.
pub fn display_date(iso: &str) -> CCStr {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => CCStr::from(dt.format("%b %e, %Y").to_string()),
        Err(_) => CCStr::from(iso),
    }
}

pub fn display_datetime(iso: &str) -> CCStr {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => CCStr::from(dt.format("%b %e, %Y %H:%M").to_string()),
        Err(_) => CCStr::from(iso),
    }
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl Serialize for CCStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_ref())
    }
}

impl<'de> Deserialize<'de> for CCStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| CCStr(CheapClone::from(s)))
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr(CheapClone::from(s)))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        value.parse().unwrap()
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for CCStr {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}
