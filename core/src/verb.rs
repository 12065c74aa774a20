//! The whitelist of HTTP methods a hook may use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HookError;

/// HTTP method for a hook. Always one of the nine whitelisted verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verb {
    #[default]
    Get,
    Post,
    Head,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Verb {
    /// The whitelist, in canonical order. The first entry is the default.
    pub const ALL: [Verb; 9] = [
        Verb::Get,
        Verb::Post,
        Verb::Head,
        Verb::Put,
        Verb::Delete,
        Verb::Connect,
        Verb::Options,
        Verb::Trace,
        Verb::Patch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Head => "HEAD",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Connect => "CONNECT",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
            Verb::Patch => "PATCH",
        }
    }

    /// Every other whitelisted verb, in canonical order.
    pub fn conflicts(self) -> Vec<Verb> {
        Verb::ALL.into_iter().filter(|v| *v != self).collect()
    }
}

impl FromStr for Verb {
    type Err = HookError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.to_uppercase();
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str() == upper)
            .ok_or_else(|| HookError::InvalidVerb(raw.to_string()))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Verb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Verb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Head => reqwest::Method::HEAD,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
            Verb::Connect => reqwest::Method::CONNECT,
            Verb::Options => reqwest::Method::OPTIONS,
            Verb::Trace => reqwest::Method::TRACE,
            Verb::Patch => reqwest::Method::PATCH,
        }
    }
}
