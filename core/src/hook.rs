//! A named HTTP call target.
//!
//! # Design
//! A hook is deserialized by hand from `serde_json::Value` rather than with
//! a derived `Deserialize`, so a malformed config entry reports exactly which
//! field was missing or had the wrong type. Serialization is derived and only
//! writes `url`, `verb` and `name`; headers live in memory only.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::HookError;
use crate::http::HttpRequest;
use crate::verb::Verb;

pub const DEFAULT_NAME: &str = "unnamed";

/// A stored HTTP call target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hook {
    pub url: Url,
    pub verb: Verb,
    pub name: String,
    /// `NAME:value` strings. Neither persisted nor sent on `call`.
    #[serde(skip)]
    pub headers: Vec<String>,
}

/// Parse an absolute URL, mapping failures to `HookError::InvalidUrl`.
pub fn parse_url(raw: &str) -> Result<Url, HookError> {
    Url::parse(raw).map_err(|source| HookError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

impl Hook {
    pub fn new(url: Url, verb: Verb) -> Self {
        Self {
            url,
            verb,
            name: DEFAULT_NAME.to_string(),
            headers: Vec::new(),
        }
    }

    /// Set the display name. A blank name keeps the default.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = name;
        }
        self
    }

    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = headers;
        self
    }

    /// Build a hook from one element of the config array.
    pub fn from_json(value: &Value) -> Result<Self, HookError> {
        let obj = value.as_object().ok_or(HookError::TypeMismatch {
            field: "hook",
            expected: "an object",
        })?;

        let url = parse_url(required_str(obj, "url")?)?;
        let verb = required_str(obj, "verb")?.parse::<Verb>()?;

        let hook = Hook::new(url, verb);
        match obj.get("name") {
            None | Some(Value::Null) => Ok(hook),
            Some(Value::String(name)) => Ok(hook.with_name(name.as_str())),
            Some(_) => Err(HookError::TypeMismatch {
                field: "name",
                expected: "a string",
            }),
        }
    }

    /// The wire request for this hook. Stored headers are not attached and
    /// no body is sent.
    pub fn request(&self) -> HttpRequest {
        HttpRequest {
            method: self.verb,
            url: self.url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn required_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, HookError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(HookError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(HookError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}
