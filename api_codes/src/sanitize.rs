//! Redaction of secret query parameters from URLs shown to users.

use url::Url;

/// Query parameter carrying the API auth token.
pub const TOKEN_PARAM: &str = "token";

/// Replacement value written over a redacted parameter.
pub const REDACTED: &str = "REDACTED";

/// Redacts the token parameter from a URL which may be exposed to the user,
/// in particular in the [`ErrorResponse`](crate::ErrorResponse) message.
///
/// Returns `None` for `None`. The input is never modified.
pub fn sanitize_url(url: Option<&Url>) -> Option<Url> {
    url.map(|url| Redactor::default().redact(url))
}

/// Rewrites sensitive query parameters to [`REDACTED`].
///
/// The default redactor covers [`TOKEN_PARAM`]. Every pair of a sensitive
/// parameter that has at least one non-empty value collapses into a single
/// `name=REDACTED` pair at the position of its first occurrence. Other pairs
/// keep their order and values.
#[derive(Debug, Clone)]
pub struct Redactor {
    params: Vec<String>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor {
    pub fn new() -> Self {
        Self {
            params: vec![TOKEN_PARAM.to_string()],
        }
    }

    /// Also redacts the query parameter `name`.
    pub fn with_param(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.params.contains(&name) {
            self.params.push(name);
        }
        self
    }

    fn is_sensitive(&self, name: &str) -> bool {
        self.params.iter().any(|param| param == name)
    }

    /// Returns a redacted copy of `url`, or an unchanged copy when it holds
    /// no secret.
    pub fn redact(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        let mut leaking: Vec<&str> = Vec::new();
        for (name, value) in pairs.iter() {
            if !value.is_empty() && self.is_sensitive(name) && !leaking.contains(&name.as_str()) {
                leaking.push(name.as_str());
            }
        }
        if leaking.is_empty() {
            return url;
        }

        let mut written: Vec<&str> = Vec::with_capacity(leaking.len());
        let mut redacted: Vec<(&str, &str)> = Vec::with_capacity(pairs.len());
        for (name, value) in pairs.iter() {
            if !leaking.contains(&name.as_str()) {
                redacted.push((name.as_str(), value.as_str()));
            } else if !written.contains(&name.as_str()) {
                written.push(name.as_str());
                redacted.push((name.as_str(), REDACTED));
            }
        }

        url.query_pairs_mut().clear().extend_pairs(redacted);
        tracing::debug!("Redacted query parameters {:?} from {}", leaking, url);
        url
    }
}
