use serde::{Deserialize, Deserializer, Serialize};

mod info;
pub use info::{BrowserInfo, Client, EngineInfo, SystemInfo, WindowsEdition, WindowsMobile};

mod parse;
use parse::classify_user_agent;


/// Sentinel value produced (and accepted) by the serde impls
/// for [`Classification::Unknown`].
const UNKNOWN_SENTINEL: &str = "unknown";

/// Out-of-band signals the host environment may have about the client,
/// on top of the user-agent string itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostHints {
    /// Version string reported by the host's proprietary opera api.
    ///
    /// When set, the opera rule wins the engine cascade outright and the
    /// user-agent string is not consulted for engine detection at all.
    pub opera_version: Option<String>,
}

/// Outcome of classifying a (possibly absent) user-agent.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Structured engine, browser and system information.
    Client(Client),
    /// No user-agent was available at all: there is nothing to classify.
    Unknown,
}

impl Classification {
    /// Classify `user_agent` and `platform` into a [`Classification`].
    ///
    /// An absent `user_agent` short-circuits to
    /// [`Classification::Unknown`]; an absent `platform` leaves all
    /// platform derived fields at their defaults. This never fails:
    /// unrecognized input yields a best-effort, partially populated
    /// [`Client`] instead of an error.
    #[must_use]
    pub fn classify(user_agent: Option<&str>, platform: Option<&str>) -> Self {
        Self::classify_with_hints(user_agent, platform, &HostHints::default())
    }

    /// Same as [`Classification::classify`], with host provided
    /// [`HostHints`] taken into account.
    #[must_use]
    pub fn classify_with_hints(
        user_agent: Option<&str>,
        platform: Option<&str>,
        hints: &HostHints,
    ) -> Self {
        match user_agent {
            Some(ua) => Self::Client(classify_user_agent(ua, platform, hints)),
            None => {
                tracing::trace!("no user-agent available: classification unknown");
                Self::Unknown
            }
        }
    }

    /// Classify based on a set of request headers.
    ///
    /// The `user-agent` key is looked up ASCII case insensitively in any
    /// iterator of string-ish pairs; a missing key yields
    /// [`Classification::Unknown`].
    pub fn from_headers<I, K, V>(headers: I, platform: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let user_agent = headers
            .into_iter()
            .find(|(name, _)| name.as_ref().eq_ignore_ascii_case("user-agent"))
            .map(|(_, value)| value);
        Self::classify(user_agent.as_ref().map(AsRef::as_ref), platform)
    }

    /// Returns the classified [`Client`], if any.
    #[must_use]
    pub fn client(&self) -> Option<&Client> {
        match self {
            Self::Client(client) => Some(client),
            Self::Unknown => None,
        }
    }

    /// Returns `true` if no user-agent was available to classify.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Serialize for Classification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Client(client) => client.serialize(serializer),
            Self::Unknown => serializer.serialize_str(UNKNOWN_SENTINEL),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationRepr {
    Client(Client),
    Sentinel(String),
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ClassificationRepr::deserialize(deserializer)? {
            ClassificationRepr::Client(client) => Ok(Self::Client(client)),
            ClassificationRepr::Sentinel(s) if s == UNKNOWN_SENTINEL => Ok(Self::Unknown),
            ClassificationRepr::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "invalid classification sentinel: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_without_user_agent_is_unknown() {
        let classification = Classification::classify(None, Some("Win32"));
        assert_eq!(classification, Classification::Unknown);
        assert!(classification.is_unknown());
        assert!(classification.client().is_none());
    }

    #[test]
    fn test_from_headers_case_insensitive_lookup() {
        for name in ["user-agent", "User-Agent", "USER-AGENT"] {
            let classification = Classification::from_headers(
                [
                    ("accept", "text/html"),
                    (name, "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1)"),
                ],
                Some("Win32"),
            );
            let client = classification.client().unwrap();
            assert_eq!(client.browser.ie, 9.0, "header name: {name:?}");
            assert_eq!(client.system.win, Some(WindowsEdition::Seven));
        }
    }

    #[test]
    fn test_from_headers_missing_user_agent() {
        let headers: [(&str, &str); 2] = [("accept", "text/html"), ("host", "example.com")];
        assert!(Classification::from_headers(headers, Some("Win32")).is_unknown());

        let empty: [(&str, &str); 0] = [];
        assert!(Classification::from_headers(empty, None).is_unknown());
    }

    #[test]
    fn test_from_headers_owned_pairs() {
        let headers = vec![("User-Agent".to_owned(), "curl/8.4.0".to_owned())];
        let classification = Classification::from_headers(headers, None);
        assert_eq!(classification.client(), Some(&Client::default()));
    }

    #[test]
    fn test_unknown_serializes_as_sentinel_string() {
        let json = serde_json::to_string(&Classification::Unknown).unwrap();
        assert_eq!(json, r#""unknown""#);
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert!(back.is_unknown());
    }

    #[test]
    fn test_invalid_sentinel_rejected() {
        assert!(serde_json::from_str::<Classification>(r#""mystery""#).is_err());
    }

    #[test]
    fn test_client_classification_serde_roundtrip() {
        let classification = Classification::classify(
            Some("Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"),
            Some("Win32"),
        );
        let json = serde_json::to_string(&classification).unwrap();
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, classification);
    }

    #[test]
    fn test_host_hints_serde_roundtrip() {
        let hints = HostHints {
            opera_version: Some("12.16".to_owned()),
        };
        let json = serde_json::to_string(&hints).unwrap();
        let back: HostHints = serde_json::from_str(&json).unwrap();
        assert_eq!(back.opera_version.as_deref(), Some("12.16"));
    }
}
