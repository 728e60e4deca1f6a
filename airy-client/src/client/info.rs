use airy_error::OpaqueError;
use airy_utils::macros::match_ignore_ascii_case_str;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Structured classification of a client.
///
/// Produced by [`Classification::classify`](crate::Classification::classify).
/// Every field defaults to its zero value when no pattern matched, so a
/// completely unrecognized user-agent yields `Client::default()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Client {
    pub engine: EngineInfo,
    pub browser: BrowserInfo,
    pub system: SystemInfo,
}

/// Rendering engine information.
///
/// At most one of the version fields is non-zero per classification:
/// the engine cascade stops at the first engine it identifies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineInfo {
    pub ie: f64,
    pub gecko: f64,
    pub webkit: f64,
    pub khtml: f64,
    pub opera: f64,
    /// Raw version capture for the identified engine, if any.
    ///
    /// On the gecko path a trailing `Firefox/<version>` capture overwrites
    /// this field with the firefox version; [`BrowserInfo::ver`] stays
    /// untouched on that path.
    pub ver: Option<String>,
}

/// Browser (product) information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrowserInfo {
    /// Always mirrors [`EngineInfo::ie`], whichever cascade branch ran.
    pub ie: f64,
    pub firefox: f64,
    pub safari: f64,
    pub chrome: f64,
    /// Always mirrors [`EngineInfo::opera`], whichever cascade branch ran.
    pub opera: f64,
    pub konq: f64,
    /// Raw version capture for the identified browser, if any.
    pub ver: Option<String>,
}

/// Platform and device information.
///
/// Device flags are evaluated independently of each other and of the
/// engine cascade; they are only mutually exclusive insofar as real
/// user-agent strings make them so.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Windows family, with the resolved edition when one was found.
    pub win: Option<WindowsEdition>,
    pub mac: bool,
    pub x11: bool,
    pub iphone: bool,
    pub ipod: bool,
    pub ipad: bool,
    /// iOS version; `2.0` is the fallback guess when the `Mobile` token
    /// is present but no `CPU ... OS <version>` pattern matched.
    pub ios: Option<f64>,
    pub android: Option<f64>,
    #[serde(rename = "nokiaN")]
    pub nokia_n: bool,
    #[serde(rename = "winMobile")]
    pub win_mobile: Option<WindowsMobile>,
    pub wii: bool,
    pub ps: bool,
}

impl SystemInfo {
    /// Returns `true` if the platform was identified as windows family.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.win.is_some()
    }

    /// Returns `true` if any of the mobile apple devices was advertised.
    #[must_use]
    pub fn is_apple_mobile(&self) -> bool {
        self.iphone || self.ipod || self.ipad
    }
}

/// Windows edition, resolved from the user-agent string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowsEdition {
    /// Windows 2000 (`NT 5.0`)
    Windows2000,
    /// Windows XP (`NT 5.1`)
    Xp,
    /// Windows Vista (`NT 6.0`)
    Vista,
    /// Windows 7 (`NT 6.1`)
    Seven,
    /// An NT kernel without a recognized version
    Nt,
    /// Windows ME (`9x` family)
    Me,
    /// Windows CE
    Ce,
    /// Windows Phone, version carried in [`SystemInfo::win_mobile`]
    Phone,
    /// Windows platform without a resolvable edition token
    /// in the user-agent string
    Unknown,
    /// Raw edition token, as captured
    Other(String),
}

impl WindowsEdition {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Windows2000 => "2000",
            Self::Xp => "XP",
            Self::Vista => "Vista",
            Self::Seven => "7",
            Self::Nt => "NT",
            Self::Me => "ME",
            Self::Ce => "CE",
            Self::Phone => "Phone",
            Self::Unknown => "Windows",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for WindowsEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WindowsEdition {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match_ignore_ascii_case_str! {
            match (s) {
                "2000" => Self::Windows2000,
                "xp" => Self::Xp,
                "vista" => Self::Vista,
                "7" => Self::Seven,
                "nt" => Self::Nt,
                "me" => Self::Me,
                "ce" => Self::Ce,
                "phone" => Self::Phone,
                "windows" => Self::Unknown,
                _ => {
                    let token = s.trim();
                    if token.is_empty() {
                        return Err(OpaqueError::from_display("empty windows edition token"));
                    }
                    Self::Other(token.to_owned())
                },
            }
        })
    }
}

impl Serialize for WindowsEdition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WindowsEdition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Windows mobile variant: the legacy CE token, or a phone OS version.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowsMobile {
    /// Windows CE
    Ce,
    /// `Windows Phone OS <version>`
    PhoneOs(f64),
}

impl Serialize for WindowsMobile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Ce => serializer.serialize_str("CE"),
            Self::PhoneOs(version) => serializer.serialize_f64(*version),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WindowsMobileRepr {
    Version(f64),
    Token(String),
}

impl<'de> Deserialize<'de> for WindowsMobile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match WindowsMobileRepr::deserialize(deserializer)? {
            WindowsMobileRepr::Version(version) => Ok(Self::PhoneOs(version)),
            WindowsMobileRepr::Token(token) if token.eq_ignore_ascii_case("CE") => Ok(Self::Ce),
            WindowsMobileRepr::Token(token) => Err(serde::de::Error::custom(format!(
                "invalid windows mobile token: {token}"
            ))),
        }
    }
}
