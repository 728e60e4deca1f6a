use airy_utils::str::submatch_ignore_ascii_case;

use super::HostHints;
use super::info::{BrowserInfo, Client, EngineInfo, SystemInfo, WindowsEdition, WindowsMobile};

/// Maximum length of a user-agent string that we take into consideration.
/// Real strings top out around 300 characters.
const MAX_UA_LENGTH: usize = 512;

/// Classify `ua` plus `platform` into a [`Client`].
///
/// Never fails: every field for which no pattern matched keeps
/// its default value.
pub(crate) fn classify_user_agent(ua: &str, platform: Option<&str>, hints: &HostHints) -> Client {
    let ua = cap_length(ua);

    let mut client = Client::default();
    detect_engine_and_browser(ua, hints, &mut client.engine, &mut client.browser);
    detect_system(ua, platform, &mut client.system);
    client
}

fn cap_length(ua: &str) -> &str {
    if ua.len() <= MAX_UA_LENGTH {
        return ua;
    }
    tracing::trace!(len = ua.len(), "oversized user-agent input: truncating");
    let mut end = MAX_UA_LENGTH;
    while !ua.is_char_boundary(end) {
        end -= 1;
    }
    &ua[..end]
}

/// The ordered engine/browser cascade: the first matching rule wins
/// and no later rule is evaluated.
fn detect_engine_and_browser(
    ua: &str,
    hints: &HostHints,
    engine: &mut EngineInfo,
    browser: &mut BrowserInfo,
) {
    if let Some(ver) = hints.opera_version.as_deref() {
        // the host api is authoritative, the string is not even consulted
        engine.opera = float_prefix(ver);
        engine.ver = Some(ver.to_owned());
        browser.ver = Some(ver.to_owned());
    } else if let Some(ver) = capture_word(ua, "AppleWebKit/") {
        engine.webkit = float_prefix(ver);
        engine.ver = Some(ver.to_owned());
        if let Some(chrome) = capture_word(ua, "Chrome/") {
            browser.chrome = float_prefix(chrome);
            browser.ver = Some(chrome.to_owned());
        } else if let Some(safari) = capture_word(ua, "Version/") {
            browser.safari = float_prefix(safari);
            browser.ver = Some(safari.to_owned());
        } else {
            // webkit builds that predate the Version/ token
            let (version, label) = legacy_safari_version(engine.webkit);
            browser.safari = version;
            browser.ver = Some(label.to_owned());
        }
    } else if let Some(ver) =
        capture_word(ua, "KHTML/").or_else(|| capture_until(ua, "Konqueror/", b';'))
    {
        engine.khtml = float_prefix(ver);
        browser.konq = engine.khtml;
        engine.ver = Some(ver.to_owned());
        browser.ver = Some(ver.to_owned());
    } else if let Some(rv) = capture_gecko_rv(ua) {
        engine.gecko = float_prefix(rv);
        engine.ver = Some(rv.to_owned());
        if let Some(firefox) = capture_word(ua, "Firefox/") {
            browser.firefox = float_prefix(firefox);
            // the firefox capture lands in the engine's ver field,
            // browser.ver stays untouched on this path
            engine.ver = Some(firefox.to_owned());
        }
    } else if let Some(ver) = capture_until(ua, "MSIE ", b';') {
        engine.ie = float_prefix(ver);
        engine.ver = Some(ver.to_owned());
        browser.ver = Some(ver.to_owned());
    }

    // these two always mirror the engine, whichever branch ran
    browser.ie = engine.ie;
    browser.opera = engine.opera;
}

/// Version table for webkit builds without an explicit safari version.
fn legacy_safari_version(webkit: f64) -> (f64, &'static str) {
    if webkit < 100.0 {
        (1.0, "1")
    } else if webkit < 312.0 {
        (1.2, "1.2")
    } else if webkit < 412.0 {
        (1.3, "1.3")
    } else {
        (2.0, "2")
    }
}

fn detect_system(ua: &str, platform: Option<&str>, system: &mut SystemInfo) {
    if let Some(platform) = platform {
        system.mac = platform.starts_with("Mac");
        system.x11 = platform == "X11" || platform.starts_with("Linux");
        if platform.starts_with("Win") {
            system.win = Some(windows_edition(ua));
        }
    }

    system.iphone = ua.contains("iPhone");
    system.ipod = ua.contains("iPod");
    system.ipad = ua.contains("iPad");
    system.nokia_n = ua.contains("NokiaN");

    match &system.win {
        Some(WindowsEdition::Ce) => {
            system.win_mobile = Some(WindowsMobile::Ce);
        }
        Some(WindowsEdition::Other(token)) if token == "Ph" => {
            if let Some(version) = capture_phone_os_version(ua) {
                system.win = Some(WindowsEdition::Phone);
                system.win_mobile = Some(WindowsMobile::PhoneOs(version));
            }
        }
        _ => {}
    }

    if system.mac && ua.contains("Mobile") {
        // the Mobile token is proof enough of ios, only the version
        // is a guess when the pattern fails
        system.ios = Some(capture_ios_version(ua).unwrap_or(2.0));
    }

    system.android = capture_android_version(ua);

    system.wii = ua.contains("Wii");
    system.ps = submatch_ignore_ascii_case(ua, "playstation");
}

/// `Win`, optionally `dows `, then a two char token containing neither
/// `d` nor `o`, optionally followed by one whitespace and a dotted version.
fn windows_edition(ua: &str) -> WindowsEdition {
    let Some((token, nt_version)) = capture_windows_token(ua) else {
        return WindowsEdition::Unknown;
    };
    match token.as_str() {
        "NT" => match nt_version {
            Some("5.0") => WindowsEdition::Windows2000,
            Some("5.1") => WindowsEdition::Xp,
            Some("6.0") => WindowsEdition::Vista,
            Some("6.1") => WindowsEdition::Seven,
            _ => WindowsEdition::Nt,
        },
        "9x" => WindowsEdition::Me,
        "CE" => WindowsEdition::Ce,
        _ => WindowsEdition::Other(token),
    }
}

fn capture_windows_token(ua: &str) -> Option<(String, Option<&str>)> {
    for start in occurrences(ua, "Win") {
        let rest = &ua[start + "Win".len()..];
        for tail in [rest.strip_prefix("dows "), Some(rest)].into_iter().flatten() {
            if let Some(found) = windows_token_at(tail) {
                return Some(found);
            }
        }
    }
    None
}

fn windows_token_at(s: &str) -> Option<(String, Option<&str>)> {
    // at most one whitespace between the prefix and the token,
    // so that `Win 9x 4.90` resolves to the `9x` token
    let mut s = s;
    if let Some(c) = s.chars().next() {
        if c.is_whitespace() {
            s = &s[c.len_utf8()..];
        }
    }

    let mut chars = s.chars();
    let c1 = chars.next()?;
    let c2 = chars.next()?;
    if matches!(c1, 'd' | 'o') || matches!(c2, 'd' | 'o') {
        return None;
    }

    let token_len = c1.len_utf8() + c2.len_utf8();
    let token = s[..token_len].to_owned();

    // at most one whitespace between token and version
    let mut after = &s[token_len..];
    if let Some(c) = after.chars().next() {
        if c.is_whitespace() {
            after = &after[c.len_utf8()..];
        }
    }
    Some((token, leading_version(after, b'.')))
}

/// `rv:<version>) Gecko/<date>`: the version runs up to the closing
/// parenthesis, which must be followed by an eight digit dated
/// gecko token.
fn capture_gecko_rv(ua: &str) -> Option<&str> {
    for start in occurrences(ua, "rv:") {
        let rest = &ua[start + "rv:".len()..];
        let Some(close) = rest.find(')') else {
            return None; // no closing parenthesis anywhere further on
        };
        if close == 0 {
            continue;
        }
        let after = &rest[close + 1..];
        let Some(date) = after.strip_prefix(" Gecko/") else {
            continue;
        };
        let date = date.as_bytes();
        if date.len() >= 8 && date[..8].iter().all(u8::is_ascii_digit) {
            return Some(&rest[..close]);
        }
    }
    None
}

fn capture_phone_os_version(ua: &str) -> Option<f64> {
    let needle = "Windows Phone OS ";
    for start in occurrences(ua, needle) {
        if let Some(capture) = version_any_sep(&ua[start + needle.len()..]) {
            return Some(float_prefix(capture));
        }
    }
    None
}

/// `CPU (iPhone )?OS <major>_<minor>`, with the underscore swapped
/// for a decimal point before numeric parsing.
fn capture_ios_version(ua: &str) -> Option<f64> {
    for start in occurrences(ua, "CPU ") {
        let mut rest = &ua[start + "CPU ".len()..];
        if let Some(stripped) = rest.strip_prefix("iPhone ") {
            rest = stripped;
        }
        let Some(version_part) = rest.strip_prefix("OS ") else {
            continue;
        };
        if let Some(capture) = leading_version(version_part, b'_') {
            return Some(float_prefix(&capture.replace('_', ".")));
        }
    }
    None
}

fn capture_android_version(ua: &str) -> Option<f64> {
    let needle = "Android ";
    for start in occurrences(ua, needle) {
        if let Some(capture) = leading_version(&ua[start + needle.len()..], b'.') {
            return Some(float_prefix(capture));
        }
    }
    None
}

/// Capture the non-empty run of non-whitespace directly after `needle`.
fn capture_word<'a>(ua: &'a str, needle: &str) -> Option<&'a str> {
    capture_after(ua, needle, |c| !c.is_whitespace())
}

/// Capture the non-empty run directly after `needle`,
/// up to (and excluding) `stop`.
fn capture_until<'a>(ua: &'a str, needle: &str, stop: u8) -> Option<&'a str> {
    capture_after(ua, needle, move |c| c != stop as char)
}

/// Scan every occurrence of `needle` and return the first non-empty
/// capture of consecutive chars accepted by `keep`.
fn capture_after<'a>(ua: &'a str, needle: &str, keep: impl Fn(char) -> bool) -> Option<&'a str> {
    for start in occurrences(ua, needle) {
        let rest = &ua[start + needle.len()..];
        let end = rest.find(|c| !keep(c)).unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
    }
    None
}

/// Byte offsets of every occurrence of `needle` within `haystack`,
/// in scan order. Case sensitive; `needle` must be ASCII.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    debug_assert!(needle.is_ascii() && !needle.is_empty());
    let mut from = 0;
    std::iter::from_fn(move || {
        let found = haystack.get(from..)?.find(needle)?;
        let at = from + found;
        from = at + 1;
        Some(at)
    })
}

/// `<digits><sep><digits>` at the start of `s`.
fn leading_version(s: &str, sep: u8) -> Option<&str> {
    let d1 = leading_digits(s);
    if d1 == 0 || s.as_bytes().get(d1) != Some(&sep) {
        return None;
    }
    let d2 = leading_digits(&s[d1 + 1..]);
    if d2 == 0 {
        return None;
    }
    Some(&s[..d1 + 1 + d2])
}

/// `<digits><any one char><digits>` at the start of `s`.
fn version_any_sep(s: &str) -> Option<&str> {
    let d1 = leading_digits(s);
    if d1 == 0 {
        return None;
    }
    let sep = s[d1..].chars().next()?;
    let after = d1 + sep.len_utf8();
    let d2 = leading_digits(&s[after..]);
    if d2 == 0 {
        return None;
    }
    Some(&s[..after + d2])
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading float prefix of `s`: optional sign, digits, optionally a
/// decimal point and more digits. Everything after the prefix is
/// ignored, so `"91.0.4472.124"` parses as `91.0`. Yields the `0.0`
/// default when `s` does not start with a number.
fn float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_digits = leading_digits(&s[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&s[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        } else if int_digits > 0 {
            end += 1; // "14." parses as 14
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}
