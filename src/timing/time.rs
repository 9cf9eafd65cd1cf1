use once_cell::sync::Lazy;
use regex::Regex;

/// `[[HH:]MM:]SS[.ddd...]` with two-digit hour, minute and second fields.
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:(?P<h>[0-9]{2}):)?(?P<m>[0-9]{2}):)?(?P<s>[0-9]{2})(?:\.(?P<ms>[0-9]+))?$")
        .expect("time regex")
});

/// Parse a time token into fractional seconds.
///
/// Returns `None` when `text` does not match `[[HH:]MM:]SS[.ddd...]`. Zero is a
/// valid result, so callers must not treat `Some(0.0)` as a failure.
///
/// The digits after the dot are read as a whole number of milliseconds no
/// matter how many there are, so `03.500` is `3.5`, `03.12` is `3.012` and
/// `03.5` is `3.005`. Existing timing files depend on this reading.
pub fn parse_time(text: &str) -> Option<f64> {
    let caps = TIME_RE.captures(text)?;

    // Every group is digits only, so parsing can't fail once the regex matched.
    let component = |name: &str| {
        caps.name(name)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    let whole = component("h") * 3600.0 + component("m") * 60.0 + component("s");
    Some(whole + component("ms") / 1000.0)
}
