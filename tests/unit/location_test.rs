use rstest::rstest;

use tabshell::types::errors::LocationError;
use tabshell::types::location::Location;

#[rstest]
#[case("example.com", "https://example.com")]
#[case("  example.com/path  ", "https://example.com/path")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("about:blank", "about:blank")]
#[case("file:///tmp/index.html", "file:///tmp/index.html")]
#[case("HTTPS://Example.com", "HTTPS://Example.com")]
#[case("localhost:3000", "https://localhost:3000")]
#[case("site.com", "https://site.com")]
fn test_parse_normalizes(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(Location::parse(raw).unwrap().as_str(), expected);
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n")]
fn test_blank_input_rejected(#[case] raw: &str) {
    assert_eq!(Location::parse(raw), Err(LocationError::Empty));
}

#[test]
fn test_custom_scheme_set() {
    let schemes = vec!["gemini".to_string()];
    let loc = Location::normalize("gemini://geminiprotocol.net", "https", &schemes).unwrap();
    assert_eq!(loc.as_str(), "gemini://geminiprotocol.net");

    let loc = Location::normalize("about:blank", "http", &schemes).unwrap();
    assert_eq!(loc.as_str(), "http://about:blank");
}

#[test]
fn test_resolved_location_is_kept_verbatim() {
    let loc = Location::from_resolved("https://www.example.com/landing?ref=1");
    assert_eq!(loc.to_string(), "https://www.example.com/landing?ref=1");
}

#[test]
fn test_serializes_as_plain_string() {
    let loc = Location::parse("example.com").unwrap();
    assert_eq!(serde_json::to_string(&loc).unwrap(), "\"https://example.com\"");
}
