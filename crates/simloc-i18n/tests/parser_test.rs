//! Integration tests for the request scanner and the facade built on it.

use simloc_common::test_utils::init_test_logging;
use simloc_i18n::{
    DefaultRequestParser, InMemorySource, LocalizationError, LocalizationKey,
    LocalizationManager, RequestParser, TemplateLocalizer,
};

#[test]
fn test_parse_reading_order() {
    init_test_logging();
    let request = DefaultRequestParser::new()
        .parse(r"Dear @{title}{Dr}, your order \@ @{shop.name} is @{order.state}{shipped}{2}.")
        .unwrap();

    let keys: Vec<(Option<&str>, Vec<&str>)> = request
        .keys()
        .iter()
        .map(|k| (k.key(), k.arguments().iter().map(String::as_str).collect()))
        .collect();

    assert_eq!(
        keys,
        [
            (None, vec!["Dear "]),
            (Some("title"), vec!["Dr"]),
            (None, vec![", your order @ "]),
            (Some("shop.name"), vec![]),
            (None, vec![" is "]),
            (Some("order.state"), vec!["shipped", "2"]),
            (None, vec!["."]),
        ]
    );
}

#[test]
fn test_unescaped_delimiters_are_rejected() {
    for input in ["Test@", "Test{", "Test}", "@{a} and {b}", "a @ b"] {
        assert!(
            matches!(
                DefaultRequestParser::new().parse(input),
                Err(LocalizationError::UnescapedDelimiter(_))
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_error_message_points_at_delimiter() {
    let err = DefaultRequestParser::new().parse("ab}").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'}'"), "{message}");
    assert!(message.contains("2..3"), "{message}");
}

#[test]
fn test_parsed_request_round_trips_through_json() {
    let request = DefaultRequestParser::new().parse("x @{k}{1}").unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "key": null, "arguments": ["x "] },
            { "key": "k", "arguments": ["1"] }
        ])
    );
}

#[test]
fn test_translate_end_to_end() {
    init_test_logging();
    let source = InMemorySource::new()
        .with_translation("en-us", "test.test", "Test USA")
        .with_translation("en-us", "cart.items", "{} items, {2}")
        .with_translation("en-uk", "test.test", "Test UK");
    let localizer = TemplateLocalizer::new(["en-us", "en-uk"], "en-us", source).unwrap();
    let manager = LocalizationManager::new(localizer);

    assert_eq!(
        manager.translate(None, "Test@{test.test}Test1").unwrap(),
        "TestTest USATest1"
    );
    assert_eq!(
        manager.translate(Some("en-uk"), "@{cart.items}{3}{total}").unwrap(),
        "cart.items"
    );
    assert_eq!(
        manager.translate(None, "@{cart.items}{3}{\\{x\\}}").unwrap(),
        "3 items, {x}"
    );
    assert!(matches!(
        manager.parse("@{}"),
        Err(LocalizationError::EmptyLocalizationKey { .. })
    ));
    assert_eq!(
        manager.parse("plain").unwrap().keys(),
        [LocalizationKey::literal("plain")]
    );
}
