use lenient_uri::Query;

/// Decodes `input`, checks the recorded `(key, values)` entries, and
/// checks that re-encoding gives back `input`.
fn check(input: &str, entries: &[(&str, &[&str])]) {
    check_str(input, entries, input);
}

fn check_str(input: &str, entries: &[(&str, &[&str])], round_trip: &str) {
    let query = Query::decode(input);
    for &(key, values) in entries {
        assert_eq!(query.values(key), values, "values of {key:?} in {input:?}");
    }
    assert_eq!(query.len(), entries.len(), "key count of {input:?}");
    assert_eq!(query.encode(), round_trip, "re-encoding {input:?}");
}

#[test]
fn decodes_single_param() {
    check("foo=bar", &[("foo", &["bar"])]);
}

#[test]
fn decodes_repeated_key_by_appending() {
    check("foo=bar&foo=foo", &[("foo", &["bar", "foo"])]);
}

#[test]
fn decodes_plus_as_space() {
    check("q=go+language", &[("q", &["go language"])]);
}

#[test]
fn decodes_percent_and_reencodes_as_plus() {
    check_str("q=go%20language", &[("q", &["go language"])], "q=go+language");
}

#[test]
fn decodes_bare_key() {
    check("q", &[("q", &[""])]);
}

#[test]
fn bare_key_and_empty_value_collapse() {
    // "a=" decodes like "a" and renders without "=".
    check_str("a=", &[("a", &[""])], "a");
}

#[test]
fn decodes_encoded_key() {
    check_str("a+b=c", &[("a b", &["c"])], "a+b=c");
}

#[test]
fn decodes_utf8_values() {
    check_str("q=%E6%B5%8B%E8%AF%95", &[("q", &["测试"])], "q=%E6%B5%8B%E8%AF%95");
}

#[test]
fn preserves_key_order() {
    check(
        "b=2&a=1&c=3",
        &[("b", &["2"]), ("a", &["1"]), ("c", &["3"])],
    );
}

#[test]
fn splits_each_segment_on_the_first_equals() {
    check_str("a=b=c", &[("a", &["b=c"])], "a=b%3Dc");
}

#[test]
fn get_returns_the_first_value() {
    let query = Query::decode("foo=bar&foo=foo");
    assert_eq!(query.get("foo"), "bar");
    assert_eq!(query.get("nope"), "");
}

#[test]
fn has_distinguishes_absence_from_empty() {
    let query = Query::decode("flag&x=");
    assert!(query.has("flag"));
    assert!(query.has("x"));
    assert_eq!(query.get("flag"), "");
    assert!(!query.has("nope"));
}

#[test]
fn add_appends() {
    let mut query = Query::new();
    query.add("k", "1").add("k", "2").add("other", "3");
    assert_eq!(query.values("k"), ["1", "2"]);
    assert_eq!(query.encode(), "k=1&k=2&other=3");
}

#[test]
fn set_replaces() {
    let mut query = Query::decode("k=1&k=2&other=3");
    query.set("k", ["9"]);
    assert_eq!(query.encode(), "k=9&other=3");
}

#[test]
fn del_removes_the_whole_key() {
    let mut query = Query::decode("k=1&k=2&other=3");
    query.del("k");
    assert!(!query.has("k"));
    assert_eq!(query.encode(), "other=3");
}

#[test]
fn is_empty_only_without_keys() {
    assert!(Query::new().is_empty());
    assert!(!Query::decode("a").is_empty());

    let mut query = Query::decode("a=1");
    query.del("a");
    assert!(query.is_empty());
    assert_eq!(query.encode(), "");
}

#[test]
fn from_pairs_keeps_order() {
    let query = Query::from_pairs([("b", vec!["2"]), ("a", vec!["1", "3"])]);
    assert_eq!(query.encode(), "b=2&a=1&a=3");
}

#[test]
fn encodes_spaces_as_plus_and_escapes_the_rest() {
    let mut query = Query::new();
    query.add("q", "go language").add("sym", "50%&more");
    assert_eq!(query.encode(), "q=go+language&sym=50%25%26more");
}

#[test]
fn display_matches_encode() {
    let query = Query::decode("a=1&b=two+words");
    assert_eq!(query.to_string(), query.encode());
}
