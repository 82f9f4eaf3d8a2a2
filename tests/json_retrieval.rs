use quoterack::json::JsonSource;
use quoterack::source::QuoteSource;
use serde_json::json;

fn write_doc(name: &str, doc: serde_json::Value) -> String {
    let path = format!("test_quoterack_{name}.json");
    std::fs::write(&path, doc.to_string()).expect("write doc");
    path
}

fn sample_doc() -> serde_json::Value {
    json!({
        "quotes": [
            {
                "author": "Seneca",
                "quote": "We suffer more often in imagination than in reality.",
                "comment": "From the letters to Lucilius.",
                "day": 1,
                "month": 4,
                "year": 64,
                "annodomini": true
            },
            {
                "author": "Heraclitus",
                "quote": "No man ever steps in the same river twice.",
                "year": 500,
                "annodomini": false
            },
            {
                "author": "Seneca",
                "quote": "Luck is what happens when preparation meets opportunity.",
                "year": 62,
                "annodomini": true
            }
        ]
    })
}

#[test]
fn count_matches_array_length() {
    let path = write_doc("json_count", sample_doc());
    assert_eq!(JsonSource::new(path.as_str()).count(), 3);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn count_is_zero_when_key_missing() {
    let path = write_doc("json_no_key", json!({ "other": [] }));
    assert_eq!(JsonSource::new(path.as_str()).count(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn count_is_zero_when_key_is_not_an_array() {
    let path = write_doc("json_wrong_type", json!({ "quotes": { "author": "Seneca" } }));
    let source = JsonSource::new(path.as_str());
    assert_eq!(source.count(), 0);
    assert!(source.get_all().is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn single_quote_is_fully_populated() {
    let path = write_doc("json_single", sample_doc());
    let quote = JsonSource::new(path.as_str()).get(0).expect("first quote");
    assert_eq!(quote.author(), Some("Seneca"));
    assert_eq!(
        quote.text(),
        Some("We suffer more often in imagination than in reality.")
    );
    assert_eq!(quote.comment(), Some("From the letters to Lucilius."));
    assert_eq!(quote.day(), 1);
    assert_eq!(quote.month(), 4);
    assert_eq!(quote.year(), 64);
    assert!(quote.common_era());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn absent_fields_take_their_defaults() {
    let path = write_doc("json_defaults", sample_doc());
    let quote = JsonSource::new(path.as_str()).get(1).expect("second quote");
    assert_eq!(quote.comment(), None);
    assert_eq!(quote.day(), 0);
    assert_eq!(quote.month(), 0);
    assert!(!quote.common_era());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn era_defaults_to_common_era() {
    let path = write_doc("json_era_default", json!({ "quotes": [{ "author": "Anon" }] }));
    let quote = JsonSource::new(path.as_str()).get(0).expect("quote");
    assert!(quote.common_era(), "a quote without an era field is CE");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn non_boolean_era_leaves_the_default() {
    let path = write_doc(
        "json_era_number",
        json!({ "quotes": [{ "author": "Anon", "annodomini": 1 }] }),
    );
    let quote = JsonSource::new(path.as_str()).get(0).expect("quote");
    assert!(quote.common_era());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_strings_collapse_to_none() {
    let path = write_doc(
        "json_empty_string",
        json!({ "quotes": [{ "author": "", "quote": "something" }] }),
    );
    let quote = JsonSource::new(path.as_str()).get(0).expect("quote");
    assert_eq!(quote.author(), None);
    assert_eq!(quote.text(), Some("something"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn get_out_of_bounds_is_none() {
    let path = write_doc("json_oob", sample_doc());
    assert!(JsonSource::new(path.as_str()).get(3).is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn get_all_preserves_array_order() {
    let path = write_doc("json_order", sample_doc());
    let chain = JsonSource::new(path.as_str()).get_all().expect("chain");
    let authors: Vec<_> = chain.iter().map(|q| q.author().unwrap().to_string()).collect();
    assert_eq!(authors, ["Seneca", "Heraclitus", "Seneca"]);
    assert_eq!(chain.node_count(), 3);
    assert_eq!(chain.len_from(chain.head()), 3);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_array_yields_no_chain() {
    let path = write_doc("json_empty_array", json!({ "quotes": [] }));
    let source = JsonSource::new(path.as_str());
    assert_eq!(source.count(), 0);
    assert!(source.get_all().is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_element_truncates_the_chain() {
    let doc = json!({
        "quotes": [
            { "author": "Seneca", "quote": "one" },
            { "author": "Cato", "quote": "two" },
            "not an object",
            { "author": "Cicero", "quote": "four" }
        ]
    });
    let path = write_doc("json_truncate", doc);
    let source = JsonSource::new(path.as_str());
    let chain = source.get_all().expect("partial chain");
    // The chain ends before the malformed element; the count still sees
    // the whole array, which is how a caller detects the truncation.
    assert_eq!(chain.node_count(), 2);
    assert_eq!(source.count(), 4);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_first_element_yields_no_chain() {
    let doc = json!({ "quotes": [42, { "author": "Seneca", "quote": "one" }] });
    let path = write_doc("json_truncate_first", doc);
    assert!(JsonSource::new(path.as_str()).get_all().is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_element_is_no_single_result() {
    let doc = json!({ "quotes": [{ "author": "Seneca" }, 42] });
    let path = write_doc("json_single_malformed", doc);
    assert!(JsonSource::new(path.as_str()).get(1).is_none());
    let _ = std::fs::remove_file(&path);
}
