use breachscope_normalize::{flatten, locate, NormalizeError, Normalizer};
use serde_json::{json, Value};

fn normalized_names(payload: &Value) -> Vec<String> {
    Normalizer::default()
        .normalize(payload)
        .expect("normalize payload")
        .into_breaches()
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn test_check_email_response() {
    let payload: Value =
        serde_json::from_str(r#"{"breaches": [["Adobe", "Canva", "LinkedIn", "Adobe"]]}"#)
            .expect("parse payload");

    assert_eq!(
        normalized_names(&payload),
        vec!["Adobe", "Canva", "LinkedIn", "Adobe"]
    );
}

#[test]
fn test_breach_analytics_response() {
    let payload = json!({
        "BreachMetrics": {"industry": [["Information Technology", 2]]},
        "BreachesSummary": {"site": "Adobe;Canva"},
        "ExposedBreaches": {
            "breaches_details": [
                {
                    "breach": "Adobe",
                    "details": "In October 2013, 153 million accounts were breached.",
                    "domain": "adobe.com",
                    "industry": "Technology",
                    "xposed_records": 152_445_165
                },
                {
                    "breach": "Canva",
                    "domain": "canva.com",
                    "xposed_records": 137_272_116
                }
            ]
        },
        "PastesSummary": {"cnt": 0, "domain": "", "tmpstmp": ""}
    });

    assert_eq!(normalized_names(&payload), vec!["Adobe", "Canva"]);
}

#[test]
fn test_mixed_record_shapes() {
    let payload = json!({
        "Results": [
            "PlainString",
            {"name": "Named"},
            {"domain": "domain.example"},
            ["NestedA", ["NestedB"]],
            {"unknown": "shape"},
            null,
            7
        ]
    });

    assert_eq!(
        normalized_names(&payload),
        vec![
            "PlainString",
            "Named",
            "domain.example",
            "NestedA",
            "NestedB",
            r#"{"unknown":"shape"}"#,
            "7"
        ]
    );
}

#[test]
fn test_data_object_flattened_at_object_level() {
    let payload = json!({
        "data": {
            "recent": ["Dropbox"],
            "label": "Tumblr",
            "count": 2,
            "meta": {"older": ["Ignored"]}
        }
    });

    assert_eq!(normalized_names(&payload), vec!["Dropbox", "Tumblr"]);
}

#[test]
fn test_unrecognized_shapes_yield_zero() {
    for payload in [json!({}), json!({"status": "success"}), json!([]), json!({"breaches": {}})] {
        let result = Normalizer::default()
            .normalize(&payload)
            .expect("normalize payload");
        assert_eq!(result.count(), 0, "payload: {payload}");
    }
}

#[test]
fn test_not_found_body_yields_zero() {
    // The service answers 404 with a small error object.
    let payload = json!({"Error": "Not found"});
    assert_eq!(locate(&payload).expect("locate"), None);
    assert!(normalized_names(&payload).is_empty());
}

#[test]
fn test_flatten_of_located_node_matches_normalize() {
    let payload = json!({"exposed_breaches": [["A", "B"], "C"]});
    let located = locate(&payload).expect("locate").expect("located node");
    let flattened: Vec<String> = flatten(located)
        .expect("flatten")
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(flattened, normalized_names(&payload));
}

#[test]
fn test_pathological_depth_is_reported() {
    let mut payload = json!("core");
    for _ in 0..100 {
        payload = json!([payload]);
    }

    let err = Normalizer::default()
        .normalize(&json!({ "breaches": payload }))
        .expect_err("deep payload should hit the depth limit");
    assert!(matches!(err, NormalizeError::DepthExceeded { limit: 64 }));
}
