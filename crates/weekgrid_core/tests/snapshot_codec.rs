use serde_json::json;
use weekgrid_core::snapshot::{decode, encode, from_json, to_json};
use weekgrid_core::store::{create_activity, set_time_slot, set_wake_offset};
use weekgrid_core::{Category, ScheduleState, SnapshotError, BLOCKS_PER_DAY, DAYS_PER_WEEK};

fn sample_state() -> ScheduleState {
    let state = ScheduleState::default();
    let state = create_activity(&state, "Write", Category::DeepWork).unwrap();
    let state = create_activity(&state, "Chat", Category::Social).unwrap();
    let state = set_time_slot(&state, 0, 3, Some("Write")).unwrap();
    let state = set_time_slot(&state, 6, 0, Some("Chat")).unwrap();
    set_wake_offset(&state, 28).unwrap()
}

fn empty_times() -> serde_json::Value {
    json!(vec![vec![serde_json::Value::Null; BLOCKS_PER_DAY]; DAYS_PER_WEEK])
}

#[test]
fn json_round_trip_preserves_state() {
    let state = sample_state();
    let text = to_json(&state).unwrap();
    assert_eq!(from_json(&text).unwrap(), state);
}

#[test]
fn wire_shape_matches_external_schema() {
    let text = to_json(&sample_state()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["wakeUpAt"], 28);
    assert_eq!(value["optionsByName"]["Write"], "Deep Work");
    assert_eq!(value["optionsByName"]["Chat"], "Social");
    assert_eq!(value["times"].as_array().unwrap().len(), DAYS_PER_WEEK);
    assert_eq!(value["times"][0].as_array().unwrap().len(), BLOCKS_PER_DAY);
    assert_eq!(value["times"][0][3], "Write");
    assert!(value["times"][0][0].is_null());

    // 4-space indentation and sorted keys
    assert!(text.contains("\n    \"times\""));
    let chat = text.find("\"Chat\": \"Social\"").unwrap();
    let write = text.find("\"Write\": \"Deep Work\"").unwrap();
    assert!(chat < write);
}

#[test]
fn nulls_and_empty_strings_load_as_unassigned() {
    let mut times = empty_times();
    times[2][4] = json!("");
    times[2][5] = json!("Read");
    let payload = json!({
        "times": times,
        "optionsByName": { "Read": "Education" },
        "wakeUpAt": 20
    });

    let state = from_json(&payload.to_string()).unwrap();
    assert_eq!(state.grid().activity_at(2, 4), None);
    assert_eq!(state.grid().activity_at(2, 5), Some("Read"));
    assert_eq!(state.grid().assigned_count(), 1);

    // re-encoding writes null, never the empty string
    let encoded = encode(&state);
    assert_eq!(encoded.times[2][4], None);
}

#[test]
fn unknown_category_label_is_rejected() {
    let payload = json!({
        "times": empty_times(),
        "optionsByName": { "Nap": "Sleeping" },
        "wakeUpAt": 20
    });

    let err = from_json(&payload.to_string()).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::InvalidCategory { ref activity, ref label }
            if activity == "Nap" && label == "Sleeping"
    ));
}

#[test]
fn category_labels_must_match_exactly() {
    let payload = json!({
        "times": empty_times(),
        "optionsByName": { "Focus": "DeepWork" },
        "wakeUpAt": 20
    });
    assert!(matches!(
        from_json(&payload.to_string()),
        Err(SnapshotError::InvalidCategory { .. })
    ));
}

#[test]
fn schema_violations_are_malformed() {
    let wrong_days = json!({
        "times": vec![vec![serde_json::Value::Null; BLOCKS_PER_DAY]; 6],
        "optionsByName": {},
        "wakeUpAt": 20
    });
    let dangling = {
        let mut times = empty_times();
        times[0][0] = json!("Ghost");
        json!({ "times": times, "optionsByName": {}, "wakeUpAt": 20 })
    };
    let bad_wake = json!({ "times": empty_times(), "optionsByName": {}, "wakeUpAt": 96 });
    let negative_wake = json!({ "times": empty_times(), "optionsByName": {}, "wakeUpAt": -1 });
    let missing_field = json!({ "times": empty_times(), "optionsByName": {} });

    for payload in [wrong_days, dangling, bad_wake, negative_wake, missing_field] {
        let err = from_json(&payload.to_string()).unwrap_err();
        assert!(
            matches!(err, SnapshotError::MalformedSnapshot(_)),
            "expected malformed for {payload}, got {err}"
        );
    }

    assert!(matches!(
        from_json("not json"),
        Err(SnapshotError::MalformedSnapshot(_))
    ));
}

#[test]
fn decode_of_encode_is_identity_for_default_state() {
    let state = ScheduleState::default();
    assert_eq!(decode(encode(&state)).unwrap(), state);
}
