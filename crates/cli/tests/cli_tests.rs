use cli::decode::{self, InputDocument};
use cli::{dispatch, encode};
use transit_catalogue::graph::TransferGraph;

const RENDER_SETTINGS: &str = r#"{
    "width": 600.0, "height": 400.0, "padding": 50.0,
    "stop_radius": 5.0, "line_width": 14.0,
    "bus_label_font_size": 20.0, "bus_label_offset": [7.0, 15.0],
    "stop_label_font_size": 20.0, "stop_label_offset": [7.0, -3.0],
    "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3.0,
    "color_palette": ["green", [255, 160, 0]]
}"#;

fn run(document_json: &str) -> Vec<encode::StatResponse> {
    let document: InputDocument = serde_json::from_str(document_json).unwrap();
    let catalogue = decode::build_catalogue(&document);
    let graph = TransferGraph::build(&catalogue);
    dispatch::dispatch(&catalogue, &graph, &document.render_settings, &document.stat_requests)
}

fn scenario_1_document() -> String {
    format!(
        r#"{{
            "base_requests": [
                {{"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0, "road_distances": {{"B": 600.0}}}},
                {{"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01}},
                {{"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}}
            ],
            "render_settings": {render_settings},
            "routing_settings": {{"bus_wait_time": 6.0, "bus_velocity": 40.0}},
            "stat_requests": [
                {{"type": "Route", "id": 1, "from": "A", "to": "B"}},
                {{"type": "Bus", "id": 2, "name": "1"}},
                {{"type": "Stop", "id": 3, "name": "A"}},
                {{"type": "Map", "id": 4}},
                {{"type": "Bus", "id": 5, "name": "ghost"}}
            ]
        }}"#,
        render_settings = RENDER_SETTINGS
    )
}

#[test]
fn decode_dispatch_encode_round_trip_matches_scenario_1() {
    let document = scenario_1_document();
    let responses = run(&document);
    assert_eq!(responses.len(), 5);

    match &responses[0] {
        encode::StatResponse::Route { request_id, total_time, items } => {
            assert_eq!(*request_id, 1);
            assert!((total_time - 6.9).abs() < 1e-9);
            assert_eq!(items.len(), 2);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match &responses[1] {
        encode::StatResponse::Bus { request_id, stop_count, unique_stop_count, route_length, .. } => {
            assert_eq!(*request_id, 2);
            assert_eq!(*stop_count, 3);
            assert_eq!(*unique_stop_count, 2);
            assert_eq!(*route_length, 1200.0);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match &responses[2] {
        encode::StatResponse::Stop { request_id, buses } => {
            assert_eq!(*request_id, 3);
            assert_eq!(buses, &vec!["1".to_string()]);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match &responses[3] {
        encode::StatResponse::Map { request_id, map } => {
            assert_eq!(*request_id, 4);
            assert!(map.contains("<svg"));
        }
        other => panic!("unexpected response: {other:?}"),
    }

    assert!(matches!(
        &responses[4],
        encode::StatResponse::NotFound { request_id: 5, .. }
    ));
}

#[test]
fn encode_document_produces_a_single_json_array_with_trailing_newline() {
    let document = scenario_1_document();
    let responses = run(&document);
    let mut buf = Vec::new();
    encode::encode_document(&responses, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.ends_with('\n'));
    let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn malformed_document_is_a_decode_error() {
    let err = decode::decode_document("not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse"));
}
