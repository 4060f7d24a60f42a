//! Wire shapes for the output document and the final serialization pass.

use std::io::Write;

use serde::Serialize;

/// One leg of a found route, tagged by `type` on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemDto {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}

/// One response, in request order. Shape alone disambiguates on the wire —
/// no explicit tag field, matching the literal response shapes this engine
/// promises regardless of what produced them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        curvature: Option<f64>,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItemDto>,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

/// Serializes the ordered response list as one JSON array, followed by a
/// trailing newline.
pub fn encode_document(responses: &[StatResponse], mut writer: impl Write) -> Result<(), serde_json::Error> {
    serde_json::to_writer(&mut writer, responses)?;
    let _ = writeln!(writer);
    Ok(())
}
