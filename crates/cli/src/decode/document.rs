//! Wire shapes for the input document, deserialized via `serde_json`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::render::style::RenderSettings;

/// One entry of `base_requests`: a Stop declaration (with its outgoing road
/// distances) or a Bus declaration. Tagged by `type` on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSettings {
    pub bus_wait_time: f64,
    pub bus_velocity: f64,
}

/// One entry of `stat_requests`, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

/// The whole input document, read in one `serde_json` pass.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub base_requests: Vec<BaseRequest>,
    pub render_settings: RenderSettings,
    pub routing_settings: RoutingSettings,
    pub stat_requests: Vec<StatRequest>,
}
