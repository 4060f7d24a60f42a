//! Turns each parsed `StatRequest` into one `StatResponse` against the
//! frozen catalogue and transfer graph.

use transit_catalogue::catalogue::{Catalogue, StopBuses};
use transit_catalogue::graph::{RouteItem, RouteResult, TransferGraph};

use crate::decode::StatRequest;
use crate::encode::{RouteItemDto, StatResponse};
use crate::render::{render_map, style::RenderSettings};

pub fn dispatch(
    catalogue: &Catalogue,
    graph: &TransferGraph,
    render_settings: &RenderSettings,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| dispatch_one(catalogue, graph, render_settings, request))
        .collect()
}

fn dispatch_one(
    catalogue: &Catalogue,
    graph: &TransferGraph,
    render_settings: &RenderSettings,
    request: &StatRequest,
) -> StatResponse {
    match request {
        StatRequest::Bus { id, name } => match catalogue.get_bus_stats(name) {
            Some(stats) => StatResponse::Bus {
                request_id: *id,
                curvature: stats.curvature,
                route_length: stats.road_length,
                stop_count: stats.stops_on_route,
                unique_stop_count: stats.unique_stops,
            },
            None => not_found(*id),
        },
        StatRequest::Stop { id, name } => match catalogue.get_stop_buses(name) {
            StopBuses::StopNotFound => not_found(*id),
            StopBuses::NoBuses => StatResponse::Stop {
                request_id: *id,
                buses: Vec::new(),
            },
            StopBuses::Buses(buses) => StatResponse::Stop {
                request_id: *id,
                buses: buses.iter().map(|b| b.to_string()).collect(),
            },
        },
        StatRequest::Map { id } => StatResponse::Map {
            request_id: *id,
            map: render_map(catalogue, render_settings),
        },
        StatRequest::Route { id, from, to } => match graph.find_route(from, to) {
            RouteResult::NotFound => not_found(*id),
            RouteResult::Found { total_time, items } => StatResponse::Route {
                request_id: *id,
                total_time,
                items: items.into_iter().map(route_item_dto).collect(),
            },
        },
    }
}

fn route_item_dto(item: RouteItem) -> RouteItemDto {
    match item {
        RouteItem::Wait { stop, time } => RouteItemDto::Wait {
            stop_name: stop.to_string(),
            time,
        },
        RouteItem::Ride { bus, span_count, time } => RouteItemDto::Bus {
            bus: bus.to_string(),
            span_count,
            time,
        },
    }
}

fn not_found(id: i64) -> StatResponse {
    StatResponse::NotFound {
        request_id: id,
        error_message: "not found".to_string(),
    }
}
