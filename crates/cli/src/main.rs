use std::io;
use std::process;

use cli::{decode, dispatch, encode};
use tracing::{error, info};
use transit_catalogue::graph::TransferGraph;

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let document = match decode::decode_document(io::stdin()) {
        Ok(document) => document,
        Err(err) => {
            error!(%err, "failed to decode input document");
            process::exit(1);
        }
    };

    let catalogue = decode::build_catalogue(&document);
    info!(
        stops = catalogue.stops().len(),
        buses = catalogue.buses().len(),
        "catalogue built"
    );

    let graph = TransferGraph::build(&catalogue);
    let responses = dispatch::dispatch(&catalogue, &graph, &document.render_settings, &document.stat_requests);

    if let Err(err) = encode::encode_document(&responses, io::stdout()) {
        error!(%err, "failed to encode output document");
        process::exit(1);
    }
}
