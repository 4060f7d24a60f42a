use thiserror::Error;

/// A construction-time violation of a catalogue invariant.
///
/// These are never fatal to the whole ingest: the decoder logs the offending
/// record and drops it, then continues with the remaining `base_requests`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("stop {0:?} already registered")]
    DuplicateStop(String),
    #[error("bus {0:?} already registered")]
    DuplicateBus(String),
    #[error("bus {bus:?} references unknown stop {stop:?}")]
    UnknownStopInRoute { bus: String, stop: String },
    #[error("invalid routing parameters: wait_time={wait_time}, velocity={velocity}")]
    InvalidRoutingParams { wait_time: f64, velocity: f64 },
}
