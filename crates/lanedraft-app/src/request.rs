// Request decoding and validation at the command-line boundary.

use thiserror::Error;

use lanedraft_core::draft::hero::Lane;
use lanedraft_core::{DraftRequest, DraftResponse, FactStore, Recommender};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed draft request: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unknown lane `{value}`; expected one of: {lanes}", lanes = valid_lanes())]
    InvalidLane { value: String },

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

fn valid_lanes() -> String {
    Lane::ALL
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode a JSON draft request and check its requested lane.
pub fn parse_request(text: &str) -> Result<DraftRequest, RequestError> {
    let request: DraftRequest = serde_json::from_str(text).map_err(RequestError::Parse)?;
    if Lane::from_str_lane(&request.requested_lane).is_none() {
        return Err(RequestError::InvalidLane {
            value: request.requested_lane,
        });
    }
    Ok(request)
}

/// Answer one request against `facts` and render the response as pretty JSON.
pub fn answer(facts: &FactStore, top_n: usize, text: &str) -> Result<String, RequestError> {
    let request = parse_request(text)?;
    let response: DraftResponse = Recommender::new(facts).with_top_n(top_n).recommend(&request);
    serde_json::to_string_pretty(&response).map_err(RequestError::Encode)
}
