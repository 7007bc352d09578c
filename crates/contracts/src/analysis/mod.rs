use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response body of `POST /analyze` on the analysis service.
///
/// `detailed_results` keeps the service's row order; the view renders it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub sentiment_distribution: BTreeMap<String, u64>,
    pub detailed_results: Vec<DetailedResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedResult {
    pub text: String,
    pub sentiment: String,
}
