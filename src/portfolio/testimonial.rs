//! Client testimonial entries.

use serde::{Deserialize, Serialize};

/// One client testimonial.
///
/// `rating` is expected to fall in 1–5 but the store does not enforce the
/// range; enforcement, where wanted, lives in the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub feedback: String,
    pub rating: f64,
}
