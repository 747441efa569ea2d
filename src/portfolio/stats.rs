//! Aggregate statistics shown by the preview.

use serde::Serialize;

/// Counts and average rating derived from the current entity state.
///
/// `avg_rating` is pre-formatted to one decimal place; an empty testimonial
/// sequence yields the literal `"0.0"` rather than a division error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub services: usize,
    pub projects: usize,
    pub testimonials: usize,
    pub avg_rating: String,
}

impl PortfolioStats {
    /// Format an average from a slice of ratings.
    pub(crate) fn format_avg(ratings: &[f64]) -> String {
        if ratings.is_empty() {
            "0.0".to_string()
        } else {
            let avg = ratings.iter().sum::<f64>() / ratings.len() as f64;
            format!("{:.1}", avg)
        }
    }
}
