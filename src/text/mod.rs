// Text processing module
// Public interface for normalization and stem matching

mod normalize;
mod stemmer;

pub use normalize::{normalize, tokens};
pub use stemmer::{tokens_match, variants};
