//! Feed components shared across pages.

mod chirp_composer;
mod chirp_feed;

pub use chirp_composer::ChirpComposer;
pub use chirp_feed::ChirpFeed;
