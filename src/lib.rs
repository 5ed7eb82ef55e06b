pub mod dedup;
pub mod export;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod record;
pub mod sources;
pub mod summary;
