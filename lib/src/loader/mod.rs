// lib/src/loader/mod.rs

pub mod fetcher;
pub mod reference_loader;

pub use fetcher::{HttpFetcher, ReferenceFetcher};
pub use reference_loader::ReferenceLoader;

#[cfg(test)]
pub use fetcher::MockReferenceFetcher;
