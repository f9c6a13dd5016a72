pub mod fetcher;

pub use fetcher::{FetchError, LeetCodeCnFetcher, StatsFetcher};
