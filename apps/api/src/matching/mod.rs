// Listing selection: weighted relevance ranking and the older boolean filter.
// Both are pure over in-memory snapshots; callers load criteria and listings.

pub mod filter;
pub mod relevance;
