//! Scoring and ranking for the suburb finder.
//!
//! The crate provides the request-time pipeline that turns preferences into
//! an ordered list of regions:
//! - [`RelativeScorer`] measures each region against the best-stocked
//!   candidate in every category and weights the results.
//! - [`rank`] orders scored regions by score, then total POIs, then name.
//! - [`Recommender`] ties validation, the catalogue snapshot, the distance
//!   filter, scoring and ranking together for one request.
//! - [`KeywordInterpreter`] is a deterministic
//!   [`PreferenceInterpreter`](suburb_core::PreferenceInterpreter) that maps
//!   free text to preferences through keyword lists.
//!
//! # Examples
//!
//! ```
//! use suburb_core::test_support::{MemoryCatalog, region};
//! use suburb_core::{PoiCounts, RecommendRequest};
//! use suburb_scorer::Recommender;
//!
//! let catalog = MemoryCatalog::with_regions(vec![
//!     region("A", PoiCounts { recreation: 10, ..PoiCounts::default() }, None),
//!     region("B", PoiCounts { recreation: 5, community: 10, ..PoiCounts::default() }, None),
//! ]);
//! let request = RecommendRequest { recreation: 1.0, ..RecommendRequest::default() };
//! let ranked = Recommender::new(catalog).recommend(&request)?;
//! assert_eq!(ranked.first().map(|s| s.region.name()), Some("A"));
//! # Ok::<(), suburb_core::RecommendError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod keywords;
mod rank;
mod recommender;
mod relative;

pub use keywords::{KeywordInterpreter, default_keywords};
pub use rank::{compare, rank};
pub use recommender::{Recommender, score_candidates};
pub use relative::{RelativeScorer, score_region};
