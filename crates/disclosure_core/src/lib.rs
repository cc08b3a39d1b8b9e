//! disclosure_core: company and disclosure lookups.
//!
//! Both lookups query a read-only gateway (see [`ports`]) and, when the
//! gateway has nothing matching, answer from immutable [`ReferenceData`]
//! injected at construction. Gateway failures are never masked by the
//! fallback; only empty results are.

pub mod company;
pub mod disclosure;
pub mod error;
pub mod memory;
pub mod params;
pub mod ports;
pub mod reference;
pub mod types;

pub use company::CompanyLookup;
pub use disclosure::DisclosureLookup;
pub use error::{LookupError, Result};
pub use memory::InMemoryStore;
pub use params::{parse_company_ids, Limit};
pub use ports::{CompanyStore, DisclosureStore};
pub use reference::{CompanySeed, DisclosureSeed, ReferenceData, ReferenceDataError};
pub use types::{Company, Disclosure, DisclosureQuery};
