//! Domain-wide constants

/// Default number of records skipped by a paginated listing
pub const DEFAULT_LIST_SKIP: u64 = 0;

/// Default page size for paginated listings
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Products shown per category group in homepage mode
pub const HOMEPAGE_GROUP_LIMIT: usize = 4;

/// Average rating rendered for a product without feedback
pub const EMPTY_AVG_RATING: &str = "0";

/// Length of the shared code assigned to a SKU creation batch
pub const SKU_CODE_LEN: usize = 12;

/// Minor currency units per major unit (ledger prices are minted in minor units)
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;
