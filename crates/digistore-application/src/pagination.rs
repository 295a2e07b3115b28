//! Pagination metadata computation
//!
//! Translates skip/limit plus a total count into the metadata block of
//! search-mode listings: page count and first/previous/self/next/last
//! navigation links derived from the base path.

use digistore_domain::value_objects::{PageLinks, PageMetadata};

fn page_url(base: &str, limit: u64, skip: u64) -> String {
    if skip == 0 {
        format!("{base}?limit={limit}")
    } else {
        format!("{base}?limit={limit}&skip={skip}")
    }
}

/// Compute pagination metadata for one result page
///
/// `pages` is ceil(total / limit) when a limit is set and 1 otherwise;
/// `previous`/`next` are absent on the first/last page respectively.
pub fn page_metadata(skip: u64, limit: Option<u64>, total: u64, base_path: &str) -> PageMetadata {
    let links = match limit {
        Some(limit) if limit > 0 => {
            let pages = total.div_ceil(limit).max(1);
            let last_skip = (pages - 1) * limit;
            PageLinks {
                first: page_url(base_path, limit, 0),
                previous: (skip > 0)
                    .then(|| page_url(base_path, limit, skip.saturating_sub(limit))),
                current: page_url(base_path, limit, skip),
                next: (skip + limit < total).then(|| page_url(base_path, limit, skip + limit)),
                last: page_url(base_path, limit, last_skip),
            }
        }
        _ => PageLinks {
            first: base_path.to_string(),
            previous: None,
            current: base_path.to_string(),
            next: None,
            last: base_path.to_string(),
        },
    };

    let pages = match limit {
        Some(limit) if limit > 0 => total.div_ceil(limit).max(1),
        _ => 1,
    };

    PageMetadata {
        skip,
        limit,
        total,
        pages,
        links,
    }
}
