//! Locale-style string ordering for the text columns.
//!
//! Uses the CLDR root collation at tertiary strength: base letters first
//! (accents and case ignored), then accents, then lower case before upper
//! case. Punctuation and symbols sort ahead of letters.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "root collation unavailable, sorting by code point");
            None
        }
    }
});

pub fn compare(a: &str, b: &str) -> Ordering {
    match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
