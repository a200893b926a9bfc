//! Sequential, category-scoped identifiers.
//!
//! The first good of a category gets `<PREFIX>0`. Every later one gets one
//! more than the largest numeric suffix found among the goods of that
//! category. Suffixes that do not parse are skipped.
//!
//! Prefixes are the first three letters of the category name; two categories
//! sharing those letters would share one numbering stream. The closed
//! [`Category`] set has no such pair.

use tracing::trace;

use warehouse_core::{DomainError, DomainResult, Entity, ItemId};

use crate::compare::is_category;
use crate::good::{Category, Good};

/// Next unused identifier for `category` among `goods`.
pub fn next_id<'a, I>(goods: I, category: Category) -> DomainResult<ItemId>
where
    I: IntoIterator<Item = &'a Good>,
{
    let prefix = category.prefix();
    let mut seen = false;
    let mut largest: u64 = 0;

    for good in goods.into_iter().filter(|g| is_category(g, category)) {
        seen = true;
        let Some(id) = good.id() else { continue };
        match id.sequence() {
            Some(n) => largest = largest.max(n),
            None => trace!(id = %id, "skipping identifier without numeric suffix"),
        }
    }

    if !seen {
        return Ok(ItemId::new(&prefix, 0));
    }

    let next = largest
        .checked_add(1)
        .ok_or_else(|| DomainError::invariant(format!("{prefix} identifiers exhausted")))?;
    Ok(ItemId::new(&prefix, next))
}
