//! The warehouse: an ordered collection of goods with merge-on-add.
//!
//! Search and filter results are lazy iterators borrowing the warehouse, so
//! the collection cannot be mutated while a result is still being consumed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use warehouse_core::{simplify, DomainError, DomainResult, Entity, ItemId};

use crate::compare::{equal, is_category, COUNT_FIELD};
use crate::good::{Category, Good};
use crate::numbering::next_id;

/// What [`Warehouse::add`] did with the incoming good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended as a new stock line.
    Stored { id: ItemId },
    /// Folded into an existing stock line; `count` is the new total.
    Merged { id: ItemId, count: u64 },
}

impl AddOutcome {
    /// Identifier of the stock line that now holds the good.
    pub fn id(&self) -> &ItemId {
        match self {
            AddOutcome::Stored { id } | AddOutcome::Merged { id, .. } => id,
        }
    }
}

/// Ordered owner of every stored good.
///
/// Insertion order is preserved for every add that does not merge.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Warehouse {
    goods: Vec<Good>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }

    /// All goods in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Good> {
        self.goods.iter()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Good> {
        self.goods.iter().find(|g| g.id() == Some(id))
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Good> {
        self.goods.iter_mut().find(|g| g.id() == Some(id))
    }

    /// Add a good, stamping it with the current time if it is stored.
    pub fn add(&mut self, good: Good) -> DomainResult<AddOutcome> {
        self.add_at(good, Utc::now())
    }

    /// Add a good, merging it into an equal stored good (count ignored).
    ///
    /// A good that does not merge is stamped with `now`, numbered unless it
    /// already carries an id, and appended.
    ///
    /// A caller-supplied id must carry the prefix of the good's category and
    /// must not be in use. When such a good matches a stored one it merges
    /// only if the ids agree; otherwise the add is rejected as a conflict.
    pub fn add_at(&mut self, mut good: Good, now: DateTime<Utc>) -> DomainResult<AddOutcome> {
        if let Some(id) = good.id() {
            let expected = good.category().prefix();
            if id.prefix() != expected {
                return Err(DomainError::validation(format!(
                    "id {id} does not start with {expected} for {} goods",
                    good.category()
                )));
            }
        }

        if let Some(existing) = self
            .goods
            .iter_mut()
            .find(|existing| equal(&good, existing, &[COUNT_FIELD]))
        {
            let id = existing
                .id()
                .cloned()
                .ok_or_else(|| DomainError::invariant("stored good has no id"))?;
            if let Some(requested) = good.id().filter(|requested| **requested != id) {
                return Err(DomainError::conflict(format!(
                    "good with id {requested} matches stock line {id}"
                )));
            }
            let count = existing.absorb(good.count())?;
            debug!(id = %id, added = good.count(), count, "merged into existing stock line");
            return Ok(AddOutcome::Merged { id, count });
        }

        let id = match good.id() {
            Some(id) => {
                if self.get(id).is_some() {
                    return Err(DomainError::conflict(format!("id {id} already in use")));
                }
                id.clone()
            }
            None => next_id(&self.goods, good.category())?,
        };

        good.accept(id.clone(), now);
        debug!(id = %id, category = %good.category(), count = good.count(), "stored new stock line");
        self.goods.push(good);
        Ok(AddOutcome::Stored { id })
    }

    /// Goods whose normalized name or id contains the normalized `text`.
    pub fn search<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a Good> + use<'a> {
        self.search_where(text, any_good)
    }

    /// Like [`Warehouse::search`], restricted to goods accepted by `predicate`.
    pub fn search_where<'a, P>(
        &'a self,
        text: &str,
        predicate: P,
    ) -> impl Iterator<Item = &'a Good> + use<'a, P>
    where
        P: FnMut(&Good) -> bool,
    {
        let query = simplify(text);
        self.filter(predicate)
            .filter(move |good| matches_text(good, &query))
    }

    /// Goods accepted by `predicate`, in insertion order.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a Good> + use<'a, P>
    where
        P: FnMut(&Good) -> bool,
    {
        self.goods.iter().filter(move |good| predicate(*good))
    }

    /// Goods of exactly `category`, in insertion order.
    pub fn filter_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &Good> + use<'_> {
        self.filter(move |good| is_category(good, category))
    }
}

impl<'a> IntoIterator for &'a Warehouse {
    type Item = &'a Good;
    type IntoIter = core::slice::Iter<'a, Good>;

    fn into_iter(self) -> Self::IntoIter {
        self.goods.iter()
    }
}

fn any_good(_: &Good) -> bool {
    true
}

fn matches_text(good: &Good, query: &str) -> bool {
    simplify(good.name()).contains(query)
        || good
            .id()
            .is_some_and(|id| simplify(id.as_str()).contains(query))
}
