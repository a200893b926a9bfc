//! Category-dispatched care of stored goods: condition checks, maintenance
//! of machinery and expiry of perishables.

use chrono::{DateTime, NaiveDate, Utc};

use warehouse_core::{DomainError, DomainResult};

use crate::good::Good;

impl Good {
    /// Short condition report for the good's category.
    pub fn check_condition(&self) -> String {
        format!("{} condition is good.", self.category())
    }

    /// Record a maintenance pass. Only electronics and vehicles are maintained.
    pub fn maintain(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        let category = self.category();
        if !category.is_maintainable() {
            return Err(DomainError::validation(format!(
                "{category} goods are not maintained"
            )));
        }
        self.set_last_maintained(at);
        Ok(())
    }

    /// Whether the good is past its expiration date on `today`.
    ///
    /// `None` for categories without an expiration date; a perishable with no
    /// recorded date never expires.
    pub fn is_expired(&self, today: NaiveDate) -> Option<bool> {
        if !self.category().has_expiration() {
            return None;
        }
        Some(self.kind().expiration_date().is_some_and(|expires| expires < today))
    }
}
