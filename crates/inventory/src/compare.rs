//! Structural comparison of goods.
//!
//! Every good exposes its identity as an ordered list of named, typed
//! [`Field`]s (see [`Good::identity_fields`]). Two goods are the same stock
//! line when their categories match and every non-ignored field of the first
//! has a counterpart of the same name, type and value on the second.

use chrono::NaiveDate;

use crate::good::{Category, Good};

/// Field excluded when deciding whether an incoming good merges into a stored one.
pub const COUNT_FIELD: &str = "count";

/// A declared attribute value, borrowed from the good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u64),
    /// `None` when the date is not known.
    Date(Option<NaiveDate>),
}

impl FieldValue<'_> {
    /// Whether both values have the same declared type.
    pub fn same_type(&self, other: &FieldValue<'_>) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Named identity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

/// Field-by-field equality, skipping the fields named in `ignore`.
///
/// Absent dates compare equal only to absent dates.
pub fn equal(a: &Good, b: &Good, ignore: &[&str]) -> bool {
    if a.category().name() != b.category().name() {
        return false;
    }

    let theirs = b.identity_fields();
    a.identity_fields()
        .iter()
        .filter(|mine| !ignore.contains(&mine.name))
        .all(|mine| {
            theirs
                .iter()
                .find(|other| other.name == mine.name)
                .is_some_and(|other| other.value.same_type(&mine.value) && other.value == mine.value)
        })
}

/// True iff both goods belong to the same concrete category.
pub fn same_category(a: &Good, b: &Good) -> bool {
    is_category(a, b.category())
}

/// True iff `good` belongs to `category`.
pub fn is_category(good: &Good, category: Category) -> bool {
    good.category() == category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::good::Kind;

    fn iphone(count: u64) -> Good {
        Good::new(Kind::phone("15", "black"), "iPhone", count).with_company("Apple")
    }

    #[test]
    fn identical_goods_are_equal() {
        assert!(equal(&iphone(5), &iphone(5), &[]));
    }

    #[test]
    fn count_is_ignored_only_when_asked() {
        assert!(!equal(&iphone(5), &iphone(3), &[]));
        assert!(equal(&iphone(5), &iphone(3), &[COUNT_FIELD]));
    }

    #[test]
    fn any_differing_field_breaks_equality() {
        let other_color = Good::new(Kind::phone("15", "white"), "iPhone", 5).with_company("Apple");
        assert!(!equal(&iphone(5), &other_color, &[COUNT_FIELD]));

        let other_company = Good::new(Kind::phone("15", "black"), "iPhone", 5).with_company("Foxconn");
        assert!(!equal(&iphone(5), &other_company, &[COUNT_FIELD]));
    }

    #[test]
    fn ignoring_the_differing_field_restores_equality() {
        let other_color = Good::new(Kind::phone("15", "white"), "iPhone", 5).with_company("Apple");
        assert!(equal(&iphone(5), &other_color, &["color"]));
    }

    #[test]
    fn different_categories_are_never_equal() {
        let phone = Good::new(Kind::phone("X", "red"), "Device", 1);
        let laptop = Good::new(Kind::laptop("X", "red"), "Device", 1);
        assert!(!equal(&phone, &laptop, &[]));
        assert!(!same_category(&phone, &laptop));
    }

    #[test]
    fn absent_dates_match_only_absent_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let undated = Good::new(Kind::food(None), "Rice", 1);
        let dated = Good::new(Kind::food(Some(date)), "Rice", 1);

        assert!(equal(&undated, &undated.clone(), &[]));
        assert!(!equal(&undated, &dated, &[]));
        assert!(!equal(&dated, &undated, &[]));
        assert!(equal(&dated, &dated.clone(), &[]));
    }

    #[test]
    fn storage_bookkeeping_is_not_part_of_identity() {
        use chrono::Utc;
        use warehouse_core::ItemId;

        let mut stored = iphone(5);
        stored.accept(ItemId::new("PHO", 0), Utc::now());
        assert!(equal(&iphone(2), &stored, &[COUNT_FIELD]));
    }

    #[test]
    fn same_category_ignores_values() {
        let a = Good::new(Kind::phone("15", "black"), "iPhone", 1);
        let b = Good::new(Kind::phone("S24", "grey"), "Galaxy", 9);
        assert!(same_category(&a, &b));
        assert!(is_category(&a, Category::Phone));
        assert!(!is_category(&a, Category::Watch));
    }

    #[test]
    fn field_types_are_compared_by_variant() {
        assert!(FieldValue::Text("a").same_type(&FieldValue::Text("b")));
        assert!(!FieldValue::Text("1").same_type(&FieldValue::Count(1)));
        assert!(FieldValue::Date(None).same_type(&FieldValue::Date(NaiveDate::from_ymd_opt(2020, 2, 2))));
    }
}
