use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult, Entity, ItemId};

use crate::compare::{Field, FieldValue};

/// Concrete kind of good; decides the identifier prefix and the field set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phone,
    Laptop,
    Watch,
    Food,
    MedicalSupply,
    Vehicle,
    Stationery,
    Apparel,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Phone,
        Category::Laptop,
        Category::Watch,
        Category::Food,
        Category::MedicalSupply,
        Category::Vehicle,
        Category::Stationery,
        Category::Apparel,
    ];

    /// Type name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Phone => "Phone",
            Category::Laptop => "Laptop",
            Category::Watch => "Watch",
            Category::Food => "Food",
            Category::MedicalSupply => "MedicalSupply",
            Category::Vehicle => "Vehicle",
            Category::Stationery => "Stationery",
            Category::Apparel => "Apparel",
        }
    }

    /// First three letters of the type name, upper-cased ("Phone" -> "PHO").
    pub fn prefix(self) -> String {
        self.name()
            .chars()
            .take(warehouse_core::id::PREFIX_LEN)
            .collect::<String>()
            .to_uppercase()
    }

    /// Electronics and vehicles can be maintained.
    pub fn is_maintainable(self) -> bool {
        matches!(
            self,
            Category::Phone | Category::Laptop | Category::Watch | Category::Vehicle
        )
    }

    /// Food and medical supplies carry an expiration date.
    pub fn has_expiration(self) -> bool {
        matches!(self, Category::Food | Category::MedicalSupply)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    /// Accepts the type name in any case, with or without separators
    /// (`MedicalSupply`, `medical supply`, `medical_supply`, `medical`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        let category = match key.as_str() {
            "phone" => Category::Phone,
            "laptop" => Category::Laptop,
            "watch" => Category::Watch,
            "food" => Category::Food,
            "medicalsupply" | "medicalsupplies" | "medical" => Category::MedicalSupply,
            "vehicle" => Category::Vehicle,
            "stationery" => Category::Stationery,
            "apparel" => Category::Apparel,
            _ => return Err(DomainError::validation(format!("unknown category: {s}"))),
        };
        Ok(category)
    }
}

/// Payload shared by electronic devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Electronics {
    pub model_design: String,
    pub color: String,
}

/// Payload of food items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perishable {
    pub expiration_date: Option<NaiveDate>,
}

/// Payload of medical supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medical {
    pub expiration_date: Option<NaiveDate>,
    pub storage_conditions: String,
}

/// Payload of vehicles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    pub model_design: String,
}

/// Category tag plus its category-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Kind {
    Phone(Electronics),
    Laptop(Electronics),
    Watch(Electronics),
    Food(Perishable),
    MedicalSupply(Medical),
    Vehicle(Transport),
    Stationery,
    Apparel,
}

impl Kind {
    pub fn phone(model_design: impl Into<String>, color: impl Into<String>) -> Self {
        Kind::Phone(Electronics {
            model_design: model_design.into(),
            color: color.into(),
        })
    }

    pub fn laptop(model_design: impl Into<String>, color: impl Into<String>) -> Self {
        Kind::Laptop(Electronics {
            model_design: model_design.into(),
            color: color.into(),
        })
    }

    pub fn watch(model_design: impl Into<String>, color: impl Into<String>) -> Self {
        Kind::Watch(Electronics {
            model_design: model_design.into(),
            color: color.into(),
        })
    }

    pub fn food(expiration_date: Option<NaiveDate>) -> Self {
        Kind::Food(Perishable { expiration_date })
    }

    pub fn medical_supply(
        expiration_date: Option<NaiveDate>,
        storage_conditions: impl Into<String>,
    ) -> Self {
        Kind::MedicalSupply(Medical {
            expiration_date,
            storage_conditions: storage_conditions.into(),
        })
    }

    pub fn vehicle(model_design: impl Into<String>) -> Self {
        Kind::Vehicle(Transport {
            model_design: model_design.into(),
        })
    }

    /// Payload with every category-specific field left empty.
    pub fn blank(category: Category) -> Self {
        match category {
            Category::Phone => Kind::Phone(Electronics::default()),
            Category::Laptop => Kind::Laptop(Electronics::default()),
            Category::Watch => Kind::Watch(Electronics::default()),
            Category::Food => Kind::Food(Perishable::default()),
            Category::MedicalSupply => Kind::MedicalSupply(Medical::default()),
            Category::Vehicle => Kind::Vehicle(Transport::default()),
            Category::Stationery => Kind::Stationery,
            Category::Apparel => Kind::Apparel,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Kind::Phone(_) => Category::Phone,
            Kind::Laptop(_) => Category::Laptop,
            Kind::Watch(_) => Category::Watch,
            Kind::Food(_) => Category::Food,
            Kind::MedicalSupply(_) => Category::MedicalSupply,
            Kind::Vehicle(_) => Category::Vehicle,
            Kind::Stationery => Category::Stationery,
            Kind::Apparel => Category::Apparel,
        }
    }

    /// Expiration date for categories that carry one.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        match self {
            Kind::Food(p) => p.expiration_date,
            Kind::MedicalSupply(m) => m.expiration_date,
            _ => None,
        }
    }

    fn push_identity_fields<'a>(&'a self, fields: &mut Vec<Field<'a>>) {
        match self {
            Kind::Phone(e) | Kind::Laptop(e) | Kind::Watch(e) => {
                fields.push(Field::new("model_design", FieldValue::Text(&e.model_design)));
                fields.push(Field::new("color", FieldValue::Text(&e.color)));
            }
            Kind::Food(p) => {
                fields.push(Field::new("expiration_date", FieldValue::Date(p.expiration_date)));
            }
            Kind::MedicalSupply(m) => {
                fields.push(Field::new("expiration_date", FieldValue::Date(m.expiration_date)));
                fields.push(Field::new(
                    "storage_conditions",
                    FieldValue::Text(&m.storage_conditions),
                ));
            }
            Kind::Vehicle(t) => {
                fields.push(Field::new("model_design", FieldValue::Text(&t.model_design)));
            }
            Kind::Stationery | Kind::Apparel => {}
        }
    }
}

/// One stock-keeping unit.
///
/// Built by the caller with no id and no storage date; both are filled in
/// when a [`crate::Warehouse`] accepts the good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Good {
    id: Option<ItemId>,
    name: String,
    count: u64,
    production_company: String,
    production_date: Option<NaiveDate>,
    storage_date: Option<DateTime<Utc>>,
    description: String,
    #[serde(flatten)]
    kind: Kind,
    last_maintained: Option<DateTime<Utc>>,
}

impl Good {
    pub fn new(kind: Kind, name: impl Into<String>, count: u64) -> Self {
        Self {
            id: None,
            name: name.into(),
            count,
            production_company: String::new(),
            production_date: None,
            storage_date: None,
            description: String::new(),
            kind,
            last_maintained: None,
        }
    }

    /// Pre-assign an identifier instead of letting the warehouse number it.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.production_company = company.into();
        self
    }

    pub fn with_production_date(mut self, date: NaiveDate) -> Self {
        self.production_date = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn production_company(&self) -> &str {
        &self.production_company
    }

    pub fn production_date(&self) -> Option<NaiveDate> {
        self.production_date
    }

    pub fn storage_date(&self) -> Option<DateTime<Utc>> {
        self.storage_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn last_maintained(&self) -> Option<DateTime<Utc>> {
        self.last_maintained
    }

    /// Ordered attributes that define what this good *is*.
    ///
    /// Ledger bookkeeping (`id`, `storage_date`, `last_maintained`) is left
    /// out so that an unstored good can match its stored twin.
    pub fn identity_fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::new("name", FieldValue::Text(&self.name)),
            Field::new("count", FieldValue::Count(self.count)),
            Field::new(
                "production_company",
                FieldValue::Text(&self.production_company),
            ),
            Field::new("production_date", FieldValue::Date(self.production_date)),
            Field::new("description", FieldValue::Text(&self.description)),
        ];
        self.kind.push_identity_fields(&mut fields);
        fields
    }

    /// Fixed multi-line summary, one `label: value` pair per line.
    pub fn information(&self) -> String {
        let id = self.id.as_ref().map(ItemId::as_str).unwrap_or_default();
        format!(
            "ID: {id}\n\
             Name: {}\n\
             Count: {}\n\
             Production company: {}\n\
             Production date: {}\n\
             Storage date: {}",
            self.name,
            self.count,
            self.production_company,
            format_date(self.production_date),
            format_date(self.storage_date.map(|at| at.date_naive())),
        )
    }

    pub(crate) fn accept(&mut self, id: ItemId, stored_at: DateTime<Utc>) {
        self.id = Some(id);
        self.storage_date = Some(stored_at);
    }

    /// Adds `extra` onto the count, returning the new total.
    pub(crate) fn absorb(&mut self, extra: u64) -> DomainResult<u64> {
        self.count = self.count.checked_add(extra).ok_or_else(|| {
            DomainError::invariant(format!("count overflow while merging into {}", self.name))
        })?;
        Ok(self.count)
    }

    pub(crate) fn set_last_maintained(&mut self, at: DateTime<Utc>) {
        self.last_maintained = Some(at);
    }
}

impl Entity for Good {
    type Id = ItemId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

/// `dd/mm/yyyy`, or empty when the date is unknown.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}
