//! Parsing of command lines typed at the prompt.
//!
//! Keywords are matched after [`simplify`], so `Thoát`, `THOAT` and `thoat`
//! are the same command. Arguments keep their original spelling.
//!
//! ```text
//! add <category> name=<name>; count=<n>; company=<c>; date=<dd/mm/yyyy>; ...
//! search <text>
//! list [category]
//! info <id>
//! maintain <id>
//! expired
//! export
//! help
//! xoa man hinh | clear
//! thoat | exit
//! ```

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use warehouse_core::{simplify, DomainError, ItemId};
use warehouse_inventory::{Category, Good, Kind};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Clear,
    Help,
    Add(Box<Good>),
    Search(String),
    List(Option<Category>),
    Info(ItemId),
    Maintain(ItemId),
    Expired,
    Export,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("malformed field `{0}`, expected key=value")]
    MalformedField(String),

    #[error("field `{0}` given more than once")]
    DuplicateField(String),

    #[error("field `{field}` does not apply to {category}")]
    UnknownField { field: String, category: Category },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    match simplify(line).as_str() {
        "thoat" | "exit" | "quit" => return Ok(Command::Exit),
        "xoa man hinh" | "clear" | "cls" => return Ok(Command::Clear),
        _ => {}
    }

    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((line, ""));

    match simplify(head).as_str() {
        "help" => no_arguments(rest, Command::Help),
        "add" => parse_add(rest).map(|good| Command::Add(Box::new(good))),
        "search" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("text"));
            }
            Ok(Command::Search(rest.to_string()))
        }
        "list" => {
            if rest.is_empty() {
                Ok(Command::List(None))
            } else {
                Ok(Command::List(Some(rest.parse()?)))
            }
        }
        "info" => Ok(Command::Info(required_id(rest)?)),
        "maintain" => Ok(Command::Maintain(required_id(rest)?)),
        "expired" => no_arguments(rest, Command::Expired),
        "export" => no_arguments(rest, Command::Export),
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}

fn no_arguments(rest: &str, command: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(rest.to_string()))
    }
}

fn required_id(rest: &str) -> Result<ItemId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("id"));
    }
    Ok(rest.parse()?)
}

/// `<category> key=value; key=value; ...`
fn parse_add(rest: &str) -> Result<Good, CommandError> {
    let (category, fields) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    if category.is_empty() {
        return Err(CommandError::MissingArgument("category"));
    }
    let category: Category = category.parse()?;

    let mut kind = Kind::blank(category);
    let mut name: Option<String> = None;
    let mut count: u64 = 0;
    let mut company = None;
    let mut production_date = None;
    let mut description = None;
    let mut id: Option<ItemId> = None;
    let mut seen = BTreeSet::new();

    for field in fields.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| CommandError::MalformedField(field.to_string()))?;
        let key = simplify(key);
        let value = value.trim();

        if !seen.insert(key.clone()) {
            return Err(CommandError::DuplicateField(key));
        }

        match key.as_str() {
            "name" => name = Some(value.to_string()),
            "count" => {
                count = value.parse::<u64>().map_err(|e| CommandError::InvalidValue {
                    field: key.clone(),
                    reason: format!("{e}"),
                })?
            }
            "company" => company = Some(value.to_string()),
            "date" => production_date = Some(parse_date(&key, value)?),
            "description" => description = Some(value.to_string()),
            "id" => id = Some(value.parse()?),
            _ => apply_kind_field(&mut kind, &key, value)?,
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(CommandError::MissingArgument("name"))?;

    let mut good = Good::new(kind, name, count);
    if let Some(company) = company {
        good = good.with_company(company);
    }
    if let Some(date) = production_date {
        good = good.with_production_date(date);
    }
    if let Some(description) = description {
        good = good.with_description(description);
    }
    if let Some(id) = id {
        good = good.with_id(id);
    }
    Ok(good)
}

fn apply_kind_field(kind: &mut Kind, key: &str, value: &str) -> Result<(), CommandError> {
    match (kind, key) {
        (Kind::Phone(e) | Kind::Laptop(e) | Kind::Watch(e), "model") => {
            e.model_design = value.to_string()
        }
        (Kind::Phone(e) | Kind::Laptop(e) | Kind::Watch(e), "color") => e.color = value.to_string(),
        (Kind::Vehicle(t), "model") => t.model_design = value.to_string(),
        (Kind::Food(p), "expires") => p.expiration_date = Some(parse_date(key, value)?),
        (Kind::MedicalSupply(m), "expires") => m.expiration_date = Some(parse_date(key, value)?),
        (Kind::MedicalSupply(m), "storage") => m.storage_conditions = value.to_string(),
        (kind, _) => {
            return Err(CommandError::UnknownField {
                field: key.to_string(),
                category: kind.category(),
            });
        }
    }
    Ok(())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%d/%m/%Y").map_err(|e| CommandError::InvalidValue {
        field: field.to_string(),
        reason: format!("{e}, expected dd/mm/yyyy"),
    })
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  add <category> name=<name>; count=<n>; company=<company>; date=<dd/mm/yyyy>;
      description=<text>; id=<id>; model=<model>; color=<color>;
      expires=<dd/mm/yyyy>; storage=<conditions>
  search <text>      goods whose name or id contains <text>
  list [category]    every good, or those of one category
  info <id>          details of one good
  maintain <id>      record maintenance of a device or vehicle
  expired            perishables past their expiration date
  export             dump the warehouse as JSON
  xoa man hinh       clear the screen (also: clear)
  thoat              leave (also: exit, quit)
categories: phone, laptop, watch, food, medical, vehicle, stationery, apparel";

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_core::Entity;

    fn add(line: &str) -> Good {
        match parse(line).unwrap() {
            Command::Add(good) => *good,
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn keywords_ignore_accents_and_case() {
        assert_eq!(parse("Thoát").unwrap(), Command::Exit);
        assert_eq!(parse("  THOAT ").unwrap(), Command::Exit);
        assert_eq!(parse("Xoá   màn hình").unwrap(), Command::Clear);
        assert_eq!(parse("HELP").unwrap(), Command::Help);
    }

    #[test]
    fn empty_line_is_reported() {
        assert_eq!(parse("   ").unwrap_err(), CommandError::Empty);
    }

    #[test]
    fn unknown_keyword_is_reported() {
        assert_eq!(
            parse("sell iPhone").unwrap_err(),
            CommandError::Unknown("sell iPhone".to_string())
        );
    }

    #[test]
    fn add_phone_with_all_fields() {
        let good = add("add phone name=iPhone 15 Pro; count=5; company=Apple; model=15; color=Black; date=20/09/2024");

        assert_eq!(good.name(), "iPhone 15 Pro");
        assert_eq!(good.count(), 5);
        assert_eq!(good.production_company(), "Apple");
        assert_eq!(good.production_date(), NaiveDate::from_ymd_opt(2024, 9, 20));
        assert_eq!(good.kind(), &Kind::phone("15", "Black"));
        assert!(good.id().is_none());
    }

    #[test]
    fn add_keeps_accented_names() {
        let good = add("ADD food name=Phở bò; count=3; expires=01/01/2026");
        assert_eq!(good.name(), "Phở bò");
        assert_eq!(good.kind(), &Kind::food(NaiveDate::from_ymd_opt(2026, 1, 1)));
    }

    #[test]
    fn add_medical_supply_uses_category_fields() {
        let good = add("add medical name=Vaccine; storage=2-8C; expires=31/12/2025");
        assert_eq!(good.category(), Category::MedicalSupply);
        assert_eq!(
            good.kind(),
            &Kind::medical_supply(NaiveDate::from_ymd_opt(2025, 12, 31), "2-8C")
        );
        assert_eq!(good.count(), 0);
    }

    #[test]
    fn add_accepts_caller_id() {
        let good = add("add apparel name=Scarf; id=APP9");
        assert_eq!(good.id().map(ItemId::as_str), Some("APP9"));
    }

    #[test]
    fn add_requires_name() {
        assert_eq!(
            parse("add phone count=1").unwrap_err(),
            CommandError::MissingArgument("name")
        );
        assert_eq!(
            parse("add phone name= ; count=1").unwrap_err(),
            CommandError::MissingArgument("name")
        );
    }

    #[test]
    fn add_rejects_fields_of_other_categories() {
        let err = parse("add stationery name=Pen; color=blue").unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownField {
                field: "color".to_string(),
                category: Category::Stationery,
            }
        );
    }

    #[test]
    fn add_rejects_malformed_input() {
        assert!(matches!(
            parse("add phone name iPhone").unwrap_err(),
            CommandError::MalformedField(_)
        ));
        assert!(matches!(
            parse("add phone name=a; count=-1").unwrap_err(),
            CommandError::InvalidValue { .. }
        ));
        assert!(matches!(
            parse("add food name=Milk; expires=2025-01-01").unwrap_err(),
            CommandError::InvalidValue { .. }
        ));
        assert!(matches!(
            parse("add phone name=a; name=b").unwrap_err(),
            CommandError::DuplicateField(_)
        ));
        assert!(matches!(
            parse("add spaceship name=Enterprise").unwrap_err(),
            CommandError::Domain(DomainError::Validation(_))
        ));
        assert_eq!(
            parse("add").unwrap_err(),
            CommandError::MissingArgument("category")
        );
    }

    #[test]
    fn query_commands_parse_arguments() {
        assert_eq!(
            parse("search  Điện thoại ").unwrap(),
            Command::Search("Điện thoại".to_string())
        );
        assert_eq!(parse("list").unwrap(), Command::List(None));
        assert_eq!(parse("list Laptop").unwrap(), Command::List(Some(Category::Laptop)));
        assert_eq!(parse("info PHO0").unwrap(), Command::Info(ItemId::new("PHO", 0)));
        assert_eq!(parse("maintain VEH2").unwrap(), Command::Maintain(ItemId::new("VEH", 2)));
        assert_eq!(parse("expired").unwrap(), Command::Expired);
        assert_eq!(parse("export").unwrap(), Command::Export);
    }

    #[test]
    fn query_commands_validate_arguments() {
        assert_eq!(parse("search").unwrap_err(), CommandError::MissingArgument("text"));
        assert_eq!(parse("info").unwrap_err(), CommandError::MissingArgument("id"));
        assert!(matches!(
            parse("export now").unwrap_err(),
            CommandError::UnexpectedArgument(_)
        ));
    }
}
