//! A single decoded param row

use std::collections::HashMap;

use super::ItemIdFlag;
use crate::{Error, Result};

/// One record of a param table
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRow {
    /// Row id
    pub index: u32,
    /// Row name as stored in the table (often empty)
    pub name: String,
    /// Category tag applied when the table was loaded
    pub item_id_flag: ItemIdFlag,
    fields: HashMap<String, String>,
}

impl ParamRow {
    pub fn new(index: u32, name: impl Into<String>, item_id_flag: ItemIdFlag) -> Self {
        Self {
            index,
            name: name.into(),
            item_id_flag,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl ToString) {
        self.fields.insert(field.into(), value.to_string());
    }

    /// Full item id in hex, with the category flag applied (e.g. `4000271A`)
    pub fn index_hex(&self) -> String {
        format!("{:08X}", self.item_id_flag.bits() | self.index)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw text value of a field
    pub fn get(&self, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::MissingField {
                row: self.index,
                field: field.to_string(),
            })
    }

    pub fn get_int(&self, field: &str) -> Result<i64> {
        let value = self.get(field)?.trim();
        value
            .parse()
            .map_err(|_| self.invalid(field, value, "an integer"))
    }

    pub fn get_float(&self, field: &str) -> Result<f64> {
        let value = self.get(field)?.trim();
        value
            .parse()
            .map_err(|_| self.invalid(field, value, "a number"))
    }

    pub fn get_bool(&self, field: &str) -> Result<bool> {
        let value = self.get(field)?.trim();
        match value {
            "1" | "true" | "True" => Ok(true),
            "0" | "false" | "False" => Ok(false),
            _ => Err(self.invalid(field, value, "a boolean")),
        }
    }

    /// Integer value with the `-1` "not applicable" sentinel (and any other
    /// negative) read as 0
    pub fn get_int_corrected(&self, field: &str) -> Result<i64> {
        Ok(self.get_int(field)?.max(0))
    }

    fn invalid(&self, field: &str, value: &str, expected: &'static str) -> Error {
        Error::InvalidField {
            row: self.index,
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}
