//! Draft Record
//!
//! The user-editable copy of one resource, keyed by schema field names.

use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::schema::{Condition, EntitySchema, FieldDefault, FieldKind, FieldSpec};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft(Map<String, Value>);

impl Draft {
    /// Fresh draft for create mode
    pub fn with_defaults(schema: &EntitySchema) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::with_defaults_on(schema, today)
    }

    pub fn with_defaults_on(schema: &EntitySchema, today: NaiveDate) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|field| {
                let value = match field.default {
                    FieldDefault::Empty => Value::String(String::new()),
                    FieldDefault::Text(text) => Value::String(text.to_string()),
                    FieldDefault::Zero => Value::from(0),
                    FieldDefault::Unchecked => Value::Bool(false),
                    FieldDefault::Today => Value::String(today.format("%Y-%m-%d").to_string()),
                };
                (field.name.to_string(), value)
            })
            .collect();
        Self(fields)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Value as shown in a text control
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(text_of).unwrap_or_default()
    }

    pub fn is_checked(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Value::Bool(checked)) => *checked,
            Some(Value::String(text)) => text == "true",
            _ => false,
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).map_or(true, is_blank)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    /// Copy the schema's keys out of a fetched record; everything else is ignored
    pub fn merge(&mut self, schema: &EntitySchema, record: &Map<String, Value>) {
        for field in schema.fields {
            if let Some(value) = record.get(field.name) {
                self.0.insert(field.name.to_string(), value.clone());
            }
        }
    }

    pub fn satisfies(&self, conditions: &[Condition]) -> bool {
        conditions.iter().all(|condition| match *condition {
            Condition::Equals(field, expected) => self.text(field) == expected,
            Condition::Checked(field) => self.is_checked(field),
        })
    }

    /// Request body: schema keys in schema order, minus conditional and blank-optional fields
    pub fn payload(&self, schema: &EntitySchema) -> Map<String, Value> {
        let mut payload = Map::new();
        for field in schema.fields {
            if !self.satisfies(field.send_when) {
                continue;
            }
            let value = self.get(field.name).cloned().unwrap_or(Value::Null);
            if field.omit_if_empty && is_blank(&value) {
                continue;
            }
            payload.insert(field.name.to_string(), value);
        }
        payload
    }

    /// Required, number and date checks on the visible fields
    pub fn validate(&self, schema: &EntitySchema) -> Vec<FieldIssue> {
        schema
            .fields
            .iter()
            .filter(|field| self.satisfies(field.visible_when))
            .filter_map(|field| self.check(field).map(|problem| FieldIssue { field: field.name, label: field.label, problem }))
            .collect()
    }

    fn check(&self, field: &FieldSpec) -> Option<Problem> {
        if self.is_blank(field.name) {
            return field.required.then_some(Problem::Missing);
        }
        let text = self.text(field.name);
        match field.kind {
            FieldKind::Number { .. } if !is_number(&text) => Some(Problem::NotANumber),
            FieldKind::Date if NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").is_err() => Some(Problem::NotADate),
            _ => None,
        }
    }
}

pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    NotANumber,
    NotADate,
}

/// A field that blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub label: &'static str,
    pub problem: Problem,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::Missing => write!(f, "{} is required", self.label),
            Problem::NotANumber => write!(f, "{} must be a number", self.label),
            Problem::NotADate => write!(f, "{} must be a date (YYYY-MM-DD)", self.label),
        }
    }
}
