//! Declarative request validation.
//!
//! Each route declares a [`RuleSet`]; every rule in the set is evaluated
//! against the JSON body and every violation is collected, so a single bad
//! field can surface several errors in one response. The path identifier
//! check is separate and runs first: an unparseable `:id` produces exactly
//! one error without touching the body rules.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// One field-level violation, shaped for the `{"errors": [...]}` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Check {
    NotEmpty,
    Numeric,
    GreaterThanZero,
    Boolean,
}

#[derive(Debug, Clone)]
struct Rule {
    field: &'static str,
    message: &'static str,
    check: Check,
}

impl Rule {
    fn passes(&self, body: &Value) -> bool {
        let value = body.get(self.field);
        match self.check {
            Check::NotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Check::Numeric => as_number(value).is_some(),
            Check::GreaterThanZero => as_number(value).is_some_and(|v| v > 0.0),
            Check::Boolean => matches!(value, Some(Value::Bool(_))),
        }
    }
}

/// Ordered collection of body rules for one route.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_empty(self, field: &'static str, message: &'static str) -> Self {
        self.rule(field, message, Check::NotEmpty)
    }

    pub fn numeric(self, field: &'static str, message: &'static str) -> Self {
        self.rule(field, message, Check::Numeric)
    }

    pub fn greater_than_zero(self, field: &'static str, message: &'static str) -> Self {
        self.rule(field, message, Check::GreaterThanZero)
    }

    pub fn boolean(self, field: &'static str, message: &'static str) -> Self {
        self.rule(field, message, Check::Boolean)
    }

    fn rule(mut self, field: &'static str, message: &'static str, check: Check) -> Self {
        self.rules.push(Rule { field, message, check });
        self
    }

    /// Evaluate every rule in declaration order, accumulating all violations.
    /// The handler is only reached when this returns `Ok`.
    pub fn check(&self, body: &Value) -> Result<(), ApiError> {
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter(|rule| !rule.passes(body))
            .map(|rule| FieldError {
                msg: rule.message.to_string(),
                param: rule.field.to_string(),
                location: "body",
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

/// Parse the `:id` path parameter. Failure is a single-error 400 that
/// short-circuits before any body validation.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        ApiError::Validation(vec![FieldError {
            msg: "ID no válido".to_string(),
            param: "id".to_string(),
            location: "params",
        }])
    })
}

/// Body rules for creating a bot.
pub fn bot_body_rules() -> RuleSet {
    RuleSet::new()
        .not_empty("name", "El nombre de Bot no puede ir vacío")
        .numeric("price", "Valor no válido")
        .not_empty("price", "El precio de Bot no puede ir vacío")
        .greater_than_zero("price", "Precio no válido")
}

/// Body rules for a full update: the creation rules plus a boolean
/// `availability`.
pub fn bot_replace_rules() -> RuleSet {
    bot_body_rules().boolean("availability", "Valor para disponibilidad no válido")
}

// Numeric strings count as numbers, matching how the API has always accepted
// `"50"` for a price field.
fn as_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
