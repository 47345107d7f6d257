use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A persisted bot record. JSON field names follow the public API (camelCase),
/// database columns are snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub description: Option<String>,
    pub base_personality: Option<String>,
    pub formality: Option<String>,
    pub enthusiasm: Option<String>,
    pub humor: Option<String>,
    pub use_case_template: Option<String>,
}

/// Creation payload. `availability` is not part of it: new records always
/// start out available.
#[derive(Debug, Clone)]
pub struct NewBot {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub base_personality: Option<String>,
    pub formality: Option<String>,
    pub enthusiasm: Option<String>,
    pub humor: Option<String>,
    pub use_case_template: Option<String>,
}

impl NewBot {
    /// Map a validated request body onto a creation payload. Validation has
    /// already guaranteed `name` is non-empty and `price` is numeric; anything
    /// else is taken as-is when present.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text(body.get("name")).unwrap_or_default(),
            price: number(body.get("price")).unwrap_or_default(),
            description: text(body.get("description")),
            base_personality: text(body.get("basePersonality")),
            formality: text(body.get("formality")),
            enthusiasm: text(body.get("enthusiasm")),
            humor: text(body.get("humor")),
            use_case_template: text(body.get("useCaseTemplate")),
        }
    }
}

/// Patch applied to an existing record as a single command: only fields
/// present in the source body are set, everything else keeps its value.
#[derive(Debug, Clone, Default)]
pub struct BotPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub availability: Option<bool>,
    pub description: Option<String>,
    pub base_personality: Option<String>,
    pub formality: Option<String>,
    pub enthusiasm: Option<String>,
    pub humor: Option<String>,
    pub use_case_template: Option<String>,
}

impl BotPatch {
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text(body.get("name")),
            price: number(body.get("price")),
            availability: body.get("availability").and_then(Value::as_bool),
            description: text(body.get("description")),
            base_personality: text(body.get("basePersonality")),
            formality: text(body.get("formality")),
            enthusiasm: text(body.get("enthusiasm")),
            humor: text(body.get("humor")),
            use_case_template: text(body.get("useCaseTemplate")),
        }
    }

    /// Patch that only changes `availability`. Used by the PATCH toggle.
    pub fn availability(value: bool) -> Self {
        Self {
            availability: Some(value),
            ..Self::default()
        }
    }

    pub fn apply(&self, bot: &mut Bot) {
        if let Some(name) = &self.name {
            bot.name = name.clone();
        }
        if let Some(price) = self.price {
            bot.price = price;
        }
        if let Some(availability) = self.availability {
            bot.availability = availability;
        }
        if let Some(description) = &self.description {
            bot.description = Some(description.clone());
        }
        if let Some(base_personality) = &self.base_personality {
            bot.base_personality = Some(base_personality.clone());
        }
        if let Some(formality) = &self.formality {
            bot.formality = Some(formality.clone());
        }
        if let Some(enthusiasm) = &self.enthusiasm {
            bot.enthusiasm = Some(enthusiasm.clone());
        }
        if let Some(humor) = &self.humor {
            bot.humor = Some(humor.clone());
        }
        if let Some(use_case_template) = &self.use_case_template {
            bot.use_case_template = Some(use_case_template.clone());
        }
    }
}

// Scalars are coerced to text the way a string column would store them.
fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
