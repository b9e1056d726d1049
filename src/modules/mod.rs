pub mod authors;
pub mod books;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shelf_http::error::AppError;
use shelf_kernel::{Module, ModuleRegistry};
use utoipa::ToSchema;

/// Confirmation payload returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// All catalog modules, in the order their tables depend on each other.
pub fn all() -> Vec<Arc<dyn Module>> {
    vec![authors::create_module(), books::create_module()]
}

/// Register all catalog modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    for module in all() {
        registry.register(module);
    }
}

/// Collects per-field problems into a 422 validation error.
#[derive(Default)]
pub(crate) struct FieldErrors(Vec<serde_json::Value>);

impl FieldErrors {
    /// Record an error unless `value` has visible characters.
    pub(crate) fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(serde_json::json!({
                "field": field,
                "error": "must not be empty",
            }));
        }
    }

    pub(crate) fn finish(self, message: &str) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.0, message))
        }
    }
}

/// Render a `ToSchema` type as an OpenAPI component entry.
pub(crate) fn component<T: ToSchema>() -> (String, serde_json::Value) {
    let schema = serde_json::to_value(<T as utoipa::PartialSchema>::schema()).unwrap_or_default();
    (T::name().into_owned(), schema)
}

/// Build the `components.schemas` object from a list of entries.
pub(crate) fn components(entries: Vec<(String, serde_json::Value)>) -> serde_json::Value {
    let schemas: serde_json::Map<String, serde_json::Value> = entries.into_iter().collect();
    serde_json::json!({ "schemas": schemas })
}

/// Standard JSON error response reference for OpenAPI fragments.
pub(crate) fn error_response(description: &str) -> serde_json::Value {
    serde_json::json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_all_orders_authors_before_books() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        let names: Vec<&str> = registry.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["authors", "books"]);
    }

    #[test]
    fn blank_text_is_reported_per_field() {
        let mut errors = FieldErrors::default();
        errors.require_text("name", "  ");
        errors.require_text("surname", "Orwell");
        errors.require_text("country", "");

        match errors.finish("invalid author") {
            Err(AppError::Validation { details, .. }) => {
                let fields: Vec<&str> = details
                    .iter()
                    .map(|d| d["field"].as_str().unwrap())
                    .collect();
                assert_eq!(fields, vec!["name", "country"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn message_schema_is_exported() {
        let (name, schema) = component::<MessageResponse>();
        assert_eq!(name, "MessageResponse");
        assert!(schema["properties"]["message"].is_object());
    }
}
