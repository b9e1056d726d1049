//! Author records: create, list, and delete.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use async_trait::async_trait;
use axum::{
    routing::{delete, get},
    Router,
};
use serde_json::json;
use shelf_db::Database;
use shelf_kernel::{InitCtx, Migration, Module};

use crate::modules::{component, components, error_response, MessageResponse};

pub struct AuthorsModule;

impl AuthorsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "authors module initialized"
        );
        Ok(())
    }

    fn routes(&self, db: &Database) -> Router {
        let collection = get(handlers::list_authors).post(handlers::create_author);

        Router::new()
            .route("/authors", collection.clone())
            .route("/authors/", collection)
            .route("/authors/{author_id}", delete(handlers::delete_author))
            .with_state(db.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/authors/": {
                    "get": {
                        "summary": "List authors",
                        "tags": ["Authors"],
                        "responses": {
                            "200": {
                                "description": "Every stored author",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Author" }
                                        }
                                    }
                                }
                            },
                            "500": error_response("Internal server error")
                        }
                    },
                    "post": {
                        "summary": "Create an author",
                        "tags": ["Authors"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CreateAuthor" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Author created",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/MessageResponse" }
                                    }
                                }
                            },
                            "400": error_response("Malformed body or duplicate author"),
                            "422": error_response("Blank field"),
                            "500": error_response("Internal server error")
                        }
                    }
                },
                "/authors/{author_id}": {
                    "delete": {
                        "summary": "Delete an author",
                        "tags": ["Authors"],
                        "parameters": [{
                            "name": "author_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer", "format": "int64" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Author deleted",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/MessageResponse" }
                                    }
                                }
                            },
                            "400": error_response("Malformed id"),
                            "404": error_response("Author not found"),
                            "409": error_response("Author still has books"),
                            "500": error_response("Internal server error")
                        }
                    }
                }
            },
            "components": components(vec![
                component::<models::Author>(),
                component::<models::CreateAuthor>(),
                component::<MessageResponse>(),
            ])
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE authors (
                    id      INTEGER PRIMARY KEY AUTOINCREMENT,
                    name    TEXT NOT NULL,
                    surname TEXT NOT NULL,
                    country TEXT NOT NULL
                );
                CREATE INDEX authors_surname_idx ON authors (surname);
                CREATE UNIQUE INDEX authors_identity_unique ON authors (name, surname, country);
                "#,
        }]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module stopped");
        Ok(())
    }
}

/// Create a new instance of the authors module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new())
}
