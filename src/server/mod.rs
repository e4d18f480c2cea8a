//! HTTP surface: `POST /generate-sql` and `POST /generate-text`.
//!
//! Both endpoints always answer `200 OK` with a two-field JSON body; failures
//! are reported in its `error` field.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tokio::net::TcpListener;

use crate::{
    chain::SqlChain,
    schemas::{GenerateSqlRequest, GenerateTextRequest, SqlResponse, TextResponse},
};

pub fn router(chain: Arc<SqlChain>) -> Router {
    Router::new()
        .route("/generate-sql", post(generate_sql))
        .route("/generate-text", post(generate_text))
        .with_state(chain)
}

pub async fn serve(listener: TcpListener, chain: Arc<SqlChain>) -> std::io::Result<()> {
    axum::serve(listener, router(chain)).await
}

async fn generate_sql(
    State(chain): State<Arc<SqlChain>>,
    Json(request): Json<GenerateSqlRequest>,
) -> Json<SqlResponse> {
    tracing::info!(question = %request.question, "generate-sql");
    Json(chain.generate_sql(&request).await)
}

async fn generate_text(
    State(chain): State<Arc<SqlChain>>,
    Json(request): Json<GenerateTextRequest>,
) -> Json<TextResponse> {
    tracing::info!(prompt_len = request.prompt.len(), "generate-text");
    Json(chain.generate_text(&request).await)
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::{
        llm::{LLMError, LLM},
        schema::SchemaStore,
    };

    use super::*;

    struct EchoSql;

    #[async_trait]
    impl LLM for EchoSql {
        async fn invoke(&self, prompt: &str) -> Result<String, LLMError> {
            if prompt.contains("\"Users\"") {
                Ok("Here it is:\nSELECT * FROM \"Users\";".into())
            } else {
                Ok(format!("echo: {prompt}"))
            }
        }
    }

    async fn spawn_server() -> SocketAddr {
        let chain = SqlChain::builder()
            .llm(EchoSql)
            .schema(SchemaStore::new("1. \"Users\" (id)\n2. \"Orders\" (id)"))
            .build()
            .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, Arc::new(chain)));
        addr
    }

    #[tokio::test]
    async fn test_generate_sql_endpoint() {
        let addr = spawn_server().await;

        let body: Value = reqwest::Client::new()
            .post(format!("http://{addr}/generate-sql"))
            .json(&json!({ "user_question": "list users" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body, json!({ "sql": "SELECT * FROM \"Users\";", "error": "" }));
    }

    #[tokio::test]
    async fn test_generate_sql_endpoint_reports_failure() {
        let addr = spawn_server().await;

        let body: Value = reqwest::Client::new()
            .post(format!("http://{addr}/generate-sql"))
            .json(&json!({ "question": "list orders", "schema": "1. \"Orders\" (id)" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["sql"], "");
        assert!(body["error"].as_str().unwrap().starts_with("echo: "));
    }

    #[tokio::test]
    async fn test_generate_text_endpoint() {
        let addr = spawn_server().await;

        let body: Value = reqwest::Client::new()
            .post(format!("http://{addr}/generate-text"))
            .json(&json!({ "prompt": "ping" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body, json!({ "text": "echo: ping", "error": "" }));
    }
}
