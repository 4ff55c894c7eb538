use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use lambda_http::tracing;
use serde::{Deserialize, Serialize};

const DEFAULT_MESSAGE: &str = "Hello, World!";

#[derive(Debug, Default, Deserialize)]
pub struct GreetingParams {
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: String,
}

/// An empty name counts as absent.
pub fn greet(name: Option<&str>) -> Greeting {
    let message = match name {
        Some(name) if !name.is_empty() => format!("Hello, {name}!"),
        _ => DEFAULT_MESSAGE.to_string(),
    };
    Greeting { message }
}

pub async fn hello(
    method: Method,
    uri: Uri,
    params: Result<Query<GreetingParams>, QueryRejection>,
) -> (StatusCode, Json<Greeting>) {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(%uri, error = %rejection, "ignoring undecodable query string");
            GreetingParams::default()
        }
    };
    tracing::info!(%method, %uri, ?params, "received greeting request");

    let greeting = greet(params.name.as_deref());
    (StatusCode::OK, Json(greeting))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_name() {
        assert_eq!(greet(None).message, "Hello, World!");
    }

    #[test]
    fn empty_name_is_treated_as_absent() {
        assert_eq!(greet(Some("")).message, "Hello, World!");
    }

    #[test]
    fn personalizes_with_name() {
        assert_eq!(greet(Some("Ada")).message, "Hello, Ada!");
    }

    #[test]
    fn name_is_not_trimmed_or_validated() {
        assert_eq!(greet(Some(" ")).message, "Hello,  !");
        assert_eq!(greet(Some("<b>42</b>")).message, "Hello, <b>42</b>!");
    }

    #[tokio::test]
    async fn handler_ignores_other_keys() {
        let uri: Uri = "/hello?name=ada".parse().unwrap();
        let params = GreetingParams { name: None };

        let (status, Json(greeting)) = hello(Method::GET, uri, Ok(Query(params))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(greeting.message, "Hello, World!");
    }
}
