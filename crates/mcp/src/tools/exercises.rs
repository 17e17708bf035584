// Exercise tools: muscles worked and alternatives

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{parse_arguments, Checks, ValidationErrors};
use crate::tools::response::into_tool_result;
use crate::tools::{json_schema_integer, json_schema_object, json_schema_string, Tool, ToolError};
use musclesworked_sdk::MusclesWorkedClient;
use serde::Deserialize;

/// Tool to get the muscles an exercise works
pub struct GetMusclesWorkedTool {
    client: MusclesWorkedClient,
}

impl GetMusclesWorkedTool {
    pub const NAME: &'static str = "get_muscles_worked";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct GetMusclesWorkedArgs {
    pub exercise: String,
}

impl GetMusclesWorkedArgs {
    pub fn validate(arguments: serde_json::Value) -> Result<Self, ValidationErrors> {
        parse_arguments(arguments)
    }
}

#[async_trait::async_trait]
impl Tool for GetMusclesWorkedTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Get the primary, secondary, and stabilizer muscles worked by an exercise. \
                Use search_exercises first if you don't know the exercise ID."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "exercise": json_schema_string("Exercise ID or name (e.g. 'barbell_bench_press')")
                }),
                vec!["exercise"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = GetMusclesWorkedArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        let result = self.client.exercises().muscles_worked(&args.exercise).await;
        Ok(into_tool_result(Self::NAME, result))
    }
}

/// Tool to find substitute exercises
pub struct GetAlternativesTool {
    client: MusclesWorkedClient,
}

impl GetAlternativesTool {
    pub const NAME: &'static str = "get_alternatives";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct GetAlternativesArgs {
    pub exercise: String,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl GetAlternativesArgs {
    pub fn validate(arguments: serde_json::Value) -> Result<Self, ValidationErrors> {
        let args: Self = parse_arguments(arguments)?;

        let mut checks = Checks::new();
        checks.range("limit", args.limit, 1..=50);
        checks.finish()?;

        Ok(args)
    }
}

#[async_trait::async_trait]
impl Tool for GetAlternativesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Find alternative exercises ranked by muscle overlap score. \
                Use search_exercises first if you don't know the exercise ID."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "exercise": json_schema_string("Exercise ID or name"),
                    "limit": json_schema_integer(1, 50, "Max results (default: 10)")
                }),
                vec!["exercise"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = GetAlternativesArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        let result = self
            .client
            .exercises()
            .alternatives(&args.exercise, args.limit)
            .await;
        Ok(into_tool_result(Self::NAME, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::response::INVALID_API_KEY_MESSAGE;
    use crate::tools::test_support::mock_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_muscles_worked_success() {
        let server = MockServer::start().await;
        let payload = json!({
            "exercise": {"id": "barbell_bench_press", "name": "Barbell Bench Press"},
            "primary": [{"id": "pectoralis_major_sternal", "activation": 0.9}],
            "secondary": [{"id": "triceps_brachii"}],
            "stabilizer": []
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/barbell_bench_press/muscles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetMusclesWorkedTool::new(mock_client(&server));
        let result = tool
            .execute(json!({"exercise": "barbell_bench_press"}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        let returned: serde_json::Value = serde_json::from_str(&result.text()).unwrap();
        assert_eq!(returned, payload);
    }

    #[tokio::test]
    async fn test_get_muscles_worked_not_found_passes_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/moon_press/muscles"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "exercise not found"})),
            )
            .mount(&server)
            .await;

        let tool = GetMusclesWorkedTool::new(mock_client(&server));
        let result = tool.execute(json!({"exercise": "moon_press"})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.text(), "exercise not found");
    }

    #[tokio::test]
    async fn test_unauthorized_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/squat/muscles"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "key revoked on 2024-01-01"})),
            )
            .mount(&server)
            .await;

        let tool = GetMusclesWorkedTool::new(mock_client(&server));
        let result = tool.execute(json!({"exercise": "squat"})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.text(), INVALID_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_exercise_is_rejected() {
        let server = MockServer::start().await;

        let tool = GetMusclesWorkedTool::new(mock_client(&server));
        let result = tool.execute(json!({})).await;

        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_alternatives_with_limit() {
        let server = MockServer::start().await;
        let payload = json!({
            "exercise": {"id": "barbell_squat"},
            "alternatives": [
                {"id": "front_squat", "score": 0.92},
                {"id": "goblet_squat", "score": 0.81}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/barbell_squat/alternatives"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetAlternativesTool::new(mock_client(&server));
        let result = tool
            .execute(json!({"exercise": "barbell_squat", "limit": 3}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        let returned: serde_json::Value = serde_json::from_str(&result.text()).unwrap();
        assert_eq!(returned, payload);
    }

    #[test]
    fn test_alternatives_limit_bounds() {
        let errors = GetAlternativesArgs::validate(json!({"exercise": "squat", "limit": 51})).unwrap_err();
        assert_eq!(errors.fields(), vec!["limit"]);
        assert!(GetAlternativesArgs::validate(json!({"exercise": "squat", "limit": 0})).is_err());
        assert_eq!(
            GetAlternativesArgs::validate(json!({"exercise": "squat", "limit": 50})).unwrap(),
            GetAlternativesArgs {
                exercise: "squat".to_string(),
                limit: Some(50),
            }
        );
    }
}
