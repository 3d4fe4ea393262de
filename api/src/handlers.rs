use anyhow::Result;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_poem::{GraphQLRequest, GraphQLResponse};
use poem::{
    handler,
    web::{Data, Html},
    IntoResponse,
};

use crate::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const SUBSCRIPTION_PATH: &str = "/graphql/ws";

#[handler]
pub fn health() {}

#[handler]
pub fn playground() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new(GRAPHQL_PATH).subscription_endpoint(SUBSCRIPTION_PATH),
    ))
}

#[handler]
pub async fn graphql_handler(
    Data(state): Data<&AppState>,
    req: GraphQLRequest,
) -> Result<GraphQLResponse> {
    Ok(state.schema.execute(req.0).await.into())
}

#[cfg(test)]
mod tests {
    use poem::{get, test::TestClient, Route};

    use super::*;

    #[tokio::test]
    async fn test_playground_points_at_both_endpoints() {
        let cli = TestClient::new(Route::new().at("/playground", get(playground)));

        let resp = cli.get("/playground").send().await;

        resp.assert_status_is_ok();
        let html = resp.0.into_body().into_string().await.unwrap();
        assert!(html.contains(GRAPHQL_PATH));
        assert!(html.contains(SUBSCRIPTION_PATH));
    }
}
