//! `reqwest`-based implementation of the store's transport contract.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use stockdesk_core::{ApiError, ApiResult};
use stockdesk_inventory::{NewStockMovement, Stock, StockMovement};
use stockdesk_store::StockApi;

/// HTTP client for the remote stock management API.
pub struct HttpStockApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStockApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn execute<T>(&self, req: reqwest::RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // Keep the parsed body so the store can extract the server's
            // message; a non-JSON body degrades to no body at all.
            let body = resp.json::<Value>().await.ok();
            return Err(ApiError::api(status.as_u16(), body));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::parse(e.to_string()))
    }

    async fn get_json<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }
}

#[async_trait::async_trait]
impl StockApi for HttpStockApi {
    async fn list_stocks(&self) -> ApiResult<Vec<Stock>> {
        self.get_json("/api/stocks/").await
    }

    async fn list_movements(&self) -> ApiResult<Vec<StockMovement>> {
        self.get_json("/api/stock-movements/").await
    }

    async fn create_movement(&self, movement: NewStockMovement) -> ApiResult<StockMovement> {
        self.post_json("/api/stock-movements/", &movement).await
    }

    async fn daily_summary(&self) -> ApiResult<Value> {
        self.get_json("/api/stock-movements/daily_summary/").await
    }

    async fn weekly_summary(&self) -> ApiResult<Value> {
        self.get_json("/api/stock-movements/weekly_summary/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let api = HttpStockApi::new("http://localhost:8000/");
        assert_eq!(
            api.url("/api/stocks/"),
            "http://localhost:8000/api/stocks/"
        );

        let api = HttpStockApi::new("http://localhost:8000");
        assert_eq!(
            api.url("/api/stock-movements/daily_summary/"),
            "http://localhost:8000/api/stock-movements/daily_summary/"
        );
    }
}
