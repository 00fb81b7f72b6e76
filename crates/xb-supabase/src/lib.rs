//! Supabase adapter: implements the `xb-core` expense store port over
//! the PostgREST API.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::debug;

use xb_core::{
    config::Config,
    domain::UserId,
    errors::Error,
    expense::{ExpenseRecord, StoredExpense},
    store::ExpenseStore,
    Result,
};

#[derive(Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    base_rest: String,
    service_key: String,
}

/// Wire shape of one inserted row. PostgREST expects an array body even
/// for a single insert.
#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    user_id: i64,
    expense_date: NaiveDate,
    place: Option<&'a str>,
    category: &'a str,
    amount: i64,
    note: &'a str,
}

impl<'a> From<&'a ExpenseRecord> for InsertRow<'a> {
    fn from(record: &'a ExpenseRecord) -> Self {
        Self {
            user_id: record.user_id.0,
            expense_date: record.date,
            place: record.place.as_deref(),
            category: record.category.as_label(),
            amount: record.amount,
            note: &record.note,
        }
    }
}

impl SupabaseStore {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.store_timeout)
            .build()
            .map_err(|e| Error::Store(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_rest: format!("{}/rest/v1", cfg.supabase_url),
            service_key: cfg.supabase_service_key.clone(),
        })
    }

    fn expenses_url(&self) -> String {
        format!("{}/expenses", self.base_rest)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let key = HeaderValue::from_str(&self.service_key)
            .map_err(|e| Error::Store(format!("invalid service key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.service_key))
            .map_err(|e| Error::Store(format!("invalid service key: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ExpenseStore for SupabaseStore {
    async fn insert(&self, record: &ExpenseRecord) -> Result<()> {
        debug!("inserting expense for user {}", record.user_id.0);

        let payload = [InsertRow::from(record)];
        let resp = self
            .http
            .post(self.expenses_url())
            .headers(self.headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Store(format!("insert request: {e}")))?;

        let status = resp.status();
        // Supabase answers inserts with 200, 201 or 204 depending on the
        // Prefer header.
        if !matches!(status.as_u16(), 200 | 201 | 204) {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Store(format!("insert failed: {status} {body}")));
        }

        Ok(())
    }

    async fn query(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<StoredExpense>> {
        debug!("querying expenses for user {} in {from}..={to}", user_id.0);

        let resp = self
            .http
            .get(self.expenses_url())
            .headers(self.headers()?)
            .query(&query_params(user_id, from, to))
            .send()
            .await
            .map_err(|e| Error::Store(format!("select request: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Store(format!("select failed: {status} {body}")));
        }

        resp.json::<Vec<StoredExpense>>()
            .await
            .map_err(|e| Error::Store(format!("select body: {e}")))
    }
}

/// PostgREST filter params for one user's rows inside `[from, to]`,
/// newest first.
fn query_params(user_id: UserId, from: NaiveDate, to: NaiveDate) -> Vec<(&'static str, String)> {
    vec![
        ("select", "place,category,amount,expense_date".to_string()),
        ("user_id", format!("eq.{}", user_id.0)),
        ("expense_date", format!("gte.{from}")),
        ("expense_date", format!("lte.{to}")),
        ("order", "expense_date.desc".to_string()),
    ]
}
