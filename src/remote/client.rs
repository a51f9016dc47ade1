use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DayWindow, Entry, SETTINGS_ID, Settings};
use crate::store::EntryStore;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RemoteStore {
    http: Client,
    base_url: String,
    key: String,
}

#[derive(Deserialize)]
struct LimitRow {
    daily_sugar_limit: f64,
}

impl RemoteStore {
    pub fn new(url: &str, key: &str) -> AppResult<Self> {
        let url = url.trim();
        let key = key.trim();

        if url.is_empty() || key.is_empty() {
            return Err(AppError::Config(
                "Missing SUPABASE_URL or SUPABASE_KEY for the remote backend".into(),
            ));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            key: key.to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.remote_url, &cfg.remote_key)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Send and turn any non-2xx answer into [`AppError::Remote`].
    fn send(rb: RequestBuilder) -> AppResult<Response> {
        let resp = rb.send()?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        Err(AppError::Remote {
            status: status.as_u16(),
            body,
        })
    }

    fn window_filter(window: &DayWindow) -> [(&'static str, String); 2] {
        [
            ("ts", format!("gte.{}", window.start_rfc3339())),
            ("ts", format!("lt.{}", window.end_rfc3339())),
        ]
    }

    /// Quick reachability check used by `init`.
    pub fn ping(&self) -> AppResult<()> {
        let rb = self
            .request(Method::GET, "settings")
            .query(&[("select", "id"), ("limit", "1")]);
        Self::send(rb)?;
        Ok(())
    }
}

impl EntryStore for RemoteStore {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    fn add_entry(&mut self, entry: &Entry) -> AppResult<Entry> {
        let rb = self
            .request(Method::POST, "entries")
            .header("Prefer", "return=representation")
            .json(entry);

        let rows: Vec<Entry> = Self::send(rb)?.json()?;
        debug!(food = %entry.food, "remote insert");

        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Other("insert returned no row".into()))
    }

    fn entries_in(&mut self, window: &DayWindow) -> AppResult<Vec<Entry>> {
        let rb = self
            .request(Method::GET, "entries")
            .query(&[("select", "*")])
            .query(&Self::window_filter(window))
            .query(&[("order", "ts.desc,id.desc")]);

        Ok(Self::send(rb)?.json()?)
    }

    fn entries_between(&mut self, first: &DayWindow, last: &DayWindow) -> AppResult<Vec<Entry>> {
        let rb = self
            .request(Method::GET, "entries")
            .query(&[("select", "*")])
            .query(&[
                ("ts", format!("gte.{}", first.start_rfc3339())),
                ("ts", format!("lt.{}", last.end_rfc3339())),
            ])
            .query(&[("order", "ts.asc,id.asc")]);

        Ok(Self::send(rb)?.json()?)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<bool> {
        let rb = self
            .request(Method::DELETE, "entries")
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{id}"))]);

        let rows: Vec<serde_json::Value> = Self::send(rb)?.json()?;
        Ok(!rows.is_empty())
    }

    fn delete_in(&mut self, window: &DayWindow) -> AppResult<usize> {
        let rb = self
            .request(Method::DELETE, "entries")
            .header("Prefer", "return=representation")
            .query(&Self::window_filter(window));

        let rows: Vec<serde_json::Value> = Self::send(rb)?.json()?;
        Ok(rows.len())
    }

    fn sugar_limit(&mut self) -> AppResult<Option<f64>> {
        let rb = self
            .request(Method::GET, "settings")
            .query(&[
                ("select", "daily_sugar_limit".to_string()),
                ("id", format!("eq.{SETTINGS_ID}")),
            ]);

        let rows: Vec<LimitRow> = Self::send(rb)?.json()?;
        Ok(rows.first().map(|r| r.daily_sugar_limit))
    }

    fn set_sugar_limit(&mut self, value: f64) -> AppResult<()> {
        let rb = self
            .request(Method::POST, "settings")
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&Settings::with_limit(value));

        Self::send(rb)?;
        Ok(())
    }

    fn audit_log(&mut self) -> AppResult<Vec<(String, String, String, String)>> {
        Err(AppError::Unsupported {
            backend: "remote",
            operation: "internal log",
        })
    }
}
