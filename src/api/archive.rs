//! HTTP Archive API
//!
//! reqwest client for the archive endpoints. On wasm32 reqwest drives the
//! browser `fetch`, so the same code runs in the page and in native tests.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use super::{ApiError, ApiResult, ArchiveApi};
use crate::config::AppConfig;
use crate::models::{ApiResponse, Archive, ArchiveDetail, ArchiveId, ArchivePage};
use crate::query::ListParams;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: ArchiveId,
}

// ========================
// Client
// ========================

#[derive(Clone, Debug)]
pub struct HttpArchiveApi {
    client: Client,
    base: String,
    admin_token: Option<String>,
}

impl HttpArchiveApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base: config.api_base.trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone().filter(|t| !t.is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.admin_token {
            Some(token) => builder.header("admin", token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<ApiResponse<T>> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body: ApiResponse<T> = resp.json().await?;
        check(body)
    }

    async fn post_id(&self, path: &str, id: ArchiveId) -> ApiResult<()> {
        let builder = self.request(Method::POST, path).json(&IdArgs { id });
        self.send::<IgnoredAny>(builder).await.map(|_| ())
    }
}

/// Map a non-zero envelope code to [`ApiError::Rejected`]
fn check<T>(body: ApiResponse<T>) -> ApiResult<ApiResponse<T>> {
    if body.code != 0 {
        return Err(ApiError::Rejected {
            code: body.code,
            msg: body.msg,
        });
    }
    Ok(body)
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
impl ArchiveApi for HttpArchiveApi {
    async fn list_archives(&self, params: &ListParams) -> ApiResult<ArchivePage> {
        let builder = self.request(Method::GET, "archive/list").query(params);
        let body = self.send::<Vec<Archive>>(builder).await?;
        let rows = body.data.unwrap_or_default();
        log::debug!(target: "api", "archive/list page {} -> {} rows of {}", params.current, rows.len(), body.total);
        Ok(ArchivePage {
            rows,
            total: body.total,
        })
    }

    async fn archive_info(&self, id: ArchiveId) -> ApiResult<ArchiveDetail> {
        let builder = self.request(Method::GET, "archive/detail").query(&IdArgs { id });
        let body = self.send::<ArchiveDetail>(builder).await?;
        body.data.ok_or(ApiError::MissingData)
    }

    async fn recover_archive(&self, id: ArchiveId) -> ApiResult<()> {
        self.post_id("archive/recover", id).await
    }

    async fn delete_archive(&self, id: ArchiveId) -> ApiResult<()> {
        self.post_id("archive/delete", id).await
    }
}
