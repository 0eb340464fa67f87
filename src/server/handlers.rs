//! HTTP handlers
//!
//! The list and export handlers are thin wrappers: each names its entity
//! collection and headline aggregates, then delegates to the shared query
//! engine. Auth and notification handlers front the two external stores.

use crate::core::error::{ApiError, AuthError};
use crate::core::record::Record;
use crate::core::session::{Notification, SessionToken, UserSummary};
use crate::entities::{Booking, Category, Customer, Payment, Provider, Review, SupportTicket};
use crate::query;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use crate::query::page::{PageItem, PageRequest};
use crate::query::sort::SortSpec;
use crate::server::state::SharedState;
use axum::Json;
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// List and export
// ---------------------------------------------------------------------------

/// Query-string parameters shared by every list and export endpoint
///
/// ```text
/// GET /api/payments?q=sarah&filter={"status":"completed","amount>=":50}&sort=amount:desc&page=2&limit=8
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    /// Free-text search over the entity's searchable fields
    pub q: Option<String>,
    /// Filters as a JSON object; `field` keys are equality constraints,
    /// `field>=` / `field<=` keys are inclusive range bounds
    pub filter: Option<String>,
    /// `field`, `field:asc`, or `field:desc`
    pub sort: Option<String>,
    /// Page number, starting at 1; out-of-range values clamp
    pub page: usize,
    /// Page size; falls back to the configured default
    pub limit: Option<usize>,
}

impl ListParams {
    fn filter_value(&self) -> Option<Value> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    fn filter_spec(&self, searchable: &[&str]) -> FilterSpec {
        FilterSpec::from_params(self.q.as_deref(), self.filter_value().as_ref(), searchable)
    }
}

/// Pagination metadata returned with every list response
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    /// Total number of records after filters
    pub total: usize,
    pub total_pages: usize,
    /// Compact page-number window for navigation buttons
    pub window: Vec<PageItem>,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of filtered records plus stats over the filtered subset
#[derive(Debug, Serialize)]
pub struct ListResponse<R> {
    pub data: Vec<R>,
    pub stats: IndexMap<String, f64>,
    pub pagination: PaginationMeta,
}

fn run_list<R: Record + Serialize>(
    records: &[R],
    params: &ListParams,
    default_limit: usize,
    stats: AggregateSpec,
) -> ListResponse<R> {
    let limit = params.limit.unwrap_or(default_limit);
    let request = query::Query {
        filters: params.filter_spec(R::searchable_fields()),
        sort: params.sort.as_deref().and_then(SortSpec::parse),
        page: PageRequest::new(limit, params.page),
        aggregates: stats,
    };
    let out = query::evaluate(records, &request);
    tracing::debug!(
        entity = R::entity_name(),
        total = out.total_filtered,
        page = out.page,
        "list query evaluated"
    );
    ListResponse {
        data: out.visible,
        stats: out.stats,
        pagination: PaginationMeta {
            page: out.page,
            limit: request.page.size,
            total: out.total_filtered,
            total_pages: out.total_pages,
            has_next: out.page < out.total_pages,
            has_prev: out.page > 1,
            window: out.page_window,
        },
    }
}

/// Export the filtered (never paginated) records as a downloadable blob
fn run_export<R: Record>(records: &[R], params: &ListParams) -> Response {
    let filters = params.filter_spec(R::searchable_fields());
    let filtered: Vec<R> = records
        .iter()
        .filter(|r| filters.matches(*r))
        .cloned()
        .collect();
    let body = query::to_delimited(&filtered);
    let filename = query::export_filename(R::entity_name(), Utc::now().date_naive());
    tracing::info!(entity = R::entity_name(), rows = filtered.len(), %filename, "export generated");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

macro_rules! list_and_export_handlers {
    ($list:ident, $export:ident, $collection:ident, $entity:ty) => {
        pub async fn $list(
            State(state): State<SharedState>,
            Query(params): Query<ListParams>,
        ) -> Json<ListResponse<$entity>> {
            Json(run_list(
                &state.collections.$collection,
                &params,
                state.page_size,
                <$entity>::headline_stats(),
            ))
        }

        pub async fn $export(
            State(state): State<SharedState>,
            Query(params): Query<ListParams>,
        ) -> Response {
            run_export(&state.collections.$collection, &params)
        }
    };
}

list_and_export_handlers!(list_bookings, export_bookings, bookings, Booking);
list_and_export_handlers!(list_payments, export_payments, payments, Payment);
list_and_export_handlers!(list_reviews, export_reviews, reviews, Review);
list_and_export_handlers!(list_tickets, export_tickets, tickets, SupportTicket);
list_and_export_handlers!(list_categories, export_categories, categories, Category);
list_and_export_handlers!(list_customers, export_customers, customers, Customer);
list_and_export_handlers!(list_providers, export_providers, providers, Provider);

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Headline KPIs, each computed over the *full* collection — the dashboard
/// never reflects list-page filters
pub async fn dashboard(State(state): State<SharedState>) -> Json<IndexMap<String, IndexMap<String, f64>>> {
    let c = &state.collections;
    let mut sections = IndexMap::new();
    sections.insert("bookings".to_string(), Booking::headline_stats().compute(&c.bookings));
    sections.insert("payments".to_string(), Payment::headline_stats().compute(&c.payments));
    sections.insert("customers".to_string(), Customer::headline_stats().compute(&c.customers));
    sections.insert("providers".to_string(), Provider::headline_stats().compute(&c.providers));
    sections.insert("reviews".to_string(), Review::headline_stats().compute(&c.reviews));
    sections.insert("tickets".to_string(), SupportTicket::headline_stats().compute(&c.tickets));
    sections.insert("categories".to_string(), Category::headline_stats().compute(&c.categories));
    Json(sections)
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: SessionToken,
    pub user: UserSummary,
}

pub async fn login(
    State(state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (token, user) = state
        .sessions
        .login(&request.email, &request.password)
        .await?;
    tracing::info!(email = %user.email, "login");
    Ok(Json(LoginResponse { token, user }))
}

pub async fn logout(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(&token).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(user: axum::Extension<UserSummary>) -> Json<UserSummary> {
    Json(user.0.clone())
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .and_then(SessionToken::parse)
}

/// Middleware guarding authenticated routes.
///
/// Resolves the bearer token into a [`UserSummary`] and threads it through
/// as a request extension — session state is an explicit parameter to the
/// handlers that need it, never ambient.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::NotAuthenticated)?;
    let user = state
        .sessions
        .current_user(&token)
        .await?
        .ok_or(AuthError::NotAuthenticated)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub async fn list_notifications(
    State(state): State<SharedState>,
    user: axum::Extension<UserSummary>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let list = state.notifications.list_for_user(user.0.id).await?;
    Ok(Json(list))
}

pub async fn mark_notification_read(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.notifications.mark_read(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            what: "notification",
        })
    }
}
