//! Access log with per-request correlation.
//!
//! [`RequestLog`] emits one `info` event per request carrying the method,
//! path, status, elapsed milliseconds and a fresh [`TraceId`]. The same id is
//! returned to the caller in the `trace-id` header and stays readable through
//! [`TraceId::current`] while the request is being served, so handler and
//! error logs can be joined with the access line.

use std::fmt;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::http::{Method, StatusCode};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{info, warn};
use uuid::Uuid;

/// Response header echoing the request's [`TraceId`].
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Random identifier assigned to one request by [`RequestLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Identifier of the request being served on this task, if any.
    ///
    /// # Examples
    /// ```
    /// use demo_api::middleware::TraceId;
    ///
    /// assert!(TraceId::current().is_none());
    /// ```
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Request facts captured before the inner service runs.
struct AccessEntry {
    trace_id: TraceId,
    method: Method,
    path: String,
    started: Instant,
}

impl AccessEntry {
    fn open(req: &ServiceRequest) -> Self {
        Self {
            trace_id: TraceId(Uuid::new_v4()),
            method: req.method().clone(),
            path: req.path().to_owned(),
            started: Instant::now(),
        }
    }

    fn stamp(&self, headers: &mut HeaderMap) {
        let Ok(value) = HeaderValue::try_from(self.trace_id.to_string()) else {
            warn!(trace_id = %self.trace_id, "trace id is not a valid header value");
            return;
        };
        headers.insert(HeaderName::from_static(TRACE_ID_HEADER), value);
    }

    fn close(self, status: StatusCode) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            trace_id = %self.trace_id,
            method = %self.method,
            path = %self.path,
            status = status.as_u16(),
            elapsed_ms,
            "{} {} {} - {}ms",
            self.method,
            self.path,
            status.as_u16(),
            elapsed_ms
        );
    }
}

/// Middleware writing the access log and the `trace-id` response header.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use demo_api::middleware::RequestLog;
///
/// let app = App::new().wrap(RequestLog);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogService { inner: service }))
    }
}

/// Service produced by [`RequestLog`].
pub struct RequestLogService<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let entry = AccessEntry::open(&req);
        let served = self.inner.call(req);
        Box::pin(CURRENT.scope(entry.trace_id, async move {
            match served.await {
                Ok(mut res) => {
                    entry.stamp(res.response_mut().headers_mut());
                    entry.close(res.status());
                    Ok(res)
                }
                Err(err) => {
                    entry.close(err.as_response_error().status_code());
                    Err(err)
                }
            }
        }))
    }
}
