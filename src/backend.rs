use crate::leave::LeaveForm;
use crate::models::{AttendanceMap, AttendanceResponse, LeaveResponse, ToggleResponse};
use crate::period::DisplayPeriod;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to attendance backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("attendance backend answered {0}")]
    Status(StatusCode),
}

/// Where a calendar render gets its attendance data from.
pub trait AttendanceSource {
    fn fetch_month(
        &self,
        period: DisplayPeriod,
    ) -> impl Future<Output = Result<AttendanceMap, BackendError>> + Send;
}

/// The caller's backend session, carried as its `Cookie` header.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cookie: Option<HeaderValue>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            cookie: headers.get(COOKIE).cloned(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.cookie.is_none()
    }

    fn attach(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => request.header(COOKIE, cookie.clone()),
            None => request,
        }
    }
}

#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Binds `session` so calendar renders fetch the caller's own attendance.
    pub fn for_session<'a>(&'a self, session: &'a Session) -> SessionClient<'a> {
        SessionClient {
            backend: self,
            session,
        }
    }

    /// Returns the backend's status alongside its body; rejections arrive as
    /// non-2xx answers with an `error` field.
    pub async fn toggle_attendance(
        &self,
        action: &str,
        session: &Session,
    ) -> Result<(StatusCode, ToggleResponse), BackendError> {
        let url = format!("{}/attendance", self.base_url);
        debug!(%url, action, anonymous = session.is_anonymous(), "forwarding attendance toggle");
        let response = session
            .attach(self.http.post(url))
            .form(&[("action", action)])
            .send()
            .await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }

    pub async fn apply_leave(
        &self,
        form: &LeaveForm,
        session: &Session,
    ) -> Result<(StatusCode, LeaveResponse), BackendError> {
        let url = format!("{}/apply_leave", self.base_url);
        debug!(%url, from = %form.from_date, to = %form.to_date, "forwarding leave request");
        let response = session.attach(self.http.post(url)).form(form).send().await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }
}

pub struct SessionClient<'a> {
    backend: &'a BackendClient,
    session: &'a Session,
}

impl AttendanceSource for SessionClient<'_> {
    async fn fetch_month(&self, period: DisplayPeriod) -> Result<AttendanceMap, BackendError> {
        let url = format!(
            "{}/api/attendance/{}/{}",
            self.backend.base_url,
            period.api_month(),
            period.year()
        );
        debug!(%url, anonymous = self.session.is_anonymous(), "fetching attendance");

        let response = self
            .session
            .attach(self.backend.http.get(url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body: AttendanceResponse = response.json().await?;
        Ok(body.attendance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_carries_only_the_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=abc"));
        headers.insert("x-other", HeaderValue::from_static("1"));

        let session = Session::from_headers(&headers);
        assert!(!session.is_anonymous());

        let request = session
            .attach(Client::new().get("http://127.0.0.1/"))
            .build()
            .unwrap();
        assert_eq!(request.headers().get(COOKIE).unwrap(), "session=abc");
        assert!(request.headers().get("x-other").is_none());
    }

    #[test]
    fn anonymous_session_adds_no_cookie() {
        let session = Session::from_headers(&HeaderMap::new());
        assert!(session.is_anonymous());

        let request = session
            .attach(Client::new().get("http://127.0.0.1/"))
            .build()
            .unwrap();
        assert!(request.headers().get(COOKIE).is_none());
    }
}
