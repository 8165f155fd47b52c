//! 会话与 cookie 编解码
//!
//! 会话保存在两个 cookie 中：`token` (bearer token) 与 `user` (JSON, 百分号编码)。

use cookie::{Cookie, SameSite};
use http::HeaderMap;
use http::header::{COOKIE, HeaderValue, SET_COOKIE};
use serde::{Deserialize, Serialize};
use shared::client::AuthResponse;
use shared::models::UserInfo;

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";

/// Token plus the user it was issued to
///
/// Created at login/register, torn down at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Where to land after login: admins go to the admin dashboard
    pub fn landing_path(&self) -> &'static str {
        if self.is_admin() { "/admin/dashboard" } else { "/" }
    }
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self::new(resp.token, resp.user)
    }
}

/// Raw session cookies of a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub token: Option<String>,
    pub user: Option<String>,
}

impl SessionCookies {
    /// Read `token` / `user` from every `Cookie` header
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut out = SessionCookies::default();
        for value in headers.get_all(COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for cookie in Cookie::split_parse_encoded(raw).flatten() {
                match cookie.name() {
                    TOKEN_COOKIE => out.token = Some(cookie.value().to_string()),
                    USER_COOKIE => out.user = Some(cookie.value().to_string()),
                    _ => {}
                }
            }
        }
        out.token = out.token.filter(|t| !t.is_empty());
        out.user = out.user.filter(|u| !u.is_empty());
        out
    }

    /// Both cookies present
    pub fn is_present(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Parsed user, `None` when missing or not valid JSON
    pub fn user_info(&self) -> Option<UserInfo> {
        self.user
            .as_deref()
            .and_then(|u| serde_json::from_str(u).ok())
    }

    pub fn session(&self) -> Option<Session> {
        let token = self.token.clone()?;
        Some(Session::new(token, self.user_info()?))
    }
}

/// Cookie attributes used when writing the session
#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub ttl_hours: i64,
    pub secure: bool,
}

impl CookieOptions {
    pub fn from_config(config: &crate::core::Config) -> Self {
        Self {
            ttl_hours: config.session_ttl_hours,
            secure: config.is_production(),
        }
    }
}

fn session_cookie(name: &'static str, value: String, opts: CookieOptions) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(opts.secure)
        .max_age(time::Duration::hours(opts.ttl_hours))
        .build()
}

fn header_value(cookie: &Cookie<'_>) -> Option<HeaderValue> {
    HeaderValue::from_str(&cookie.encoded().to_string()).ok()
}

/// `Set-Cookie` headers that start a session
pub fn set_session_cookies(session: &Session, opts: CookieOptions) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let user_json = serde_json::to_string(&session.user).unwrap_or_default();

    for cookie in [
        session_cookie(TOKEN_COOKIE, session.token.clone(), opts),
        session_cookie(USER_COOKIE, user_json, opts),
    ] {
        if let Some(v) = header_value(&cookie) {
            headers.append(SET_COOKIE, v);
        }
    }
    headers
}

/// `Set-Cookie` headers that remove the session
pub fn clear_session_cookies() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in [TOKEN_COOKIE, USER_COOKIE] {
        let mut cookie = Cookie::build((name, "")).path("/").build();
        cookie.make_removal();
        if let Some(v) = header_value(&cookie) {
            headers.append(SET_COOKIE, v);
        }
    }
    headers
}
