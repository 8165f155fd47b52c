//! 路由守卫中间件
//!
//! 每个请求先经过 [`route_guard`]：
//!
//! | 路径 | 规则 |
//! |------|------|
//! | `/`, `/login`, `/register`, `/health` | 公开 |
//! | `/admin`, `/admin/*` | 需要会话且 `role == admin`；非管理员跳转 `/` |
//! | 其他 | 需要 `token` 与 `user` 两个 cookie，否则跳转 `/login` |

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::SessionCookies;
use crate::security_log;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

const PUBLIC_PATHS: [&str; 4] = ["/", "/login", "/register", "/health"];

/// 守卫结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

pub fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// 纯函数：根据路径与 cookie 决定放行或跳转
pub fn decide(path: &str, cookies: &SessionCookies) -> GuardDecision {
    if is_public_path(path) {
        return GuardDecision::Allow;
    }

    if !cookies.is_present() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }

    if is_admin_path(path) {
        return match cookies.user_info() {
            None => GuardDecision::Redirect(LOGIN_PATH),
            Some(user) if !user.is_admin() => GuardDecision::Redirect(HOME_PATH),
            Some(_) => GuardDecision::Allow,
        };
    }

    GuardDecision::Allow
}

/// 路由守卫 - 未登录跳转登录页，非管理员访问后台跳转首页
///
/// 放行时把解析出的 [`Session`](crate::auth::Session) 注入请求扩展，
/// 供提取器和日志中间件复用。
pub async fn route_guard(mut req: Request, next: Next) -> Response {
    // CORS 预检直接放行
    if req.method() == http::Method::OPTIONS {
        return next.run(req).await;
    }

    let cookies = SessionCookies::from_headers(req.headers());
    let path = req.uri().path().to_string();

    match decide(&path, &cookies) {
        GuardDecision::Allow => {
            if let Some(session) = cookies.session() {
                req.extensions_mut().insert(session);
            }
            next.run(req).await
        }
        GuardDecision::Redirect(to) => {
            let event = if to == LOGIN_PATH {
                "session_missing"
            } else {
                "admin_required"
            };
            security_log!("WARN", event, path = path.as_str(), redirect = to);
            Redirect::to(to).into_response()
        }
    }
}
