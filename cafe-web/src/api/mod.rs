//! HTTP 页面路由和处理器
//!
//! 页面处理器返回页面所需的 JSON 视图数据，或 303 跳转。
//!
//! | 模块 | 路径 |
//! |------|------|
//! | [`home`] | `/`, `/detail/{id}` |
//! | [`auth`] | `/login`, `/register`, `/logout` |
//! | [`booking`] | `/booking/{table_id}`, `/booking/{table_id}/preview` |
//! | [`dashboard`] | `/dashboard`, `/dashboard/bookings/{id}/cancel` |
//! | [`admin`] | `/admin/dashboard`, `/admin/bookings/{id}/status`, `/admin/tables` |
//! | [`health`] | `/health` |

pub mod admin;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod health;
pub mod home;

use cafe_client::ClientResult;
use shared::ViewState;

use crate::utils::{PageError, PageResult};

/// 把一次读取的结果变成页面状态
///
/// 失败时页面照常渲染并显示消息；只有 401 会中断并跳转登录页。
pub(crate) fn load<T>(result: ClientResult<T>, fallback: &'static str) -> PageResult<ViewState<T>> {
    match result {
        Ok(data) => Ok(ViewState::ok(data)),
        Err(e) if e.is_unauthorized() => Err(PageError::SessionExpired),
        Err(e) => {
            tracing::warn!(error = %e, fallback, "page data unavailable");
            Ok(ViewState::err(e.user_message(fallback)))
        }
    }
}
