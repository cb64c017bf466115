use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
///
/// 设置空的 refresh_token cookie（max_age=0 让浏览器删除该 cookie），
/// 并失效当前 access token 对应的缓存用户。
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 按 token 清除缓存中的用户对象
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        && let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
    {
        cache.get_ref().remove(&format!("user:{token}")).await;
    }

    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("登出成功")))
}
