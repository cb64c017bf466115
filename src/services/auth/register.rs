use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    create_request = sanitize_register_request(create_request);

    // 1. 检查用户名是否已存在
    if let Err(response) = check_username_exists(&storage, &create_request.username).await {
        return Ok(response);
    }

    // 2. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &create_request.email).await {
        return Ok(response);
    }

    // 验证用户名合法性
    if let Err(msg) = validate_username(&create_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&create_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    // 3. 哈希密码
    match hash_password(&create_request.password) {
        Ok(password_hash) => {
            create_request.password = password_hash;

            // 4. 创建用户
            match storage.create_user(create_request).await {
                Ok(user) => {
                    Ok(HttpResponse::Created().json(ApiResponse::success(user, "注册成功")))
                }
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("注册失败: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("密码哈希失败: {e}"),
            )),
        ),
    }
}

async fn check_username_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    username: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "Username already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

// 公开注册只能产生学生账号，其他角色由管理员在用户管理中分配
fn sanitize_register_request(mut create_request: CreateUserRequest) -> CreateUserRequest {
    create_request.role = UserRole::Student;
    create_request
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_forces_student_role() {
        // 请求体里声明 admin 角色也只能注册为学生
        let payload = serde_json::json!({
            "username": "eve",
            "email": "eve@example.com",
            "password": "Sup3rSecret!",
            "role": "admin"
        });
        let create_request: CreateUserRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(create_request.role, UserRole::Admin);

        let sanitized = sanitize_register_request(create_request);
        assert_eq!(sanitized.role, UserRole::Student);
    }

    #[test]
    fn test_register_defaults_to_student_role() {
        let payload = serde_json::json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "Sup3rSecret!"
        });
        let create_request: CreateUserRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(create_request.role, UserRole::Student);
    }
}
