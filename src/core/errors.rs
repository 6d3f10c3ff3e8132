//! # Application Error Handling System
//!
//! 회원 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 서비스 계층에서 발생하는 비즈니스 규칙 위반과 저장소 계층에서 올라오는
//! 제약 조건 위반을 서로 다른 에러 종류로 구분하여 호출자에게 전달합니다.
//!
//! ## 에러 분류
//!
//! | AppError | 발생 계층 | 사용 시나리오 |
//! |----------|-----------|---------------|
//! | `ValidationError` | 서비스 | 닉네임 중복, 비밀번호 불일치, 이미 탈퇴한 회원, 입력값 형식 오류 |
//! | `NotFound` | 서비스 | 이메일로 회원을 찾을 수 없음 |
//! | `StorageConstraintError` | 저장소 | 이메일/닉네임 유니크 제약 위반 |
//! | `DatabaseError` | 저장소 | MongoDB 연결, 쿼리, 트랜잭션 오류 |
//! | `InternalError` | 공통 | 비밀번호 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 저장소 제약 위반은 변환하지 않습니다
//!
//! 회원가입 시 이메일 중복은 서비스에서 사전 검사하지 않고 저장소의 유니크
//! 제약으로만 감지됩니다. 이때 발생한 `StorageConstraintError`는
//! `ValidationError`로 바꾸지 않고 그대로 호출자에게 전달됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let member = tx.members()
//!     .find_by_email(&request.email)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 회원 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // validator 에러 변환 (From 구현 사용)
/// request.validate()?;
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 및 비즈니스 규칙 위반 에러
    ///
    /// 저장소에 도달하기 전에 서비스 계층에서 감지되는 모든 규칙 위반입니다.
    /// 호출자가 입력을 수정하면 복구 가능하며, 자동으로 재시도하지 않습니다.
    ///
    /// # 발생 시나리오
    /// - 회원가입 시 닉네임 중복
    /// - 비밀번호 불일치
    /// - 이미 탈퇴한 회원의 탈퇴 요청
    /// - 이메일 형식 오류, 필수 필드 누락
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 참조한 회원이 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 계층에서만 감지되는 유니크 제약 위반
    ///
    /// 회원가입 시 이메일 중복이 대표적인 예입니다.
    /// 동시에 같은 이메일로 가입을 시도한 경우 경쟁에서 진 쪽이 이 에러를 받습니다.
    #[error("Storage constraint violation: {0}")]
    StorageConstraintError(String),

    /// 데이터베이스 관련 에러
    ///
    /// 연결 실패, 쿼리 실행 오류, 트랜잭션 커밋/롤백 실패 등을 나타냅니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 외부 계층(트랜스포트, 로그 수집 등)에서 사용할 수 있는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StorageConstraintError(_) => "STORAGE_CONSTRAINT",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 호출자가 입력을 수정하여 해결할 수 있는 에러인지 여부
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_) | AppError::NotFound(_) | AppError::StorageConstraintError(_)
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::ValidationError("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::StorageConstraintError("x".into()).code(), "STORAGE_CONSTRAINT");
        assert_eq!(AppError::DatabaseError("x".into()).code(), "DATABASE_ERROR");
        assert_eq!(AppError::InternalError("x".into()).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::ValidationError("bad".into()).is_client_error());
        assert!(AppError::StorageConstraintError("dup".into()).is_client_error());
        assert!(!AppError::DatabaseError("down".into()).is_client_error());
        assert!(!AppError::InternalError("oops".into()).is_client_error());
    }

    #[test]
    fn test_error_display() {
        let error = AppError::StorageConstraintError("email already exists".to_string());
        assert_eq!(error.to_string(), "Storage constraint violation: email already exists");
    }

    #[test]
    fn test_validation_errors_conversion() {
        #[derive(Validate)]
        struct Probe {
            #[validate(email)]
            email: String,
        }

        let errors = Probe { email: "not-an-email".to_string() }
            .validate()
            .unwrap_err();

        match AppError::from(errors) {
            AppError::ValidationError(msg) => assert!(msg.contains("email")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("source error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("source error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(7);
        let value = ok.with_context(|| panic!("must not be evaluated")).unwrap();
        assert_eq!(value, 7);
    }
}
