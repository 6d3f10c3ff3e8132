//! 데이터 및 보안 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스 연결, 비밀번호 인코딩 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 저장 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEncoding {
    /// 입력값을 그대로 저장하고 동등 비교로 검증
    PlainText,
    /// bcrypt 해시로 저장
    Bcrypt,
}

/// 패스워드 인코딩 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 사용할 비밀번호 저장 방식을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PASSWORD_ENCODER`: `plain` (기본값) 또는 `bcrypt`
    pub fn encoding() -> PasswordEncoding {
        Self::encoding_from(env::var("PASSWORD_ENCODER").ok().as_deref())
    }

    pub fn encoding_from(value: Option<&str>) -> PasswordEncoding {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("bcrypt") => PasswordEncoding::Bcrypt,
            _ => PasswordEncoding::PlainText,
        }
    }

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 숫자이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: "member_service_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "member_service_dev".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_password_encoding_from_value() {
        assert_eq!(PasswordConfig::encoding_from(None), PasswordEncoding::PlainText);
        assert_eq!(PasswordConfig::encoding_from(Some("plain")), PasswordEncoding::PlainText);
        assert_eq!(PasswordConfig::encoding_from(Some(" BCRYPT ")), PasswordEncoding::Bcrypt);
        assert_eq!(PasswordConfig::encoding_from(Some("argon2")), PasswordEncoding::PlainText);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "member_service_dev");
        }
    }
}
