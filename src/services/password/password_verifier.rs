//! # 비밀번호 검증기
//!
//! 회원 서비스는 비밀번호를 직접 비교하지 않고 [`PasswordVerifier`]에 위임합니다.
//! 저장 형식(평문, bcrypt 등)을 바꿔도 서비스 계약은 바뀌지 않습니다.

use std::sync::Arc;

use log::debug;

use crate::config::{PasswordConfig, PasswordEncoding};
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 인코딩/검증 기능
pub trait PasswordVerifier: Send + Sync {
    /// 입력 비밀번호를 저장용 값으로 변환합니다.
    fn encode(&self, raw: &str) -> AppResult<String>;

    /// 입력 비밀번호가 저장된 값과 일치하는지 확인합니다.
    fn verify(&self, raw: &str, stored: &str) -> AppResult<bool>;
}

/// 평문 비밀번호 검증기
///
/// 입력값을 그대로 저장하고 동등 비교로 검증합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextPasswordVerifier;

impl PasswordVerifier for PlainTextPasswordVerifier {
    fn encode(&self, raw: &str) -> AppResult<String> {
        Ok(raw.to_string())
    }

    fn verify(&self, raw: &str, stored: &str) -> AppResult<bool> {
        Ok(raw == stored)
    }
}

/// bcrypt 비밀번호 검증기
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordVerifier {
    cost: u32,
}

impl BcryptPasswordVerifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 cost(`PasswordConfig::bcrypt_cost`)를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn encode(&self, raw: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(raw, self.cost).context("비밀번호 해싱 실패")?;

        debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    fn verify(&self, raw: &str, stored: &str) -> AppResult<bool> {
        bcrypt::verify(raw, stored).context("비밀번호 검증 실패")
    }
}

/// 설정(`PASSWORD_ENCODER`)에 맞는 검증기를 생성합니다.
pub fn password_verifier_from_env() -> Arc<dyn PasswordVerifier> {
    match PasswordConfig::encoding() {
        PasswordEncoding::PlainText => Arc::new(PlainTextPasswordVerifier),
        PasswordEncoding::Bcrypt => Arc::new(BcryptPasswordVerifier::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_plain_text_is_stored_as_is() {
        let verifier = PlainTextPasswordVerifier;
        let stored = verifier.encode("hello").unwrap();

        assert_eq!(stored, "hello");
        assert!(verifier.verify("hello", &stored).unwrap());
        assert!(!verifier.verify("hellohhhh", &stored).unwrap());
    }

    #[test]
    fn test_bcrypt_round_trip() {
        let verifier = BcryptPasswordVerifier::new(4);
        let stored = verifier.encode("hello").unwrap();

        assert_ne!(stored, "hello");
        assert!(verifier.verify("hello", &stored).unwrap());
        assert!(!verifier.verify("wrong", &stored).unwrap());
    }

    #[test]
    fn test_bcrypt_rejects_malformed_hash() {
        let verifier = BcryptPasswordVerifier::new(4);
        let err = verifier.verify("hello", "not-a-bcrypt-hash").unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
