//! 비밀번호 인코딩/검증 모듈
//!
//! - [`PlainTextPasswordVerifier`] - 평문 저장, 동등 비교 (기본값)
//! - [`BcryptPasswordVerifier`] - bcrypt 해시 저장

pub mod password_verifier;

pub use password_verifier::{
    password_verifier_from_env, BcryptPasswordVerifier, PasswordVerifier, PlainTextPasswordVerifier,
};
