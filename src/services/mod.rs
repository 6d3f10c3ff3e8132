//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Modules
//!
//! - [`members`] - 회원 생명주기 관리 (가입, 수정, 탈퇴, 조회)
//! - [`password`] - 비밀번호 인코딩/검증 전략
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MemberService;
//! use crate::services::password::password_verifier_from_env;
//!
//! let service = MemberService::new(Arc::new(storage), password_verifier_from_env());
//! ```

pub mod members;
pub mod password;
