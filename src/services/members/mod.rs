//! 회원 관리 서비스 모듈
//!
//! 회원 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 회원가입 (닉네임 중복 사전 검사, 이메일 중복은 저장소 제약)
//! - 프로필 수정
//! - 회원 탈퇴 (소프트 삭제, 재탈퇴 불가)
//! - 본인 확인 후 내 정보 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MemberService;
//!
//! let service = MemberService::new(transactions, password_verifier);
//! service.leave(MemberIdentifyRequest::new("user@example.com", "pw")).await?;
//! ```

pub mod member_service;

pub use member_service::MemberService;
