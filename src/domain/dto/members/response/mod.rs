//! # 회원 관련 응답 DTO 모듈
//!
//! 회원 엔티티를 외부 계층에 노출할 때 사용하는 응답 구조를 정의합니다.
//! 민감 정보(비밀번호)는 응답에서 제외됩니다.

pub mod member_response;

pub use member_response::{MemberResponse, ProfileResponse};
