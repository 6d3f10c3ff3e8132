//! # 회원 DTO 모듈
//!
//! 회원 서비스의 요청/응답 데이터 전송 객체를 제공합니다.
//!
//! ```text
//! dto::members
//! ├── request/   ← MemberJoinRequest, MemberIdentifyRequest
//! └── response/  ← MemberResponse, ProfileResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
