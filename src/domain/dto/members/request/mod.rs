//! # 회원 관련 요청 DTO 모듈
//!
//! 회원 서비스의 각 연산에 전달되는 요청 데이터 구조를 정의합니다.
//! `serde`로 역직렬화되고 `validator`로 형식 검증을 수행합니다.
//!
//! | DTO | 사용 연산 |
//! |-----|-----------|
//! | [`MemberJoinRequest`] | join, update |
//! | [`MemberIdentifyRequest`] | leave, mine |
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 서비스 계층에서 `AppError::ValidationError`로 변환됩니다.

pub mod member_join;
pub mod member_identify;

pub use member_join::MemberJoinRequest;
pub use member_identify::MemberIdentifyRequest;
