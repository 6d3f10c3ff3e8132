//! # Data Transfer Objects
//!
//! 서비스 경계를 넘나드는 데이터 구조를 정의합니다.
//! 요청 DTO는 `validator`로 형식 검증을 수행하고,
//! 응답 DTO는 엔티티에서 민감 정보를 걸러낸 형태를 제공합니다.

pub mod members;

pub use members::*;
