//! # Domain Layer Module
//!
//! 회원 도메인의 엔티티와 데이터 전송 객체를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - Member, Profile
//! └── DTOs      - 요청/응답 데이터 구조
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
