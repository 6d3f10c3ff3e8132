//! # Domain Entities Module
//!
//! 회원 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, 저장소 계층에서
//! 영속화되는 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 관계
//!
//! ```text
//! Member (1) ──owns──▶ (1) Profile
//!    ▲                        │
//!    └──── member_id (역참조) ─┘
//! ```
//!
//! 회원이 프로필을 값으로 소유하고, 프로필은 회원을 ID로만 가리킵니다.

pub mod members;
