//! 회원 관리 서비스
//!
//! 회원 가입, 프로필 수정, 탈퇴, 내 정보 조회를 제공하는 서비스 라이브러리입니다.
//! 모든 연산은 하나의 트랜잭션 범위 안에서 실행되며,
//! 실패하면 해당 연산의 변경 사항은 모두 롤백됩니다.
//!
//! # Features
//!
//! - **회원 관리**: 가입(회원 + 프로필), 프로필 수정, 소프트 탈퇴, 내 정보 조회
//! - **비밀번호 검증기**: 평문/bcrypt 교체 가능한 검증 계약
//! - **트랜잭션**: 연산 단위 커밋/롤백
//! - **MongoDB**: 세션 트랜잭션과 유니크 인덱스 기반 영구 저장
//! - **인메모리 저장소**: 테스트 및 로컬 실행용 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (MemberService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Transaction   │ ← UnitOfWork (커밋/롤백)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MemberStore / ProfileStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use member_service::repositories::memory::InMemoryStorage;
//! use member_service::services::members::MemberService;
//! use member_service::services::password::PlainTextPasswordVerifier;
//!
//! let service = MemberService::new(
//!     Arc::new(InMemoryStorage::new()),
//!     Arc::new(PlainTextPasswordVerifier),
//! );
//!
//! service.join(request).await?;
//! let mine = service.mine(identify).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
