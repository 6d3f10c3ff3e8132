//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 회원 서비스가 소비하는 저장소 계약([`MemberStore`], [`ProfileStore`])과
//! 두 가지 구현을 제공합니다.
//!
//! # Features
//!
//! - [`memory`] - 프로세스 내부 테이블, 테스트 및 임베디드 용도
//! - [`mongo`] - MongoDB 컬렉션 + 세션 트랜잭션
//! - 두 구현 모두 이메일/닉네임 유니크 제약을 저장소 수준에서 강제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::transaction::TransactionManager;
//! use crate::repositories::memory::InMemoryStorage;
//!
//! let storage = InMemoryStorage::new();
//! let mut uow = storage.begin().await?;
//! let member = uow.members().find_by_email("user@example.com").await?;
//! uow.commit().await?;
//! ```

pub mod stores;
pub mod memory;
pub mod mongo;

pub use stores::{MemberStore, ProfileStore};
