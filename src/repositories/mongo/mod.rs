//! MongoDB 저장소 모듈
//!
//! - [`mongo_storage`] - 세션 트랜잭션 기반 [`MongoStorage`]
//! - [`documents`] - 엔티티 ↔ 컬렉션 문서 매핑

pub mod documents;
pub mod mongo_storage;

pub use mongo_storage::{MongoStorage, MongoUnitOfWork};
