//! 인메모리 저장소 모듈
//!
//! 테이블 사본 기반 트랜잭션을 제공하는 [`InMemoryStorage`]를 포함합니다.

pub mod memory_storage;

pub use memory_storage::{InMemoryStorage, InMemoryUnitOfWork};
