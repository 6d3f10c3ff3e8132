//! # Core Framework Module
//!
//! 회원 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **계층화된 에러**: 서비스 규칙 위반과 저장소 제약 위반을 구분
//! - **자동 변환**: thiserror 기반 에러 체인, validator 에러 변환
//!
//! ### [`transaction`] - 트랜잭션 경계
//! - **UnitOfWork**: 서비스 호출 하나에 대응하는 저장소 트랜잭션
//! - **TransactionManager**: 트랜잭션 시작 지점
//! - **finish**: 성공 시 커밋, 실패 시 롤백을 보장하는 종료 경로
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Transactional` | `TransactionManager::begin()` + `finish()` |
//! | `DataIntegrityViolationException` | `AppError::StorageConstraintError` |
//! | `IllegalArgumentException` | `AppError::ValidationError` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::transaction::finish;
//!
//! let mut uow = self.transactions.begin().await?;
//! let result = do_work(uow.as_mut()).await;
//! finish(uow, result).await
//! ```

pub mod errors;
pub mod transaction;

pub use errors::*;
pub use transaction::*;
