//! # Transaction Scope
//!
//! 서비스 호출 하나를 하나의 저장소 트랜잭션으로 감싸기 위한 추상화입니다.
//! 서비스는 [`TransactionManager::begin`]으로 [`UnitOfWork`]를 열고, 그 안에서만
//! 저장소에 접근하며, 결과에 따라 커밋 또는 롤백합니다.
//!
//! ```text
//! MemberService::join()
//!   ├─ begin()                → Box<dyn UnitOfWork>
//!   ├─ uow.members().save()   ┐
//!   ├─ uow.profiles()...      ┘ 같은 스냅샷 안에서 실행
//!   └─ Ok  → commit()
//!      Err → rollback()
//! ```
//!
//! 커밋되지 않은 채로 drop된 UnitOfWork는 변경 사항을 버려야 합니다.

use async_trait::async_trait;
use log::error;

use crate::core::errors::AppResult;
use crate::repositories::{MemberStore, ProfileStore};

/// 하나의 저장소 트랜잭션
///
/// 회원/프로필 저장소 접근을 모두 이 트랜잭션 안으로 한정합니다.
#[async_trait]
pub trait UnitOfWork: Send {
    /// 이 트랜잭션에 묶인 회원 저장소
    fn members(&mut self) -> &mut dyn MemberStore;

    /// 이 트랜잭션에 묶인 프로필 저장소
    fn profiles(&mut self) -> &mut dyn ProfileStore;

    /// 변경 사항을 원자적으로 반영합니다.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// 변경 사항을 모두 버립니다.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// 트랜잭션을 시작하는 저장소 진입점
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;
}

/// 작업 결과에 따라 트랜잭션을 종료합니다.
///
/// * `Ok` - 커밋하고, 커밋 실패 시 그 에러를 반환합니다.
/// * `Err` - 롤백하고 원래 에러를 반환합니다. 롤백 실패는 로그로만 남깁니다.
pub async fn finish<T>(uow: Box<dyn UnitOfWork>, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_error) = uow.rollback().await {
                error!("트랜잭션 롤백 실패: {} (원인: {})", rollback_error, e);
            }
            Err(e)
        }
    }
}
