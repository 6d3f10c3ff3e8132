//! # 저장소 인터페이스
//!
//! 회원 서비스가 소비하는 저장소 계약입니다. 구현체는 유니크 제약을
//! 스스로 강제해야 하며, 위반 시 [`AppError::StorageConstraintError`]를 반환합니다.
//!
//! 모든 메서드는 [`UnitOfWork`](crate::core::transaction::UnitOfWork) 안에서
//! 호출되므로 `&mut self`를 받습니다.
//!
//! [`AppError::StorageConstraintError`]: crate::core::errors::AppError::StorageConstraintError

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::members::{Member, Profile};

/// 회원 저장소
///
/// 조회 결과의 `Member::profile`에는 해당 회원이 소유한 프로필이 채워집니다.
#[async_trait]
pub trait MemberStore: Send {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<Member>>;

    async fn find_by_id(&mut self, id: &Uuid) -> AppResult<Option<Member>>;

    /// 회원 식별 레코드를 저장합니다 (ID 기준 insert 또는 replace).
    ///
    /// 소유 프로필은 함께 저장되지 않으며 [`ProfileStore::save`]로 따로 저장합니다.
    ///
    /// # Errors
    ///
    /// * `StorageConstraintError` - 다른 회원이 같은 이메일을 사용 중
    async fn save(&mut self, member: Member) -> AppResult<Member>;
}

/// 프로필 저장소
#[async_trait]
pub trait ProfileStore: Send {
    async fn find_by_nickname(&mut self, nickname: &str) -> AppResult<Option<Profile>>;

    /// 프로필을 저장합니다 (ID 기준 insert 또는 replace).
    ///
    /// # Errors
    ///
    /// * `StorageConstraintError` - 다른 프로필이 같은 닉네임을 사용 중
    async fn save(&mut self, profile: Profile) -> AppResult<Profile>;
}
