//! # 인메모리 저장소 구현
//!
//! 프로세스 내부 테이블에 회원/프로필을 보관하는 저장소입니다.
//! 테스트와 임베디드 용도로 사용하며, MongoDB 구현과 같은 유니크 제약을 강제합니다.
//!
//! ## 트랜잭션 모델
//!
//! - `begin()`은 테이블 뮤텍스를 트랜잭션이 끝날 때까지 보유합니다 (직렬화 가능 격리).
//! - 트랜잭션은 테이블 사본 위에서 작업합니다.
//! - `commit()`은 사본을 공개하고, `rollback()` 또는 drop은 사본을 버립니다.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{TransactionManager, UnitOfWork};
use crate::domain::entities::members::{Member, Profile};
use crate::repositories::stores::{MemberStore, ProfileStore};

#[derive(Debug, Clone, Default)]
struct Tables {
    /// 회원 식별 레코드 (profile 필드는 항상 None으로 저장)
    members: HashMap<Uuid, Member>,
    profiles: HashMap<Uuid, Profile>,
}

impl Tables {
    /// 회원 레코드에 소유 프로필을 채워 반환합니다.
    fn assemble(&self, record: &Member) -> Member {
        let mut member = record.clone();
        member.profile = self
            .profiles
            .values()
            .find(|p| p.is_owned_by(&record.id))
            .cloned();
        member
    }
}

/// 인메모리 저장소
///
/// `Clone`은 같은 테이블을 공유하는 핸들을 만듭니다.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionManager for InMemoryStorage {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let working = guard.clone();

        debug!(
            "인메모리 트랜잭션 시작 (members={}, profiles={})",
            working.members.len(),
            working.profiles.len()
        );

        Ok(Box::new(InMemoryUnitOfWork { guard, working }))
    }
}

/// 인메모리 트랜잭션
pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn members(&mut self) -> &mut dyn MemberStore {
        self
    }

    fn profiles(&mut self) -> &mut dyn ProfileStore {
        self
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let InMemoryUnitOfWork { mut guard, working } = *self;
        *guard = working;
        debug!("인메모리 트랜잭션 커밋");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        debug!("인메모리 트랜잭션 롤백");
        Ok(())
    }
}

#[async_trait]
impl MemberStore for InMemoryUnitOfWork {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<Member>> {
        Ok(self
            .working
            .members
            .values()
            .find(|m| m.email == email)
            .map(|record| self.working.assemble(record)))
    }

    async fn find_by_id(&mut self, id: &Uuid) -> AppResult<Option<Member>> {
        Ok(self
            .working
            .members
            .get(id)
            .map(|record| self.working.assemble(record)))
    }

    async fn save(&mut self, member: Member) -> AppResult<Member> {
        let duplicated = self
            .working
            .members
            .values()
            .any(|m| m.id != member.id && m.email == member.email);

        if duplicated {
            return Err(AppError::StorageConstraintError(format!(
                "email_unique: {} 이메일이 이미 존재합니다",
                member.email
            )));
        }

        let mut record = member.clone();
        record.profile = None;
        self.working.members.insert(record.id, record);

        Ok(member)
    }
}

#[async_trait]
impl ProfileStore for InMemoryUnitOfWork {
    async fn find_by_nickname(&mut self, nickname: &str) -> AppResult<Option<Profile>> {
        Ok(self
            .working
            .profiles
            .values()
            .find(|p| p.nickname == nickname)
            .cloned())
    }

    async fn save(&mut self, profile: Profile) -> AppResult<Profile> {
        let duplicated = self
            .working
            .profiles
            .values()
            .any(|p| p.id != profile.id && p.nickname == profile.nickname);

        if duplicated {
            return Err(AppError::StorageConstraintError(format!(
                "nickname_unique: {} 닉네임이 이미 존재합니다",
                profile.nickname
            )));
        }

        self.working.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }
}
