//! # MongoDB 저장소 구현
//!
//! 회원/프로필 엔티티를 MongoDB 컬렉션에 저장하는 저장소입니다.
//! 모든 연산은 클라이언트 세션 트랜잭션 안에서 실행됩니다.
//!
//! ## 컬렉션
//!
//! - **members**: 회원 식별 레코드, `email` 유니크 인덱스
//! - **profiles**: 프로필, `nickname` 유니크 인덱스, `member_id` 인덱스
//!
//! ## 제약 조건
//!
//! 유니크 인덱스 위반(duplicate key, 코드 11000)은
//! `AppError::StorageConstraintError`로, 그 외 드라이버 오류는
//! `AppError::DatabaseError`로 변환됩니다.
//!
//! ## 동시 쓰기 충돌
//!
//! 트랜잭션 안에서는 다른 트랜잭션이 아직 커밋하지 않은 같은 키를 쓰려는 쪽이
//! duplicate key 대신 `WriteConflict`(코드 112, `TransientTransactionError` 레이블)를 받습니다.
//! 같은 이메일/닉네임으로 동시에 가입한 경우가 여기에 해당하므로, 저장/커밋 중
//! 발생한 쓰기 충돌도 `AppError::StorageConstraintError`로 변환합니다.
//! 트랜잭션은 재시도하지 않으며, 경쟁에서 진 호출자는 덮어쓰기 없이 실패합니다.
//!
//! 멀티 도큐먼트 트랜잭션은 레플리카 셋 또는 샤드 클러스터에서만 동작합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure, TRANSIENT_TRANSACTION_ERROR},
    options::IndexOptions,
    ClientSession, Collection, IndexModel,
};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{TransactionManager, UnitOfWork};
use crate::db::Database;
use crate::domain::entities::members::{Member, Profile};
use crate::repositories::mongo::documents::{MemberDocument, ProfileDocument};
use crate::repositories::stores::{MemberStore, ProfileStore};

const MEMBER_COLLECTION: &str = "members";
const PROFILE_COLLECTION: &str = "profiles";
const DUPLICATE_KEY_CODE: i32 = 11000;
const WRITE_CONFLICT_CODE: i32 = 112;

/// MongoDB 저장소
///
/// # 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let storage = MongoStorage::new(database);
/// storage.create_indexes().await?;
///
/// let service = MemberService::new(Arc::new(storage), password_verifier_from_env());
/// ```
#[derive(Clone)]
pub struct MongoStorage {
    db: Arc<Database>,
}

impl MongoStorage {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn members(&self) -> Collection<MemberDocument> {
        self.db.get_database().collection(MEMBER_COLLECTION)
    }

    fn profiles(&self) -> Collection<ProfileDocument> {
        self.db.get_database().collection(PROFILE_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 저장소가 강제하는 유니크 제약은 이 인덱스에 의존합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `members.email` - UNIQUE (`email_unique`)
    /// 2. `profiles.nickname` - UNIQUE (`nickname_unique`)
    /// 3. `profiles.member_id` - 소유 프로필 조회용 (`member_id_idx`)
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성은 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.members()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nickname_unique".to_string())
                .build())
            .build();

        let member_id_index = IndexModel::builder()
            .keys(doc! { "member_id": 1 })
            .options(IndexOptions::builder()
                .name("member_id_idx".to_string())
                .build())
            .build();

        self.profiles()
            .create_indexes([nickname_index, member_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ 회원/프로필 인덱스 준비 완료 ({})", self.db.database_name());
        Ok(())
    }
}

#[async_trait]
impl TransactionManager for MongoStorage {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let mut session = self.db
            .client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(format!("세션 시작 실패: {}", e)))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(format!("트랜잭션 시작 실패: {}", e)))?;

        Ok(Box::new(MongoUnitOfWork {
            session,
            members: self.members(),
            profiles: self.profiles(),
        }))
    }
}

/// MongoDB 세션 트랜잭션
///
/// 커밋되지 않은 채 drop되면 드라이버가 트랜잭션을 중단합니다.
pub struct MongoUnitOfWork {
    session: ClientSession,
    members: Collection<MemberDocument>,
    profiles: Collection<ProfileDocument>,
}

impl MongoUnitOfWork {
    async fn owned_profile(&mut self, member_id: &str) -> AppResult<Option<Profile>> {
        self.profiles
            .find_one(doc! { "member_id": member_id })
            .session(&mut self.session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Profile::try_from)
            .transpose()
    }

    async fn assemble(&mut self, document: Option<MemberDocument>) -> AppResult<Option<Member>> {
        match document {
            Some(document) => {
                let profile = self.owned_profile(&document.id).await?;
                document.into_member(profile).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UnitOfWork for MongoUnitOfWork {
    fn members(&mut self) -> &mut dyn MemberStore {
        self
    }

    fn profiles(&mut self) -> &mut dyn ProfileStore {
        self
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut this = self;
        this.session
            .commit_transaction()
            .await
            .map_err(|e| map_write_error(e, "트랜잭션 커밋"))?;
        debug!("MongoDB 트랜잭션 커밋");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let mut this = self;
        this.session
            .abort_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(format!("트랜잭션 롤백 실패: {}", e)))?;
        debug!("MongoDB 트랜잭션 롤백");
        Ok(())
    }
}

#[async_trait]
impl MemberStore for MongoUnitOfWork {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<Member>> {
        let document = self.members
            .find_one(doc! { "email": email })
            .session(&mut self.session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.assemble(document).await
    }

    async fn find_by_id(&mut self, id: &Uuid) -> AppResult<Option<Member>> {
        let document = self.members
            .find_one(doc! { "_id": id.to_string() })
            .session(&mut self.session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.assemble(document).await
    }

    async fn save(&mut self, member: Member) -> AppResult<Member> {
        let document = MemberDocument::from(&member);

        self.members
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .session(&mut self.session)
            .await
            .map_err(|e| map_write_error(e, "회원 저장"))?;

        Ok(member)
    }
}

#[async_trait]
impl ProfileStore for MongoUnitOfWork {
    async fn find_by_nickname(&mut self, nickname: &str) -> AppResult<Option<Profile>> {
        self.profiles
            .find_one(doc! { "nickname": nickname })
            .session(&mut self.session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Profile::try_from)
            .transpose()
    }

    async fn save(&mut self, profile: Profile) -> AppResult<Profile> {
        let document = ProfileDocument::from(&profile);

        self.profiles
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .session(&mut self.session)
            .await
            .map_err(|e| map_write_error(e, "프로필 저장"))?;

        Ok(profile)
    }
}

/// 쓰기 오류를 AppError로 변환합니다.
///
/// duplicate key 오류와 트랜잭션 쓰기 충돌은 `StorageConstraintError`가 됩니다.
fn map_write_error(error: MongoError, operation: &str) -> AppError {
    if is_duplicate_key(&error) || is_write_conflict(&error) {
        AppError::StorageConstraintError(format!("{}: {}", operation, error))
    } else {
        AppError::DatabaseError(format!("{}: {}", operation, error))
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    error_code(error) == Some(DUPLICATE_KEY_CODE)
}

fn is_write_conflict(error: &MongoError) -> bool {
    error_code(error) == Some(WRITE_CONFLICT_CODE) || error.contains_label(TRANSIENT_TRANSACTION_ERROR)
}

fn error_code(error: &MongoError) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        ErrorKind::Command(command_error) => Some(command_error.code),
        _ => None,
    }
}
