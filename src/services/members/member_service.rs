//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 생명주기(가입, 프로필 수정, 탈퇴, 본인 조회)를 관리하는
//! 비즈니스 로직을 구현합니다.
//!
//! ## 연산과 규칙
//!
//! | 연산 | 규칙 |
//! |------|------|
//! | `join` | 닉네임 중복은 서비스가 사전 검사, 이메일 중복은 저장소 제약으로만 감지 |
//! | `update` | 이메일로 회원 조회, 프로필 필드를 제자리에서 교체 |
//! | `leave` | 이미 탈퇴한 회원 거부, 비밀번호 확인 후 소프트 삭제 |
//! | `mine` | 비밀번호 확인 후 회원 반환 (읽기 전용) |
//!
//! ## 트랜잭션
//!
//! 모든 연산은 하나의 [`UnitOfWork`] 안에서 실행되고, 성공하면 커밋,
//! 실패하면 롤백됩니다. 부분 성공 상태는 남지 않습니다.
//!
//! ```text
//! join(request)
//!   ├─ validate()                    → ValidationError
//!   ├─ begin()
//!   ├─ members().save(member)        → StorageConstraintError (이메일 중복)
//!   ├─ profiles().find_by_nickname() → ValidationError (닉네임 중복)
//!   ├─ profiles().save(profile)
//!   └─ commit() / rollback()
//! ```

use std::sync::Arc;

use log::{info, warn};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{finish, TransactionManager, UnitOfWork};
use crate::domain::dto::members::request::{MemberIdentifyRequest, MemberJoinRequest};
use crate::domain::entities::members::{Member, Profile};
use crate::services::password::PasswordVerifier;

const MEMBER_NOT_FOUND: &str = "회원을 찾을 수 없습니다";
const NICKNAME_TAKEN: &str = "이미 사용 중인 닉네임입니다";
const ALREADY_LEFT: &str = "이미 탈퇴한 회원입니다";
const INCORRECT_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 회원 관리 서비스
///
/// 저장소 트랜잭션과 비밀번호 검증기를 주입받아 동작합니다.
///
/// ```rust,ignore
/// let storage = InMemoryStorage::new();
/// let service = MemberService::new(Arc::new(storage), Arc::new(PlainTextPasswordVerifier));
///
/// service.join(MemberJoinRequest::new("hello@local.com", "hello", "1", None, None)).await?;
/// let me = service.mine(MemberIdentifyRequest::new("hello@local.com", "hello")).await?;
/// ```
pub struct MemberService {
    transactions: Arc<dyn TransactionManager>,
    password_verifier: Arc<dyn PasswordVerifier>,
}

impl MemberService {
    pub fn new(transactions: Arc<dyn TransactionManager>, password_verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self {
            transactions,
            password_verifier,
        }
    }

    /// 회원가입
    ///
    /// 새 회원과 프로필을 만들어 양방향으로 연결한 뒤 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청 형식 오류 또는 닉네임 중복
    /// * `StorageConstraintError` - 이메일 중복 (닉네임과 무관하게 저장소에서 감지)
    pub async fn join(&self, request: MemberJoinRequest) -> AppResult<()> {
        request.validate()?;

        let mut uow = self.transactions.begin().await?;
        let result = self.join_in(&mut *uow, request).await;
        finish(uow, result).await
    }

    async fn join_in(&self, uow: &mut dyn UnitOfWork, request: MemberJoinRequest) -> AppResult<()> {
        let MemberJoinRequest {
            email,
            password,
            nickname,
            thumbnail_image,
            personal_status,
        } = request;

        let encoded = self.password_verifier.encode(&password)?;
        let mut member = Member::create(email, encoded);
        let profile = member
            .attach_profile(Profile::new(nickname, thumbnail_image, personal_status))
            .clone();

        // 이메일 유니크 제약은 저장소에 맡긴다
        let member = uow.members().save(member).await?;

        if uow.profiles().find_by_nickname(&profile.nickname).await?.is_some() {
            warn!("회원가입 거부: 닉네임 중복 ({})", profile.nickname);
            return Err(AppError::ValidationError(NICKNAME_TAKEN.to_string()));
        }

        uow.profiles().save(profile).await?;

        info!("회원가입 완료: member_id={}", member.id);
        Ok(())
    }

    /// 프로필 수정
    ///
    /// 이메일로 회원을 찾아 소유 프로필의 닉네임, 썸네일, 상태 메시지를 교체합니다.
    /// 프로필이 없는 회원이면 새 프로필을 만들어 연결합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 이메일의 회원 없음
    /// * `ValidationError` - 탈퇴한 회원, 또는 다른 회원이 쓰는 닉네임
    pub async fn update(&self, request: MemberJoinRequest) -> AppResult<()> {
        request.validate()?;

        let mut uow = self.transactions.begin().await?;
        let result = self.update_in(&mut *uow, request).await;
        finish(uow, result).await
    }

    async fn update_in(&self, uow: &mut dyn UnitOfWork, request: MemberJoinRequest) -> AppResult<()> {
        let mut member = Self::find_member(uow, &request.email).await?;

        if member.is_leaved() {
            warn!("프로필 수정 거부: 탈퇴한 회원 (member_id={})", member.id);
            return Err(AppError::ValidationError(ALREADY_LEFT.to_string()));
        }

        if let Some(existing) = uow.profiles().find_by_nickname(&request.nickname).await? {
            if !existing.is_owned_by(&member.id) {
                warn!("프로필 수정 거부: 닉네임 중복 ({})", request.nickname);
                return Err(AppError::ValidationError(NICKNAME_TAKEN.to_string()));
            }
        }

        match member.profile_mut() {
            Some(profile) => profile.apply(request.nickname, request.thumbnail_image, request.personal_status),
            None => {
                member.attach_profile(Profile::new(
                    request.nickname,
                    request.thumbnail_image,
                    request.personal_status,
                ));
            }
        }

        let profile = member
            .profile()
            .cloned()
            .ok_or_else(|| AppError::InternalError("프로필 연결 실패".to_string()))?;
        uow.profiles().save(profile).await?;

        info!("프로필 수정 완료: member_id={}", member.id);
        Ok(())
    }

    /// 회원 탈퇴 (소프트 삭제)
    ///
    /// 이미 탈퇴한 회원인지 먼저 확인하므로, 탈퇴한 회원은 비밀번호가 맞든
    /// 틀리든 `ValidationError`를 받습니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 이메일의 회원 없음
    /// * `ValidationError` - 이미 탈퇴한 회원 또는 비밀번호 불일치
    pub async fn leave(&self, request: MemberIdentifyRequest) -> AppResult<()> {
        request.validate()?;

        let mut uow = self.transactions.begin().await?;
        let result = self.leave_in(&mut *uow, request).await;
        finish(uow, result).await
    }

    async fn leave_in(&self, uow: &mut dyn UnitOfWork, request: MemberIdentifyRequest) -> AppResult<()> {
        let mut member = Self::find_member(uow, &request.email).await?;

        if member.is_leaved() {
            warn!("탈퇴 거부: 이미 탈퇴한 회원 (member_id={})", member.id);
            return Err(AppError::ValidationError(ALREADY_LEFT.to_string()));
        }

        self.check_password(&member, &request.password)?;

        member.leave()?;
        let member = uow.members().save(member).await?;

        info!("회원 탈퇴 완료: member_id={}", member.id);
        Ok(())
    }

    /// 내 정보 조회
    ///
    /// 비밀번호가 일치하면 프로필을 포함한 회원을 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 이메일의 회원 없음
    /// * `ValidationError` - 비밀번호 불일치
    pub async fn mine(&self, request: MemberIdentifyRequest) -> AppResult<Member> {
        request.validate()?;

        let mut uow = self.transactions.begin().await?;
        let result = self.mine_in(&mut *uow, request).await;
        finish(uow, result).await
    }

    async fn mine_in(&self, uow: &mut dyn UnitOfWork, request: MemberIdentifyRequest) -> AppResult<Member> {
        let member = Self::find_member(uow, &request.email).await?;
        self.check_password(&member, &request.password)?;
        Ok(member)
    }

    async fn find_member(uow: &mut dyn UnitOfWork, email: &str) -> AppResult<Member> {
        uow.members()
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(MEMBER_NOT_FOUND.to_string()))
    }

    fn check_password(&self, member: &Member, raw: &str) -> AppResult<()> {
        if !self.password_verifier.verify(raw, &member.password)? {
            warn!("비밀번호 불일치 (member_id={})", member.id);
            return Err(AppError::ValidationError(INCORRECT_CREDENTIALS.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryStorage;
    use crate::services::password::{BcryptPasswordVerifier, PlainTextPasswordVerifier};

    const EMAIL: &str = "hello@local.com";
    const PASSWORD: &str = "hello";

    fn setup() -> (InMemoryStorage, MemberService) {
        let _ = env_logger::builder().is_test(true).try_init();

        let storage = InMemoryStorage::new();
        let service = MemberService::new(Arc::new(storage.clone()), Arc::new(PlainTextPasswordVerifier));
        (storage, service)
    }

    fn join_request(email: &str, nickname: &str) -> MemberJoinRequest {
        MemberJoinRequest::new(email, PASSWORD, nickname, Some("2".to_string()), Some("3".to_string()))
    }

    async fn seed(storage: &InMemoryStorage, member: Member) -> Member {
        let mut uow = storage.begin().await.unwrap();
        let saved = uow.members().save(member).await.unwrap();
        uow.commit().await.unwrap();
        saved
    }

    async fn find_by_email(storage: &InMemoryStorage, email: &str) -> Option<Member> {
        let mut uow = storage.begin().await.unwrap();
        let found = uow.members().find_by_email(email).await.unwrap();
        uow.rollback().await.unwrap();
        found
    }

    #[tokio::test]
    async fn test_join() {
        let (storage, service) = setup();

        service
            .join(MemberJoinRequest::new(EMAIL, PASSWORD, "1", Some("2".to_string()), Some("3".to_string())))
            .await
            .unwrap();

        let found = find_by_email(&storage, EMAIL).await.unwrap();
        assert_eq!(found.email, EMAIL);
        assert_eq!(found.password, PASSWORD);
        assert!(!found.leaved);

        let profile = found.profile.as_ref().unwrap();
        assert_eq!(profile.nickname, "1");
        assert_eq!(profile.thumbnail_image.as_deref(), Some("2"));
        assert_eq!(profile.personal_status.as_deref(), Some("3"));
        assert!(profile.is_owned_by(&found.id));
    }

    #[tokio::test]
    async fn test_join_stores_optional_fields_verbatim() {
        let (storage, service) = setup();

        service
            .join(MemberJoinRequest::new(EMAIL, PASSWORD, "1", Some(" 2 ".to_string()), Some(String::new())))
            .await
            .unwrap();

        let profile = find_by_email(&storage, EMAIL).await.unwrap().profile.unwrap();
        assert_eq!(profile.thumbnail_image.as_deref(), Some(" 2 "));
        assert_eq!(profile.personal_status.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_update_stores_optional_fields_verbatim() {
        let (storage, service) = setup();
        service.join(join_request(EMAIL, "1")).await.unwrap();

        service
            .update(MemberJoinRequest::new(EMAIL, PASSWORD, "1", Some("  ".to_string()), Some(" busy ".to_string())))
            .await
            .unwrap();

        let profile = find_by_email(&storage, EMAIL).await.unwrap().profile.unwrap();
        assert_eq!(profile.thumbnail_image.as_deref(), Some("  "));
        assert_eq!(profile.personal_status.as_deref(), Some(" busy "));
    }

    #[tokio::test]
    async fn test_join_duplicate_email_fails_at_storage() {
        let (_storage, service) = setup();

        service.join(join_request(EMAIL, "1")).await.unwrap();

        // 닉네임까지 같아도 저장소 제약 위반이 먼저 드러난다
        let err = service.join(join_request(EMAIL, "1")).await.unwrap_err();
        assert!(matches!(err, AppError::StorageConstraintError(_)));

        let err = service.join(join_request(EMAIL, "other")).await.unwrap_err();
        assert!(matches!(err, AppError::StorageConstraintError(_)));
    }

    #[tokio::test]
    async fn test_join_duplicate_nickname_is_validation_error() {
        let (storage, service) = setup();
        let other_email = format!("11{}", EMAIL);

        service.join(join_request(EMAIL, "1")).await.unwrap();

        let err = service.join(join_request(&other_email, "1")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        // 롤백되어 회원 레코드도 남지 않는다
        assert!(find_by_email(&storage, &other_email).await.is_none());
    }

    #[tokio::test]
    async fn test_join_rejects_malformed_request() {
        let (storage, service) = setup();

        let err = service.join(join_request("not-an-email", "1")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service.join(join_request(EMAIL, "")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        assert!(find_by_email(&storage, EMAIL).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_joins_with_same_email() {
        let (storage, service) = setup();

        let (first, second) = tokio::join!(
            service.join(join_request(EMAIL, "a")),
            service.join(join_request(EMAIL, "b"))
        );

        let failures: Vec<AppError> = [first, second].into_iter().filter_map(Result::err).collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], AppError::StorageConstraintError(_)));
        assert!(find_by_email(&storage, EMAIL).await.is_some());
    }

    #[tokio::test]
    async fn test_update_profile() {
        let (storage, service) = setup();
        service.join(join_request(EMAIL, "hello")).await.unwrap();
        let before = find_by_email(&storage, EMAIL).await.unwrap();

        service
            .update(MemberJoinRequest::new(
                EMAIL,
                PASSWORD,
                "world",
                Some("thumb.png".to_string()),
                Some("whatisthisfor".to_string()),
            ))
            .await
            .unwrap();

        let after = find_by_email(&storage, EMAIL).await.unwrap();
        let before_profile = before.profile.unwrap();
        let profile = after.profile.unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(profile.id, before_profile.id);
        assert_eq!(profile.nickname, "world");
        assert_eq!(profile.thumbnail_image.as_deref(), Some("thumb.png"));
        assert_eq!(profile.personal_status.as_deref(), Some("whatisthisfor"));
        assert!(profile.is_owned_by(&after.id));
    }

    #[tokio::test]
    async fn test_update_keeps_own_nickname() {
        let (storage, service) = setup();
        service.join(join_request(EMAIL, "hello")).await.unwrap();

        service
            .update(MemberJoinRequest::new(EMAIL, PASSWORD, "hello", None, Some("busy".to_string())))
            .await
            .unwrap();

        let profile = find_by_email(&storage, EMAIL).await.unwrap().profile.unwrap();
        assert_eq!(profile.nickname, "hello");
        assert_eq!(profile.thumbnail_image, None);
        assert_eq!(profile.personal_status.as_deref(), Some("busy"));
    }

    #[tokio::test]
    async fn test_update_attaches_profile_to_member_without_one() {
        let (storage, service) = setup();
        let member = seed(&storage, Member::create(EMAIL.to_string(), PASSWORD.to_string())).await;

        service.update(join_request(EMAIL, "hello")).await.unwrap();

        let found = find_by_email(&storage, EMAIL).await.unwrap();
        let profile = found.profile.unwrap();
        assert_eq!(profile.nickname, "hello");
        assert!(profile.is_owned_by(&member.id));
    }

    #[tokio::test]
    async fn test_update_to_taken_nickname_fails() {
        let (storage, service) = setup();
        service.join(join_request(EMAIL, "hello")).await.unwrap();
        service.join(join_request("other@local.com", "taken")).await.unwrap();

        let err = service.update(join_request(EMAIL, "taken")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let profile = find_by_email(&storage, EMAIL).await.unwrap().profile.unwrap();
        assert_eq!(profile.nickname, "hello");
    }

    #[tokio::test]
    async fn test_update_unknown_member() {
        let (_storage, service) = setup();

        let err = service.update(join_request(EMAIL, "hello")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_left_member_fails() {
        let (storage, service) = setup();
        let mut member = Member::create(EMAIL.to_string(), PASSWORD.to_string());
        member.leave().unwrap();
        seed(&storage, member).await;

        let err = service.update(join_request(EMAIL, "hello")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_leave() {
        let (storage, service) = setup();
        let member = seed(&storage, Member::create(EMAIL.to_string(), PASSWORD.to_string())).await;

        service.leave(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap();

        let mut uow = storage.begin().await.unwrap();
        let found = uow.members().find_by_id(&member.id).await.unwrap().unwrap();
        assert!(found.leaved);
    }

    #[tokio::test]
    async fn test_leave_with_wrong_password() {
        let (storage, service) = setup();
        seed(&storage, Member::create(EMAIL.to_string(), PASSWORD.to_string())).await;

        let wrong = format!("{}hhhh", PASSWORD);
        let err = service.leave(MemberIdentifyRequest::new(EMAIL, wrong)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let found = find_by_email(&storage, EMAIL).await.unwrap();
        assert!(!found.leaved);
    }

    #[tokio::test]
    async fn test_leave_twice_fails_regardless_of_password() {
        let (storage, service) = setup();
        let mut member = Member::create(EMAIL.to_string(), PASSWORD.to_string());
        member.leave().unwrap();
        seed(&storage, member).await;

        let wrong = format!("{}hhhh", PASSWORD);
        let err = service.leave(MemberIdentifyRequest::new(EMAIL, wrong)).await.unwrap_err();
        assert_eq!(err, AppError::ValidationError(ALREADY_LEFT.to_string()));

        let err = service.leave(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap_err();
        assert_eq!(err, AppError::ValidationError(ALREADY_LEFT.to_string()));
    }

    #[tokio::test]
    async fn test_leave_unknown_member() {
        let (_storage, service) = setup();

        let err = service.leave(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mine() {
        let (storage, service) = setup();
        let member = seed(&storage, Member::create(EMAIL.to_string(), PASSWORD.to_string())).await;

        let me = service.mine(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap();
        assert_eq!(me.id, member.id);

        let wrong = format!("{}hhhh", PASSWORD);
        let err = service.mine(MemberIdentifyRequest::new(EMAIL, wrong)).await.unwrap_err();
        assert_eq!(err, AppError::ValidationError(INCORRECT_CREDENTIALS.to_string()));
    }

    #[tokio::test]
    async fn test_mine_includes_profile() {
        let (_storage, service) = setup();
        service.join(join_request(EMAIL, "1")).await.unwrap();

        let me = service.mine(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap();
        assert_eq!(me.profile.map(|p| p.nickname), Some("1".to_string()));
    }

    #[tokio::test]
    async fn test_mine_unknown_member() {
        let (_storage, service) = setup();

        let err = service.mine(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_bcrypt_verifier_hashes_stored_password() {
        let storage = InMemoryStorage::new();
        let service = MemberService::new(Arc::new(storage.clone()), Arc::new(BcryptPasswordVerifier::new(4)));

        service.join(join_request(EMAIL, "1")).await.unwrap();

        let stored = find_by_email(&storage, EMAIL).await.unwrap();
        assert_ne!(stored.password, PASSWORD);

        let me = service.mine(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap();
        assert_eq!(me.id, stored.id);

        service.leave(MemberIdentifyRequest::new(EMAIL, PASSWORD)).await.unwrap();
        assert!(find_by_email(&storage, EMAIL).await.unwrap().leaved);
    }
}
