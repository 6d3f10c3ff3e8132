//! Member Entity Implementation
//!
//! 회원 식별 정보를 담는 핵심 엔티티입니다.
//! 회원은 물리적으로 삭제되지 않으며, 탈퇴 시 `leaved` 플래그만 설정됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::members::profile::Profile;

/// 회원 상태
///
/// `Active`에서 시작하며 `leave()`를 통해서만 `Left`로 전이합니다.
/// `Left`는 종료 상태입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberState {
    Active,
    Left,
}

/// 회원 엔티티
///
/// 프로필은 회원이 소유합니다(1:1). 프로필은 회원을 `member_id`로만
/// 역참조하므로 두 엔티티 사이에 소유권 순환이 생기지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// 생성 시점에 발급되는 고유 ID (변경되지 않음)
    pub id: Uuid,
    /// 회원 이메일 (unique)
    pub email: String,
    /// 비밀번호 검증기가 만든 저장용 값
    pub password: String,
    /// 탈퇴 여부
    pub leaved: bool,
    /// 회원이 소유한 프로필 (가입 전 생성된 회원은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// 새 회원 생성 (이메일/패스워드)
    ///
    /// 활성 상태(`leaved == false`)이며 프로필이 없는 회원을 만듭니다.
    pub fn create(email: String, password: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            password,
            leaved: false,
            profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> MemberState {
        if self.leaved {
            MemberState::Left
        } else {
            MemberState::Active
        }
    }

    pub fn is_leaved(&self) -> bool {
        self.leaved
    }

    /// 회원 탈퇴 (소프트 삭제)
    ///
    /// 이미 탈퇴한 회원은 다시 탈퇴할 수 없습니다.
    pub fn leave(&mut self) -> AppResult<()> {
        if self.leaved {
            return Err(AppError::ValidationError("이미 탈퇴한 회원입니다".to_string()));
        }

        self.leaved = true;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 프로필을 회원에 연결합니다.
    ///
    /// 프로필의 역참조(`member_id`)를 이 회원의 ID로 설정하고,
    /// 연결된 프로필의 참조를 반환합니다.
    pub fn attach_profile(&mut self, mut profile: Profile) -> &Profile {
        profile.member_id = Some(self.id);
        self.updated_at = Utc::now();
        self.profile.insert(profile)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut Profile> {
        self.profile.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_member_starts_active_without_profile() {
        let member = Member::create("hello@local.com".to_string(), "hello".to_string());

        assert_eq!(member.email, "hello@local.com");
        assert_eq!(member.password, "hello");
        assert!(!member.leaved);
        assert_eq!(member.state(), MemberState::Active);
        assert!(member.profile.is_none());
    }

    #[test]
    fn test_member_ids_are_unique() {
        let a = Member::create("a@local.com".to_string(), "pw".to_string());
        let b = Member::create("b@local.com".to_string(), "pw".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_leave_is_terminal() {
        let mut member = Member::create("hello@local.com".to_string(), "hello".to_string());

        member.leave().unwrap();
        assert_eq!(member.state(), MemberState::Left);

        let err = member.leave().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(member.is_leaved());
    }

    #[test]
    fn test_attach_profile_sets_back_reference() {
        let mut member = Member::create("hello@local.com".to_string(), "hello".to_string());
        let member_id = member.id;
        let profile = Profile::new("nick".to_string(), None, None);

        let attached = member.attach_profile(profile);
        assert_eq!(attached.member_id, Some(member_id));
        assert_eq!(member.profile().map(|p| p.nickname.as_str()), Some("nick"));
    }
}
