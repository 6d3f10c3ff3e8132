//! Profile Entity Implementation
//!
//! 회원의 표시용 정보(닉네임, 썸네일, 상태 메시지)를 담는 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 프로필 엔티티
///
/// 닉네임은 전체 프로필에서 유일해야 합니다. 프로필의 생명주기는
/// 소유 회원이 관리하며, 회원은 `member_id`로만 역참조합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// 닉네임 (unique)
    pub nickname: String,
    /// 썸네일 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    /// 상태 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_status: Option<String>,
    /// 소유 회원 ID (회원에 연결되기 전에는 None)
    pub member_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// 새 프로필 생성
    ///
    /// 선택 필드는 입력값 그대로 저장됩니다.
    pub fn new(nickname: String, thumbnail_image: Option<String>, personal_status: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            nickname,
            thumbnail_image,
            personal_status,
            member_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 프로필 필드를 제자리에서 교체합니다.
    ///
    /// ID와 소유 회원 참조는 유지됩니다.
    pub fn apply(&mut self, nickname: String, thumbnail_image: Option<String>, personal_status: Option<String>) {
        self.nickname = nickname;
        self.thumbnail_image = thumbnail_image;
        self.personal_status = personal_status;
        self.updated_at = Utc::now();
    }

    /// 주어진 회원이 이 프로필의 소유자인지 확인
    pub fn is_owned_by(&self, member_id: &Uuid) -> bool {
        self.member_id.as_ref() == Some(member_id)
    }
}
