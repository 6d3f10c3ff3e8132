//! MongoDB 문서 매핑
//!
//! 엔티티를 컬렉션 문서 형태로 변환합니다. ID는 UUID 문자열로,
//! 시간은 UTC 밀리초로 저장하여 BSON 직렬화 설정에 의존하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::members::{Member, Profile};

/// `members` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub password: String,
    pub leaved: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// `profiles` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_status: Option<String>,
    pub member_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Member> for MemberDocument {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            email: member.email.clone(),
            password: member.password.clone(),
            leaved: member.leaved,
            created_at: member.created_at.timestamp_millis(),
            updated_at: member.updated_at.timestamp_millis(),
        }
    }
}

impl From<&Profile> for ProfileDocument {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            nickname: profile.nickname.clone(),
            thumbnail_image: profile.thumbnail_image.clone(),
            personal_status: profile.personal_status.clone(),
            member_id: profile.member_id.map(|id| id.to_string()),
            created_at: profile.created_at.timestamp_millis(),
            updated_at: profile.updated_at.timestamp_millis(),
        }
    }
}

impl MemberDocument {
    /// 문서를 엔티티로 변환합니다. 프로필은 호출자가 채웁니다.
    pub fn into_member(self, profile: Option<Profile>) -> AppResult<Member> {
        Ok(Member {
            id: parse_id(&self.id)?,
            email: self.email,
            password: self.password,
            leaved: self.leaved,
            profile,
            created_at: parse_millis(self.created_at)?,
            updated_at: parse_millis(self.updated_at)?,
        })
    }
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = AppError;

    fn try_from(document: ProfileDocument) -> AppResult<Self> {
        Ok(Profile {
            id: parse_id(&document.id)?,
            nickname: document.nickname,
            thumbnail_image: document.thumbnail_image,
            personal_status: document.personal_status,
            member_id: document.member_id.as_deref().map(parse_id).transpose()?,
            created_at: parse_millis(document.created_at)?,
            updated_at: parse_millis(document.updated_at)?,
        })
    }
}

fn parse_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::DatabaseError(format!("잘못된 문서 ID {}: {}", value, e)))
}

fn parse_millis(value: i64) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value)
        .ok_or_else(|| AppError::DatabaseError(format!("잘못된 타임스탬프: {}", value)))
}
