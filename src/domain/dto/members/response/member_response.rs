use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::members::{Member, Profile};

/// 프로필 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub nickname: String,
    pub thumbnail_image: Option<String>,
    pub personal_status: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            nickname: profile.nickname,
            thumbnail_image: profile.thumbnail_image,
            personal_status: profile.personal_status,
        }
    }
}

/// 회원 응답 DTO
///
/// 비밀번호는 응답에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub leaved: bool,
    pub profile: Option<ProfileResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let Member {
            id,
            email,
            leaved,
            profile,
            created_at,
            updated_at,
            ..
        } = member;

        Self {
            id: id.to_string(),
            email,
            leaved,
            profile: profile.map(ProfileResponse::from),
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_exposes_password() {
        let mut member = Member::create("hello@local.com".to_string(), "secret-pw".to_string());
        member.attach_profile(Profile::new("1".to_string(), Some("2".to_string()), Some("3".to_string())));
        let id = member.id;

        let response = MemberResponse::from(member);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(response.id, id.to_string());
        assert_eq!(response.profile.as_ref().map(|p| p.nickname.as_str()), Some("1"));
        assert!(!json.contains("secret-pw"));
        assert!(!json.contains("password"));
    }
}
