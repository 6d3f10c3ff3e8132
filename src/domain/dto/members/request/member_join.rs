//! 회원가입/프로필 수정 요청 DTO
//!
//! 회원가입(join)과 프로필 수정(update)은 같은 요청 구조를 사용합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 및 프로필 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberJoinRequest {
    /// 회원 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 닉네임 (필수)
    #[validate(length(min = 1, message = "닉네임을 입력해주세요"))]
    pub nickname: String,

    /// 썸네일 이미지 URL (입력값 그대로 저장)
    #[serde(default)]
    pub thumbnail_image: Option<String>,

    /// 상태 메시지 (입력값 그대로 저장)
    #[serde(default)]
    pub personal_status: Option<String>,
}

impl MemberJoinRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        thumbnail_image: Option<String>,
        personal_status: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            nickname: nickname.into(),
            thumbnail_image,
            personal_status,
        }
    }
}
