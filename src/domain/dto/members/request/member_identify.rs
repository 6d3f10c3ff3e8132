//! 회원 본인 확인 요청 DTO
//!
//! 탈퇴(leave)와 내 정보 조회(mine)에서 사용하는 이메일/비밀번호 쌍입니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberIdentifyRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl MemberIdentifyRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_rejected() {
        let request = MemberIdentifyRequest::new("hello@local.com", "");
        assert!(request.validate().is_err());
    }
}
