//! Members Entity Module
//!
//! 회원 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### Member Entity
//! - **식별 정보**: 이메일(유니크), 비밀번호, 탈퇴 여부
//! - **소프트 삭제**: 탈퇴한 회원도 저장소에 남습니다
//!
//! ### Profile Entity
//! - **표시 정보**: 닉네임(유니크), 썸네일, 상태 메시지
//! - **1:1 소유**: 회원이 프로필을 소유하고, 프로필은 회원 ID로 역참조합니다
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::members::{Member, Profile};
//!
//! let mut member = Member::create("user@example.com".to_string(), password);
//! member.attach_profile(Profile::new("nick".to_string(), None, None));
//! ```

pub mod member;
pub mod profile;

pub use member::{Member, MemberState};
pub use profile::Profile;
