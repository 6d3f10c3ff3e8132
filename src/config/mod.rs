//! # Configuration Module
//!
//! 회원 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 비밀번호 인코딩 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="member_service_dev"
//!
//! # 비밀번호 저장 방식 (plain, bcrypt)
//! export PASSWORD_ENCODER="bcrypt"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 바이너리 시작 시 `PROFILE` 값에 따라 로드됩니다.

pub mod data_config;

pub use data_config::*;
