//! 회원 관리 서비스 부트스트랩
//!
//! 환경 설정과 로깅을 초기화하고 MongoDB 연결 및 인덱스를 준비한 뒤
//! 회원 서비스를 구성합니다. HTTP 엔드포인트는 제공하지 않습니다.
//!
//! 이 바이너리는 연결 확인과 인덱스 생성만 수행하고 종료합니다.
//! 회원 연산은 라이브러리의 `MemberService`를 트랜스포트 계층에 연결해 사용합니다.

use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use member_service::config::{Environment, PasswordConfig};
use member_service::core::errors::AppResult;
use member_service::db::Database;
use member_service::repositories::mongo::MongoStorage;
use member_service::services::members::MemberService;
use member_service::services::password::password_verifier_from_env;

#[tokio::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 회원 서비스 시작중... (환경: {:?})", Environment::current());

    match bootstrap().await {
        // 구성 검증만 하고 서비스는 바로 내려놓는다
        Ok(_service) => {
            info!("✅ 회원 서비스가 준비되었습니다!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 회원 서비스 초기화 실패: [{}] {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

/// 데이터 스토어를 초기화하고 회원 서비스를 구성합니다
///
/// # Errors
///
/// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
async fn bootstrap() -> AppResult<MemberService> {
    let storage = initialize_data_store().await?;

    let password_verifier = password_verifier_from_env();
    info!("🔐 비밀번호 인코딩: {:?}", PasswordConfig::encoding());

    Ok(MemberService::new(Arc::new(storage), password_verifier))
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 남깁니다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (설정 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=member_service::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

/// MongoDB 연결과 인덱스를 초기화합니다
async fn initialize_data_store() -> AppResult<MongoStorage> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await?);

    let storage = MongoStorage::new(database);
    storage.create_indexes().await?;

    Ok(storage)
}
