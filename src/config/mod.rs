//! # Configuration Module
//!
//! 수집 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 접근자로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, Rate Limiting, CORS, 폼 세션 설정
//! - [`external_config`] - 건강검진 조회 API, S3 저장소 설정
//!
//! ## 설계 원칙
//!
//! - 모든 값은 환경 변수(또는 `.env`, `.env.dev`, `.env.prod`)에서 읽습니다.
//! - 기본값은 로컬 개발 환경 기준입니다.
//! - 외부 자격 증명이 없으면 빈 문자열로 동작하며 기동을 막지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 건강검진 조회 API
//! export VERIFICATION_API_BASE_URL="https://api.candiy.io/v1/nhis"
//! export VERIFICATION_PRODUCT="checkup"
//! export CANDIY_API_KEY="your-api-key"
//!
//! # S3 저장소
//! export S3_REGION="ap-northeast-2"
//! export S3_BUCKET_NAME="your-bucket"
//! export S3_ACCESS_KEY_ID="..."
//! export S3_SECRET_ACCESS_KEY="..."
//! ```

pub mod data_config;
pub mod external_config;

pub use data_config::*;
pub use external_config::*;
