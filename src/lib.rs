//! 건강검진 기록 수집 서비스 백엔드
//!
//! 국민건강보험공단 간편인증을 통해 사용자의 건강검진 기록을 조회하고,
//! 조회 요청/응답을 S3에 기록하는 서비스입니다.
//!
//! # Features
//!
//! - **신청서 검증**: 이메일, 한글 이름, 휴대전화 번호, 생년월일 필드별 검증
//! - **2단계 간편인증**: 인증 요청 → 사용자 휴대폰 인증 → 인증 확인
//! - **기록 저장**: 2단계 요청/응답 쌍을 사용자별 키로 S3에 저장
//! - **API 중계**: 브라우저에 API 키를 노출하지 않는 외부 조회 API 프록시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 폼 흐름, 외부 API 게이트웨이, 기록기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ 조회 API + S3   │ ← 외부 연동
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use health_record_collector::services::forms::FormSession;
//!
//! let mut session = FormSession::new(Uuid::new_v4());
//! session.edit_field(FormField::PhoneNo, "01012345678".into())?;
//! session.set_consent(true);
//! session.submit_phase1(&gateway).await?;
//! // 사용자가 휴대폰에서 인증을 마친 뒤
//! let receipt = session.submit_phase2(&gateway, &archiver).await?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validators;
