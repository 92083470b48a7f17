//! # Domain Layer
//!
//! 신청서와 인증 흐름의 모델([`models`]), 그리고 HTTP/외부 API 경계의
//! 데이터 전송 객체([`dto`])를 정의합니다.
//!
//! ```text
//! domain/
//! ├── models/          ← 신청서, 세션 토큰, 흐름 상태
//! └── dto/             ← 폼 세션, 외부 API 봉투, 기록 요청/응답
//! ```

pub mod dto;
pub mod models;

pub use models::*;
