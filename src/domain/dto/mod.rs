//! # Data Transfer Objects
//!
//! HTTP 경계와 외부 API 경계를 오가는 요청/응답 구조체들입니다.
//!
//! - [`forms`] - 폼 세션 조작 요청과 세션 뷰
//! - [`verification`] - 건강검진 조회 API 응답 봉투와 2단계 요청 본문
//! - [`archive`] - 요청/응답 기록 요청과 결과

pub mod archive;
pub mod forms;
pub mod verification;
