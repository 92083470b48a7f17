//! 신청서 폼 세션 모듈
//!
//! - [`form_controller`] - 한 사용자의 입력, 검증, 2단계 인증 흐름
//! - [`session_store`] - 세션 ID별 폼 세션 보관

pub mod form_controller;
pub mod session_store;

pub use form_controller::*;
pub use session_store::*;
