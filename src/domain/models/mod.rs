//! # Domain Models
//!
//! 신청서, 간편인증 세션 토큰, 흐름 상태 등 비즈니스 로직의 핵심 모델입니다.
//!
//! - [`submission_form`] - 신청서와 선택형 코드, 필드 식별자
//! - [`multi_factor`] - 1단계에서 발급되어 2단계에 되돌려 보내는 토큰
//! - [`flow_state`] - 2단계 인증 흐름의 상태 머신

pub mod flow_state;
pub mod multi_factor;
pub mod submission_form;

pub use flow_state::FlowState;
pub use multi_factor::{MultiFactorSession, PendingVerification};
pub use submission_form::{FormField, LoginTypeLevel, SubmissionForm, Telecom};
