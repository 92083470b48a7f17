//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 로그용 이메일 마스킹
//! - [`display_terminal`] - 기동 과정 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::mask_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! log::info!("수집 완료: {}", mask_email("user@example.com"));
//! print_boxed_title("HEALTH RECORD COLLECTOR");
//! ```

pub mod display_terminal;
pub mod string_utils;
