//! 요청/응답 기록 모듈
//!
//! - [`object_store`] - 객체 저장소 trait과 S3 구현
//! - [`record_archiver`] - 요청/응답 쌍을 사용자 키로 기록

pub mod object_store;
pub mod record_archiver;

pub use object_store::*;
pub use record_archiver::*;
