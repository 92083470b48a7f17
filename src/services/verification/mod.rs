//! 외부 건강검진 조회 API 연동 모듈

pub mod gateway;

pub use gateway::*;
