//! 2단계 인증 흐름 상태

use serde::Serialize;

/// 폼 세션의 진행 상태
///
/// ```text
/// Editing ─submit_phase1─► AwaitingPhase1 ─성공─► AwaitingUserConfirmation
///    ▲                          │                         │
///    │◄────────── 실패 ─────────┘                   submit_phase2
///    │                                                    ▼
///    │◄────────── 실패 ──────────────────────────── AwaitingPhase2
///    │                                                    │ 성공
///    └────────── 입력 수정 ◄──── Completed ◄──────────────┘
/// ```
///
/// 실패는 별도 상태로 남지 않습니다. 에러를 기록하고 즉시 `Editing`으로 돌아갑니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    Editing,
    AwaitingPhase1,
    AwaitingUserConfirmation,
    AwaitingPhase2,
    Completed,
}
