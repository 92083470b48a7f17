//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 구성 요약을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             HEALTH RECORD COLLECTOR              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Building verification gateway
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Verification gateway ready
/// ```
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ bucket: my-bucket
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              🎉 SERVICE READY                    ║
/// ╚══════════════════════════════════════════════════╝
///    🌐 Listening: 127.0.0.1:8080
///    🔐 Verification product: checkup
///    🗄️ Archive bucket: my-bucket
/// ```
pub fn print_ready_summary(bind_address: &str, product: &str, bucket: &str) {
    println!();
    print_boxed_title("🎉 SERVICE READY");
    println!("   🌐 Listening: {}", bind_address);
    println!("   🔐 Verification product: {}", product);
    println!("   🗄️ Archive bucket: {}", bucket);
    println!();
}
