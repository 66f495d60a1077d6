//! 터미널 출력 포맷팅 유틸리티
//!
//! 컨테이너 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약 등을 시각적으로 표현합니다.

use crate::core::registry::{Lifetime, RegistrationInfo};

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🔄 BUILDING DEPENDENCY CONTAINER       ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Registering bindings
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Bindings registered (4 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ userRepository: ✓ Resolved
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 등록 정보를 한 줄로 포맷합니다
///
/// `userRepository → dyn UserRepository [transient] ← userDataSource`
pub fn format_registration(info: &RegistrationInfo) -> String {
    let lifetime = match info.lifetime {
        Lifetime::Transient => "transient",
        Lifetime::Singleton => "singleton",
        Lifetime::Scoped => "scoped",
    };

    if info.dependencies.is_empty() {
        format!("{} → {} [{}]", info.key, info.implementation, lifetime)
    } else {
        format!(
            "{} → {} [{}] ← {}",
            info.key,
            info.implementation,
            lifetime,
            info.dependencies.join(", ")
        )
    }
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🎉 DEPENDENCY CONTAINER READY          ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Singleton: 1
///    🔧 Transient: 3
///    🧩 Scoped: 0
///    🚀 Total Bindings: 4
/// ```
pub fn print_final_summary(registrations: &[RegistrationInfo]) {
    let count = |lifetime: Lifetime| {
        registrations
            .iter()
            .filter(|info| info.lifetime == lifetime)
            .count()
    };

    println!();
    print_boxed_title("🎉 DEPENDENCY CONTAINER READY");
    println!("   📦 Singleton: {}", count(Lifetime::Singleton));
    println!("   🔧 Transient: {}", count(Lifetime::Transient));
    println!("   🧩 Scoped: {}", count(Lifetime::Scoped));
    println!("   🚀 Total Bindings: {}", registrations.len());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_registration() {
        let leaf = RegistrationInfo {
            key: "httpClient".to_string(),
            lifetime: Lifetime::Singleton,
            dependencies: vec![],
            implementation: "HttpClient".to_string(),
        };
        assert_eq!(format_registration(&leaf), "httpClient → HttpClient [singleton]");

        let layered = RegistrationInfo {
            key: "userRepository".to_string(),
            lifetime: Lifetime::Transient,
            dependencies: vec!["userDataSource".to_string()],
            implementation: "dyn UserRepository".to_string(),
        };
        assert_eq!(
            format_registration(&layered),
            "userRepository → dyn UserRepository [transient] ← userDataSource"
        );
    }
}
