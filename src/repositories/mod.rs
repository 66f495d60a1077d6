//! 리포지토리 계층 모듈
//!
//! 전송 방식과 무관하게 데이터의 출처를 추상화합니다.
//! 각 리포지토리는 trait으로 노출되어 컨테이너 등록만 바꿔 구현을 교체할 수 있습니다.

pub mod users;
