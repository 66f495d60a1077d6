//! # Domain Layer
//!
//! 계층(데이터 소스 → 리포지토리 → 유스케이스)이 주고받는 도메인 타입을 제공합니다.
//! 전송 방식이나 저장소에 의존하지 않습니다.

pub mod entities;
