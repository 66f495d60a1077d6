//! 데이터 소스 계층 모듈
//!
//! 원격 호출의 구체적인 형태(엔드포인트, 메서드)를 담당합니다.
//! 리포지토리는 이 계층을 trait으로만 참조하므로 구현을 교체해도 호출자는 변하지 않습니다.

pub mod users;
