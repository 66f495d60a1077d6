//! User Entity Implementation
//!
//! 원격 API가 내려주는 사용자 레코드입니다.
//! 스키마는 외부 API가 정의하므로 `id` 외의 필드는 해석하지 않고 그대로 보존합니다.

use std::fmt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 사용자 엔티티
///
/// 조회 이후에는 변경되지 않습니다. `id`를 제외한 나머지 필드(`name`, `email` 등)는
/// `fields`에 원본 JSON 그대로 담기며, 직렬화 시 다시 평탄화되어 원래 모양을 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 식별자 (API가 숫자로 내려줘도 문자열로 정규화)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// 외부 API가 정의한 나머지 필드
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// 필드를 추가한 사용자를 반환합니다. (테스트 픽스처 구성용)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer user id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
