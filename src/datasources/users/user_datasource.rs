//! # 사용자 데이터 소스
//!
//! 원격 API의 엔드포인트와 메서드 형태를 알고 있는 유일한 계층입니다.
//!
//! | 메서드 | 요청 |
//! |--------|------|
//! | `find_all()` | `GET {base}/users` |
//! | `find_one(id)` | `GET {base}/users/{id}` (id는 경로 세그먼트로 인코딩) |

use std::sync::Arc;
use async_trait::async_trait;
use crate::clients::http_client::HttpClient;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 사용자 데이터 소스 인터페이스
#[async_trait]
pub trait UserDataSource: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_one(&self, id: &str) -> AppResult<User>;
}

/// HTTP 기반 사용자 데이터 소스
///
/// 컨테이너에서 `userDataSource` 키로 등록되며 `httpClient`를 주입받습니다.
pub struct HttpUserDataSource {
    http_client: Arc<HttpClient>,
}

impl HttpUserDataSource {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl UserDataSource for HttpUserDataSource {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.http_client.get::<Vec<User>>("/users").await
    }

    async fn find_one(&self, id: &str) -> AppResult<User> {
        let path = format!("/users/{}", urlencoding::encode(id));
        self.http_client.get::<User>(&path).await
    }
}
