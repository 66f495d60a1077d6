//! # 사용자 리포지토리 구현
//!
//! 저장소/조회 출처를 추상화하는 계층입니다. 현재 구현은 데이터 소스에 1:1로
//! 위임하며 캐싱, 검증, 변환을 하지 않습니다. 로컬 캐시나 목(mock) 저장소로
//! 교체할 때 호출자를 건드리지 않기 위한 경계입니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::datasources::users::user_datasource::UserDataSource;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 사용자 리포지토리 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_one(&self, id: &str) -> AppResult<User>;
}

/// 데이터 소스 위임 리포지토리
///
/// 컨테이너에서 `userRepository` 키로 등록되며 `userDataSource`를 주입받습니다.
///
/// ```rust,ignore
/// let repo = container.resolve::<dyn UserRepository>("userRepository")?;
/// let users = repo.find_all().await?;
/// ```
pub struct DefaultUserRepository {
    user_data_source: Arc<dyn UserDataSource>,
}

impl DefaultUserRepository {
    pub fn new(user_data_source: Arc<dyn UserDataSource>) -> Self {
        Self { user_data_source }
    }
}

#[async_trait]
impl UserRepository for DefaultUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_data_source.find_all().await
    }

    async fn find_one(&self, id: &str) -> AppResult<User> {
        self.user_data_source.find_one(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use crate::errors::errors::AppError;

    /// 고정 픽스처를 반환하고 전달받은 id를 기록하는 데이터 소스
    struct StubDataSource {
        users: Vec<User>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UserDataSource for StubDataSource {
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(self.users.clone())
        }

        async fn find_one(&self, id: &str) -> AppResult<User> {
            self.requested.lock().unwrap().push(id.to_string());
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("GET /users/{} → 404", id)))
        }
    }

    fn fixture() -> Vec<User> {
        vec![User::new("1").with_field("name", "X")]
    }

    fn repository() -> (Arc<StubDataSource>, DefaultUserRepository) {
        let stub = Arc::new(StubDataSource {
            users: fixture(),
            requested: Mutex::new(Vec::new()),
        });
        let repo = DefaultUserRepository::new(stub.clone());
        (stub, repo)
    }

    #[actix_web::test]
    async fn test_find_all_passes_through() {
        let (_, repo) = repository();
        assert_eq!(repo.find_all().await.unwrap(), fixture());
    }

    #[actix_web::test]
    async fn test_find_one_passes_id_and_result_through() {
        let (stub, repo) = repository();

        let user = repo.find_one("1").await.unwrap();

        assert_eq!(user, fixture()[0]);
        assert_eq!(*stub.requested.lock().unwrap(), vec!["1".to_string()]);
    }

    #[actix_web::test]
    async fn test_find_one_error_is_not_translated() {
        let (_, repo) = repository();

        match repo.find_one("missing").await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "GET /users/missing → 404"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
