//! # 사용자 유스케이스
//!
//! 애플리케이션 고유의 조합 로직이 들어갈 자리입니다.
//! 현재는 리포지토리에 1:1로 위임하며, 에러도 변형 없이 전달합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 유스케이스 인터페이스
///
/// 페이지와 API 핸들러는 컨테이너에서 `userUseCase` 키로 이 trait을 해석합니다.
#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_one(&self, id: &str) -> AppResult<User>;
}

/// 리포지토리 위임 유스케이스
pub struct DefaultUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DefaultUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserUseCase for DefaultUserUseCase {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    async fn find_one(&self, id: &str) -> AppResult<User> {
        self.user_repository.find_one(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::users::user_datasource::UserDataSource;
    use crate::errors::errors::AppError;
    use crate::repositories::users::user_repo::DefaultUserRepository;

    struct StubRepository {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserRepository for StubRepository {
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(self.users.clone())
        }

        async fn find_one(&self, id: &str) -> AppResult<User> {
            Err(AppError::ExternalServiceError(format!("GET /users/{} 요청 실패: timeout", id)))
        }
    }

    struct StubDataSource;

    #[async_trait]
    impl UserDataSource for StubDataSource {
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(vec![User::new("1").with_field("name", "X")])
        }

        async fn find_one(&self, id: &str) -> AppResult<User> {
            Ok(User::new(id).with_field("name", "X"))
        }
    }

    #[actix_web::test]
    async fn test_find_all_passes_through() {
        let fixture = vec![User::new("1").with_field("name", "X")];
        let use_case = DefaultUserUseCase::new(Arc::new(StubRepository {
            users: fixture.clone(),
        }));

        assert_eq!(use_case.find_all().await.unwrap(), fixture);
    }

    #[actix_web::test]
    async fn test_find_one_error_is_not_translated() {
        let use_case = DefaultUserUseCase::new(Arc::new(StubRepository { users: vec![] }));

        match use_case.find_one("1").await {
            Err(AppError::ExternalServiceError(msg)) => {
                assert_eq!(msg, "GET /users/1 요청 실패: timeout");
            }
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_stack_returns_data_source_fixture() {
        let use_case = DefaultUserUseCase::new(Arc::new(DefaultUserRepository::new(Arc::new(
            StubDataSource,
        ))));

        assert_eq!(
            use_case.find_all().await.unwrap(),
            vec![User::new("1").with_field("name", "X")]
        );
        assert_eq!(
            use_case.find_one("9").await.unwrap(),
            User::new("9").with_field("name", "X")
        );
    }
}
