//! # Dependency Registry - 키 기반 의존성 주입 컨테이너
//!
//! 문자열 키를 생성 레시피(factory + 의존성 이름 목록 + 생명주기)에 매핑하고,
//! 요청 시점에 전체 객체 그래프를 재귀적으로 생성합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | [`Container`] | 프로세스 시작 시 한 번 생성 |
//! | `BeanDefinition` | [`Registration`] | factory + 의존성 이름 + 생명주기 |
//! | 생성자 파라미터 이름 주입 | [`Registration::inject`] | 이름 = 등록 키 |
//! | `@Scope("prototype")` | [`Lifetime::Transient`] | 기본값 |
//! | `@Scope("singleton")` | [`Lifetime::Singleton`] | 루트 컨테이너당 하나 |
//! | `@Scope("request")` | [`Lifetime::Scoped`] | [`Container::create_scope`]당 하나 |
//! | `NoSuchBeanDefinitionException` | [`AppError::DependencyNotFound`] | 해석 시점에 발생 |
//! | `BeanCurrentlyInCreationException` | [`AppError::CircularDependency`] | 해석 경로 추적 |
//!
//! ## 동작 방식
//!
//! ```text
//! resolve("userUseCase")
//!    ├─ 레지스트리 조회 → Registration { inject: ["userRepository"] }
//!    ├─ resolve("userRepository")
//!    │    ├─ resolve("userDataSource")
//!    │    │    └─ resolve("httpClient")  (singleton, 캐시됨)
//!    │    └─ factory(deps) → DefaultUserRepository
//!    └─ factory(deps) → DefaultUserUseCase
//! ```
//!
//! 의존성은 항상 자신을 필요로 하는 인스턴스보다 먼저 생성됩니다.
//! 등록은 `&mut self`, 해석은 `&self`를 요구하므로 컨테이너를 `Arc`로 공유한
//! 이후에는 등록 테이블이 변경되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut container = Container::new();
//! container.register([
//!     ("userDataSource", Registration::class::<dyn UserDataSource, _>(|deps| {
//!         let client = deps.get::<HttpClient>("httpClient")?;
//!         Ok(Arc::new(HttpUserDataSource::new(client)) as Arc<dyn UserDataSource>)
//!     }).inject(["httpClient"])),
//! ]);
//!
//! let data_source = container.resolve::<dyn UserDataSource>("userDataSource")?;
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::Serialize;
use crate::errors::errors::{AppError, AppResult};

/// 타입 소거된 인스턴스
///
/// 내부 값은 항상 `Arc<T>`이므로 `T`가 trait object여도 다운캐스트할 수 있습니다.
type Instance = Arc<dyn Any + Send + Sync>;

type Factory = dyn Fn(&Dependencies<'_>) -> AppResult<Instance> + Send + Sync;

/// 인스턴스 생명주기 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// `resolve` 호출마다 새 인스턴스를 생성합니다
    #[default]
    Transient,
    /// 루트 컨테이너와 모든 스코프가 하나의 인스턴스를 공유합니다
    ///
    /// 서로를 의존하는 두 싱글톤을 여러 스레드가 동시에 처음 해석하면 교착될 수 있습니다.
    /// 순환 감지는 스레드별 해석 경로만 보므로, 시작 시 [`Container::probe`]로 먼저 걸러냅니다.
    Singleton,
    /// 스코프마다 하나의 인스턴스를 생성합니다
    Scoped,
}

/// 하나의 키에 대한 생성 레시피
///
/// 구체 구현을 만드는 factory, factory가 필요로 하는 의존성 이름 목록,
/// 그리고 생명주기 정책으로 구성됩니다.
pub struct Registration {
    lifetime: Lifetime,
    dependencies: Vec<String>,
    implementation: &'static str,
    factory: Box<Factory>,
    /// 싱글톤 인스턴스 (루트 컨테이너 수명 동안 유지)
    singleton: OnceCell<Instance>,
}

impl Registration {
    /// factory 함수로 레시피를 생성합니다.
    ///
    /// 기본 생명주기는 [`Lifetime::Transient`]이며, 의존성은
    /// [`inject`](Self::inject)로 선언합니다. factory는 선언된 의존성이 모두
    /// 해석된 뒤에 호출됩니다.
    pub fn class<T, F>(factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Dependencies<'_>) -> AppResult<Arc<T>> + Send + Sync + 'static,
    {
        let factory = move |deps: &Dependencies<'_>| -> AppResult<Instance> {
            let instance: Arc<T> = factory(deps)?;
            Ok(Arc::new(instance) as Instance)
        };

        Self {
            lifetime: Lifetime::Transient,
            dependencies: Vec::new(),
            implementation: type_name::<T>(),
            factory: Box::new(factory),
            singleton: OnceCell::new(),
        }
    }

    /// 이미 생성된 값을 등록합니다.
    ///
    /// 값은 싱글톤으로 취급되어 모든 해석에서 같은 인스턴스가 반환됩니다.
    pub fn value<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let registration = Self::class::<T, _>(move |_| {
            Err(AppError::InternalError(format!(
                "value registration for {} cannot be rebuilt",
                type_name::<T>()
            )))
        })
        .singleton();
        let _ = registration.singleton.set(Arc::new(value) as Instance);
        registration
    }

    /// 생성자 파라미터 이름을 선언합니다.
    ///
    /// 각 이름은 같은 컨테이너의 등록 키와 매칭되어 재귀적으로 해석됩니다.
    /// 매칭되는 키가 없으면 등록 시점이 아닌 해석 시점에 실패합니다.
    pub fn inject<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn transient(self) -> Self {
        self.lifetime(Lifetime::Transient)
    }

    pub fn singleton(self) -> Self {
        self.lifetime(Lifetime::Singleton)
    }

    pub fn scoped(self) -> Self {
        self.lifetime(Lifetime::Scoped)
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn get_lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("lifetime", &self.lifetime)
            .field("dependencies", &self.dependencies)
            .field("implementation", &self.implementation)
            .finish_non_exhaustive()
    }
}

/// 등록 정보 요약 (진단 및 페이지 표시용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationInfo {
    pub key: String,
    pub lifetime: Lifetime,
    pub dependencies: Vec<String>,
    pub implementation: String,
}

struct ResolvedDependency {
    name: String,
    instance: Instance,
    implementation: &'static str,
}

/// factory에 전달되는 해석 완료된 의존성 묶음
pub struct Dependencies<'a> {
    owner: &'a str,
    resolved: &'a [ResolvedDependency],
}

impl Dependencies<'_> {
    /// 선언된 의존성을 이름으로 꺼냅니다.
    ///
    /// # Errors
    ///
    /// * [`AppError::InternalError`] - `inject`에 선언되지 않은 이름
    /// * [`AppError::DependencyTypeMismatch`] - 등록된 타입과 요청 타입이 다른 경우
    pub fn get<T>(&self, name: &str) -> AppResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let dependency = self
            .resolved
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "'{}' is not a declared dependency of '{}'",
                    name, self.owner
                ))
            })?;

        downcast::<T>(name, dependency.implementation, &dependency.instance)
    }
}

type Registrations = HashMap<String, Arc<Registration>>;
type ScopedCache = Arc<RwLock<HashMap<String, Instance>>>;

/// 키 기반 의존성 주입 컨테이너
///
/// 프로세스 시작 시 한 번 생성되어 등록이 끝난 뒤 `Arc`로 공유됩니다.
/// [`create_scope`](Self::create_scope)로 만든 스코프는 등록 테이블과
/// 싱글톤을 공유하고, scoped 인스턴스 캐시만 따로 가집니다.
pub struct Container {
    registrations: Arc<Registrations>,
    /// 이 컨테이너(또는 스코프)의 scoped 인스턴스
    scoped: ScopedCache,
    /// 루트 컨테이너의 scoped 캐시 (싱글톤의 의존성 해석에 사용)
    root_scoped: ScopedCache,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        let root_scoped: ScopedCache = Arc::new(RwLock::new(HashMap::new()));
        Self {
            registrations: Arc::new(HashMap::new()),
            scoped: Arc::clone(&root_scoped),
            root_scoped,
        }
    }

    /// 키 → 레시피 바인딩을 추가합니다.
    ///
    /// 이미 존재하는 키는 새 레시피로 교체되어 키의 유일성이 유지됩니다.
    /// 이미 만들어진 스코프는 교체 이전의 테이블을 계속 사용합니다.
    pub fn register<I, K>(&mut self, bindings: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Registration)>,
        K: Into<String>,
    {
        let table = Arc::make_mut(&mut self.registrations);

        for (key, registration) in bindings {
            let key = key.into();
            debug!(
                "📦 Registering '{}' → {} ({:?})",
                key,
                clean_type_name(registration.implementation),
                registration.lifetime
            );
            if table.insert(key.clone(), Arc::new(registration)).is_some() {
                warn!("⚠️ Registration '{}' replaced by a later binding", key);
            }
        }

        self
    }

    /// 키에 해당하는 인스턴스를 생성(또는 캐시에서 조회)하여 반환합니다.
    ///
    /// 선언된 의존성을 이름으로 재귀 해석한 뒤 factory를 호출합니다.
    ///
    /// # Errors
    ///
    /// * [`AppError::DependencyNotFound`] - 키 또는 전이 의존성이 미등록
    /// * [`AppError::CircularDependency`] - 해석 경로에 순환 존재
    /// * [`AppError::DependencyTypeMismatch`] - 등록 타입과 `T` 불일치
    /// * factory가 반환한 에러는 그대로 전파
    pub fn resolve<T>(&self, key: &str) -> AppResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut path = Vec::new();
        let (instance, implementation) = self.resolve_instance(key, &mut path)?;
        downcast::<T>(key, implementation, &instance)
    }

    /// 타입 확인 없이 키를 해석해 봅니다.
    ///
    /// 시작 시점에 누락된 바인딩이나 순환을 미리 발견하는 용도입니다.
    pub fn probe(&self, key: &str) -> AppResult<()> {
        let mut path = Vec::new();
        self.resolve_instance(key, &mut path).map(|_| ())
    }

    fn resolve_instance(
        &self,
        key: &str,
        path: &mut Vec<String>,
    ) -> AppResult<(Instance, &'static str)> {
        if path.iter().any(|k| k == key) {
            let mut chain = path.clone();
            chain.push(key.to_string());
            return Err(AppError::CircularDependency { chain });
        }

        let registration = self
            .registrations
            .get(key)
            .ok_or_else(|| AppError::DependencyNotFound {
                key: key.to_string(),
                requested_by: path.clone(),
            })?;

        debug!("🔍 Resolving '{}' ({:?})", key, registration.lifetime);

        let instance = match registration.lifetime {
            Lifetime::Transient => self.construct(key, registration, path)?,
            Lifetime::Singleton => {
                let root = self.root_view();
                registration
                    .singleton
                    .get_or_try_init(|| root.construct(key, registration, path))?
                    .clone()
            }
            Lifetime::Scoped => {
                if let Some(cached) = self.cached_scoped(key) {
                    cached
                } else {
                    let built = self.construct(key, registration, path)?;
                    let mut scoped = self.scoped.write().unwrap_or_else(|e| e.into_inner());
                    // 동시에 생성된 경우 먼저 저장된 인스턴스를 사용
                    scoped.entry(key.to_string()).or_insert(built).clone()
                }
            }
        };

        Ok((instance, registration.implementation))
    }

    fn construct(
        &self,
        key: &str,
        registration: &Registration,
        path: &mut Vec<String>,
    ) -> AppResult<Instance> {
        path.push(key.to_string());
        let resolved = self.resolve_dependencies(registration, path);
        path.pop();

        let resolved = resolved?;
        (registration.factory)(&Dependencies {
            owner: key,
            resolved: &resolved,
        })
    }

    fn resolve_dependencies(
        &self,
        registration: &Registration,
        path: &mut Vec<String>,
    ) -> AppResult<Vec<ResolvedDependency>> {
        registration
            .dependencies
            .iter()
            .map(|name| {
                let (instance, implementation) = self.resolve_instance(name, path)?;
                Ok(ResolvedDependency {
                    name: name.clone(),
                    instance,
                    implementation,
                })
            })
            .collect()
    }

    fn cached_scoped(&self, key: &str) -> Option<Instance> {
        self.scoped
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// 싱글톤 생성 시 사용하는 루트 시점의 컨테이너
    ///
    /// 싱글톤이 특정 스코프의 scoped 인스턴스를 붙잡지 않도록 합니다.
    fn root_view(&self) -> Container {
        Container {
            registrations: Arc::clone(&self.registrations),
            scoped: Arc::clone(&self.root_scoped),
            root_scoped: Arc::clone(&self.root_scoped),
        }
    }

    /// 새 스코프를 생성합니다.
    ///
    /// 등록 테이블과 싱글톤은 공유하고, scoped 인스턴스는 스코프마다 새로 만들어집니다.
    pub fn create_scope(&self) -> Container {
        Container {
            registrations: Arc::clone(&self.registrations),
            scoped: Arc::new(RwLock::new(HashMap::new())),
            root_scoped: Arc::clone(&self.root_scoped),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.registrations.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 등록된 모든 키의 요약 정보를 키 순서대로 반환합니다.
    pub fn registrations(&self) -> Vec<RegistrationInfo> {
        let mut infos: Vec<RegistrationInfo> = self
            .registrations
            .iter()
            .map(|(key, registration)| RegistrationInfo {
                key: key.clone(),
                lifetime: registration.get_lifetime(),
                dependencies: registration.dependencies().to_vec(),
                implementation: clean_type_name(registration.implementation),
            })
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("registrations", &self.registrations())
            .finish()
    }
}

fn downcast<T>(key: &str, implementation: &'static str, instance: &Instance) -> AppResult<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| AppError::DependencyTypeMismatch {
            key: key.to_string(),
            registered: implementation,
            requested: type_name::<T>(),
        })
}

/// 타입 이름에서 모듈 경로를 제거합니다.
///
/// `dyn user_directory::usecases::users::UserUseCase` → `dyn UserUseCase`
fn clean_type_name(type_name: &str) -> String {
    let (prefix, path) = match type_name.strip_prefix("dyn ") {
        Some(rest) => ("dyn ", rest),
        None => ("", type_name),
    };

    // 제네릭 인자의 경로는 그대로 둠
    let head = path.split('<').next().unwrap_or(path);
    let start = head.rfind("::").map(|pos| pos + 2).unwrap_or(0);
    format!("{}{}", prefix, &path[start..])
}
