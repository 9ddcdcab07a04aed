//! # Service Registry
//!
//! 싱글톤 기반 의존성 주입 컨테이너입니다.
//!
//! - 인프라 핸들(`Database`, `RedisClient`)은 기동 시 [`ServiceLocator::set`]으로 직접 등록합니다.
//! - `#[repository]` 매크로가 붙은 리포지토리는 `inventory`로 수집되어 이름 기반으로 생성됩니다.
//! - 서비스는 명시적 생성자를 가지며 `inventory::submit!`으로 등록합니다.
//!   테스트는 같은 타입을 `ServiceLocator::set`으로 먼저 등록해 인메모리 구현으로 교체할 수 있습니다.
//!
//! ## 조회 순서
//!
//! ```text
//! ServiceLocator::get::<T>()
//!   ├─ 1. 이미 등록된 인스턴스가 있으면 반환
//!   ├─ 2. 타입 이름에서 "Repository"/"Service" 접미사를 떼어 레지스트리 검색
//!   ├─ 3. 잠금을 해제한 상태로 생성자 호출 (중첩 조회 허용)
//!   └─ 4. 생성된 인스턴스를 등록 후 반환
//! ```
//!
//! 생성 중인 타입을 다시 요청하면 순환 참조로 판단하고 패닉합니다.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// 서비스 계층 컴포넌트 (`#[service]` 매크로가 구현)
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 계층 컴포넌트 (`#[repository]` 매크로가 구현)
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `constructor`는 `Box<Arc<T>>`를 `Box<dyn Any>`로 감싸 반환해야 합니다.
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

type Constructor = fn() -> Box<dyn Any + Send + Sync>;

static SERVICE_NAME_CACHE: Lazy<HashMap<String, (&'static str, Constructor)>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|r| (clean_registration_name(r.name), (r.name, r.constructor)))
        .collect();
    log::debug!("Service 레지스트리 캐시 초기화: {}개", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, (&'static str, Constructor)>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|r| (clean_registration_name(r.name), (r.name, r.constructor)))
        .collect();
    log::debug!("Repository 레지스트리 캐시 초기화: {}개", cache.len());
    cache
});

/// "reservation_service" → "reservation", "refreshtoken_repository" → "refreshtoken"
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// "link_backend::services::ReservationService" → "ReservationService"
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 전역 DI 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
});

thread_local! {
    // 생성 중인 타입 (스레드별)
    static INITIALIZING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

impl ServiceLocator {
    /// 타입으로 싱글톤 인스턴스를 조회하고, 없으면 레지스트리에서 생성합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입
    /// * 순환 의존성
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::lookup::<T>(type_id) {
            return instance;
        }

        if !INITIALIZING.with(|set| set.borrow_mut().insert(type_id)) {
            log::error!("순환 의존성 감지: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        let created = Self::construct::<T>(type_name);

        INITIALIZING.with(|set| set.borrow_mut().remove(&type_id));

        let instance = match created {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with #[repository], inventory::submit! or ServiceLocator::set()",
                type_name
            ),
        };

        // 생성 도중 다른 스레드가 먼저 등록했다면 그 인스턴스를 우선합니다.
        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let entry = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();
        drop(instances);

        entry.downcast::<T>().unwrap_or(instance)
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        LOCATOR.instances
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록 여부 확인
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        LOCATOR.instances
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&TypeId::of::<T>())
    }

    /// 등록된 리포지토리를 모두 미리 생성합니다.
    ///
    /// 서비스는 첫 [`ServiceLocator::get`] 호출 시 생성되므로, 먼저 `set`된 인스턴스가 있으면
    /// 레지스트리 생성자는 호출되지 않습니다. 인프라 핸들이 먼저 `set`되어 있어야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 서비스 레지스트리 초기화 시작");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        for registration in &repo_registrations {
            let _instance = (registration.constructor)();
            log::debug!("  ✓ {}", registration.name);
        }

        log::info!(
            "✅ 레지스트리 초기화 완료: 리포지토리 {}개 생성, 서비스 {}개 등록",
            repo_registrations.len(),
            SERVICE_NAME_CACHE.len()
        );
        Ok(())
    }

    fn lookup<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .cloned()
            .map(|instance| {
                instance
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", std::any::type_name::<T>()))
            })
    }

    /// 잠금 없이 레지스트리 생성자를 호출합니다.
    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Option<Arc<T>> {
        let clean_type_name = short_type_name(type_name);

        let registration = if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            REPOSITORY_NAME_CACHE.get(&entity.to_lowercase())
        } else if let Some(entity) = clean_type_name.strip_suffix("Service") {
            SERVICE_NAME_CACHE.get(&entity.to_lowercase())
        } else {
            None
        }?;

        let (name, constructor) = registration;
        let boxed_instance = constructor();
        match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => Some(*arc_instance),
            Err(_) => panic!("Type mismatch for registration: {}", name),
        }
    }
}
