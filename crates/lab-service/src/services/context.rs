//! Service context - dependency container for services
//!
//! Holds the connection pool, all repositories, and the JWT service.

use std::sync::Arc;

use lab_common::auth::JwtService;
use lab_core::traits::{
    BlogRepository, BookingRepository, ContactRepository, LocationRepository, PackageRepository,
    ReportRepository, UserRepository,
};
use lab_db::{
    PgBlogRepository, PgBookingRepository, PgContactRepository, PgLocationRepository,
    PgPackageRepository, PgPool, PgReportRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    package_repo: Arc<dyn PackageRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    report_repo: Arc<dyn ReportRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    location_repo: Arc<dyn LocationRepository>,
    blog_repo: Arc<dyn BlogRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Context backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            package_repo: Arc::new(PgPackageRepository::new(pool.clone())),
            booking_repo: Arc::new(PgBookingRepository::new(pool.clone())),
            report_repo: Arc::new(PgReportRepository::new(pool.clone())),
            contact_repo: Arc::new(PgContactRepository::new(pool.clone())),
            location_repo: Arc::new(PgLocationRepository::new(pool.clone())),
            blog_repo: Arc::new(PgBlogRepository::new(pool.clone())),
            pool,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn package_repo(&self) -> &dyn PackageRepository {
        self.package_repo.as_ref()
    }

    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    pub fn location_repo(&self) -> &dyn LocationRepository {
        self.location_repo.as_ref()
    }

    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    package_repo: Option<Arc<dyn PackageRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    location_repo: Option<Arc<dyn LocationRepository>>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn package_repo(mut self, repo: Arc<dyn PackageRepository>) -> Self {
        self.package_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn location_repo(mut self, repo: Arc<dyn LocationRepository>) -> Self {
        self.location_repo = Some(repo);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            package_repo: required(self.package_repo, "package_repo")?,
            booking_repo: required(self.booking_repo, "booking_repo")?,
            report_repo: required(self.report_repo, "report_repo")?,
            contact_repo: required(self.contact_repo, "contact_repo")?,
            location_repo: required(self.location_repo, "location_repo")?,
            blog_repo: required(self.blog_repo, "blog_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
