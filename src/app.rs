//! Composition root wiring adapters into services.
//!
//! [`Taskboard::in_memory`] builds a fully in-process instance, used by the
//! integration tests. [`Taskboard::postgres`] builds one backed by Diesel
//! repositories over an r2d2 pool. Both route task writes through the
//! status-change notifier and keep the notifier's cache in process.

use crate::account::{
    adapters::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    ports::UserRepository,
    services::AccountService,
};
use crate::category::{
    adapters::{memory::InMemoryCategoryRepository, postgres::PostgresCategoryRepository},
    ports::CategoryRepository,
    services::CategoryService,
};
use crate::config::{AppConfig, ConfigError, PaginationConfig};
use crate::notification::{
    adapters::{cache::InMemoryCache, template::MiniJinjaRenderer},
    ports::{MailTransport, TemplateError},
    services::StatusChangeNotifier,
};
use crate::pagination::{PageRequest, PaginationError};
use crate::task::{
    adapters::{
        memory::InMemoryTaskRepository, notifying::NotifyingTaskRepository,
        postgres::PostgresTaskRepository,
    },
    ports::{SubTaskRepository, TaskRepository},
    services::{SubTaskService, TaskService},
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Task repository decorated with the status-change notifier.
pub type NotifyingRepository<R, U, M, C> =
    NotifyingTaskRepository<R, U, InMemoryCache<C>, M, MiniJinjaRenderer>;

/// Fully in-memory application.
pub type InMemoryTaskboard<M, C> = Taskboard<
    InMemoryUserRepository,
    InMemoryCategoryRepository,
    NotifyingRepository<InMemoryTaskRepository, InMemoryUserRepository, M, C>,
    InMemoryTaskRepository,
    C,
>;

/// `PostgreSQL`-backed application.
pub type PostgresTaskboard<M> = Taskboard<
    PostgresUserRepository,
    PostgresCategoryRepository,
    NotifyingRepository<PostgresTaskRepository, PostgresUserRepository, M, DefaultClock>,
    PostgresTaskRepository,
    DefaultClock,
>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The bundled email templates failed to load.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// The database pool could not be built.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
}

/// The assembled services.
pub struct Taskboard<U, G, R, S, C>
where
    U: UserRepository,
    G: CategoryRepository,
    R: TaskRepository,
    S: SubTaskRepository,
    C: Clock + Send + Sync,
{
    accounts: AccountService<U, C>,
    categories: CategoryService<G, R, C>,
    tasks: TaskService<R, G, C>,
    subtasks: SubTaskService<S, C>,
    pagination: PaginationConfig,
}

impl<U, G, R, S, C> Taskboard<U, G, R, S, C>
where
    U: UserRepository,
    G: CategoryRepository,
    R: TaskRepository,
    S: SubTaskRepository,
    C: Clock + Send + Sync,
{
    /// Returns the account service.
    #[must_use]
    pub const fn accounts(&self) -> &AccountService<U, C> {
        &self.accounts
    }

    /// Returns the category service.
    #[must_use]
    pub const fn categories(&self) -> &CategoryService<G, R, C> {
        &self.categories
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<R, G, C> {
        &self.tasks
    }

    /// Returns the subtask service.
    #[must_use]
    pub const fn subtasks(&self) -> &SubTaskService<S, C> {
        &self.subtasks
    }

    /// Builds a page request from optional caller input using the
    /// configured defaults and maximum.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] for a zero page number or page size.
    pub fn page_request(
        &self,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<PageRequest, PaginationError> {
        PageRequest::from_query(page, page_size, &self.pagination)
    }

    /// Returns the page size for cursor-paginated category listings.
    #[must_use]
    pub const fn cursor_page_size(&self) -> usize {
        self.pagination.cursor_page_size
    }
}

impl<M, C> InMemoryTaskboard<M, C>
where
    M: MailTransport,
    C: Clock + Send + Sync,
{
    /// Builds an in-memory application that sends mail through `mail` and
    /// reads time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for invalid configuration or
    /// [`AppError::Template`] if the bundled templates fail to load.
    pub fn in_memory(config: &AppConfig, mail: Arc<M>, clock: Arc<C>) -> Result<Self, AppError> {
        config.validate()?;
        let users = Arc::new(InMemoryUserRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let store = Arc::new(InMemoryTaskRepository::new());
        let tasks = Arc::new(decorate(
            Arc::clone(&store),
            Arc::clone(&users),
            mail,
            Arc::clone(&clock),
            config,
        )?);

        Ok(assemble(users, categories, tasks, store, clock, config))
    }
}

impl<M> PostgresTaskboard<M>
where
    M: MailTransport,
{
    /// Builds a `PostgreSQL`-backed application from `config.database`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the configuration is invalid or no
    /// database URL is configured,
    /// [`AppError::Pool`] when the pool cannot connect, or
    /// [`AppError::Template`] if the bundled templates fail to load.
    pub fn postgres(config: &AppConfig, mail: Arc<M>) -> Result<Self, AppError> {
        config.validate()?;
        let url = config
            .database
            .url
            .as_deref()
            .filter(|_| config.database.is_configured())
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "database".to_owned(),
            })?;
        let pool = Pool::builder()
            .max_size(config.database.pool_size)
            .build(ConnectionManager::<PgConnection>::new(url))?;
        info!(pool_size = config.database.pool_size, "connected to PostgreSQL");

        let clock = Arc::new(DefaultClock);
        let users = Arc::new(PostgresUserRepository::new(pool.clone()));
        let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
        let store = Arc::new(PostgresTaskRepository::new(pool));
        let tasks = Arc::new(decorate(
            Arc::clone(&store),
            Arc::clone(&users),
            mail,
            Arc::clone(&clock),
            config,
        )?);

        Ok(assemble(users, categories, tasks, store, clock, config))
    }
}

fn decorate<R, U, M, C>(
    store: Arc<R>,
    users: Arc<U>,
    mail: Arc<M>,
    clock: Arc<C>,
    config: &AppConfig,
) -> Result<NotifyingRepository<R, U, M, C>, AppError>
where
    R: TaskRepository,
    U: UserRepository,
    M: MailTransport,
    C: Clock + Send + Sync,
{
    let notifier = StatusChangeNotifier::new(
        users,
        Arc::new(InMemoryCache::new(clock)),
        mail,
        Arc::new(MiniJinjaRenderer::new()?),
        config.notification.clone(),
    );
    Ok(NotifyingTaskRepository::new(store, notifier))
}

fn assemble<U, G, R, S, C>(
    users: Arc<U>,
    categories: Arc<G>,
    tasks: Arc<R>,
    subtasks: Arc<S>,
    clock: Arc<C>,
    config: &AppConfig,
) -> Taskboard<U, G, R, S, C>
where
    U: UserRepository,
    G: CategoryRepository,
    R: TaskRepository,
    S: SubTaskRepository,
    C: Clock + Send + Sync,
{
    Taskboard {
        accounts: AccountService::new(users, Arc::clone(&clock)),
        categories: CategoryService::new(
            Arc::clone(&categories),
            Arc::clone(&tasks),
            Arc::clone(&clock),
        ),
        tasks: TaskService::new(tasks, categories, Arc::clone(&clock)),
        subtasks: SubTaskService::new(subtasks, clock),
        pagination: config.pagination.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::adapters::mail::ConsoleMailTransport;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None)]
    #[case::blank(Some("   "))]
    fn postgres_requires_database_url(#[case] url: Option<&str>) {
        let mut config = AppConfig::default();
        config.database.url = url.map(str::to_owned);

        let result = PostgresTaskboard::postgres(&config, Arc::new(ConsoleMailTransport));

        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::NotConfigured { ref section }))
                if section == "database"
        ));
    }

    #[test]
    fn zero_pool_size_is_a_config_error() {
        let mut config = AppConfig::default();
        config.database.url = Some("postgres://localhost/taskboard".to_owned());
        config.database.pool_size = 0;

        let result = PostgresTaskboard::postgres(&config, Arc::new(ConsoleMailTransport));

        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { ref field, .. }))
                if field == "database.pool_size"
        ));
    }

    #[test]
    fn invalid_configuration_is_rejected_before_wiring() {
        let mut config = AppConfig::default();
        config.notification.cooldown_secs = 0;

        let result = InMemoryTaskboard::in_memory(
            &config,
            Arc::new(ConsoleMailTransport),
            Arc::new(DefaultClock),
        );

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn page_requests_use_configured_defaults() {
        let board = InMemoryTaskboard::in_memory(
            &AppConfig::default(),
            Arc::new(ConsoleMailTransport),
            Arc::new(DefaultClock),
        )
        .expect("in-memory wiring succeeds");

        let request = board.page_request(None, None).expect("valid request");

        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 5);
        assert_eq!(board.cursor_page_size(), 6);
    }
}
