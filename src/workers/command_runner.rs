use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::user_role::UserRole;
use crate::errors::{DashError, DashResult};
use crate::helpers::session_store::SessionStore;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::dashboard_logger::DashboardLogger;
use crate::services::analytics_client::AnalyticsClient;
use crate::services::auth_client::AuthClient;
use crate::services::dashboard_service::DashboardService;
use crate::structs::config::config::Config;
use crate::structs::metric_update::MetricUpdate;
use crate::structs::new_metric::NewMetric;
use crate::structs::register_request::RegisterRequest;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Register { email, password, full_name, role } => {
                self.register_command(email, password, full_name, role).await
            }
            Commands::Login { email, password } => self.login_command(&email, &password).await,
            Commands::Logout => self.logout_command(),
            Commands::Whoami => self.whoami_command().await,
            Commands::Users => self.users_command().await,
            Commands::List { skip, limit, category } => self.list_command(skip, limit, category).await,
            Commands::Show { id } => self.show_command(id).await,
            Commands::Create { name, value, category } => self.create_command(name, value, category).await,
            Commands::Update { id, name, value, category } => {
                let update = MetricUpdate { metric_name: name, value, category };
                self.update_command(id, update).await
            }
            Commands::Delete { id, yes } => self.delete_command(id, yes).await,
            Commands::Seed => self.seed_command().await,
            Commands::Summary { json } => self.summary_command(json).await,
            Commands::Dashboard { port, no_open } => self.dashboard_command(port, no_open).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DashResult<()> {
        log::info!("🚀 Initializing pulsedash configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to point at your analytics backend.", path.display());
        log::info!("🔧 Run 'pulsedash validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> DashResult<()> {
        log::info!("🔍 Validating pulsedash configuration...");

        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 Backend: {}", config.api.base_url);
                Ok(())
            }
            Err(issues) => {
                log::info!("❌ Issues found:");
                for issue in &issues {
                    log::info!("   - {}", issue);
                }
                Err(DashError::config_error(
                    &format!("{} configuration issue(s)", issues.len()),
                    None,
                    Some("Fix the listed fields in config.toml"),
                ))
            }
        }
    }

    async fn register_command(&self, email: String, password: String, full_name: String, role: UserRole) -> DashResult<()> {
        let config = self.load_config()?;
        let auth = AuthClient::new(&config.api)?;
        let request = RegisterRequest { email, password, full_name, role };

        let user = AnimatedLogger::track("Registering account...", "Account created", auth.register(&request)).await?;
        log::info!("✅ Registered {} as {}", user.email, user.role);
        log::info!("💡 Run 'pulsedash login --email {} --password ...' to sign in.", user.email);
        Ok(())
    }

    async fn login_command(&self, email: &str, password: &str) -> DashResult<()> {
        let config = self.load_config()?;
        let auth = AuthClient::new(&config.api)?;

        let token = AnimatedLogger::track("Signing in...", "Signed in", auth.login(email, password)).await?;
        let store = SessionStore::new()?;
        store.save_token(auth.base_url(), email, &token)?;

        log::info!("✅ Logged in as {}", email);
        log::debug!("Session stored at {}", store.path().display());
        Ok(())
    }

    fn logout_command(&self) -> DashResult<()> {
        if SessionStore::new()?.clear()? {
            log::info!("👋 Logged out");
        } else {
            log::info!("ℹ️ No active session");
        }
        Ok(())
    }

    async fn whoami_command(&self) -> DashResult<()> {
        let config = self.load_config()?;
        let auth = AuthClient::new(&config.api)?;
        let token = SessionStore::new()?.require_token(auth.base_url())?;

        let user = auth.me(&token).await?;
        DashboardLogger::print_user(&user);
        Ok(())
    }

    async fn users_command(&self) -> DashResult<()> {
        let config = self.load_config()?;
        let auth = AuthClient::new(&config.api)?;
        let token = SessionStore::new()?.require_token(auth.base_url())?;

        let users = AnimatedLogger::track("Loading users...", "Users loaded", auth.list_users(&token)).await?;
        DashboardLogger::print_users(&users);
        Ok(())
    }

    async fn list_command(&self, skip: usize, limit: usize, category: Option<String>) -> DashResult<()> {
        let (_, service) = self.dashboard_service()?;

        if let Some(category) = &category {
            log::info!("🔎 Filtering by category: {}", category);
        }
        let records = AnimatedLogger::track(
            "Loading metrics...",
            "Metrics loaded",
            service.load_records(skip, limit, category),
        ).await?;

        DashboardLogger::print_records(&records);
        Ok(())
    }

    async fn show_command(&self, id: i64) -> DashResult<()> {
        let (_, service) = self.dashboard_service()?;
        let record = service.api().get_metric(id).await?;
        DashboardLogger::print_record(&record);
        Ok(())
    }

    async fn create_command(&self, name: String, value: f64, category: String) -> DashResult<()> {
        let metric = NewMetric { metric_name: name, value, category };
        metric.validate()?;

        let (_, service) = self.dashboard_service()?;
        let record = service.api().create_metric(metric).await?;
        log::info!(
            "✅ Analytics data stored! ID: {}",
            record.id.map_or_else(|| "-".to_string(), |id| id.to_string())
        );
        Ok(())
    }

    async fn update_command(&self, id: i64, update: MetricUpdate) -> DashResult<()> {
        update.validate()?;

        let (_, service) = self.dashboard_service()?;
        let message = service.api().update_metric(id, update).await?;
        log::info!("✅ {}", message.message);
        Ok(())
    }

    async fn delete_command(&self, id: i64, yes: bool) -> DashResult<()> {
        if !yes && !Self::confirm(&format!("Delete metric #{}?", id))? {
            log::info!("⏭️ Delete cancelled");
            return Ok(());
        }

        let (_, service) = self.dashboard_service()?;
        let message = service.api().delete_metric(id).await?;
        log::info!("🗑️ {}", message.message);
        Ok(())
    }

    async fn seed_command(&self) -> DashResult<()> {
        let (_, service) = self.dashboard_service()?;

        let count = AnimatedLogger::track("Seeding sample data...", "Sample data stored", service.seed_sample_data()).await?;
        log::info!("🌱 {} records stored successfully", count);
        Ok(())
    }

    async fn summary_command(&self, json: bool) -> DashResult<()> {
        let (config, service) = self.dashboard_service()?;

        let summary = if json {
            service.load_summary().await?
        } else {
            AnimatedLogger::track("Loading dashboard...", "Dashboard loaded", service.load_summary()).await?
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            DashboardLogger::print_summary(&summary, config.output.label_width);
        }
        Ok(())
    }

    async fn dashboard_command(&self, port: Option<u16>, no_open: bool) -> DashResult<()> {
        let (config, service) = self.dashboard_service()?;
        log::info!("🌐 Starting pulsedash dashboard...");

        let mut server = DashboardServer::new(service, config.output.label_width);
        let port = server.start(port.unwrap_or(config.dashboard.port)).await?;
        let url = format!("http://localhost:{}", port);

        log::info!("🚀 Dashboard available at: {}", url);
        log::info!("⏹️ Press Ctrl+C to stop the dashboard");

        if config.dashboard.open_browser && !no_open {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    fn load_config(&self) -> DashResult<Config> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config).map_err(|issues| {
            DashError::config_error(&issues.join("; "), None, Some("Run 'pulsedash validate' for details"))
        })?;
        Ok(config)
    }

    fn dashboard_service(&self) -> DashResult<(Config, DashboardService)> {
        let config = self.load_config()?;
        let token = SessionStore::new()?.require_token(&config.api.normalized_base_url())?;
        let client = AnalyticsClient::new(&config.api, token)?;
        let service = DashboardService::new(Arc::new(client), &config.dashboard);
        Ok((config, service))
    }

    fn confirm(question: &str) -> DashResult<bool> {
        print!("{} [y/N]: ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
