use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{DEFAULT_CONFIG_PATH, PanelConfig, StaticConfig, init_config_from};
use crate::errors::Result;
use crate::gateway::{TemplateGateway, build_gateway};
use crate::notification::NotificationChannel;
use crate::store::TemplateListStore;
use crate::workflow::MutationWorkflow;

/// Everything an admin surface needs to drive the template list
pub struct PanelContext {
    pub store: Arc<TemplateListStore>,
    pub workflow: Arc<MutationWorkflow>,
    pub notifications: Arc<NotificationChannel>,
    pub organization: String,
}

impl PanelContext {
    /// Wire store, workflow and notifications around an existing gateway
    pub fn with_gateway(gateway: Arc<dyn TemplateGateway>, panel: &PanelConfig) -> Self {
        let store = Arc::new(TemplateListStore::new(gateway));
        let notifications = Arc::new(NotificationChannel::from_config(panel));
        let workflow = Arc::new(MutationWorkflow::new(&store, notifications.clone()));
        Self {
            store,
            workflow,
            notifications,
            organization: panel.organization.clone(),
        }
    }
}

/// 加载 .env 和配置文件（只在进程启动时调用一次）
pub fn load_environment(config_path: Option<&str>) {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
    init_config_from(config_path.unwrap_or(DEFAULT_CONFIG_PATH));
}

/// 准备管理面板的上下文
pub fn prepare_panel(config: &StaticConfig) -> Result<PanelContext> {
    let gateway = build_gateway(config)?;
    info!(
        "Using {} gateway against {}",
        gateway.name(),
        config.api.base_url
    );
    Ok(PanelContext::with_gateway(gateway, &config.panel))
}
