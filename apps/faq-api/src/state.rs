use std::sync::Arc;

use faq_service::FaqService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<FaqService>,
}
impl AppState {
	pub fn new(config: faq_config::Config) -> color_eyre::Result<Self> {
		let service = FaqService::new(config)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: FaqService) -> Self {
		Self { service: Arc::new(service) }
	}
}
