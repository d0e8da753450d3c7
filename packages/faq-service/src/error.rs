pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Corpus error: {0}")]
	Corpus(#[from] faq_corpus::Error),
	#[error("Invalid config: {0}")]
	Config(#[from] faq_config::Error),
}
