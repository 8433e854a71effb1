pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Repository error: {message}")]
	Repository { message: String },
}
impl From<qrel_storage::Error> for Error {
	fn from(err: qrel_storage::Error) -> Self {
		Self::Repository { message: err.to_string() }
	}
}
