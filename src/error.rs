use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	#[display("Cannot read file '{path}'. Cause: {cause}")]
	IoReadFile { path: String, cause: std::io::Error },

	#[display("Cannot write file '{path}'. Cause: {cause}")]
	IoWriteFile { path: String, cause: std::io::Error },

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),

	#[from]
	Regex(regex::Error),
}

// region:    --- Custom Constructors

impl Error {
	pub fn io_read_file(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoReadFile {
			path: path.into(),
			cause,
		}
	}

	pub fn io_write_file(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoWriteFile {
			path: path.into(),
			cause,
		}
	}

	pub fn simple_fs(cause: simple_fs::Error) -> Self {
		Self::SimpleFs(cause)
	}
}

// endregion: --- Custom Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
