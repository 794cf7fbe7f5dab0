mod file_advisory;

pub use file_advisory::FileAdvisorySource;
