use crate::utils::error::Result;

/// Where import artifacts land. The pipeline itself does no I/O; only the
/// CLI shell reads and writes through this port.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
