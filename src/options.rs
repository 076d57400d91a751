/// Default capacity for both the input reader and the output writer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256 * 1024;

/// I/O settings for path-based filtering.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub read_buffer: usize,
    pub write_buffer: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            read_buffer: DEFAULT_BUFFER_CAPACITY,
            write_buffer: DEFAULT_BUFFER_CAPACITY,
        }
    }
}
