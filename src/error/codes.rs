/// Error code registry for phototools
///
/// Error codes are organized by category:
/// - 1000-1999: Filename errors
/// - 2000-2999: Grid layout errors
/// - 3000-3999: Batch and directory errors
/// - 4000-4999: Image and file I/O errors
/// - 5000-5999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Filename errors (1000-1999)
    pub const MALFORMED_FILENAME: u16 = 1001;

    // Grid layout errors (2000-2999)
    pub const INVALID_GRID_CONSTRAINT: u16 = 2001;

    // Batch and directory errors (3000-3999)
    pub const TOO_MANY_FILES: u16 = 3001;
    pub const DIRECTORY_UNAVAILABLE: u16 = 3002;

    // Image and file I/O errors (4000-4999)
    pub const IMAGE_CODEC: u16 = 4001;
    pub const FILE_IO: u16 = 4002;

    // Configuration errors (5000-5999)
    pub const CONFIG_INVALID: u16 = 5001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::MALFORMED_FILENAME => "File name has no numeric index to reconcile",
        ErrorCode::INVALID_GRID_CONSTRAINT => "Grid constraint or fill order is invalid",
        ErrorCode::TOO_MANY_FILES => "Directory holds more images than the configured maximum",
        ErrorCode::DIRECTORY_UNAVAILABLE => "Directory does not exist and could not be created",
        ErrorCode::IMAGE_CODEC => "Image could not be decoded or encoded",
        ErrorCode::FILE_IO => "File system operation failed",
        ErrorCode::CONFIG_INVALID => "Configuration file is missing or invalid",
        _ => "Unknown error",
    }
}
