/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = concat!("lms-client/", env!("CARGO_PKG_VERSION"));
/// Default endpoint when `LMS_API_URL` is not configured
pub const DEFAULT_API_URL: &str = "http://localhost/api.php";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Query parameter selecting the backend action
pub const ACTION_PARAM: &str = "action";
/// Query parameter carrying the auth token
pub const TOKEN_PARAM: &str = "token";
/// Placeholder written in logs instead of the real token
pub const REDACTED: &str = "***";
/// Multipart field name for avatar uploads
pub const AVATAR_FIELD: &str = "avatar";
/// Multipart field name for course thumbnails
pub const THUMBNAIL_FIELD: &str = "thumbnail";
/// Multipart field name for lesson videos
pub const VIDEO_FIELD: &str = "video";
