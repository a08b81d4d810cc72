/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `scheme://authority` or a protocol-relative `//authority` prefix
static ORIGIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//[^/?#]*").expect("origin regex is valid")
});

/// Rewrites an avatar URL so that it is served from `origin`.
///
/// The backend stores avatars with whatever host it saw at upload time (often
/// `localhost` or an internal name) or as a bare relative path. This keeps the
/// path and query and swaps the origin for the configured one.
///
/// * empty or blank input gives `None`
/// * `data:` and `blob:` URLs are returned unchanged
/// * `http://old-host:8080/uploads/a.png?v=2` becomes `{origin}/uploads/a.png?v=2`
/// * `uploads/a.png` and `/uploads/a.png` become `{origin}/uploads/a.png`
///
/// # Examples
/// ```
/// use lms_client::model::utils::normalize_avatar_url;
///
/// let url = normalize_avatar_url("http://localhost/uploads/me.png", "https://cdn.example.com");
/// assert_eq!(url.as_deref(), Some("https://cdn.example.com/uploads/me.png"));
/// ```
#[must_use]
pub fn normalize_avatar_url(raw: &str, origin: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("blob:") {
        return Some(raw.to_string());
    }

    let origin = origin.trim().trim_end_matches('/');
    let rest = ORIGIN_RE.replace(raw, "");
    let path = rest.trim_start_matches('/');

    if origin.is_empty() {
        return Some(format!("/{path}"));
    }
    Some(format!("{origin}/{path}"))
}

/// Extracts `scheme://host[:port]` from an absolute URL
#[must_use]
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{}://{}:{}", parsed.scheme(), host, port)),
        None => Some(format!("{}://{}", parsed.scheme(), host)),
    }
}

/// Implemented by every shape that carries avatar URLs
pub trait AvatarUrls {
    /// Rewrites every avatar URL in place with [`normalize_avatar_url`]
    fn normalize_avatars(&mut self, origin: &str);
}

impl<T: AvatarUrls> AvatarUrls for Vec<T> {
    fn normalize_avatars(&mut self, origin: &str) {
        for item in self.iter_mut() {
            item.normalize_avatars(origin);
        }
    }
}

impl<T: AvatarUrls> AvatarUrls for Option<T> {
    fn normalize_avatars(&mut self, origin: &str) {
        if let Some(item) = self.as_mut() {
            item.normalize_avatars(origin);
        }
    }
}
