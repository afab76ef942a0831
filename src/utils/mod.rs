pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_valid_url, normalize_base_url, page_url, resolve_site_path};
