mod core;
mod dropbox;
mod utils;

pub use self::core::{OAuth2Client, build_authorization_url};
