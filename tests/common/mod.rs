//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use wechatpay_endpoints::resolver::{PathParams, RequestTarget};
use wechatpay_endpoints::server::WeChatServer;

/// Well-formed API roots: every gateway plus a couple of local ones.
#[allow(dead_code)]
pub fn domains() -> Vec<&'static str> {
    let mut domains: Vec<_> = WeChatServer::ALL.iter().map(|s| s.domain()).collect();
    domains.push("http://127.0.0.1:8080");
    domains.push("https://sandbox.example.com");
    domains
}

/// A value for every placeholder still open in `target`.
#[allow(dead_code)]
pub fn fill_params(target: &RequestTarget) -> PathParams {
    target
        .uri
        .path_params()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), format!("{}-{}", name, i)))
        .collect()
}

/// A file under its own temp dir. The dir is removed on drop.
#[allow(dead_code)]
pub struct TempFile {
    dir: PathBuf,
    path: PathBuf,
}

#[allow(dead_code)]
impl TempFile {
    /// Write `content` to `name` in a dir unique to this process and file name.
    pub fn new(name: &str, content: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "wechatpay-endpoints-{}-{}",
            std::process::id(),
            name.replace('.', "-")
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
