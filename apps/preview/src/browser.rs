use std::io;
use std::net::SocketAddr;
use std::process::{Child, Command};

/// Address a browser can reach; wildcard binds are shown as `localhost`.
pub(crate) fn local_url(address: SocketAddr) -> String {
    if address.ip().is_unspecified() {
        format!("http://localhost:{}/", address.port())
    } else {
        format!("http://{address}/")
    }
}

/// Hands `url` to the platform opener without waiting for it.
pub(crate) fn open(url: &str) -> io::Result<Child> {
    #[cfg(target_os = "macos")]
    let child = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let child = Command::new("cmd").args(["/C", "start", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let child = Command::new("xdg-open").arg(url).spawn();

    child
}
