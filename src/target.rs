//! fetch targets
use std::{
    fmt,
    path::{Path, PathBuf},
};

///Where one fetch goes and where its text ends up.
///
///A target is fixed once constructed: a host to connect to, a TCP port and the
///path of the file the fetched text is written to. Any `u16` is accepted as a
///port; an unusable one is not rejected here, it simply fails to connect later.
///
///# Example
///```
///use page_fetch::target::FetchTarget;
///
///let target = FetchTarget::new("localhost", 81, "wp-sandbox.html");
///assert_eq!(target.host(), "localhost");
///```
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTarget {
    host: String,
    port: u16,
    output: PathBuf,
}

impl FetchTarget {
    ///Creates new `FetchTarget` from a host, a port and an output path.
    pub fn new<T, P>(host: T, port: u16, output: P) -> FetchTarget
    where
        T: Into<String>,
        P: Into<PathBuf>,
    {
        FetchTarget {
            host: host.into(),
            port,
            output: output.into(),
        }
    }

    ///Returns host of this `FetchTarget`.
    pub fn host(&self) -> &str {
        &self.host
    }

    ///Returns port of this `FetchTarget`.
    pub fn port(&self) -> u16 {
        self.port
    }

    ///Returns path of the file the fetched text is written to.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_new() {
        let target = FetchTarget::new("localhost", 81, "wp-sandbox.html");

        assert_eq!(target.host(), "localhost");
        assert_eq!(target.port(), 81);
        assert_eq!(target.output(), Path::new("wp-sandbox.html"));
    }

    #[test]
    fn target_permissive_port() {
        let target = FetchTarget::new("localhost", 0, "out.html");

        assert_eq!(target.port(), 0);
    }

    #[test]
    fn target_display() {
        let target = FetchTarget::new("example.com", 8080, "page.html");

        assert_eq!(target.to_string(), "example.com:8080");
    }
}
