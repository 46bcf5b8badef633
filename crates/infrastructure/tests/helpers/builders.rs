#![allow(dead_code)]
use std::io::Write;
use tempfile::NamedTempFile;

/// Config file with `contents`, removed when the handle drops.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const FULL_CONFIG: &str = "\
# Upstream servers
dns_server 9.9.9.9
dns_server [2620:fe::fe]:5353

timeout 2000
use_tcp 1
enable_dns64 true
dns64_prefix 64:ff9b::/96
filter_aaaa true
";
