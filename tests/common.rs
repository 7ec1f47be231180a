#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "id,timestamp,is_workplace,room";

/// Three valid movements and one with a broken timestamp.
pub const SAMPLE_CSV: &str = "\
id,timestamp,is_workplace,room
1,2024-01-01 10:00:00,true,5
2,2024-01-03 09:30:00,False,2
3,2024-13-40 99:99:99,true,7
4,2024-01-02 14:15:00,TRUE,3
";

pub fn mvl() -> Command {
    cargo_bin_cmd!("movelog")
}

/// `mvl()` pointed at a config path that does not exist, so defaults apply.
pub fn mvl_isolated(dir: &Path) -> Command {
    let mut cmd = mvl();
    cmd.arg("--config")
        .arg(dir.join("movelog.conf"))
        .current_dir(dir);
    cmd
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}
