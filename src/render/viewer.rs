//! Hand saved figures to the platform image viewer

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::Result;

/// Open `path` in the default image viewer without waiting for it
pub fn open_image(path: &Path) -> Result<()> {
    let mut cmd = viewer_command(path);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd.spawn()?;
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut c = Command::new("open");
        c.arg(path);
        c
    }
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c.arg(path);
        c
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    }
}
