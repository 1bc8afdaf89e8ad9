use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Program that hands a file to the desktop's default viewer
pub fn opener_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Open `path` in the default browser without waiting for it
pub fn open_in_browser(path: &Path) -> io::Result<()> {
    let mut command = Command::new(opener_program());
    if cfg!(target_os = "windows") {
        // `start` treats its first quoted argument as the window title
        command.args(["/C", "start", ""]);
    }

    command
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
