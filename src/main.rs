//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` on localhost so both demos can be opened in a browser.

use std::io;
use std::process::{Command, ExitCode, Stdio};

const PORT: &str = "8000";

fn build_wasm() -> io::Result<bool> {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status();

    match status {
        Ok(st) => Ok(st.success()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
            Ok(true)
        }
        Err(err) => Err(err),
    }
}

fn serve() -> io::Result<()> {
    println!("Serving static/ at http://127.0.0.1:{PORT} (Ctrl-C to stop) …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--bind", "127.0.0.1", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()?;
    server.wait()?;
    Ok(())
}

fn main() -> ExitCode {
    match build_wasm() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("failed to run wasm-pack: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = serve() {
        eprintln!("failed to start http server: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
