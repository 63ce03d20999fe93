use anyhow::{anyhow, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::log;

const TESSDATA_REPO: &str = "https://github.com/tesseract-ocr/tessdata/raw/main";
const ENG_TRAINEDDATA: &str = "eng.traineddata";

#[cfg(windows)]
const EXECUTABLE_NAME: &str = "tesseract.exe";
#[cfg(not(windows))]
const EXECUTABLE_NAME: &str = "tesseract";

#[cfg(windows)]
const SYSTEM_EXECUTABLES: &[&str] = &[
    r"C:\Program Files\Tesseract-OCR\tesseract.exe",
    r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
];
#[cfg(not(windows))]
const SYSTEM_EXECUTABLES: &[&str] = &[
    "/usr/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/opt/homebrew/bin/tesseract",
];

#[cfg(windows)]
const SYSTEM_TESSDATA: &[&str] = &[
    r"C:\Program Files\Tesseract-OCR\tessdata",
    r"C:\Program Files (x86)\Tesseract-OCR\tessdata",
];
#[cfg(not(windows))]
const SYSTEM_TESSDATA: &[&str] = &[
    "/usr/share/tesseract-ocr/5/tessdata",
    "/usr/share/tesseract-ocr/4.00/tessdata",
    "/usr/share/tessdata",
    "/usr/local/share/tessdata",
    "/opt/homebrew/share/tessdata",
];

/// Where the Tesseract binary and its English model live.
#[derive(Debug, Clone)]
pub struct TesseractPaths {
    pub executable: PathBuf,
    pub tessdata: PathBuf,
}

/// Returns the directory for storing Tesseract files
pub fn get_tesseract_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catan-advisor")
        .join("tesseract")
}

/// Locates Tesseract and makes sure the English model is present.
///
/// The executable must already be installed (locally or system-wide).
/// A missing `eng.traineddata` is copied from a system install when one
/// exists, otherwise downloaded.
pub fn ensure_tesseract() -> Result<TesseractPaths> {
    let executable = find_tesseract_executable()?;

    let tessdata = match find_tessdata_dir() {
        Ok(dir) => dir,
        Err(_) => {
            log("eng.traineddata not found locally, fetching...");
            let local = get_tesseract_dir().join("tessdata");
            fs::create_dir_all(&local)?;
            download_tessdata(&local)?;
            local
        }
    };

    log(&format!(
        "Tesseract ready: {} (tessdata: {})",
        executable.display(),
        tessdata.display()
    ));

    Ok(TesseractPaths {
        executable,
        tessdata,
    })
}

/// Fills `tessdata_dir` with English trained data, preferring a copy
/// from a system install over a download.
fn download_tessdata(tessdata_dir: &Path) -> Result<()> {
    let eng_path = tessdata_dir.join(ENG_TRAINEDDATA);

    for dir in SYSTEM_TESSDATA {
        let system = PathBuf::from(dir).join(ENG_TRAINEDDATA);
        if system.exists() {
            log(&format!("Copying eng.traineddata from: {}", system.display()));
            fs::copy(&system, &eng_path)?;
            return Ok(());
        }
    }

    let eng_url = format!("{}/{}", TESSDATA_REPO, ENG_TRAINEDDATA);
    log(&format!("Downloading {}...", eng_url));

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    let response = client
        .get(&eng_url)
        .header("User-Agent", "catan-advisor")
        .send()?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to download eng.traineddata: HTTP {}",
            response.status()
        ));
    }

    let bytes = response.bytes()?;
    let mut file = fs::File::create(&eng_path)?;
    file.write_all(&bytes)?;

    log(&format!(
        "Downloaded eng.traineddata ({} bytes)",
        bytes.len()
    ));

    Ok(())
}

/// Finds the Tesseract executable, checking our local dir first, then
/// PATH, then the usual install locations.
pub fn find_tesseract_executable() -> Result<PathBuf> {
    let local_exe = get_tesseract_dir().join(EXECUTABLE_NAME);
    if local_exe.exists() {
        return Ok(local_exe);
    }

    if let Ok(output) = std::process::Command::new("tesseract")
        .arg("--version")
        .output()
    {
        if output.status.success() {
            return Ok(PathBuf::from("tesseract"));
        }
    }

    for path in SYSTEM_EXECUTABLES {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(p);
        }
    }

    Err(anyhow!(
        "Tesseract not found. Install Tesseract-OCR and add it to PATH, or place the binary in: {}",
        get_tesseract_dir().display()
    ))
}

/// Finds a tessdata directory holding `eng.traineddata`.
pub fn find_tessdata_dir() -> Result<PathBuf> {
    let local_tessdata = get_tesseract_dir().join("tessdata");
    if local_tessdata.join(ENG_TRAINEDDATA).exists() {
        return Ok(local_tessdata);
    }

    if let Ok(prefix) = std::env::var("TESSDATA_PREFIX") {
        if let Some(dir) = tessdata_under(Path::new(&prefix)) {
            return Ok(dir);
        }
    }

    for path in SYSTEM_TESSDATA {
        let p = PathBuf::from(path);
        if p.join(ENG_TRAINEDDATA).exists() {
            return Ok(p);
        }
    }

    Err(anyhow!(
        "tessdata directory not found. Please ensure eng.traineddata is available."
    ))
}

/// `TESSDATA_PREFIX` may point at the tessdata dir itself or its parent.
fn tessdata_under(prefix: &Path) -> Option<PathBuf> {
    [prefix.to_path_buf(), prefix.join("tessdata")]
        .into_iter()
        .find(|p| p.join(ENG_TRAINEDDATA).exists())
}
