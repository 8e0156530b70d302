use std::process::Command;

use crate::core::interfaces::adapters::SystemThemeDetector;

pub struct OsThemeDetector;

impl OsThemeDetector {
    pub fn new() -> Self {
        Self
    }

    fn run_probe(program: &str, args: &[&str]) -> Option<String> {
        let output = Command::new(program).args(args).output().ok()?;
        if !output.status.success() {
            log::debug!(
                "[THEME] Appearance probe {} exited with {}",
                program,
                output.status
            );
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(target_os = "macos")]
fn probe_prefers_dark() -> bool {
    OsThemeDetector::run_probe("defaults", &["read", "-g", "AppleInterfaceStyle"])
        .map(|output| is_macos_dark(&output))
        .unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe_prefers_dark() -> bool {
    OsThemeDetector::run_probe(
        "reg",
        &[
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ],
    )
    .map(|output| is_windows_dark(&output))
    .unwrap_or(false)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn probe_prefers_dark() -> bool {
    if let Some(output) = OsThemeDetector::run_probe(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "color-scheme"],
    ) {
        if is_gnome_dark(&output) {
            return true;
        }
    }

    std::env::var("GTK_THEME")
        .map(|theme| theme.to_ascii_lowercase().contains("dark"))
        .unwrap_or(false)
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn is_macos_dark(output: &str) -> bool {
    output.trim().eq_ignore_ascii_case("dark")
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn is_windows_dark(output: &str) -> bool {
    output
        .lines()
        .find(|line| line.contains("AppsUseLightTheme"))
        .and_then(|line| line.split_whitespace().last())
        .map(|value| value == "0x0")
        .unwrap_or(false)
}

#[cfg_attr(any(target_os = "macos", target_os = "windows"), allow(dead_code))]
fn is_gnome_dark(output: &str) -> bool {
    output.contains("prefer-dark")
}

impl SystemThemeDetector for OsThemeDetector {
    fn prefers_dark(&self) -> bool {
        probe_prefers_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_output_parsing() {
        assert!(is_macos_dark("Dark\n"));
        assert!(!is_macos_dark(""));
    }

    #[test]
    fn test_windows_output_parsing() {
        let dark = "\r\nHKEY_CURRENT_USER\\...\\Personalize\r\n    AppsUseLightTheme    REG_DWORD    0x0\r\n";
        let light = "\r\nHKEY_CURRENT_USER\\...\\Personalize\r\n    AppsUseLightTheme    REG_DWORD    0x1\r\n";

        assert!(is_windows_dark(dark));
        assert!(!is_windows_dark(light));
        assert!(!is_windows_dark("garbage"));
    }

    #[test]
    fn test_gnome_output_parsing() {
        assert!(is_gnome_dark("'prefer-dark'\n"));
        assert!(!is_gnome_dark("'default'\n"));
    }

    #[test]
    fn test_run_probe_returns_none_for_missing_program() {
        assert!(OsThemeDetector::run_probe("definitely-not-a-real-program-xyz", &[]).is_none());
    }
}
