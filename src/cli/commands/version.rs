//! `version` command handler.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::shortcode::Shortcode;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    shortcodes: Vec<&'static str>,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            shortcodes: Shortcode::ALL.iter().map(|sc| sc.name()).collect(),
        }
    }
}

/// Print the package version and the shortcodes it provides.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), serde_json::Error> {
    let info = VersionInfo::current();

    match args.format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("shortcodes: {}", info.shortcodes.join(", "));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_lists_shortcodes() {
        let info = VersionInfo::current();
        assert_eq!(info.name, "stepcards");
        assert_eq!(info.shortcodes, vec!["trajectory", "research"]);
    }
}
