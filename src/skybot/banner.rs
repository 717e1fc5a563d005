//! The two metadata lines at the top of a SkyBoT text answer
//!
//! ```text
//! # Flag: 1
//! # Ticket: 1665406351163840
//! ```

use crate::table::BANNER_LINES;

/// Status flag and ticket of a cone-search answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    /// 1 = objects found, 0 = no object in the field, -1 = service error
    pub flag: Option<i32>,
    pub ticket: Option<String>,
}

impl Banner {
    /// Read the banner lines; unknown keys and malformed values are ignored
    pub fn parse(text: &str) -> Self {
        let mut banner = Banner::default();

        for line in text.lines().take(BANNER_LINES) {
            let Some((key, value)) = line.trim_start_matches('#').split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "flag" => banner.flag = value.parse().ok(),
                "ticket" if !value.is_empty() => banner.ticket = Some(value.to_string()),
                _ => {}
            }
        }

        banner
    }

    pub fn no_objects(&self) -> bool {
        self.flag == Some(0)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.flag, Some(flag) if flag < 0)
    }
}
