use std::fmt;
use std::str::FromStr;

/// Time zone used to render timestamps and to split history into days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayTimeZone {
    /// The machine's local time zone (default)
    #[default]
    Local,
    Utc,
}

impl FromStr for DisplayTimeZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(DisplayTimeZone::Local),
            "utc" => Ok(DisplayTimeZone::Utc),
            _ => Err(format!(
                "Invalid timezone: {}. Please specify 'local' or 'utc'",
                s
            )),
        }
    }
}

impl fmt::Display for DisplayTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayTimeZone::Local => write!(f, "local"),
            DisplayTimeZone::Utc => write!(f, "utc"),
        }
    }
}

/// Colour mode handed to the derivation diff tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffColor {
    #[default]
    Always,
    Never,
    Auto,
}

impl DiffColor {
    pub fn as_arg(&self) -> &'static str {
        match self {
            DiffColor::Always => "always",
            DiffColor::Never => "never",
            DiffColor::Auto => "auto",
        }
    }
}

impl FromStr for DiffColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(DiffColor::Always),
            "never" => Ok(DiffColor::Never),
            "auto" => Ok(DiffColor::Auto),
            _ => Err(format!(
                "Invalid diff color: {}. Please specify 'always', 'never' or 'auto'",
                s
            )),
        }
    }
}

impl fmt::Display for DiffColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}
