use crate::PizzeriaError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Regional style a factory sources ingredients for.
///
/// Regions are an open set: the built-in stores use [`Region::NEW_YORK`] and
/// [`Region::CHICAGO`], and callers may define their own with [`Region::new`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Region(Cow<'static, str>);

impl Region {
    pub const NEW_YORK: Region = Region::new_static("NY");
    pub const CHICAGO: Region = Region::new_static("Chicago");

    /// Takes the name exactly as written: `Region::new("ny")` is a custom
    /// region, not [`Region::NEW_YORK`]. Use `Region::try_from` to resolve
    /// aliases.
    pub fn new<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self(name.into())
    }

    pub const fn new_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Region {
    type Error = PizzeriaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(PizzeriaError::validation("Region name cannot be empty")),
            "ny" | "nyc" | "new york" => Ok(Self::NEW_YORK),
            "chicago" | "chi" => Ok(Self::CHICAGO),
            _ => Ok(Self::new(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = PizzeriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0.into_owned()
    }
}
