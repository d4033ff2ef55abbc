//! The seam between enumeration logic and the platform
//!
//! A backend implements these three traits over whatever handles the OS gives
//! it. Every method that can fail returns a [`Result`]; the enumerator decides
//! what to skip, so backends never swallow errors themselves.
//!
//! Handles returned by a source are owned values. Dropping them releases
//! the platform resource, which is how early `continue`s stay leak-free.

use crate::{
    error::Result,
    types::{FontAttributes, LocalizedString},
};

/// Which informational string to read from a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoStringKind {
    FullName,
    PostScriptName,
    Win32SubfamilyNames,
}

/// A collection of font families, such as the installed system fonts
pub trait FontSource {
    type Family: SourceFamily;

    /// How many families the collection reports
    fn family_count(&self) -> u32;

    /// Fetches one family by index
    fn family(&self, index: u32) -> Result<Self::Family>;
}

/// One family inside a [`FontSource`]
pub trait SourceFamily {
    type Font: SourceFont;

    /// Every localized name of the family, in platform order
    fn family_names(&self) -> Result<Vec<LocalizedString>>;

    /// The font that best matches normal weight, stretch and style
    fn representative_font(&self) -> Result<Self::Font>;

    fn font_count(&self) -> u32;

    fn font(&self, index: u32) -> Result<Self::Font>;
}

/// One member font of a [`SourceFamily`]
pub trait SourceFont {
    fn attributes(&self) -> FontAttributes;

    /// Reads an informational string list
    ///
    /// `Ok(None)` means the font does not carry that string at all, which is
    /// different from carrying an empty list.
    fn informational_strings(&self, kind: InfoStringKind)
        -> Result<Option<Vec<LocalizedString>>>;
}
