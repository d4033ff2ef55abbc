//! Fontlist Core: what a font family looks like once it leaves the OS
//!
//! The platform backends hand us localized strings and raw numeric codes.
//! This crate turns them into families, names and report lines that read
//! the same on the console and in the log file.
//!
//! ## The Flow
//!
//! 1. **Source** - A [`FontSource`] exposes families and their fonts
//! 2. **Enumerate** - [`enumerate_families`] resolves names and fallbacks
//! 3. **Report** - [`Report`] formats every family exactly once
//! 4. **Encode** - [`report::EncodedWriter`] turns lines into bytes per sink
//!
//! ```rust
//! use fontlist_core::{report::Report, types::FontFamily};
//!
//! let report = Report::from_families(&[] as &[FontFamily]);
//! assert_eq!(report.lines()[0], "Found 0 font families");
//! ```

pub mod enumerate;
pub mod error;
pub mod names;
pub mod report;
pub mod traits;

pub use enumerate::{enumerate_families, EnumerateOptions};
pub use error::{FontListError, Result};
pub use report::{Report, ReportSink};
pub use traits::{FontSource, InfoStringKind, SourceFamily, SourceFont};

/// Locale DirectWrite is asked for first when picking a display name
pub const DEFAULT_LOCALE: &str = "en-us";

/// The records the enumerator builds and the report consumes
pub mod types {
    use std::collections::BTreeSet;

    /// One entry of a localized string list
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LocalizedString {
        pub locale: String,
        pub value: String,
    }

    impl LocalizedString {
        pub fn new(locale: impl Into<String>, value: impl Into<String>) -> Self {
            Self {
                locale: locale.into(),
                value: value.into(),
            }
        }
    }

    /// Raw weight, stretch and style codes, exactly as the platform reports them
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontAttributes {
        pub weight: i32,
        pub stretch: i32,
        pub style: i32,
    }

    /// A single member font of a family
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FontInfo {
        pub name: String,
        pub postscript_name: String,
        pub attributes: FontAttributes,
    }

    /// A named group of fonts sharing a base design
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct FontFamily {
        pub primary_name: String,
        pub postscript_family_name: String,
        pub all_names: BTreeSet<String>,
        pub fonts: Vec<FontInfo>,
    }

    impl FontFamily {
        /// Every localized family name other than the primary one, ascending
        pub fn aliases(&self) -> impl Iterator<Item = &str> {
            self.all_names
                .iter()
                .map(String::as_str)
                .filter(move |name| *name != self.primary_name)
        }
    }

}
