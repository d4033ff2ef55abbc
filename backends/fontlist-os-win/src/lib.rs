//! System font enumeration using Windows DirectWrite
//!
//! [`DWriteFontSource`] owns the shared DirectWrite factory and the system
//! font collection for as long as it lives. Families, fonts and localized
//! string lists are `windows` crate smart pointers, so every handle is
//! released when it goes out of scope, including on early returns.
//!
//! ```rust,ignore
//! use fontlist_core::{enumerate_families, EnumerateOptions};
//! use fontlist_os_win::DWriteFontSource;
//!
//! let source = DWriteFontSource::system()?;
//! let families = enumerate_families(&source, &EnumerateOptions::default());
//! println!("{} families", families.len());
//! # Ok::<(), fontlist_core::FontListError>(())
//! ```

#![cfg(windows)]
#![allow(unsafe_code)]

use fontlist_core::{
    error::{FontListError, Result},
    traits::{FontSource, InfoStringKind, SourceFamily, SourceFont},
    types::{FontAttributes, LocalizedString},
};

use windows::Win32::{
    Foundation::BOOL,
    Graphics::DirectWrite::{
        DWriteCreateFactory, IDWriteFactory, IDWriteFont, IDWriteFontCollection,
        IDWriteFontFamily, IDWriteLocalizedStrings, DWRITE_FACTORY_TYPE_SHARED,
        DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, DWRITE_FONT_WEIGHT_NORMAL,
        DWRITE_INFORMATIONAL_STRING_FULL_NAME, DWRITE_INFORMATIONAL_STRING_ID,
        DWRITE_INFORMATIONAL_STRING_POSTSCRIPT_NAME,
        DWRITE_INFORMATIONAL_STRING_WIN32_SUBFAMILY_NAMES,
    },
};

fn source_error(what: &str, e: windows::core::Error) -> FontListError {
    FontListError::Source(format!("{what}: {e}"))
}

/// The installed system fonts, as DirectWrite sees them
pub struct DWriteFontSource {
    /// Kept alive for the lifetime of the collection
    _factory: IDWriteFactory,
    collection: IDWriteFontCollection,
}

impl DWriteFontSource {
    /// Creates the shared factory and fetches the system collection
    ///
    /// # Errors
    /// [`FontListError::FactoryCreation`] or
    /// [`FontListError::CollectionUnavailable`] with the HRESULT message.
    pub fn system() -> Result<Self> {
        unsafe {
            let factory: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)
                .map_err(|e| FontListError::FactoryCreation(e.to_string()))?;

            let mut collection: Option<IDWriteFontCollection> = None;
            factory
                .GetSystemFontCollection(&mut collection, false)
                .map_err(|e| FontListError::CollectionUnavailable(e.to_string()))?;
            let collection = collection.ok_or_else(|| {
                FontListError::CollectionUnavailable("no collection returned".to_string())
            })?;

            log::debug!(
                "DirectWrite system collection has {} families",
                collection.GetFontFamilyCount()
            );

            Ok(Self {
                _factory: factory,
                collection,
            })
        }
    }
}

impl FontSource for DWriteFontSource {
    type Family = DWriteFamily;

    fn family_count(&self) -> u32 {
        unsafe { self.collection.GetFontFamilyCount() }
    }

    fn family(&self, index: u32) -> Result<DWriteFamily> {
        unsafe {
            self.collection
                .GetFontFamily(index)
                .map(DWriteFamily)
                .map_err(|e| source_error("GetFontFamily", e))
        }
    }
}

/// One DirectWrite font family
pub struct DWriteFamily(IDWriteFontFamily);

impl SourceFamily for DWriteFamily {
    type Font = DWriteFont;

    fn family_names(&self) -> Result<Vec<LocalizedString>> {
        let names = unsafe { self.0.GetFamilyNames() }
            .map_err(|e| source_error("GetFamilyNames", e))?;
        Ok(read_localized(&names))
    }

    fn representative_font(&self) -> Result<DWriteFont> {
        unsafe {
            self.0
                .GetFirstMatchingFont(
                    DWRITE_FONT_WEIGHT_NORMAL,
                    DWRITE_FONT_STRETCH_NORMAL,
                    DWRITE_FONT_STYLE_NORMAL,
                )
                .map(DWriteFont)
                .map_err(|e| source_error("GetFirstMatchingFont", e))
        }
    }

    fn font_count(&self) -> u32 {
        unsafe { self.0.GetFontCount() }
    }

    fn font(&self, index: u32) -> Result<DWriteFont> {
        unsafe {
            self.0
                .GetFont(index)
                .map(DWriteFont)
                .map_err(|e| source_error("GetFont", e))
        }
    }
}

/// One DirectWrite font (not a font face)
pub struct DWriteFont(IDWriteFont);

impl SourceFont for DWriteFont {
    fn attributes(&self) -> FontAttributes {
        unsafe {
            FontAttributes {
                weight: self.0.GetWeight().0,
                stretch: self.0.GetStretch().0,
                style: self.0.GetStyle().0,
            }
        }
    }

    fn informational_strings(&self, kind: InfoStringKind) -> Result<Option<Vec<LocalizedString>>> {
        let mut strings: Option<IDWriteLocalizedStrings> = None;
        let mut exists = BOOL::default();
        unsafe {
            self.0
                .GetInformationalStrings(informational_string_id(kind), &mut strings, &mut exists)
                .map_err(|e| source_error("GetInformationalStrings", e))?;
        }
        if !exists.as_bool() {
            return Ok(None);
        }
        Ok(strings.map(|strings| read_localized(&strings)))
    }
}

fn informational_string_id(kind: InfoStringKind) -> DWRITE_INFORMATIONAL_STRING_ID {
    match kind {
        InfoStringKind::FullName => DWRITE_INFORMATIONAL_STRING_FULL_NAME,
        InfoStringKind::PostScriptName => DWRITE_INFORMATIONAL_STRING_POSTSCRIPT_NAME,
        InfoStringKind::Win32SubfamilyNames => DWRITE_INFORMATIONAL_STRING_WIN32_SUBFAMILY_NAMES,
    }
}

/// Reads every (locale, string) pair, skipping entries DirectWrite fails on
fn read_localized(strings: &IDWriteLocalizedStrings) -> Vec<LocalizedString> {
    let mut result = Vec::new();
    let mut buf = Vec::new();
    unsafe {
        for i in 0..strings.GetCount() {
            let Some(value) = read_wide(&mut buf, strings.GetStringLength(i), |b| {
                strings.GetString(i, b)
            }) else {
                continue;
            };
            // A missing locale only loses the English preference, not the name
            let locale = read_wide(&mut buf, strings.GetLocaleNameLength(i), |b| {
                strings.GetLocaleName(i, b)
            })
            .unwrap_or_default();
            result.push(LocalizedString { locale, value });
        }
    }
    result
}

fn read_wide(
    buf: &mut Vec<u16>,
    len: windows::core::Result<u32>,
    read: impl FnOnce(&mut [u16]) -> windows::core::Result<()>,
) -> Option<String> {
    let len = len.ok()? as usize;
    buf.clear();
    buf.resize(len + 1, 0);
    read(buf.as_mut_slice()).ok()?;
    buf.truncate(len);
    Some(String::from_utf16_lossy(buf))
}
