//! Name resolution for families and fonts

use crate::{
    traits::{InfoStringKind, SourceFont},
    types::LocalizedString,
};

/// Style suffix used when a font carries neither a full name nor a subfamily
pub const UNKNOWN_STYLE: &str = "(Unknown Style)";

/// Picks the display string from a localized list
///
/// Prefers the entry whose locale matches `preferred_locale` (compared
/// ASCII case-insensitively, like DirectWrite's `FindLocaleName`), then the
/// first entry, then the empty string.
pub fn primary_name(strings: &[LocalizedString], preferred_locale: &str) -> String {
    strings
        .iter()
        .find(|s| s.locale.eq_ignore_ascii_case(preferred_locale))
        .or_else(|| strings.first())
        .map(|s| s.value.clone())
        .unwrap_or_default()
}

/// Family part of a PostScript name: everything before the first hyphen
pub fn postscript_family_name(postscript_name: &str) -> &str {
    match postscript_name.split_once('-') {
        Some((family, _)) => family,
        None => postscript_name,
    }
}

/// Shows `secondary` in brackets only when it adds information
pub fn bracketed_suffix(primary: &str, secondary: &str) -> Option<String> {
    (!secondary.is_empty() && secondary != primary).then(|| format!(" [{secondary}]"))
}

/// One step of the display-name fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayNameFallback {
    /// The font's own full name
    FullName,
    /// `<family> <win32 subfamily>`
    Subfamily,
    /// `<family> (Unknown Style)`
    Placeholder,
}

impl DisplayNameFallback {
    /// Strategies in the order they are tried
    pub const CHAIN: [Self; 3] = [Self::FullName, Self::Subfamily, Self::Placeholder];

    fn resolve<F: SourceFont>(self, font: &F, family_name: &str, locale: &str) -> Option<String> {
        let name = match self {
            Self::FullName => localized(font, InfoStringKind::FullName, locale)?,
            // Present but blank still counts: the result is `"<family> "`
            Self::Subfamily => {
                match font.informational_strings(InfoStringKind::Win32SubfamilyNames) {
                    Ok(Some(strings)) => {
                        format!("{family_name} {}", primary_name(&strings, locale))
                    },
                    Ok(None) => return None,
                    Err(e) => {
                        log::debug!("Skipping subfamily: {e}");
                        return None;
                    },
                }
            },
            Self::Placeholder => format!("{family_name} {UNKNOWN_STYLE}"),
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Runs the fallback chain and returns the first non-empty display name
pub fn display_name<F: SourceFont>(font: &F, family_name: &str, locale: &str) -> String {
    DisplayNameFallback::CHAIN
        .iter()
        .find_map(|step| step.resolve(font, family_name, locale))
        .unwrap_or_default()
}

/// Reads one informational string and resolves it, `None` if missing or empty
pub fn localized<F: SourceFont>(font: &F, kind: InfoStringKind, locale: &str) -> Option<String> {
    match font.informational_strings(kind) {
        Ok(Some(strings)) => {
            let name = primary_name(&strings, locale);
            (!name.is_empty()).then_some(name)
        },
        Ok(None) => None,
        Err(e) => {
            log::debug!("Skipping {kind:?}: {e}");
            None
        },
    }
}
