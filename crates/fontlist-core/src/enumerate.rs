//! Walks a [`FontSource`] and builds one [`FontFamily`] per named family

use crate::{
    names::{display_name, localized, postscript_family_name, primary_name},
    traits::{FontSource, InfoStringKind, SourceFamily, SourceFont},
    types::{FontFamily, FontInfo},
    DEFAULT_LOCALE,
};

/// Knobs for a single enumeration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Locale tried first when resolving display names
    pub preferred_locale: String,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            preferred_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Collects every family of `source` that has a primary name
///
/// Families or fonts the source fails to produce are skipped, and so are
/// families whose primary name resolves to the empty string.
pub fn enumerate_families<S: FontSource>(
    source: &S,
    options: &EnumerateOptions,
) -> Vec<FontFamily> {
    let count = source.family_count();
    log::info!("Enumerating {count} font families");

    let families: Vec<FontFamily> = (0..count)
        .filter_map(|index| match source.family(index) {
            Ok(family) => read_family(&family, options),
            Err(e) => {
                log::debug!("Skipping family {index}: {e}");
                None
            },
        })
        .collect();

    log::info!("Kept {} of {count} families", families.len());
    families
}

fn read_family<F: SourceFamily>(family: &F, options: &EnumerateOptions) -> Option<FontFamily> {
    let locale = options.preferred_locale.as_str();
    let mut result = FontFamily::default();

    match family.family_names() {
        Ok(names) => {
            result.primary_name = primary_name(&names, locale);
            result.all_names = names.into_iter().map(|s| s.value).collect();
        },
        Err(e) => log::debug!("Family names unavailable: {e}"),
    }

    match family.representative_font() {
        Ok(font) => {
            if let Some(ps_name) = localized(&font, InfoStringKind::PostScriptName, locale) {
                result.postscript_family_name = postscript_family_name(&ps_name).to_string();
            }
        },
        Err(e) => log::debug!("No representative font for {:?}: {e}", result.primary_name),
    }

    for index in 0..family.font_count() {
        match family.font(index) {
            Ok(font) => result.fonts.push(read_font(&font, &result.primary_name, locale)),
            Err(e) => log::debug!("Skipping font {index} of {:?}: {e}", result.primary_name),
        }
    }

    if result.primary_name.is_empty() {
        log::debug!("Dropping unnamed family with {} fonts", result.fonts.len());
        return None;
    }
    Some(result)
}

fn read_font<F: SourceFont>(font: &F, family_name: &str, locale: &str) -> FontInfo {
    FontInfo {
        name: display_name(font, family_name, locale),
        postscript_name: localized(font, InfoStringKind::PostScriptName, locale)
            .unwrap_or_default(),
        attributes: font.attributes(),
    }
}
