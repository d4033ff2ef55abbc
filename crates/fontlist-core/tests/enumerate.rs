// this_file: crates/fontlist-core/tests/enumerate.rs

use std::collections::HashMap;

use fontlist_core::{
    enumerate_families,
    report::{EncodedWriter, Tee, TextEncoding},
    types::{FontAttributes, LocalizedString},
    EnumerateOptions, FontListError, FontSource, InfoStringKind, Report, Result, SourceFamily,
    SourceFont,
};

#[derive(Clone, Default)]
struct MemFont {
    attributes: FontAttributes,
    strings: HashMap<InfoStringKind, Vec<LocalizedString>>,
}

impl MemFont {
    fn new(weight: i32, stretch: i32, style: i32) -> Self {
        Self {
            attributes: FontAttributes {
                weight,
                stretch,
                style,
            },
            ..Default::default()
        }
    }

    fn string(mut self, kind: InfoStringKind, value: &str) -> Self {
        self.strings
            .insert(kind, vec![LocalizedString::new("en-us", value)]);
        self
    }
}

impl SourceFont for MemFont {
    fn attributes(&self) -> FontAttributes {
        self.attributes
    }

    fn informational_strings(&self, kind: InfoStringKind) -> Result<Option<Vec<LocalizedString>>> {
        Ok(self.strings.get(&kind).cloned())
    }
}

#[derive(Clone, Default)]
struct MemFamily {
    names: Vec<LocalizedString>,
    fonts: Vec<Option<MemFont>>,
}

impl MemFamily {
    fn named(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(locale, value)| LocalizedString::new(*locale, *value))
                .collect(),
            fonts: Vec::new(),
        }
    }

    fn font(mut self, font: MemFont) -> Self {
        self.fonts.push(Some(font));
        self
    }

    fn broken_font(mut self) -> Self {
        self.fonts.push(None);
        self
    }
}

impl SourceFamily for MemFamily {
    type Font = MemFont;

    fn family_names(&self) -> Result<Vec<LocalizedString>> {
        Ok(self.names.clone())
    }

    fn representative_font(&self) -> Result<MemFont> {
        self.fonts
            .iter()
            .flatten()
            .min_by_key(|font| (font.attributes.weight - 400).abs())
            .cloned()
            .ok_or_else(|| FontListError::Source("no matching font".into()))
    }

    fn font_count(&self) -> u32 {
        self.fonts.len() as u32
    }

    fn font(&self, index: u32) -> Result<MemFont> {
        self.fonts
            .get(index as usize)
            .cloned()
            .flatten()
            .ok_or_else(|| FontListError::Source(format!("font {index} unavailable")))
    }
}

#[derive(Default)]
struct MemSource {
    families: Vec<Option<MemFamily>>,
}

impl FontSource for MemSource {
    type Family = MemFamily;

    fn family_count(&self) -> u32 {
        self.families.len() as u32
    }

    fn family(&self, index: u32) -> Result<MemFamily> {
        self.families
            .get(index as usize)
            .cloned()
            .flatten()
            .ok_or_else(|| FontListError::Source(format!("family {index} unavailable")))
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_style_family() -> MemFamily {
    MemFamily::named(&[("en-us", "Test Sans")])
        .font(
            MemFont::new(400, 5, 0)
                .string(InfoStringKind::FullName, "Test Sans Regular")
                .string(InfoStringKind::PostScriptName, "TestSans-Regular"),
        )
        .font(
            MemFont::new(700, 5, 2)
                .string(InfoStringKind::FullName, "Test Sans Bold Italic")
                .string(InfoStringKind::PostScriptName, "TestSans-BoldItalic"),
        )
}

#[test]
fn test_zero_fonts_when_reporting_then_only_header() {
    init_logging();
    let families = enumerate_families(&MemSource::default(), &EnumerateOptions::default());
    let report = Report::from_families(&families);
    assert_eq!(report.lines(), ["Found 0 font families", ""]);
}

#[test]
fn test_single_family_with_two_styles_when_reporting_then_two_font_lines() {
    init_logging();
    let source = MemSource {
        families: vec![Some(two_style_family())],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    let report = Report::from_families(&families);

    assert_eq!(
        report.lines(),
        [
            "Found 1 font families",
            "",
            "FAMILY: Test Sans [TestSans]",
            "  Test Sans Regular [TestSans-Regular] (Weight: 400, Stretch: 5, Style: 0)",
            "  Test Sans Bold Italic [TestSans-BoldItalic] (Weight: 700, Stretch: 5, Style: 2)",
            "",
        ]
    );
}

#[test]
fn test_unnamed_and_broken_families_when_enumerating_then_dropped() {
    init_logging();
    let source = MemSource {
        families: vec![
            None,
            Some(MemFamily::named(&[]).font(MemFont::new(400, 5, 0))),
            Some(MemFamily::named(&[("en-us", "")]).font(MemFont::new(400, 5, 0))),
            Some(two_style_family()),
        ],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].primary_name, "Test Sans");
    assert_eq!(families[0].fonts.len(), 2);
}

#[test]
fn test_unavailable_font_when_enumerating_then_skipped() {
    let family = two_style_family().broken_font();
    let source = MemSource {
        families: vec![Some(family)],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    assert_eq!(families[0].fonts.len(), 2);
}

#[test]
fn test_localized_names_when_enumerating_then_english_primary_and_sorted_aliases() {
    let family = MemFamily::named(&[
        ("ja-jp", "メイリオ"),
        ("en-us", "Meiryo"),
        ("ko-kr", "메이리오"),
        ("ja-jp", "メイリオ"),
    ])
    .font(MemFont::new(400, 5, 0).string(InfoStringKind::FullName, "Meiryo"));
    let source = MemSource {
        families: vec![Some(family)],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    let report = Report::from_families(&families);

    assert_eq!(families[0].all_names.len(), 3);
    assert_eq!(report.lines()[2], "FAMILY: Meiryo");
    assert_eq!(report.lines()[3], "  Aliases: メイリオ, 메이리오");
}

#[test]
fn test_preferred_locale_when_configured_then_used_for_primary() {
    let family = MemFamily::named(&[("en-us", "Meiryo"), ("ja-jp", "メイリオ")])
        .font(MemFont::new(400, 5, 0));
    let source = MemSource {
        families: vec![Some(family)],
    };
    let options = EnumerateOptions {
        preferred_locale: "ja-JP".into(),
    };
    let families = enumerate_families(&source, &options);
    assert_eq!(families[0].primary_name, "メイリオ");
    assert_eq!(families[0].fonts[0].name, "メイリオ (Unknown Style)");
}

#[test]
fn test_missing_full_name_when_enumerating_then_fallback_chain_applies() {
    let family = MemFamily::named(&[("en-us", "Fallback")])
        .font(MemFont::new(400, 5, 0).string(InfoStringKind::Win32SubfamilyNames, "Regular"))
        .font(MemFont::new(700, 5, 0));
    let source = MemSource {
        families: vec![Some(family)],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());

    let names: Vec<_> = families[0].fonts.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Fallback Regular", "Fallback (Unknown Style)"]);
    assert_eq!(families[0].postscript_family_name, "");
}

#[test]
fn test_blank_subfamily_when_enumerating_then_kept_after_family_name() {
    let family = MemFamily::named(&[("en-us", "Fam")])
        .font(MemFont::new(400, 5, 0).string(InfoStringKind::Win32SubfamilyNames, ""));
    let source = MemSource {
        families: vec![Some(family)],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    assert_eq!(families[0].fonts[0].name, "Fam ");

    let report = Report::from_families(&families);
    assert_eq!(report.lines()[3], "  Fam  (Weight: 400, Stretch: 5, Style: 0)");
}

#[test]
fn test_postscript_without_hyphen_when_enumerating_then_whole_name() {
    let family = MemFamily::named(&[("en-us", "Consolas")]).font(
        MemFont::new(400, 5, 0)
            .string(InfoStringKind::FullName, "Consolas")
            .string(InfoStringKind::PostScriptName, "Consolas"),
    );
    let source = MemSource {
        families: vec![Some(family)],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    assert_eq!(families[0].postscript_family_name, "Consolas");

    let report = Report::from_families(&families);
    assert_eq!(report.lines()[2], "FAMILY: Consolas");
    assert_eq!(
        report.lines()[3],
        "  Consolas (Weight: 400, Stretch: 5, Style: 0)"
    );
}

#[test]
fn test_console_and_log_when_written_then_same_text() {
    let source = MemSource {
        families: vec![
            Some(two_style_family()),
            Some(
                MemFamily::named(&[("en-us", "Yu Gothic"), ("ja-jp", "游ゴシック")]).font(
                    MemFont::new(300, 5, 0).string(InfoStringKind::FullName, "Yu Gothic Light"),
                ),
            ),
        ],
    };
    let families = enumerate_families(&source, &EnumerateOptions::default());
    let report = Report::from_families(&families);

    let console = EncodedWriter::new(Vec::new(), TextEncoding::Utf16Le).expect("console sink");
    let log = EncodedWriter::new(Vec::new(), TextEncoding::Utf8Bom).expect("log sink");
    let mut tee = Tee::new(console, log);
    report.write_to(&mut tee).expect("write report");

    let wide = tee.first.into_inner();
    let units: Vec<u16> = wide
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let console_text = String::from_utf16(&units).expect("valid utf-16");

    let log_bytes = tee.second.into_inner();
    let log_text = std::str::from_utf8(&log_bytes[3..]).expect("valid utf-8");

    assert!(log_bytes.starts_with(b"\xEF\xBB\xBF"));
    assert_eq!(console_text, log_text);
    assert!(log_text.contains("  Aliases: 游ゴシック\n"));
}
