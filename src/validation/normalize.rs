use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{info, warn};

use super::cell::CellValue;

const HALF_WIDTH_KANA: &str = "｡｢｣､･ｦｧｨｩｪｫｬｭｮｯｰｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝﾞﾟ";
const FULL_WIDTH_KANA: &str = "。「」、・ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン゛゜";

const DELETED: &[char] = &[' ', '\u{3000}', '\t', '\r', '\n', '\u{00A0}'];
const DASHES: &[char] = &[
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
];
const PUNCTUATION: &[(char, char)] = &[
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{201E}', '"'),
    ('\u{301C}', '~'),
];

#[derive(Debug, Clone)]
pub struct Normalizer {
    replacements: HashMap<char, String>,
}

#[derive(Debug, Deserialize)]
struct NormalizationTableFile {
    #[serde(default = "extends_default_fallback")]
    extends_default: bool,
    #[serde(default)]
    replacements: BTreeMap<String, String>,
}

fn extends_default_fallback() -> bool {
    true
}

impl Default for Normalizer {
    fn default() -> Self {
        let mut replacements = HashMap::new();

        for code in 0xFF01_u32..=0xFF5E {
            if let (Some(wide), Some(narrow)) = (char::from_u32(code), char::from_u32(code - 0xFEE0))
            {
                replacements.insert(wide, narrow.to_string());
            }
        }
        for &ch in DELETED {
            replacements.insert(ch, String::new());
        }
        for &ch in DASHES {
            replacements.insert(ch, "-".to_string());
        }
        for &(from, to) in PUNCTUATION {
            replacements.insert(from, to.to_string());
        }
        for (narrow, wide) in HALF_WIDTH_KANA.chars().zip(FULL_WIDTH_KANA.chars()) {
            replacements.insert(narrow, wide.to_string());
        }

        Self { replacements }
    }
}

impl Normalizer {
    pub fn empty() -> Self {
        Self {
            replacements: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_replacement(mut self, from: char, to: impl Into<String>) -> Self {
        self.replacements.insert(from, to.into());
        self
    }

    pub fn entry_count(&self) -> usize {
        self.replacements.len()
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.replacements.get(&ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out
    }

    pub fn normalize_cell(&self, cell: &CellValue) -> String {
        cell.as_title()
            .map(|text| self.normalize(text))
            .unwrap_or_default()
    }

    // Keys whose replacement reintroduces another key; such tables are not idempotent.
    pub fn unstable_keys(&self) -> Vec<char> {
        let mut keys = self
            .replacements
            .iter()
            .filter(|(_, replacement)| {
                replacement
                    .chars()
                    .any(|ch| self.replacements.contains_key(&ch))
            })
            .map(|(key, _)| *key)
            .collect::<Vec<char>>();
        keys.sort_unstable();
        keys
    }
}

pub fn load_normalizer(path: Option<&Path>) -> Result<Normalizer> {
    let Some(path) = path else {
        return Ok(Normalizer::default());
    };

    let raw = fs::read(path)
        .with_context(|| format!("failed to read normalization table: {}", path.display()))?;
    let file: NormalizationTableFile = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse normalization table: {}", path.display()))?;

    let mut normalizer = if file.extends_default {
        Normalizer::default()
    } else {
        Normalizer::empty()
    };

    for (key, replacement) in file.replacements {
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            bail!(
                "normalization table key {:?} must be exactly one character: {}",
                key,
                path.display()
            );
        };
        normalizer.replacements.insert(ch, replacement);
    }

    let unstable = normalizer.unstable_keys();
    if !unstable.is_empty() {
        warn!(
            path = %path.display(),
            keys = %unstable.iter().collect::<String>(),
            "normalization table replacements contain table keys; normalization is not idempotent"
        );
    }

    info!(
        path = %path.display(),
        entries = normalizer.entry_count(),
        extends_default = file.extends_default,
        "loaded normalization table"
    );

    Ok(normalizer)
}
