use calamine::Data;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    #[cfg(test)]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    // Anything that cannot be read as an integer counts as the root level.
    pub fn as_level(&self) -> i64 {
        match self {
            Self::Empty => 0,
            Self::Number(value) if value.is_finite() => value.trunc() as i64,
            Self::Number(_) => 0,
            Self::Text(raw) => fold_digits(raw.trim()).parse::<i64>().unwrap_or(0),
        }
    }

    pub fn as_title(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

// Full-width digits and signs read as their ASCII forms.
fn fold_digits(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (ch as u32 - 0xFF10) as u8),
            '\u{FF0B}' => '+',
            '\u{FF0D}' => '-',
            other => other,
        })
        .collect()
}

impl From<&Data> for CellValue {
    fn from(value: &Data) -> Self {
        match value {
            Data::String(text) => Self::Text(text.clone()),
            Data::Int(number) => Self::Number(*number as f64),
            Data::Float(number) => Self::Number(*number),
            Data::Bool(flag) => Self::Number(if *flag { 1.0 } else { 0.0 }),
            Data::DateTime(_)
            | Data::DateTimeIso(_)
            | Data::DurationIso(_)
            | Data::Error(_)
            | Data::Empty => Self::Empty,
        }
    }
}

impl From<Option<&Data>> for CellValue {
    fn from(value: Option<&Data>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}
