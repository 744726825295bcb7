use super::cell::CellValue;

pub fn validate_hierarchy<'a>(levels: impl IntoIterator<Item = &'a CellValue>) -> Vec<bool> {
    let levels = levels.into_iter();
    let mut errors = Vec::with_capacity(levels.size_hint().0);
    let mut previous: Option<i64> = None;

    for cell in levels {
        let level = cell.as_level();
        let flagged = match previous {
            // The sequence has to open at the root.
            None => level > 0,
            // Deepening by more than one level skips a rung; shallowing is always legal.
            Some(prev) => level.saturating_sub(prev) >= 2,
        };
        errors.push(flagged);
        previous = Some(level);
    }

    errors
}
