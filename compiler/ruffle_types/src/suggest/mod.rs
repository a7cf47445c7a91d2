//! "Did you mean?" suggestions for unknown type names.

/// Largest edit distance still offered as a suggestion.
const MAX_DISTANCE: usize = 2;

/// Levenshtein distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b.is_empty() {
        return a.chars().count();
    }

    // Two rows instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

fn threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        _ => MAX_DISTANCE,
    }
}

/// The closest candidate within the distance threshold.
///
/// Ties go to the alphabetically first candidate, so the result does not
/// depend on iteration order.
pub fn suggest_similar<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let threshold = threshold(name.chars().count());
    if threshold == 0 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        if candidate == name || name.len().abs_diff(candidate.len()) > threshold {
            continue;
        }
        let distance = edit_distance(name, candidate);
        if distance > threshold {
            continue;
        }
        best = match best {
            Some((current, best_distance))
                if best_distance < distance || (best_distance == distance && current <= candidate) =>
            {
                Some((current, best_distance))
            }
            _ => Some((candidate, distance)),
        };
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests;
