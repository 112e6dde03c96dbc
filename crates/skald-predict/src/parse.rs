use crate::signature::Field;

/// Split a model response into labelled output fields.
///
/// A line beginning with `name:` (case-insensitive, optionally wrapped in
/// `**` markdown emphasis) starts that field's section; following lines
/// belong to it until the next label. If no label matches at all, the whole
/// response is assigned to the last output field so a model that ignores
/// the layout still yields a usable result.
pub fn parse_fields(outputs: &[Field], text: &str) -> Vec<(String, String)> {
    let mut sections: Vec<(String, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        if let Some((name, rest)) = match_label(outputs, line) {
            sections.push((name, vec![rest.to_string()]));
            current = Some(sections.len() - 1);
            continue;
        }
        if let Some(idx) = current {
            sections[idx].1.push(line.to_string());
        }
    }

    if sections.is_empty() {
        return match outputs.last() {
            Some(field) => vec![(field.name.clone(), text.trim().to_string())],
            None => Vec::new(),
        };
    }

    sections
        .into_iter()
        .map(|(name, lines)| (name, lines.join("\n").trim().to_string()))
        .collect()
}

/// Match a line against the known output-field labels. Returns the field
/// name and the text remaining after the label.
fn match_label<'a>(outputs: &[Field], line: &'a str) -> Option<(String, &'a str)> {
    let trimmed = line.trim_start();
    for field in outputs {
        let candidates = [
            format!("{}:", field.name),
            format!("**{}:**", field.name),
            format!("**{}**:", field.name),
        ];
        for candidate in &candidates {
            let matches = trimmed
                .get(..candidate.len())
                .map(|head| head.eq_ignore_ascii_case(candidate))
                .unwrap_or(false);
            if matches {
                return Some((field.name.clone(), trimmed[candidate.len()..].trim_start()));
            }
        }
    }
    None
}
