/// Format an amount as whole currency units with thousands separators: KES 1,234
pub fn money(val: f64, currency: &str) -> String {
    let rounded = val.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("{currency} -{with_commas}")
    } else {
        format!("{currency} {with_commas}")
    }
}

/// Shorten a label to `width` characters, ending in an ellipsis when cut.
pub fn abbreviate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let kept: String = label.chars().take(width.saturating_sub(2)).collect();
    format!("{kept}…")
}

pub fn percent(val: f64) -> String {
    format!("{val:.1}%")
}
