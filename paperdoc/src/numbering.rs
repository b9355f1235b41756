//! Section, subsection and table numbering helpers

/// Uppercase Roman numeral for a 1-based index
///
/// Used for section headings ("I.", "II.") and table captions ("TABLE I").
/// Returns an empty string for 0.
pub fn roman(mut n: u32) -> String {
    const PAIRS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, glyph) in PAIRS {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    out
}

/// Subsection letter for a 1-based index ("A", "B", ...)
///
/// Wraps around after "Z"; papers do not get that far in practice.
pub fn letter(n: u32) -> String {
    let index = n.saturating_sub(1) % 26;
    char::from(b'A' + index as u8).to_string()
}
