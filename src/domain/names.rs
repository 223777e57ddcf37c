// Show names as listed by TheTVDB mapped to the names Addic7ed searches for.
// Keys must be lower case.
const NAME_CONVERSIONS: &[(&str, &str)] = &[
    ("castle (2009)", "castle"),
    ("law & order: special victims unit", "Law and order SVU"),
    ("bodyguard (2018)", "bodyguard"),
];

pub fn normalize_showname(show_name: &str) -> String {
    let key = show_name.trim().to_lowercase();
    let name = NAME_CONVERSIONS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.to_string())
        .unwrap_or(key);
    // Addic7ed search chokes on colons
    name.replace(':', "")
}
