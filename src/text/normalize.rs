// Diacritic-insensitive text normalization
//
// Matching across accented and unaccented spellings ("čokolada" vs
// "cokolada") works on folded, lower-cased text. The fold covers the
// Latin letters that carry combining marks in Croatian orthography and
// the common Western European accents; "đ" carries a stroke rather than
// a combining mark and has no decomposition, so it passes through.

/// Lower-case and strip diacritics from a string.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().chars().map(fold).collect()
}

/// Split normalized text into alphanumeric tokens.
pub fn tokens(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn fold(c: char) -> char {
    match c {
        'č' | 'ć' | 'ç' => 'c',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' | 'ń' => 'n',
        other => other,
    }
}
