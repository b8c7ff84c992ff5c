// src/translator.rs
// Text to Morse code translation

/// Morse patterns keyed by uppercase character. Dots are rendered as the
/// middle-dot character `·` (U+00B7) and dashes as `-`.
const MORSE_TABLE: &[(char, &str)] = &[
    ('A', "·-"),
    ('B', "-···"),
    ('C', "-·-·"),
    ('D', "-··"),
    ('E', "·"),
    ('F', "··-·"),
    ('G', "--·"),
    ('H', "····"),
    ('I', "··"),
    ('J', "·---"),
    ('K', "-·-"),
    ('L', "·-··"),
    ('M', "--"),
    ('N', "-·"),
    ('O', "---"),
    ('P', "·--·"),
    ('Q', "--·-"),
    ('R', "·-·"),
    ('S', "···"),
    ('T', "-"),
    ('U', "··-"),
    ('V', "···-"),
    ('W', "·--"),
    ('X', "-··-"),
    ('Y', "-·--"),
    ('Z', "--··"),
    ('0', "-----"),
    ('1', "·----"),
    ('2', "··---"),
    ('3', "···--"),
    ('4', "····-"),
    ('5', "·····"),
    ('6', "-····"),
    ('7', "--···"),
    ('8', "---··"),
    ('9', "----·"),
    ('.', "·-·-·-"),
    (',', "--··--"),
    (':', "---···"),
    (';', "-·-·-·"),
    ('?', "··--··"),
    ('\'', "·----·"),
    ('-', "-····-"),
    ('_', "··--·-"),
    ('/', "-··-·"),
    ('(', "-·--·"),
    (')', "-·--·-"),
    ('"', "·-··-·"),
    ('=', "-···-"),
    ('+', "·-·-·"),
    ('@', "·--·-·"),
    ('!', "-·-·--"),
];

/// Placeholder emitted for characters with no Morse pattern, so every input
/// character keeps a visible, positional representation in the output.
pub const UNKNOWN_MARKER: &str = "# ";

fn lookup(ch: char) -> Option<&'static str> {
    let upper = ch.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, pattern)| *pattern)
}

/// Translates text to its Morse code string representation.
///
/// Each supported character becomes its dot/dash pattern followed by a single
/// space. Whitespace passes through verbatim and acts as a word separator.
/// Unsupported characters become [`UNKNOWN_MARKER`]. This is a total function:
/// it never fails and never drops input characters.
pub fn text_to_morse(text: &str) -> String {
    let mut morse = String::new();
    for ch in text.chars() {
        if let Some(pattern) = lookup(ch) {
            morse.push_str(pattern);
            morse.push(' ');
        } else if ch.is_whitespace() {
            morse.push(ch);
        } else {
            morse.push_str(UNKNOWN_MARKER);
        }
    }
    morse
}
