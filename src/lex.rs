//! Lexical utilities: whitespace trimming, delimiter chopping, and integer
//! parsing over non-owning string slices. Every function here is pure and
//! total — none of them allocate, and none of them can fail.

/// Returns the suffix of `s` starting at the first non-whitespace character.
pub fn trim_left(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Returns the prefix of `s` ending at the last non-whitespace character.
pub fn trim_right(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_ascii_whitespace())
}

/// Returns the longest prefix of `*s` not containing `delim`, and advances
/// `*s` past it.
///
/// If the scan stopped at `delim`, that one delimiter byte is consumed along
/// with the prefix. If the scan ran off the end of `*s`, nothing is left to
/// consume. This function only knows about `delim` — stripping a `#`
/// comment out of the returned line is a separate concern, handled by the
/// assembler after it has a whole line in hand.
pub fn chop_until<'a>(s: &mut &'a str, delim: u8) -> &'a str {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i] != delim {
        i += 1;
    }

    let prefix = &s[..i];
    *s = if i == bytes.len() { &s[i..] } else { &s[i + 1..] };
    prefix
}

/// Returns the longest prefix of `*s` containing no whitespace, and advances
/// `*s` past it and at most one trailing whitespace byte.
pub fn chop_blank<'a>(s: &mut &'a str) -> &'a str {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let prefix = &s[..i];
    *s = if i == bytes.len() { &s[i..] } else { &s[i + 1..] };
    prefix
}

/// Parses the maximal leading run of ASCII digits in `s` as a decimal value,
/// ignoring any non-digit suffix. Returns `-1` if `s` does not start with an
/// ASCII digit — this sentinel is this function's own documented contract;
/// callers that need to tell "absent literal" apart from "the literal -1"
/// use a richer type instead of relying on this return value directly (see
/// `assembler`'s `Operand`).
pub fn parse_int(s: &str) -> i64 {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() {
        return -1;
    }

    let mut value: i64 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + i64::from(b - b'0');
    }
    value
}

/// Returns the prefix of `s` before its first `#`, or the whole of `s` if it
/// has none. Used to strip a trailing `# ...` comment from an already
/// newline-chopped line.
pub fn strip_comment(s: &str) -> &str {
    match s.as_bytes().iter().position(|&b| b == b'#') {
        Some(i) => &s[..i],
        None => s,
    }
}

/// True iff `a` and `b` have equal lengths and byte-identical contents.
///
/// Plain `==` on `&str` already does this; this function names the contract
/// explicitly for the call sites that want to spell out the comparison.
pub fn equal(a: &str, b: &str) -> bool {
    a == b
}
