//! Removal, affix completion and whitespace cleanup.
//!
//! Every function returns the input borrowed when there is nothing to
//! change, and passes an absent input through.

use std::borrow::Cow;

use crate::{
  chars::{
    char_is_digit,
    char_is_whitespace,
  },
  predicates::{
    ends_with,
    ends_with_ignore_case,
    starts_with,
    starts_with_ignore_case,
  },
  text::{
    self,
    len_utf16,
    region_matches,
    units,
  },
};

/// Removes every occurrence of `remove` from `s`.
///
/// ```
/// use the_strings::remove::remove;
///
/// assert_eq!(remove(Some("queued"), Some("ue")).as_deref(), Some("qd"));
/// assert_eq!(remove(Some("queued"), Some("zz")).as_deref(), Some("queued"));
/// ```
pub fn remove<'a>(s: Option<&'a str>, remove: Option<&str>) -> Option<Cow<'a, str>> {
  let s = s?;
  match remove {
    Some(remove) if !remove.is_empty() && s.contains(remove) => Some(Cow::Owned(s.replace(remove, ""))),
    _ => Some(Cow::Borrowed(s)),
  }
}

pub fn remove_char(s: Option<&str>, remove: char) -> Option<Cow<'_, str>> {
  let s = s?;
  if !s.contains(remove) {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(s.chars().filter(|&ch| ch != remove).collect()))
}

/// Removes every non-overlapping occurrence of `remove` from `s`, comparing
/// code units without regard to case.
pub fn remove_ignore_case<'a>(s: Option<&'a str>, remove: Option<&str>) -> Option<Cow<'a, str>> {
  let s = s?;
  let Some(remove) = remove.filter(|remove| !remove.is_empty()) else {
    return Some(Cow::Borrowed(s));
  };
  let hay = units(s);
  let needle = units(remove);
  let mut kept = Vec::with_capacity(hay.len());
  let mut removed = false;
  let mut i = 0;
  while i < hay.len() {
    if region_matches(&hay, i, &needle, true) {
      i += needle.len();
      removed = true;
    } else {
      kept.push(hay[i]);
      i += 1;
    }
  }
  if !removed {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(String::from_utf16_lossy(&kept)))
}

fn strip_affix<'a>(s: Option<&'a str>, affix: Option<&str>, at_end: bool, ignore_case: bool) -> Option<Cow<'a, str>> {
  let s = s?;
  let Some(affix) = affix.filter(|affix| !affix.is_empty()) else {
    return Some(Cow::Borrowed(s));
  };
  let matched = match (at_end, ignore_case) {
    (false, false) => starts_with(Some(s), Some(affix)),
    (false, true) => starts_with_ignore_case(Some(s), Some(affix)),
    (true, false) => ends_with(Some(s), Some(affix)),
    (true, true) => ends_with_ignore_case(Some(s), Some(affix)),
  };
  if !matched {
    return Some(Cow::Borrowed(s));
  }
  let (len, affix_len) = (len_utf16(s), len_utf16(affix));
  Some(if at_end {
    text::slice(s, 0, len - affix_len)
  } else {
    text::slice(s, affix_len, len)
  })
}

/// Removes `prefix` from the start of `s` if it is there.
///
/// ```
/// use the_strings::remove::remove_start;
///
/// assert_eq!(remove_start(Some("www.domain.com"), Some("www.")).as_deref(), Some("domain.com"));
/// assert_eq!(remove_start(Some("domain.com"), Some("www.")).as_deref(), Some("domain.com"));
/// ```
pub fn remove_start<'a>(s: Option<&'a str>, prefix: Option<&str>) -> Option<Cow<'a, str>> {
  strip_affix(s, prefix, false, false)
}

pub fn remove_start_ignore_case<'a>(s: Option<&'a str>, prefix: Option<&str>) -> Option<Cow<'a, str>> {
  strip_affix(s, prefix, false, true)
}

pub fn remove_end<'a>(s: Option<&'a str>, suffix: Option<&str>) -> Option<Cow<'a, str>> {
  strip_affix(s, suffix, true, false)
}

pub fn remove_end_ignore_case<'a>(s: Option<&'a str>, suffix: Option<&str>) -> Option<Cow<'a, str>> {
  strip_affix(s, suffix, true, true)
}

fn complete_affix<'a>(
  s: Option<&'a str>,
  affix: Option<&str>,
  alternatives: &[Option<&str>],
  at_end: bool,
  ignore_case: bool,
) -> Option<Cow<'a, str>> {
  let s = s?;
  let Some(affix) = affix.filter(|affix| !affix.is_empty()) else {
    return Some(Cow::Borrowed(s));
  };
  let has = |candidate: Option<&str>| {
    match (at_end, ignore_case) {
      (false, false) => starts_with(Some(s), candidate),
      (false, true) => starts_with_ignore_case(Some(s), candidate),
      (true, false) => ends_with(Some(s), candidate),
      (true, true) => ends_with_ignore_case(Some(s), candidate),
    }
  };
  if has(Some(affix)) || alternatives.iter().any(|&alt| has(alt)) {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(if at_end {
    format!("{s}{affix}")
  } else {
    format!("{affix}{s}")
  }))
}

/// Appends `suffix` unless `s` already ends with it or with one of
/// `suffixes`.
///
/// ```
/// use the_strings::remove::append_if_missing;
///
/// assert_eq!(append_if_missing(Some("abc"), Some("xyz"), &[]).as_deref(), Some("abcxyz"));
/// assert_eq!(append_if_missing(Some("abcmno"), Some("xyz"), &[Some("mno")]).as_deref(), Some("abcmno"));
/// ```
pub fn append_if_missing<'a>(s: Option<&'a str>, suffix: Option<&str>, suffixes: &[Option<&str>]) -> Option<Cow<'a, str>> {
  complete_affix(s, suffix, suffixes, true, false)
}

pub fn append_if_missing_ignore_case<'a>(
  s: Option<&'a str>,
  suffix: Option<&str>,
  suffixes: &[Option<&str>],
) -> Option<Cow<'a, str>> {
  complete_affix(s, suffix, suffixes, true, true)
}

/// Prepends `prefix` unless `s` already starts with it or with one of
/// `prefixes`.
pub fn prepend_if_missing<'a>(s: Option<&'a str>, prefix: Option<&str>, prefixes: &[Option<&str>]) -> Option<Cow<'a, str>> {
  complete_affix(s, prefix, prefixes, false, false)
}

pub fn prepend_if_missing_ignore_case<'a>(
  s: Option<&'a str>,
  prefix: Option<&str>,
  prefixes: &[Option<&str>],
) -> Option<Cow<'a, str>> {
  complete_affix(s, prefix, prefixes, false, true)
}

/// Removes every whitespace character from `s`.
pub fn delete_whitespace(s: Option<&str>) -> Option<Cow<'_, str>> {
  let s = s?;
  if !s.chars().any(char_is_whitespace) {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(s.chars().filter(|&ch| !char_is_whitespace(ch)).collect()))
}

/// Trims `s` and collapses every run of inner whitespace into one space.
///
/// No-break spaces are turned into plain spaces, and control characters at
/// either end are trimmed along with the whitespace.
///
/// ```
/// use the_strings::remove::normalize_space;
///
/// assert_eq!(normalize_space(Some("  a \t\n b  ")).as_deref(), Some("a b"));
/// ```
pub fn normalize_space(s: Option<&str>) -> Option<Cow<'_, str>> {
  let s = s?;
  if s.is_empty() {
    return Some(Cow::Borrowed(s));
  }
  let mut out = String::with_capacity(s.len());
  let mut in_run = false;
  for ch in s.chars() {
    if char_is_whitespace(ch) {
      in_run = true;
      continue;
    }
    if in_run && !out.is_empty() {
      out.push(' ');
    }
    in_run = false;
    out.push(if ch == '\u{00A0}' { ' ' } else { ch });
  }
  let trimmed = out.trim_matches(|ch: char| ch <= ' ');
  if trimmed == s {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(trimmed.to_owned()))
}

/// Keeps only the decimal digits of `s`.
///
/// ```
/// use the_strings::remove::digits;
///
/// assert_eq!(digits(Some("(541) 754-3010")).as_deref(), Some("5417543010"));
/// ```
pub fn digits(s: Option<&str>) -> Option<Cow<'_, str>> {
  let s = s?;
  if s.chars().all(char_is_digit) {
    return Some(Cow::Borrowed(s));
  }
  Some(Cow::Owned(s.chars().filter(|&ch| char_is_digit(ch)).collect()))
}

/// Removes one trailing line break: `"\r\n"`, `"\n"` or `"\r"`.
///
/// ```
/// use the_strings::remove::chomp;
///
/// assert_eq!(chomp(Some("abc\r\n\r\n")), Some("abc\r\n"));
/// assert_eq!(chomp(Some("abc\n\r")), Some("abc\n"));
/// ```
pub fn chomp(s: Option<&str>) -> Option<&str> {
  let s = s?;
  Some(
    s.strip_suffix("\r\n")
      .or_else(|| s.strip_suffix(|ch: char| matches!(ch, '\n' | '\r')))
      .unwrap_or(s),
  )
}

/// Removes the last character. A trailing `"\r\n"` goes as one.
pub fn chop(s: Option<&str>) -> Option<&str> {
  let s = s?;
  if let Some(rest) = s.strip_suffix("\r\n") {
    return Some(rest);
  }
  let mut chars = s.chars();
  chars.next_back();
  Some(chars.as_str())
}
