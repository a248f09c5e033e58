//! Joining items into a single text.

use std::fmt::{
  Display,
  Write,
};

/// Joins the display forms of `items`, separated by `separator`.
///
/// Absent items contribute an empty text and an absent separator joins with
/// nothing in between. An absent item sequence joins to nothing at all.
///
/// ```
/// use the_strings::join::join;
///
/// assert_eq!(join(Some([Some("a"), Some("b"), Some("c")]), Some("--")).as_deref(), Some("a--b--c"));
/// assert_eq!(join(Some([None, Some(""), Some("a")]), Some(",")).as_deref(), Some(",,a"));
/// assert_eq!(join(None::<[Option<&str>; 0]>, Some(",")), None);
/// ```
pub fn join<I, T>(items: Option<I>, separator: Option<&str>) -> Option<String>
where
  I: IntoIterator<Item = Option<T>>,
  T: Display,
{
  let separator = separator.unwrap_or_default();
  let mut out = String::new();
  for (i, item) in items?.into_iter().enumerate() {
    if i > 0 {
      out.push_str(separator);
    }
    if let Some(item) = item {
      // Writing into a `String` cannot fail.
      let _ = write!(out, "{item}");
    }
  }
  Some(out)
}

/// Like [`join`] with a single character separator.
pub fn join_char<I, T>(items: Option<I>, separator: char) -> Option<String>
where
  I: IntoIterator<Item = Option<T>>,
  T: Display,
{
  let mut buf = [0; 4];
  join(items, Some(separator.encode_utf8(&mut buf)))
}
