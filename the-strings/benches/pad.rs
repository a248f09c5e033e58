//! Benchmarks for padding and abbreviation.
//!
//! Run with: `cargo bench -p the-strings --bench pad`

use divan::{
  Bencher,
  black_box,
};
use the_strings::{
  abbreviate::{
    abbreviate,
    abbreviate_at,
  },
  pad::{
    PAD_LIMIT,
    center,
    left_pad_char,
    left_pad_str,
  },
};

fn main() {
  divan::main();
}

mod padding {
  use super::*;

  #[divan::bench(args = [16, 1024, PAD_LIMIT, 4 * PAD_LIMIT])]
  fn single_char(bencher: Bencher, size: usize) {
    bencher.bench(|| left_pad_char(black_box(Some("bat")), black_box(size as isize), '-'));
  }

  #[divan::bench(args = [16, 1024, PAD_LIMIT])]
  fn cycled_str(bencher: Bencher, size: usize) {
    bencher.bench(|| left_pad_str(black_box(Some("bat")), black_box(size as isize), Some("yz")));
  }

  #[divan::bench(args = [16, 1024])]
  fn centered(bencher: Bencher, size: usize) {
    bencher.bench(|| center(black_box(Some("bat")), black_box(size as isize)));
  }
}

mod abbreviation {
  use super::*;

  #[divan::bench]
  fn prefix(bencher: Bencher) {
    let text = "Now is the time for all good men to come to the aid of the party";
    bencher.bench(|| abbreviate(black_box(Some(text)), black_box(20)));
  }

  #[divan::bench]
  fn with_offset(bencher: Bencher) {
    let text = "Now is the time for all good men to come to the aid of the party";
    bencher.bench(|| abbreviate_at(black_box(Some(text)), black_box(24), black_box(20)));
  }
}
