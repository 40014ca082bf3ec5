// Walks the range facility through the same paces as a hand-written loop
// would: counted ranges in both directions, a cursor span over an existing
// array, and a materialized vector handed off to ordinary adapters.

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;

use xrange::{cursor_range, xrange, xrange_between, Bound, RangeError, SliceCursor};

const ROW_WIDTH: usize = 5;

/// Prints a labelled sequence five values to a row, three columns per value.
fn print_rows<I>(label: &str, values: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    println!("{}", label.cyan().bold());
    let rows = values.into_iter().chunks(ROW_WIDTH);
    for row in &rows {
        println!("{}", row.map(|value| format!("{:>3}", value)).join(" "));
    }
    println!();
}

fn main() -> Result<(), RangeError> {
    println!("{}\n", "xrange demo".green().bold());

    print_rows("xrange(10)", xrange(10));
    print_rows("xrange_between(1, 10, 2)", xrange_between(1, 10, 2)?);
    print_rows("xrange_between(10, 0, -3)", xrange_between(10, 0, -3)?);

    let samples = [5, 10, 15, 20, 25];
    let span = cursor_range(SliceCursor::new(&samples, 0), Bound(3));
    print_rows("first three sample cursors", span);

    // The consuming-client half: materialize a range, then lean on
    // general-purpose adapters for reversal and filtering.
    let mut values: Vec<i32> = xrange_between(-4, 6, 1)?.into_iter().collect();
    values.reverse();
    print_rows(
        &format!("reversed ({} values)", values.len()),
        values.iter(),
    );

    let (odds, _evens): (Vec<i32>, Vec<i32>) =
        values.iter().copied().partition(|value| value % 2 != 0);
    print_rows(&format!("odd survivors ({} values)", odds.len()), &odds);

    Ok(())
}
