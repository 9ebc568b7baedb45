//! A line-oriented reader for numeric case files.
//!
//! The format is the one shared by generated test-data files: the first line declares how many
//! case groups follow, a blank line starts the next group, and every other line contributes
//! whitespace-separated values to the group in progress. [`read_cases`] parses such a file into
//! nested [`BoxVec`]s, treating anything unreadable as the end of the usable input rather than an
//! error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;
use std::str::FromStr;

use crate::collections::contiguous::BoxVec;

mod tests;

/// Reads the case file at `path` into one [`BoxVec`] of values per case group.
///
/// The first line must hold the number of case groups. After it, a blank line closes the group in
/// progress and opens the next one, and parsing stops at the first blank line once the declared
/// number of groups has been produced. A value line parses its whitespace-separated tokens left
/// to right, keeping the values before the first token `T` fails to parse; a value line arriving
/// before any blank line opens the first group itself.
///
/// There is no error path: a file that is missing, unreadable or lacking a parseable count line
/// produces an empty result, and a read failure partway through produces the groups accumulated
/// so far.
///
/// # Examples
/// ```
/// # use containers::collections::contiguous::BoxVec;
/// # use containers::input::read_cases;
/// let path = std::env::temp_dir().join("read_cases_doc.txt");
/// std::fs::write(&path, "2\n\n3 1 4\n\n1 5\n").unwrap();
///
/// let cases: BoxVec<BoxVec<u32>> = read_cases(&path);
/// assert_eq!(cases.len(), 2);
/// assert!(cases.get(0).iter().copied().eq([3, 1, 4]));
/// assert!(cases.get(1).iter().copied().eq([1, 5]));
/// # std::fs::remove_file(&path).unwrap();
/// ```
pub fn read_cases<T: FromStr, P: AsRef<Path>>(path: P) -> BoxVec<BoxVec<T>> {
    let Ok(file) = File::open(path) else {
        return BoxVec::new();
    };
    let mut lines = BufReader::new(file).lines();

    let Some(Ok(header)) = lines.next() else {
        return BoxVec::new();
    };
    let Ok(declared) = header.trim().parse::<usize>() else {
        return BoxVec::new();
    };

    let mut groups: BoxVec<BoxVec<T>> = BoxVec::with_cap(declared);
    let mut current: BoxVec<T> = BoxVec::new();
    // Whether a group is in progress. The declared count is only checked at group boundaries, so
    // a final group runs to the end of the file with no closing blank line required.
    let mut open = false;

    for line in lines {
        let Ok(line) = line else {
            // An unreadable line ends the file as far as this reader is concerned.
            break;
        };

        if line.is_empty() {
            if open {
                groups.push_back(mem::take(&mut current));
            }
            if groups.len() >= declared {
                return groups;
            }
            open = true;
            continue;
        }

        open = true;
        for token in line.split_whitespace() {
            let Ok(value) = token.parse() else {
                break;
            };
            current.push_back(value);
        }
    }

    if open {
        groups.push_back(current);
    }

    groups
}
