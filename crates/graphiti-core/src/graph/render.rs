//! Diagnostic text form of the result matrix.
//!
//! One line per source row. Each column is written as `dist/steps`, with an
//! unset field shown as `-` and a fully unset cell as a bare `-`, followed by
//! a tab. The line ends with `<id> (<group>)`.
//!
//! ```text
//! -	1/1	1/1	2/2	A (1)
//! -	-	1/1	2/2	B (1)
//! ```

use std::fmt::{self, Display, Write};

use super::{Cell, Graph};

fn write_field<T: Default + PartialEq + Display>(f: &mut impl Write, value: T) -> fmt::Result {
    if value == T::default() {
        f.write_char('-')
    } else {
        write!(f, "{value}")
    }
}

fn write_cell(f: &mut impl Write, cell: Cell) -> fmt::Result {
    if cell.is_unset() {
        return f.write_str("-\t");
    }
    write_field(f, cell.dist)?;
    f.write_char('/')?;
    write_field(f, cell.steps)?;
    f.write_char('\t')
}

impl<Id: Display> Display for Graph<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, row) in self.matrix.iter().enumerate() {
            for &cell in row {
                write_cell(f, cell)?;
            }
            writeln!(f, "{} ({})", self.nodes[x], self.group_of[x])?;
        }
        Ok(())
    }
}
