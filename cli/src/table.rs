// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain-text table, padded by display width so Hebrew and emoji line up.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'static str,
    header: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
            header: true,
        }
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn widths(&self, rows: &[Vec<Cow<'a, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = match self.header {
            true => self.columns.iter().map(|a| a.name().width()).collect(),
            false => vec![0; self.columns.len()],
        };
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.widths(&rows);
        let last = self.columns.len().saturating_sub(1);

        if self.header {
            for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
                let name = col.name();
                let cell = pad(&name, *width, col.padding_direction(), i == last);
                write!(f, "{}", cell.bold())?;
                f.write_str(if i == last { "\n" } else { self.separator })?;
            }
        }

        for (data, cells) in self.data.iter().zip(rows) {
            for (i, ((col, width), cell)) in self.columns.iter().zip(&widths).zip(cells).enumerate()
            {
                let cell = pad(&cell, *width, col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => f.write_str(&cell)?,
                }
                f.write_str(if i == last { "\n" } else { self.separator })?;
            }
        }
        Ok(())
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Col(usize, PaddingDirection);

    impl TableColumn<(&'static str, &'static str)> for Col {
        fn name(&self) -> Cow<'_, str> {
            format!("c{}", self.0).into()
        }

        fn format<'a>(&self, data: &'a (&'static str, &'static str)) -> Cow<'a, str> {
            match self.0 {
                0 => data.0.into(),
                _ => data.1.into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            self.1
        }
    }

    #[test]
    fn test_table_pads_by_display_width() {
        colored::control::set_override(false);
        let columns = [Col(0, PaddingDirection::Left), Col(1, PaddingDirection::Right)];
        let data = [("שבת", "1"), ("a", "10")];

        let output = Table::new(&columns, &data).without_header().to_string();
        assert_eq!(output, "שבת   1\na    10\n");
    }

    #[test]
    fn test_table_header() {
        colored::control::set_override(false);
        let columns = [Col(0, PaddingDirection::Left), Col(1, PaddingDirection::Left)];
        let data = [("abc", "x")];

        let output = Table::new(&columns, &data).to_string();
        assert_eq!(output, "c0   c1\nabc  x\n");
    }
}
