use core::fmt;

use crate::*;

const HIDDEN: &str = "#";
const FLAG: &str = "🚩";
const WATER: &str = "🌊";
const MINE: &str = "💣";
const EXPLOSION: &str = "💥";

/// Text rendering of a [`Grid`], one `|a, b, c|` line per row between two rules.
#[derive(Copy, Clone, Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    show_all: bool,
}

impl Grid {
    /// What the player sees.
    pub fn display(&self) -> GridDisplay<'_> {
        GridDisplay {
            grid: self,
            show_all: false,
        }
    }

    /// Every mine and count, regardless of status.
    pub fn display_solution(&self) -> GridDisplay<'_> {
        GridDisplay {
            grid: self,
            show_all: true,
        }
    }
}

impl GridDisplay<'_> {
    fn write_cell(&self, f: &mut fmt::Formatter<'_>, cell: Cell) -> fmt::Result {
        if self.show_all {
            return if cell.is_mine() {
                f.write_str(MINE)
            } else {
                write!(f, "{}", cell.mine_count)
            };
        }

        match cell.status {
            CellStatus::Hidden => f.write_str(HIDDEN),
            CellStatus::Flagged => f.write_str(FLAG),
            CellStatus::Revealed if cell.is_mine() => f.write_str(MINE),
            CellStatus::Revealed if cell.mine_count == 0 => f.write_str(WATER),
            CellStatus::Revealed => write!(f, "{}", cell.mine_count),
            CellStatus::Detonated => f.write_str(EXPLOSION),
        }
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.grid.width() {
            f.write_str("---")?;
        }
        f.write_str("\n")
    }
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.grid.size();

        self.write_rule(f)?;
        for y in 0..height {
            f.write_str("|")?;
            for x in 0..width {
                if x > 0 {
                    f.write_str(", ")?;
                }
                self.write_cell(f, self.grid[(x, y)])?;
            }
            f.write_str("|\n")?;
        }
        self.write_rule(f)
    }
}
