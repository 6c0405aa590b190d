//! N-Queens test fixtures.
//!
//! A complete N-Queens domain for exercising selectors, moves and phases.
//! Queens sit in fixed columns; the row is the planning variable.

use plancraft_core::domain::{
    EntityDescriptor, PlanningSolution, SolutionDescriptor, TypedEntityExtractor,
};
use plancraft_core::score::SimpleScore;
use plancraft_scoring::SimpleScoreDirector;
use std::any::TypeId;

/// A queen entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Queen {
    pub id: i64,
    pub column: i64,
    /// Row position, the planning variable. `None` if unassigned.
    pub row: Option<i64>,
}

impl Queen {
    /// Creates a new queen at the given column with an optional row.
    pub fn new(id: i64, column: i64, row: Option<i64>) -> Self {
        Self { id, column, row }
    }

    /// Creates a queen with an assigned row.
    pub fn assigned(id: i64, column: i64, row: i64) -> Self {
        Self {
            id,
            column,
            row: Some(row),
        }
    }

    /// Creates a queen with no row assigned.
    pub fn unassigned(id: i64, column: i64) -> Self {
        Self {
            id,
            column,
            row: None,
        }
    }
}

/// N-Queens problem solution.
#[derive(Clone, Debug)]
pub struct NQueensSolution {
    pub queens: Vec<Queen>,
    pub score: Option<SimpleScore>,
}

impl NQueensSolution {
    /// Creates a new N-Queens solution with the given queens.
    pub fn new(queens: Vec<Queen>) -> Self {
        Self {
            queens,
            score: None,
        }
    }

    /// Creates an N-Queens solution with n uninitialized queens.
    pub fn uninitialized(n: usize) -> Self {
        let queens = (0..n)
            .map(|i| Queen::unassigned(i as i64, i as i64))
            .collect();
        Self {
            queens,
            score: None,
        }
    }

    /// Creates an N-Queens solution with queens at the specified rows.
    pub fn with_rows(rows: &[i64]) -> Self {
        let queens = rows
            .iter()
            .enumerate()
            .map(|(i, &row)| Queen::assigned(i as i64, i as i64, row))
            .collect();
        Self {
            queens,
            score: None,
        }
    }

    /// Creates an N-Queens solution with a mix of assigned and unassigned rows.
    pub fn with_optional_rows(rows: &[Option<i64>]) -> Self {
        let queens = rows
            .iter()
            .enumerate()
            .map(|(i, &row)| Queen::new(i as i64, i as i64, row))
            .collect();
        Self {
            queens,
            score: None,
        }
    }

    /// Board size, equal to the number of queens.
    pub fn n(&self) -> usize {
        self.queens.len()
    }
}

impl PlanningSolution for NQueensSolution {
    type Score = SimpleScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }

    fn is_initialized(&self) -> bool {
        self.queens.iter().all(|q| q.row.is_some())
    }

    fn uninitialized_variable_count(&self) -> usize {
        self.queens.iter().filter(|q| q.row.is_none()).count()
    }
}

/// Gets a reference to the queens vector.
pub fn get_queens(s: &NQueensSolution) -> &Vec<Queen> {
    &s.queens
}

/// Gets a mutable reference to the queens vector.
pub fn get_queens_mut(s: &mut NQueensSolution) -> &mut Vec<Queen> {
    &mut s.queens
}

/// Typed getter for the row planning variable.
pub fn get_queen_row(s: &NQueensSolution, idx: usize) -> Option<i64> {
    s.queens.get(idx).and_then(|q| q.row)
}

/// Typed setter for the row planning variable.
pub fn set_queen_row(s: &mut NQueensSolution, idx: usize, v: Option<i64>) {
    if let Some(queen) = s.queens.get_mut(idx) {
        queen.row = v;
    }
}

/// Counts conflicts between queens.
///
/// Returns the negated count of row and diagonal conflicts over all pairs,
/// so 0 is optimal. Unassigned queens conflict with nothing.
pub fn calculate_conflicts(solution: &NQueensSolution) -> SimpleScore {
    let mut conflicts = 0i64;
    let queens = &solution.queens;

    for i in 0..queens.len() {
        for j in (i + 1)..queens.len() {
            if let (Some(row_i), Some(row_j)) = (queens[i].row, queens[j].row) {
                if row_i == row_j {
                    conflicts += 1;
                }
                let col_diff = (queens[j].column - queens[i].column).abs();
                if (row_i - row_j).abs() == col_diff {
                    conflicts += 1;
                }
            }
        }
    }

    SimpleScore::of(-conflicts)
}

/// Creates a SolutionDescriptor for NQueensSolution.
pub fn create_nqueens_descriptor() -> SolutionDescriptor {
    let extractor = Box::new(TypedEntityExtractor::new(
        "Queen",
        "queens",
        get_queens,
        get_queens_mut,
    ));
    let entity_desc =
        EntityDescriptor::new("Queen", TypeId::of::<Queen>(), "queens").with_extractor(extractor);

    SolutionDescriptor::new("NQueensSolution", TypeId::of::<NQueensSolution>())
        .with_entity(entity_desc)
}

/// Creates a SimpleScoreDirector for N-Queens with queens at the given rows.
pub fn create_nqueens_director(
    rows: &[i64],
) -> SimpleScoreDirector<NQueensSolution, impl Fn(&NQueensSolution) -> SimpleScore> {
    SimpleScoreDirector::new(
        NQueensSolution::with_rows(rows),
        create_nqueens_descriptor(),
        calculate_conflicts,
    )
}

/// Creates a SimpleScoreDirector for N-Queens with n unassigned queens.
pub fn create_uninitialized_nqueens_director(
    n: usize,
) -> SimpleScoreDirector<NQueensSolution, impl Fn(&NQueensSolution) -> SimpleScore> {
    SimpleScoreDirector::new(
        NQueensSolution::uninitialized(n),
        create_nqueens_descriptor(),
        calculate_conflicts,
    )
}
