use dm_core::{Grid, GridView, RowSearchIndex, SearchResult};
use proptest::prelude::*;

const COLUMNS: usize = 3;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z0-9 ]{0,8}", COLUMNS),
        0..12,
    )
    .prop_map(|rows| Grid::from_rows(["a", "b", "c"], rows).unwrap())
}

fn row_contains(grid: &Grid, row: usize, query: &str) -> bool {
    let needle = query.to_lowercase();
    (0..grid.column_count()).any(|col| {
        grid.cell(row, col)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn found_row_is_first_match(grid in grid_strategy(), query in "[a-zA-Z0-9]{1,3}") {
        let index = RowSearchIndex::new();
        match index.search(&grid, &query) {
            SearchResult::Found(row) => {
                prop_assert!(row_contains(&grid, row, &query));
                for earlier in 0..row {
                    prop_assert!(!row_contains(&grid, earlier, &query));
                }
            }
            SearchResult::NotFound => {
                for row in 0..grid.row_count() {
                    prop_assert!(!row_contains(&grid, row, &query));
                }
            }
        }
    }

    #[test]
    fn empty_query_never_matches(grid in grid_strategy()) {
        prop_assert_eq!(RowSearchIndex::new().search(&grid, ""), SearchResult::NotFound);
    }

    #[test]
    fn case_does_not_matter(grid in grid_strategy(), query in "[a-z]{1,3}") {
        let index = RowSearchIndex::new();
        prop_assert_eq!(
            index.search(&grid, &query),
            index.search(&grid, &query.to_uppercase())
        );
    }

    #[test]
    fn search_is_idempotent(grid in grid_strategy(), query in "[a-zA-Z]{1,2}") {
        let index = RowSearchIndex::new();
        let first = index.search(&grid, &query);
        prop_assert_eq!(first, index.search(&grid, &query));
        prop_assert_eq!(first.row(), index.search_all(&grid, &query).first().copied());
    }
}

#[test]
fn ascii_scenarios() {
    let rows = (0..10)
        .map(|i| vec![(1000 + i).to_string(), format!("Element {}", i + 1), String::new()])
        .collect();
    let grid = Grid::from_rows(["ID", "Nom", "Extra"], rows).unwrap();
    let index = RowSearchIndex::new();

    assert_eq!(index.search(&grid, "Element 10"), SearchResult::Found(9));
    assert_eq!(index.search(&grid, ""), SearchResult::NotFound);
    assert_eq!(index.search(&grid, "zzz"), SearchResult::NotFound);
}
